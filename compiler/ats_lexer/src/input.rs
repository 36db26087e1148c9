//! Reading source files.
//!
//! ATS2 sources are read as ISO-8859-15 (Latin-9): every byte is one
//! character, so decoding never fails.

use std::io;
use std::path::{Path, PathBuf};

use ats_lexer_core::SourceBuffer;
use thiserror::Error;

/// A source file could not be read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// More bytes than character offsets can address.
    #[error("`{}` is too large ({len} bytes)", path.display())]
    TooLarge { path: PathBuf, len: usize },
}

/// Read and decode the file at `path`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_source(path: &Path) -> Result<SourceBuffer, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_owned(),
        source,
    })?;
    ensure_fits(path, bytes.len())?;
    let buffer = SourceBuffer::from_latin9(&bytes);
    tracing::debug!(chars = buffer.len(), "source decoded");
    Ok(buffer)
}

/// Latin-9 maps bytes one to one onto characters, so the byte count is the
/// buffer length.
fn ensure_fits(path: &Path, len: usize) -> Result<(), SourceError> {
    if SourceBuffer::fits(len) {
        Ok(())
    } else {
        Err(SourceError::TooLarge {
            path: path.to_owned(),
            len,
        })
    }
}

#[cfg(test)]
mod tests;
