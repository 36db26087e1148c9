//! Command handlers for the `atslex` CLI.
//!
//! Shared helpers (file reading, lexeme formatting, locations) live here;
//! the commands themselves are in [`lex`].

mod lex;

use std::path::Path;

use ats_lexer::{read_source, Lexeme, SourceBuffer, SourceError};

pub use lex::{lex_file, raw_file};

/// Read a source file, exiting with status 1 if it cannot be read.
fn read_file(path: &str) -> SourceBuffer {
    match read_source(Path::new(path)) {
        Ok(buffer) => buffer,
        Err(SourceError::Io { path, source }) => {
            eprintln!("error: cannot read '{}': {source}", path.display());
            std::process::exit(1);
        }
        Err(err @ SourceError::TooLarge { .. }) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// One lexeme per line: `  Tag @ start..end "text"`.
fn format_lexeme(lexeme: &Lexeme) -> String {
    format!("  {:?} @ {} {:?}", lexeme.tag, lexeme.span, lexeme.text)
}

/// 1-based line and column of a character offset.
fn line_col(source: &SourceBuffer, offset: u32) -> (usize, usize) {
    let before = &source.as_chars()[..(offset as usize).min(source.as_chars().len())];
    let line = before.iter().filter(|&&c| c == '\n').count() + 1;
    let col = before.iter().rev().take_while(|&&c| c != '\n').count() + 1;
    (line, col)
}
