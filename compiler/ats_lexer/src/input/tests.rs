#![allow(
    clippy::unwrap_used,
    reason = "test setup writes scratch files and unwraps for clarity"
)]

use std::path::PathBuf;

use super::*;

/// Scratch file path unique to this test process and `name`.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ats_lexer-{}-{name}", std::process::id()))
}

#[test]
fn reads_latin9_bytes() {
    let path = scratch("latin9.dats");
    // `val e = "\xA4"`: 0xA4 is the euro sign in Latin-9.
    std::fs::write(&path, b"val e = \"\xA4\"").unwrap();
    let buffer = read_source(&path);
    std::fs::remove_file(&path).unwrap();

    let buffer = buffer.unwrap();
    assert_eq!(buffer.len(), 11);
    assert_eq!(buffer.as_chars()[9], '\u{20AC}');
}

#[test]
fn missing_file_reports_path() {
    let path = scratch("does-not-exist.dats");
    let err = read_source(&path).unwrap_err();
    let SourceError::Io { path: reported, source } = &err else {
        panic!("expected an I/O error, got {err:?}");
    };
    assert_eq!(reported, &path);
    assert_eq!(source.kind(), io::ErrorKind::NotFound);
    assert!(err.to_string().contains("does-not-exist.dats"));
}

#[test]
fn oversized_source_is_rejected() {
    let path = Path::new("huge.dats");
    assert!(ensure_fits(path, SourceBuffer::MAX_LEN).is_ok());

    let err = ensure_fits(path, SourceBuffer::MAX_LEN + 1).unwrap_err();
    assert!(matches!(
        &err,
        SourceError::TooLarge { path: p, len } if p == path && *len == SourceBuffer::MAX_LEN + 1
    ));
    assert!(err.to_string().contains("huge.dats"));
}
