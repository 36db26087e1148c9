use super::*;

#[test]
fn error_construction() {
    let span = Span::new(10, 15);
    let err = LexError::scan(span, ScanError::UnterminatedString);
    assert_eq!(err.span, span);
    assert_eq!(err.kind, LexErrorKind::Scan(ScanError::UnterminatedString));
}

#[test]
fn scan_error_converts_into_kind() {
    let kind: LexErrorKind = ScanError::MissingHexDigits.into();
    assert_eq!(kind, LexErrorKind::Scan(ScanError::MissingHexDigits));
}

#[test]
fn error_equality() {
    let a = LexError::unknown_external_call(Span::new(0, 5));
    let b = LexError::unknown_external_call(Span::new(0, 5));
    let c = LexError::unresolved_hash_identifier(Span::new(0, 5));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn display_includes_cause_and_span() {
    let err = LexError::scan(Span::new(3, 7), ScanError::UnterminatedChar);
    assert_eq!(err.to_string(), "unterminated character literal at 3..7");

    let err = LexError::unresolved_hash_identifier(Span::new(0, 4));
    assert_eq!(err.to_string(), "unknown `#` directive at 0..4");
}

#[test]
fn scan_cause_is_transparent() {
    assert_eq!(
        LexErrorKind::Scan(ScanError::UnterminatedNestedComment).to_string(),
        ScanError::UnterminatedNestedComment.to_string()
    );
}
