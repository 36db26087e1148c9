use super::*;
use crate::tag::{NonTerminal, Terminal};
use crate::SourceBuffer;

/// Run one sub-scanner from the start of `source`.
///
/// Returns the result and the number of characters consumed.
fn run(start: Start, source: &str) -> (ScanResult, u32) {
    run_with(start, source, false)
}

fn run_with(start: Start, source: &str, in_effect_mask: bool) -> (ScanResult, u32) {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    let result = dispatch(start, &mut cursor, in_effect_mask);
    (result, cursor.pos())
}

fn ok(t: Terminal, len: u32) -> (ScanResult, u32) {
    (Ok(Outcome::Terminal(t)), len)
}

fn err(e: ScanError, len: u32) -> (ScanResult, u32) {
    (Err(e), len)
}

// === Character literals ===

#[test]
fn char_plain_and_named_escape() {
    assert_eq!(run(Start::Char, "'a' x"), ok(Terminal::Char, 3));
    assert_eq!(run(Start::Char, r"'\n'"), ok(Terminal::Char, 4));
    assert_eq!(run(Start::Char, r"'\''"), ok(Terminal::Char, 4));
}

#[test]
fn char_numeric_escapes() {
    assert_eq!(run(Start::Char, r"'\0x7f'"), ok(Terminal::Char, 7));
    assert_eq!(run(Start::Char, r"'\101'"), ok(Terminal::Char, 6));
    assert_eq!(run(Start::Char, r"'\0'"), ok(Terminal::Char, 4));
}

#[test]
fn char_errors() {
    assert_eq!(run(Start::Char, "'"), err(ScanError::UnterminatedChar, 1));
    assert_eq!(run(Start::Char, "'ab'"), err(ScanError::UnterminatedChar, 2));
    assert_eq!(run(Start::Char, r"'\q'"), err(ScanError::MalformedCharEscape, 2));
    assert_eq!(run(Start::Char, r"'\0x'"), err(ScanError::MalformedCharEscape, 4));
    assert_eq!(run(Start::Char, r"'\18'"), err(ScanError::UnterminatedChar, 4));
}

#[test]
fn char_octal_escape_takes_every_digit() {
    assert_eq!(run(Start::Char, r"'\0101'"), ok(Terminal::Char, 7));
    assert_eq!(run(Start::Char, r"'\1234'"), ok(Terminal::Char, 7));
}

// === Strings ===

#[test]
fn string_with_escapes() {
    assert_eq!(run(Start::String, r#""a\tb""#), ok(Terminal::String, 6));
    assert_eq!(run(Start::String, "\"a\\\nb\""), ok(Terminal::String, 6));
    assert_eq!(run(Start::String, r#""\0x41\101""#), ok(Terminal::String, 11));
    assert_eq!(run(Start::String, "\"\" tail"), ok(Terminal::String, 2));
}

#[test]
fn string_hex_escape_takes_two_digits() {
    // `\0x414` is `\0x41` followed by a plain `4`.
    assert_eq!(run(Start::String, r#""\0x414""#), ok(Terminal::String, 8));
}

#[test]
fn string_octal_escape_takes_three_digits() {
    // `\1234` is `\123` followed by a plain `4`.
    assert_eq!(run(Start::String, r#""\1234""#), ok(Terminal::String, 7));
}

#[test]
fn string_errors() {
    assert_eq!(
        run(Start::String, "\"abc"),
        err(ScanError::UnterminatedString, 4)
    );
    assert_eq!(
        run(Start::String, "\"abc\\"),
        err(ScanError::UnterminatedString, 5)
    );
    assert_eq!(
        run(Start::String, r#""\z""#),
        err(ScanError::MalformedStringEscape, 2)
    );
}

// === Comments ===

#[test]
fn block_comment_does_not_nest() {
    assert_eq!(
        run(Start::BlockComment, "/* (* */ x"),
        (Ok(NonTerminal::CommentBlockC.into()), 8)
    );
}

#[test]
fn block_comment_opener_is_not_a_closer() {
    assert_eq!(
        run(Start::BlockComment, "/*/"),
        err(ScanError::UnterminatedBlockComment, 3)
    );
}

#[test]
fn nested_comment_counts_levels() {
    let source = "(* a (* b *) c *)";
    assert_eq!(
        run(Start::NestedComment, source),
        (Ok(NonTerminal::CommentBlockMl.into()), 17)
    );
    assert_eq!(
        run(Start::NestedComment, "(* a"),
        err(ScanError::UnterminatedNestedComment, 4)
    );
    assert_eq!(
        run(Start::NestedComment, "(* (* *)"),
        err(ScanError::UnterminatedNestedComment, 8)
    );
}

#[test]
fn line_comment_stops_before_line_break() {
    assert_eq!(
        run(Start::LineComment, "// hi\nx"),
        ok(Terminal::CommentLine, 5)
    );
    assert_eq!(run(Start::LineComment, "// hi"), ok(Terminal::CommentLine, 5));
}

#[test]
fn rest_comment_runs_to_end_of_input() {
    assert_eq!(
        run(Start::RestComment, "//// a\nb\n"),
        ok(Terminal::CommentRest, 9)
    );
}

// === Numbers ===

#[test]
fn decimal_integers_and_suffix() {
    assert_eq!(run(Start::Decimal, "123 "), ok(Terminal::Int, 3));
    assert_eq!(run(Start::Decimal, "42u"), ok(Terminal::Int, 3));
    assert_eq!(run(Start::Decimal, "42LL"), ok(Terminal::Int, 3));
}

#[test]
fn decimal_floats() {
    assert_eq!(run(Start::Decimal, "1.5"), ok(Terminal::Float, 3));
    assert_eq!(run(Start::Decimal, "1."), ok(Terminal::Float, 2));
    assert_eq!(run(Start::Decimal, "1e10"), ok(Terminal::Float, 4));
    assert_eq!(run(Start::Decimal, "2.5E-3f"), ok(Terminal::Float, 7));
}

#[test]
fn exponent_requires_digits() {
    assert_eq!(
        run(Start::Decimal, "1e+x"),
        err(ScanError::MissingExponentDigits, 3)
    );
    assert_eq!(
        run(Start::ZeroFloat, "0e"),
        err(ScanError::MissingExponentDigits, 2)
    );
}

#[test]
fn zero_floats() {
    assert_eq!(run(Start::ZeroFloat, "0.25"), ok(Terminal::Float, 4));
    assert_eq!(run(Start::ZeroFloat, "0."), ok(Terminal::Float, 2));
    assert_eq!(run(Start::ZeroFloat, "0e5l"), ok(Terminal::Float, 4));
}

#[test]
fn dot_int_and_space_float() {
    assert_eq!(run(Start::DotInt, ".12e3"), ok(Terminal::DotInt, 3));

    let buf = SourceBuffer::new(".12e3f");
    let mut cursor = buf.cursor();
    assert_eq!(space_float(&mut cursor), Ok(Terminal::Float.into()));
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn space_float_exponent_needs_digits() {
    let buf = SourceBuffer::new(".5e x");
    let mut cursor = buf.cursor();
    assert_eq!(space_float(&mut cursor), Err(ScanError::MissingExponentDigits));
    assert_eq!(cursor.pos(), 3);

    let buf = SourceBuffer::new(".5E+");
    let mut cursor = buf.cursor();
    assert_eq!(space_float(&mut cursor), Err(ScanError::MissingExponentDigits));
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn hex_numbers() {
    assert_eq!(run(Start::Hex, "0xFF"), ok(Terminal::Int, 4));
    assert_eq!(run(Start::Hex, "0x1Fu"), ok(Terminal::Int, 5));
    assert_eq!(run(Start::Hex, "0x1.8p1"), ok(Terminal::Float, 7));
    assert_eq!(run(Start::Hex, "0X.8P-2f"), ok(Terminal::Float, 8));
    assert_eq!(run(Start::Hex, "0x1."), ok(Terminal::Float, 4));
}

#[test]
fn hex_errors() {
    assert_eq!(run(Start::Hex, "0x"), err(ScanError::MissingHexDigits, 2));
    assert_eq!(run(Start::Hex, "0x.p3"), err(ScanError::MissingHexDigits, 5));
    assert_eq!(
        run(Start::Hex, "0x1p"),
        err(ScanError::MissingExponentDigits, 4)
    );
}

#[test]
fn octal_numbers() {
    assert_eq!(run(Start::Octal, "0755"), ok(Terminal::Int, 4));
    assert_eq!(run(Start::Octal, "017L"), ok(Terminal::Int, 4));
    assert_eq!(run(Start::Octal, "0789"), ok(Terminal::Int, 2));
}

// === Identifiers ===

#[test]
fn alpha_identifiers_resolve_keywords() {
    assert_eq!(run(Start::AlphaIdent, "foo'_1 "), ok(Terminal::IdentAlpha, 6));
    assert_eq!(run(Start::AlphaIdent, "let"), ok(Terminal::Let, 3));
    assert_eq!(
        run(Start::AlphaIdent, "prfun"),
        (Ok(NonTerminal::PrFun.into()), 5)
    );
}

#[test]
fn alpha_identifier_glued_suffixes() {
    assert_eq!(run(Start::AlphaIdent, "arr[0]"), ok(Terminal::IdentArray, 4));
    assert_eq!(
        run(Start::AlphaIdent, "print!(x)"),
        ok(Terminal::IdentExternal, 6)
    );
    assert_eq!(
        run(Start::AlphaIdent, "list<int>"),
        ok(Terminal::IdentTemplate, 5)
    );
    // Glued suffixes skip the keyword table.
    assert_eq!(run(Start::AlphaIdent, "if<"), ok(Terminal::IdentTemplate, 3));
}

#[test]
fn dollar_and_hash_identifiers() {
    assert_eq!(run(Start::DollarIdent, "$raise x"), ok(Terminal::DlrRaise, 6));
    assert_eq!(run(Start::DollarIdent, "$foo"), ok(Terminal::IdentDollar, 4));
    assert_eq!(run(Start::HashIdent, "#define"), ok(Terminal::SrpDefine, 7));
    assert_eq!(run(Start::HashIdent, "#frob"), ok(Terminal::IdentHash, 5));
}

#[test]
fn symbolic_identifiers() {
    assert_eq!(run(Start::SymbolIdent, "=> x"), ok(Terminal::EqGt, 2));
    assert_eq!(run(Start::SymbolIdent, "+++"), ok(Terminal::IdentSymbol, 3));
    assert_eq!(run(Start::SymbolIdent, "$+"), ok(Terminal::IdentSymbol, 2));
    assert_eq!(run(Start::SymbolIdent, "..."), ok(Terminal::DotDotDot, 3));
}

#[test]
fn greater_than_with_effect_mask() {
    assert_eq!(
        run_with(Start::SymbolIdent, ">", true),
        ok(Terminal::GtOrIdent, 1)
    );
    assert_eq!(
        run_with(Start::SymbolIdent, ">", false),
        ok(Terminal::GtOrIdent, 1)
    );
}

#[test]
fn qmark_gt_consumes_only_the_question_mark() {
    assert_eq!(run(Start::QmarkGt, "?>"), ok(Terminal::QMarkOrIdent, 1));
}

// === External code ===

#[test]
fn extcode_closes_at_line_start() {
    let (result, len) = {
        let buf = SourceBuffer::new("%{^\nint x; %} no\n%}\nrest");
        let mut cursor = buf.cursor();
        (extcode(&mut cursor), cursor.pos())
    };
    assert_eq!(result, Ok(Terminal::Extcode.into()));
    assert_eq!(len, 19);
}

#[test]
fn extcode_tag_with_version() {
    let buf = SourceBuffer::new("%{$2\n%}");
    let mut cursor = buf.cursor();
    assert_eq!(extcode(&mut cursor), Ok(Terminal::Extcode.into()));
    assert!(cursor.is_eof());
}

#[test]
fn extcode_unterminated() {
    let buf = SourceBuffer::new("%{\nint x;\n");
    let mut cursor = buf.cursor();
    assert_eq!(extcode(&mut cursor), Err(ScanError::UnterminatedExtcode));
    assert!(cursor.is_eof());
}

// === Error messages ===

#[test]
fn scan_error_messages() {
    assert_eq!(
        ScanError::UnterminatedExtcode.to_string(),
        "unterminated `%{` external code block"
    );
    assert_eq!(
        ScanError::UnrecognizedCharacter.to_string(),
        "unrecognized character"
    );
}
