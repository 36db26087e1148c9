//! Fixed character classes of the ATS2 lexical grammar.
//!
//! Every predicate takes the cursor's view of a character, where `None` is
//! the end-of-input sentinel and belongs to no class.

/// Space characters: line feed, carriage return, vertical tab, form feed,
/// tab and space.
#[inline]
pub(crate) fn is_space(c: Option<char>) -> bool {
    matches!(c, Some('\n' | '\r' | '\u{0B}' | '\u{0C}' | '\t' | ' '))
}

#[inline]
pub(crate) fn is_octal(c: Option<char>) -> bool {
    matches!(c, Some('0'..='7'))
}

#[inline]
pub(crate) fn is_digit(c: Option<char>) -> bool {
    matches!(c, Some('0'..='9'))
}

#[inline]
pub(crate) fn is_hex_digit(c: Option<char>) -> bool {
    matches!(c, Some('0'..='9' | 'a'..='f' | 'A'..='F'))
}

/// First character of an alphabetic identifier.
#[inline]
pub(crate) fn is_ident_start(c: Option<char>) -> bool {
    matches!(c, Some('a'..='z' | 'A'..='Z' | '_'))
}

/// Subsequent characters of an identifier: start characters, digits, prime
/// and dollar.
#[inline]
pub(crate) fn is_ident_continue(c: Option<char>) -> bool {
    is_ident_start(c) || is_digit(c) || matches!(c, Some('\'' | '$'))
}

/// Characters forming symbolic identifiers.
#[inline]
pub(crate) fn is_symbolic(c: Option<char>) -> bool {
    matches!(
        c,
        Some(
            '%' | '&'
                | '+'
                | '-'
                | '.'
                | '/'
                | ':'
                | '='
                | '@'
                | '~'
                | '`'
                | '^'
                | '|'
                | '*'
                | '!'
                | '?'
                | '<'
                | '>'
                | '#'
        )
    )
}

/// Characters allowed after a backslash as a named escape.
#[inline]
pub(crate) fn is_escaped(c: Option<char>) -> bool {
    matches!(
        c,
        Some(
            'n' | 't'
                | 'v'
                | 'b'
                | 'r'
                | 'f'
                | 'a'
                | '\\'
                | '?'
                | '\''
                | '"'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
        )
    )
}

#[inline]
pub(crate) fn is_hex_marker(c: Option<char>) -> bool {
    matches!(c, Some('x' | 'X'))
}

#[inline]
pub(crate) fn is_exponent_marker(c: Option<char>) -> bool {
    matches!(c, Some('e' | 'E'))
}

#[inline]
pub(crate) fn is_hex_exponent_marker(c: Option<char>) -> bool {
    matches!(c, Some('p' | 'P'))
}

#[inline]
pub(crate) fn is_sign(c: Option<char>) -> bool {
    matches!(c, Some('-' | '+'))
}

/// Size suffix of floating-point literals.
#[inline]
pub(crate) fn is_float_suffix(c: Option<char>) -> bool {
    matches!(c, Some('f' | 'F' | 'l' | 'L'))
}

/// Size suffix of integer literals.
#[inline]
pub(crate) fn is_int_suffix(c: Option<char>) -> bool {
    matches!(c, Some('L' | 'l' | 'U' | 'u'))
}

/// Optional tag right after an extcode opener.
#[inline]
pub(crate) fn is_extcode_tag(c: Option<char>) -> bool {
    matches!(c, Some('#' | '$' | '^'))
}

/// Every character for which `pred` holds, within the ASCII range.
///
/// The prefix table is built from these: all classes above are ASCII-only.
pub(crate) fn ascii_members(pred: fn(Option<char>) -> bool) -> impl Iterator<Item = char> {
    (0u8..=0x7F).map(char::from).filter(move |&c| pred(Some(c)))
}

#[cfg(test)]
mod tests;
