//! Character, string and external code literals.

use super::{ScanError, ScanResult};
use crate::char_class::{is_escaped, is_extcode_tag, is_hex_digit, is_hex_marker, is_octal};
use crate::tag::Terminal;
use crate::Cursor;

/// Which escape forms a literal accepts after `\`.
#[derive(Clone, Copy)]
enum EscapeRules {
    Char,
    String,
}

/// Scan the escape body after a consumed `\`.
///
/// Accepts a named escape, `0x`/`0X` with hex digits, or a run of octal
/// digits. Strings also accept a line break and cap hex escapes at two
/// digits and octal escapes at three.
fn escape(cursor: &mut Cursor<'_>, rules: EscapeRules) -> Result<(), ()> {
    let c = cursor.current();
    if is_escaped(c) || (matches!(rules, EscapeRules::String) && c == Some('\n')) {
        cursor.advance();
        return Ok(());
    }
    if c == Some('0') && is_hex_marker(cursor.peek()) {
        cursor.advance_n(2);
        let digits = match rules {
            EscapeRules::Char => cursor.eat_while(is_hex_digit),
            EscapeRules::String => cursor.eat_while_max(is_hex_digit, 2),
        };
        return if digits == 0 { Err(()) } else { Ok(()) };
    }
    let digits = match rules {
        EscapeRules::Char => cursor.eat_while(is_octal),
        EscapeRules::String => cursor.eat_while_max(is_octal, 3),
    };
    if digits == 0 {
        Err(())
    } else {
        Ok(())
    }
}

/// `'` (escape | character) `'`
pub(super) fn char_literal(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance(); // consume opening `'`
    match cursor.current() {
        Some('\\') => {
            cursor.advance();
            escape(cursor, EscapeRules::Char).map_err(|()| ScanError::MalformedCharEscape)?;
        }
        Some(_) => cursor.advance(),
        None => return Err(ScanError::UnterminatedChar),
    }
    if cursor.eat_char('\'') {
        Ok(Terminal::Char.into())
    } else {
        Err(ScanError::UnterminatedChar)
    }
}

/// `"` (escape | character)* `"`
pub(super) fn string(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance(); // consume opening `"`
    loop {
        match cursor.current() {
            Some('"') => {
                cursor.advance();
                return Ok(Terminal::String.into());
            }
            Some('\\') => {
                cursor.advance();
                if cursor.is_eof() {
                    return Err(ScanError::UnterminatedString);
                }
                escape(cursor, EscapeRules::String)
                    .map_err(|()| ScanError::MalformedStringEscape)?;
            }
            Some(_) => cursor.advance(),
            None => return Err(ScanError::UnterminatedString),
        }
    }
}

/// `%{` tag? text, closed by `%}` at the start of a line.
///
/// The tag is one of `#`, `^`, `$`; the latter two may be followed by `2`.
pub(crate) fn extcode(cursor: &mut Cursor<'_>) -> ScanResult {
    const CLOSE: &str = "\n%}";

    cursor.advance_n(2); // consume `%{`
    let tag = cursor.current();
    if cursor.eat_if(is_extcode_tag) && matches!(tag, Some('^' | '$')) {
        cursor.eat_char('2');
    }
    if !cursor.eat_until_literal(CLOSE) {
        return Err(ScanError::UnterminatedExtcode);
    }
    cursor.advance_n(3);
    Ok(Terminal::Extcode.into())
}
