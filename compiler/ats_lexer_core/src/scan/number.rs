//! Numeric literals.
//!
//! A fractional part or an exponent makes a float, which may carry one
//! `fFlL` suffix; an integer may carry one `LlUu` suffix.

use super::{ScanError, ScanResult};
use crate::char_class::{
    is_digit, is_exponent_marker, is_float_suffix, is_hex_digit, is_hex_exponent_marker,
    is_int_suffix, is_octal, is_sign,
};
use crate::tag::Terminal;
use crate::Cursor;

/// Optional `marker sign? digit+`.
///
/// Returns whether an exponent was present. A marker without digits is an
/// error.
fn exponent(cursor: &mut Cursor<'_>, marker: fn(Option<char>) -> bool) -> Result<bool, ScanError> {
    if !cursor.eat_if(marker) {
        return Ok(false);
    }
    cursor.eat_if(is_sign);
    if cursor.eat_while(is_digit) == 0 {
        return Err(ScanError::MissingExponentDigits);
    }
    Ok(true)
}

fn float(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.eat_if(is_float_suffix);
    Ok(Terminal::Float.into())
}

fn int(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.eat_if(is_int_suffix);
    Ok(Terminal::Int.into())
}

/// `.` digit+
pub(super) fn dot_int(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance(); // consume `.`
    cursor.eat_while(is_digit);
    Ok(Terminal::DotInt.into())
}

/// `.` digit+ exponent? suffix?, when the dot directly follows whitespace.
pub(crate) fn space_float(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance(); // consume `.`
    cursor.eat_while(is_digit);
    exponent(cursor, is_exponent_marker)?;
    float(cursor)
}

/// `0` (`.` digit*)? exponent? suffix?
///
/// Only entered on `0.`, `0e` or `0E`, so the result is always a float.
pub(super) fn zero_float(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance(); // consume `0`
    if cursor.eat_char('.') {
        cursor.eat_while(is_digit);
    }
    exponent(cursor, is_exponent_marker)?;
    float(cursor)
}

/// digit+ (`.` digit*)? exponent?, starting with `1` to `9`.
pub(super) fn decimal(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.eat_while(is_digit);
    let mut is_float = false;
    if cursor.eat_char('.') {
        is_float = true;
        cursor.eat_while(is_digit);
    }
    is_float |= exponent(cursor, is_exponent_marker)?;
    if is_float {
        float(cursor)
    } else {
        int(cursor)
    }
}

/// `0x` hex* (`.` hex*)? (`p` sign? digit+)?
///
/// Needs hex digits on at least one side of the dot.
pub(super) fn hex(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance_n(2); // consume `0x`
    let integral = cursor.eat_while(is_hex_digit);
    let mut fractional = 0;
    let mut is_float = false;
    if cursor.eat_char('.') {
        is_float = true;
        fractional = cursor.eat_while(is_hex_digit);
    }
    is_float |= exponent(cursor, is_hex_exponent_marker)?;
    if integral + fractional == 0 {
        return Err(ScanError::MissingHexDigits);
    }
    if is_float {
        float(cursor)
    } else {
        int(cursor)
    }
}

/// `0` octal+ suffix?
pub(super) fn octal(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.eat_while(is_octal);
    int(cursor)
}
