//! Identifier sub-scanners.
//!
//! The scanned spelling, prefix included, goes through
//! [`resolve_identifier`] with the generic tag of its family as default.

use super::ScanResult;
use crate::char_class::{is_ident_continue, is_symbolic};
use crate::tables::resolve_identifier;
use crate::tag::Terminal;
use crate::Cursor;

/// `$` identifier-start identifier-continue*
pub(super) fn dollar(cursor: &mut Cursor<'_>, in_effect_mask: bool) -> ScanResult {
    prefixed(cursor, Terminal::IdentDollar, in_effect_mask)
}

/// `#` identifier-start identifier-continue*
pub(super) fn hash(cursor: &mut Cursor<'_>, in_effect_mask: bool) -> ScanResult {
    prefixed(cursor, Terminal::IdentHash, in_effect_mask)
}

fn prefixed(cursor: &mut Cursor<'_>, default: Terminal, in_effect_mask: bool) -> ScanResult {
    let start = cursor.pos();
    cursor.advance_n(2); // consume prefix and identifier start
    cursor.eat_while(is_ident_continue);
    let text = cursor.slice_from(start);
    Ok(resolve_identifier(&text, default, in_effect_mask))
}

/// `$`? symbol+
pub(super) fn symbol(cursor: &mut Cursor<'_>, in_effect_mask: bool) -> ScanResult {
    let start = cursor.pos();
    cursor.eat_char('$');
    cursor.eat_while(is_symbolic);
    let text = cursor.slice_from(start);
    Ok(resolve_identifier(&text, Terminal::IdentSymbol, in_effect_mask))
}

/// identifier-start identifier-continue*, optionally glued to `[`, `!` or
/// `<`.
///
/// A glued suffix is part of the lexeme and skips the keyword table.
pub(super) fn alpha(cursor: &mut Cursor<'_>, in_effect_mask: bool) -> ScanResult {
    let start = cursor.pos();
    cursor.advance();
    cursor.eat_while(is_ident_continue);
    let suffixed = match cursor.current() {
        Some('[') => Terminal::IdentArray,
        Some('!') => Terminal::IdentExternal,
        Some('<') => Terminal::IdentTemplate,
        _ => {
            let text = cursor.slice_from(start);
            return Ok(resolve_identifier(&text, Terminal::IdentAlpha, in_effect_mask));
        }
    };
    cursor.advance();
    Ok(suffixed.into())
}

/// `?>` yields only `?`; the `>` is scanned on its own.
pub(super) fn qmark_gt(cursor: &mut Cursor<'_>, in_effect_mask: bool) -> ScanResult {
    cursor.advance();
    Ok(resolve_identifier("?", Terminal::IdentSymbol, in_effect_mask))
}
