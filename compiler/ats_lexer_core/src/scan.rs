//! Sub-scanners, one per literal family.
//!
//! Every sub-scanner starts with the cursor on the first character of its
//! introductory literal and consumes it itself, so each call consumes at
//! least one character. On success it returns the lexeme's [`Outcome`]; on
//! failure the characters consumed so far form the error lexeme.

mod comment;
mod ident;
mod literal;
mod number;

use thiserror::Error;

use crate::tag::{Outcome, Start};
use crate::Cursor;

pub(crate) use literal::extcode;
pub(crate) use number::space_float;

/// Why the raw stage produced an error lexeme.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("malformed escape in character literal")]
    MalformedCharEscape,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("malformed escape in string literal")]
    MalformedStringEscape,
    #[error("unterminated `/*` comment")]
    UnterminatedBlockComment,
    #[error("unterminated `(*` comment")]
    UnterminatedNestedComment,
    #[error("unterminated `%{{` external code block")]
    UnterminatedExtcode,
    #[error("exponent marker without digits")]
    MissingExponentDigits,
    #[error("hexadecimal number without digits")]
    MissingHexDigits,
    #[error("unrecognized character")]
    UnrecognizedCharacter,
}

pub(crate) type ScanResult = Result<Outcome, ScanError>;

/// Run the sub-scanner for `start`.
///
/// `in_effect_mask` is forwarded to identifier resolution.
pub(crate) fn dispatch(start: Start, cursor: &mut Cursor<'_>, in_effect_mask: bool) -> ScanResult {
    match start {
        Start::Char => literal::char_literal(cursor),
        Start::String => literal::string(cursor),
        Start::BlockComment => comment::block(cursor),
        Start::NestedComment => comment::nested(cursor),
        Start::LineComment => comment::line(cursor),
        Start::RestComment => comment::rest(cursor),
        Start::DotInt => number::dot_int(cursor),
        Start::ZeroFloat => number::zero_float(cursor),
        Start::Decimal => number::decimal(cursor),
        Start::Hex => number::hex(cursor),
        Start::Octal => number::octal(cursor),
        Start::DollarIdent => ident::dollar(cursor, in_effect_mask),
        Start::HashIdent => ident::hash(cursor, in_effect_mask),
        Start::SymbolIdent => ident::symbol(cursor, in_effect_mask),
        Start::AlphaIdent => ident::alpha(cursor, in_effect_mask),
        Start::QmarkGt => ident::qmark_gt(cursor, in_effect_mask),
    }
}

#[cfg(test)]
mod tests;
