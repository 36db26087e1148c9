//! Lexer error type.
//!
//! A lexeme stream carries at most one error: the filtering stage stops at
//! the first one. [`LexError`] records where it happened and why.

use ats_lexer_core::{ScanError, Span};
use thiserror::Error;

/// The error that ended a filtered lexeme stream.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// Character range of the offending lexeme.
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// The raw stage could not scan the text.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// `#` identifier that is not a known directive. The `#` namespace is
    /// reserved.
    #[error("unknown `#` directive")]
    UnresolvedHashIdentifier,
    /// `name!` call outside the allowed set.
    #[error("unknown external call")]
    UnknownExternalCall,
    /// Error lexeme from a source that does not record causes.
    #[error("lexical error")]
    Unexplained,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        Self { span, kind }
    }

    pub fn scan(span: Span, cause: ScanError) -> Self {
        Self::new(span, LexErrorKind::Scan(cause))
    }

    pub fn unresolved_hash_identifier(span: Span) -> Self {
        Self::new(span, LexErrorKind::UnresolvedHashIdentifier)
    }

    pub fn unknown_external_call(span: Span) -> Self {
        Self::new(span, LexErrorKind::UnknownExternalCall)
    }

    pub fn unexplained(span: Span) -> Self {
        Self::new(span, LexErrorKind::Unexplained)
    }
}

#[cfg(test)]
mod tests;
