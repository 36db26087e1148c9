//! Filtering stage.
//!
//! Sits between the raw scanner and a parser:
//!
//! ```text
//! RawScanner → Filter → Lexeme (no trivia, at most one trailing Err)
//! ```
//!
//! Space and comments are dropped. Every other lexeme passes through
//! unchanged, except that the stream stops permanently after:
//! - an `Err` lexeme, which is yielded;
//! - a `#` identifier that did not resolve to a directive, yielded as `Err`;
//! - a `name!` identifier outside the allowlist, yielded as `Err`;
//! - `Eof`, which is yielded.

use ats_lexer_core::{is_allowed_external_call, Lexeme, RawScanner, ScanError, Terminal};

use crate::lex_error::LexError;

/// An ordered source of raw lexemes.
pub trait LexemeSource: Iterator<Item = Lexeme> {
    /// Why the most recent `Err` lexeme was produced, if known.
    fn scan_error(&self) -> Option<ScanError> {
        None
    }
}

impl LexemeSource for RawScanner<'_> {
    fn scan_error(&self) -> Option<ScanError> {
        RawScanner::scan_error(self)
    }
}

/// Pre-built lexemes, e.g. a stream filtered once already.
impl LexemeSource for std::vec::IntoIter<Lexeme> {}

/// Trivia-free view of a lexeme source that halts at the first error.
pub struct Filter<S> {
    source: S,
    done: bool,
    error: Option<LexError>,
}

impl<S: LexemeSource> Filter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            done: false,
            error: None,
        }
    }

    /// The error that stopped the stream, if any.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<LexError> {
        self.error.take()
    }

    /// `true` once the stream has stopped.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The underlying source, e.g. to toggle
    /// [`RawScanner::set_effect_mask`] between lexemes.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn stop(&mut self, lexeme: Lexeme, error: LexError) -> Lexeme {
        tracing::debug!(
            span = %lexeme.span,
            text = %lexeme.text,
            kind = %error.kind,
            "lexing stopped"
        );
        self.error = Some(error);
        self.done = true;
        lexeme.into_error()
    }
}

impl<S: LexemeSource> Iterator for Filter<S> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        if self.done {
            return None;
        }
        loop {
            let Some(lexeme) = self.source.next() else {
                self.done = true;
                return None;
            };
            match lexeme.tag {
                tag if tag.is_trivia() => {}
                Terminal::Err => {
                    let error = match self.source.scan_error() {
                        Some(cause) => LexError::scan(lexeme.span, cause),
                        None => LexError::unexplained(lexeme.span),
                    };
                    return Some(self.stop(lexeme, error));
                }
                Terminal::IdentHash => {
                    let error = LexError::unresolved_hash_identifier(lexeme.span);
                    return Some(self.stop(lexeme, error));
                }
                Terminal::IdentExternal if !is_allowed_external_call(&lexeme.text) => {
                    let error = LexError::unknown_external_call(lexeme.span);
                    return Some(self.stop(lexeme, error));
                }
                Terminal::Eof => {
                    self.done = true;
                    return Some(lexeme);
                }
                _ => {
                    tracing::trace!(tag = ?lexeme.tag, span = %lexeme.span, "lexeme");
                    return Some(lexeme);
                }
            }
        }
    }
}

impl<S: LexemeSource> std::iter::FusedIterator for Filter<S> {}
