//! Lexer for ATS2 source text.
//!
//! Builds on the standalone scanner in [`ats_lexer_core`]:
//!
//! ```text
//! file → read_source → SourceBuffer → RawScanner → Filter → Lexeme
//! ```
//!
//! [`lex`] returns the lazy, filtered stream; [`tokenize`] collects it
//! together with the error that stopped it, if any.
//!
//! # Tracing
//!
//! Entry points emit `tracing` spans and events:
//! - `RUST_LOG=ats_lexer=debug`: one event per file and on the first error.
//! - `RUST_LOG=ats_lexer=trace`: one event per yielded lexeme.

mod filter;
mod input;
mod lex_error;

pub use ats_lexer_core::{
    is_allowed_external_call, Lexeme, NonTerminal, RawScanner, ScanError, SourceBuffer, Span,
    Terminal,
};
pub use filter::{Filter, LexemeSource};
pub use input::{read_source, SourceError};
pub use lex_error::{LexError, LexErrorKind};

/// Result of lexing a whole source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Filtered lexemes. Ends with `Eof`, or with `Err` if `error` is set.
    pub lexemes: Vec<Lexeme>,
    pub error: Option<LexError>,
}

impl LexOutput {
    /// `true` if lexing reached the end of input without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Raw lexemes of `source`, whitespace and comments included.
pub fn raw(source: &SourceBuffer) -> RawScanner<'_> {
    RawScanner::new(source.cursor())
}

/// Filtered lexemes of `source`, produced on demand.
pub fn lex(source: &SourceBuffer) -> Filter<RawScanner<'_>> {
    Filter::new(raw(source))
}

/// Lex all of `source`.
#[tracing::instrument(level = "debug", skip_all, fields(chars = source.len()))]
pub fn tokenize(source: &SourceBuffer) -> LexOutput {
    let mut filter = lex(source);
    let lexemes: Vec<Lexeme> = filter.by_ref().collect();
    let error = filter.take_error();
    tracing::debug!(count = lexemes.len(), failed = error.is_some(), "lexing complete");
    LexOutput { lexemes, error }
}

/// Lex all of `source`, given as decoded text.
pub fn tokenize_str(source: &str) -> LexOutput {
    tokenize(&SourceBuffer::new(source))
}
