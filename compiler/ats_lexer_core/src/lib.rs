//! Low-level scanner for ATS2 source text.
//!
//! Turns a decoded source text into raw lexemes: every character, whitespace
//! and comments included, belongs to exactly one lexeme. Keyword spellings are
//! translated to their final [`Terminal`] category here; dropping trivia and
//! enforcing the identifier allowlist is left to the integration layer
//! (`ats_lexer`).
//!
//! ```text
//! SourceBuffer → Cursor → RawScanner → Lexeme { Terminal, Span, text }
//!                            │
//!                 prefix trie + sub-scanners + identifier table
//! ```

mod char_class;
mod cursor;
mod raw_scanner;
mod scan;
mod source_buffer;
mod tables;
mod tag;
mod trie;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use scan::ScanError;
pub use source_buffer::SourceBuffer;
pub use tables::{is_allowed_external_call, prefix_trie, resolve_identifier};
pub use tag::{Lexeme, NonTerminal, Outcome, Product, Span, Start, Terminal};
pub use trie::{Trie, TrieError};
