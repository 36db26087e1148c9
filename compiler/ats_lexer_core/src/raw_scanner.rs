//! Raw lexeme stage.
//!
//! Turns the whole source into lexemes, whitespace and comments included:
//! concatenating the text of every lexeme reproduces the source exactly. The
//! stream always ends with one empty [`Terminal::Eof`] lexeme.
//!
//! # Design
//!
//! Each step tries, in order:
//! 1. a whitespace run;
//! 2. a float introduced by `.` right after whitespace (` .5`);
//! 3. an external code block, when `%{` opens a line;
//! 4. the prefix trie, whose product is either final, a keyword category to
//!    translate, or a [`Start`](crate::Start) handing over to a sub-scanner.
//!
//! If the trie recognizes nothing, one character becomes an error lexeme.
//! Errors do not stop the raw stream; that is the filtering stage's job.

use crate::char_class::{is_digit, is_space};
use crate::scan::{self, ScanError};
use crate::tables::prefix_trie;
use crate::tag::{Lexeme, Outcome, Product, Span, Terminal};
use crate::Cursor;

/// Lexeme iterator over one source text.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// The next lexeme begins a line: start of input, or right after
    /// whitespace ending with a line break.
    start_of_line: bool,
    /// The previous lexeme was whitespace.
    after_space: bool,
    /// Inside a function-effect-mask argument list.
    in_effect_mask: bool,
    /// `Eof` has been produced.
    finished: bool,
    /// Cause of the latest error lexeme.
    last_error: Option<ScanError>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            start_of_line: true,
            after_space: false,
            in_effect_mask: false,
            finished: false,
            last_error: None,
        }
    }

    /// Tell identifier resolution whether the following lexemes are inside a
    /// function-effect-mask argument list.
    pub fn set_effect_mask(&mut self, in_effect_mask: bool) {
        self.in_effect_mask = in_effect_mask;
    }

    pub fn in_effect_mask(&self) -> bool {
        self.in_effect_mask
    }

    /// Why the latest error lexeme was produced.
    ///
    /// `None` until the first error lexeme.
    pub fn scan_error(&self) -> Option<ScanError> {
        self.last_error
    }

    /// Current character offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next lexeme.
    ///
    /// Returns `Eof` with an empty span when the source is exhausted, and
    /// keeps returning it on further calls.
    pub fn next_lexeme(&mut self) -> Lexeme {
        let start = self.cursor.pos();

        if !self.after_space && is_space(self.cursor.current()) {
            self.cursor.eat_while(is_space);
            let text = self.cursor.slice_from(start);
            self.start_of_line = text.ends_with('\n');
            self.after_space = true;
            return Lexeme::new(Terminal::Space, Span::new(start, self.cursor.pos()), text);
        }

        let after_space = std::mem::take(&mut self.after_space);
        let result = if after_space && self.at_space_float() {
            scan::space_float(&mut self.cursor)
        } else if self.start_of_line && self.cursor.matches_literal("%{") {
            scan::extcode(&mut self.cursor)
        } else {
            self.prefix()
        };
        self.start_of_line = false;

        let tag = match result {
            Ok(outcome) => outcome.terminal(),
            Err(e) => {
                self.last_error = Some(e);
                Terminal::Err
            }
        };
        if tag == Terminal::Eof {
            self.finished = true;
        }
        let end = self.cursor.pos();
        debug_assert!(
            end > start || tag == Terminal::Eof,
            "{tag:?} at {start} consumed nothing"
        );
        Lexeme::new(tag, Span::new(start, end), self.cursor.slice_from(start))
    }

    /// `.` followed by a digit.
    fn at_space_float(&self) -> bool {
        self.cursor.current() == Some('.') && is_digit(self.cursor.peek())
    }

    /// Longest trie match, then translation or sub-scanner hand-over.
    fn prefix(&mut self) -> Result<Outcome, ScanError> {
        self.cursor.mark();
        match prefix_trie().scan(&mut self.cursor) {
            Some(Product::Start(start)) => {
                // Sub-scanners consume their introductory literal themselves.
                self.cursor.restore();
                scan::dispatch(start, &mut self.cursor, self.in_effect_mask)
            }
            Some(Product::Terminal(t)) => {
                self.cursor.discard_mark();
                Ok(t.into())
            }
            Some(Product::NonTerminal(n)) => {
                self.cursor.discard_mark();
                Ok(n.into())
            }
            None => {
                self.cursor.discard_mark();
                self.cursor.advance();
                Err(ScanError::UnrecognizedCharacter)
            }
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = Lexeme;

    /// Yields `Eof` once, then `None`.
    fn next(&mut self) -> Option<Lexeme> {
        if self.finished {
            None
        } else {
            Some(self.next_lexeme())
        }
    }
}

impl std::iter::FusedIterator for RawScanner<'_> {}
