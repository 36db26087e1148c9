//! Position-tracked cursor over the decoded source characters.
//!
//! The cursor advances character by character. Reading exactly one position
//! past the last character yields the end-of-input sentinel (`None`); the
//! scanners treat it as an ordinary lookahead value that belongs to no
//! character class. Reading further than that is a usage error.
//!
//! # Backtracking
//!
//! [`mark`](Cursor::mark), [`discard_mark`](Cursor::discard_mark) and
//! [`restore`](Cursor::restore) maintain a strictly nested stack of saved
//! positions, so a sub-pattern can try a match and rewind without side
//! effects.

/// Cursor over a character slice.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    chars: &'a [char],
    /// Current read position (character offset).
    pos: u32,
    /// Saved positions, innermost last.
    marks: Vec<u32>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `chars.len()` must fit in `u32`. This is guaranteed by
    /// `SourceBuffer`, which truncates the view it hands out.
    pub(crate) fn new(chars: &'a [char]) -> Self {
        debug_assert!(u32::try_from(chars.len()).is_ok(), "source too long");
        Self {
            chars,
            pos: 0,
            marks: Vec::new(),
        }
    }

    /// Returns the character `offset` positions ahead of the current one.
    ///
    /// Returns `None` (the end-of-input sentinel) exactly one past the last
    /// character.
    ///
    /// # Contract
    ///
    /// `pos + offset` must not exceed the source length: scanners stop at
    /// the sentinel and never look beyond it.
    #[inline]
    pub fn character(&self, offset: u32) -> Option<char> {
        let i = self.pos as usize + offset as usize;
        debug_assert!(
            i <= self.chars.len(),
            "lookahead {offset} from {} reads past end-of-input",
            self.pos
        );
        self.chars.get(i).copied()
    }

    /// Returns the character at the current position.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.character(0)
    }

    /// Returns the character one position ahead of current.
    ///
    /// Only valid before end-of-input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.character(1)
    }

    /// Advance the cursor by one character.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` characters.
    ///
    /// # Contract
    ///
    /// At least `n` characters must remain.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(
            self.pos as usize + n as usize <= self.chars.len(),
            "advancing {n} from {} overruns the source",
            self.pos
        );
        self.pos += n;
    }

    /// Returns `true` if every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.chars.len()
    }

    /// Current character offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in characters.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length checked to fit u32 at construction"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.chars.len() as u32
    }

    /// Returns `true` if `text` occurs at the current position.
    ///
    /// Never consumes anything.
    pub fn matches_literal(&self, text: &str) -> bool {
        let rest = &self.chars[self.pos as usize..];
        let mut expected = text.chars();
        let mut actual = rest.iter();
        loop {
            match (expected.next(), actual.next()) {
                (None, _) => return true,
                (Some(e), Some(&a)) if e == a => {}
                _ => return false,
            }
        }
    }

    /// Save the current position.
    pub fn mark(&mut self) {
        self.marks.push(self.pos);
    }

    /// Drop the innermost saved position, keeping the current one.
    pub fn discard_mark(&mut self) {
        let popped = self.marks.pop();
        debug_assert!(popped.is_some(), "discard_mark without mark");
    }

    /// Rewind to the innermost saved position and drop it.
    pub fn restore(&mut self) {
        match self.marks.pop() {
            Some(pos) => self.pos = pos,
            None => debug_assert!(false, "restore without mark"),
        }
    }

    /// Number of saved positions.
    #[inline]
    pub fn mark_depth(&self) -> usize {
        self.marks.len()
    }

    /// Text from `start` to `end` (exclusive).
    pub fn slice(&self, start: u32, end: u32) -> String {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.chars[start as usize..end as usize].iter().collect()
    }

    /// Text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> String {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current character.
    ///
    /// Returns the number of characters consumed. `pred(None)` must be
    /// `false`; every character class satisfies this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(Option<char>) -> bool) -> u32 {
        let start = self.pos;
        while pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Like [`eat_while`](Self::eat_while), stopping after at most `max`
    /// characters.
    #[inline]
    pub fn eat_while_max(&mut self, pred: impl Fn(Option<char>) -> bool, max: u32) -> u32 {
        let start = self.pos;
        while self.pos - start < max && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume the current character if `pred` holds for it.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(Option<char>) -> bool) -> bool {
        if pred(self.current()) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current character if it is `c`.
    #[inline]
    pub fn eat_char(&mut self, c: char) -> bool {
        self.eat_if(|cur| cur == Some(c))
    }

    /// Advance until `text` occurs at the current position or the input ends.
    ///
    /// Returns `true` if `text` was found; the cursor is then positioned at
    /// its first character, not past it.
    pub fn eat_until_literal(&mut self, text: &str) -> bool {
        loop {
            if self.matches_literal(text) {
                return true;
            }
            if self.is_eof() {
                return false;
            }
            self.pos += 1;
        }
    }
}
