//! Decoded source text, indexable by character offset.
//!
//! Positions throughout the lexer are character offsets, not byte offsets:
//! ATS2 sources are read in a single-byte legacy encoding, so one byte on
//! disk is one character here. The buffer stores the decoded characters so
//! the cursor can look ahead and slice in constant time.
//!
//! # Encoding
//!
//! [`SourceBuffer::from_latin9`] decodes ISO-8859-15 (Latin-9), the encoding
//! the ATS2 toolchain reads sources in. It differs from Latin-1 in eight
//! code points only.

use crate::Cursor;

/// Decoded source text.
///
/// # Layout
///
/// ```text
/// [c0, c1, ..., c(n-1)]   sentinel: position n reads as end-of-input
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    chars: Vec<char>,
    /// Number of characters, saturated to `u32::MAX`.
    source_len: u32,
}

impl SourceBuffer {
    /// Largest source, in characters, that the buffer holds in full.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Create a buffer from already decoded text.
    ///
    /// # Source Size
    ///
    /// Sources longer than [`MAX_LEN`](Self::MAX_LEN) characters are
    /// accepted but truncated to that length, since positions are `u32`.
    /// [`Self::fits`] checks a length up front; `ats_lexer::read_source`
    /// rejects oversized files.
    pub fn new(source: &str) -> Self {
        Self::from_chars(source.chars().collect())
    }

    /// Create a buffer from ISO-8859-15 encoded bytes.
    ///
    /// Every byte decodes to exactly one character, so decoding cannot fail.
    /// Inputs over [`MAX_LEN`](Self::MAX_LEN) bytes are truncated as in
    /// [`Self::new`].
    pub fn from_latin9(bytes: &[u8]) -> Self {
        Self::from_chars(bytes.iter().copied().map(latin9_char).collect())
    }

    /// `true` if a source of `len` characters is held without truncation.
    pub const fn fits(len: usize) -> bool {
        len <= Self::MAX_LEN
    }

    fn from_chars(chars: Vec<char>) -> Self {
        // Saturate for sources over 4 Gi characters; the cursor never reads
        // past `source_len`.
        let source_len = u32::try_from(chars.len()).unwrap_or(u32::MAX);
        Self { chars, source_len }
    }

    /// Create a [`Cursor`] positioned at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars[..self.source_len as usize])
    }

    /// The decoded characters.
    pub fn as_chars(&self) -> &[char] {
        &self.chars[..self.source_len as usize]
    }

    /// Length of the source in characters.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

/// Decode one ISO-8859-15 byte.
fn latin9_char(byte: u8) -> char {
    match byte {
        0xA4 => '\u{20AC}', // EURO SIGN
        0xA6 => '\u{0160}', // LATIN CAPITAL LETTER S WITH CARON
        0xA8 => '\u{0161}', // LATIN SMALL LETTER S WITH CARON
        0xB4 => '\u{017D}', // LATIN CAPITAL LETTER Z WITH CARON
        0xB8 => '\u{017E}', // LATIN SMALL LETTER Z WITH CARON
        0xBC => '\u{0152}', // LATIN CAPITAL LIGATURE OE
        0xBD => '\u{0153}', // LATIN SMALL LIGATURE OE
        0xBE => '\u{0178}', // LATIN CAPITAL LETTER Y WITH DIAERESIS
        _ => char::from(byte),
    }
}
