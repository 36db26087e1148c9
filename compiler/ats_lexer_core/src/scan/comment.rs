use super::{ScanError, ScanResult};
use crate::tag::{NonTerminal, Terminal};
use crate::Cursor;

/// `/* ... */`, not nesting.
pub(super) fn block(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance_n(2); // consume `/*`
    if !cursor.eat_until_literal("*/") {
        return Err(ScanError::UnterminatedBlockComment);
    }
    cursor.advance_n(2);
    Ok(NonTerminal::CommentBlockC.into())
}

/// `(* ... *)`, nesting.
pub(super) fn nested(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.advance_n(2); // consume `(*`
    let mut level = 1u32;
    loop {
        if cursor.matches_literal("(*") {
            cursor.advance_n(2);
            level += 1;
        } else if cursor.matches_literal("*)") {
            cursor.advance_n(2);
            level -= 1;
            if level == 0 {
                return Ok(NonTerminal::CommentBlockMl.into());
            }
        } else if cursor.is_eof() {
            return Err(ScanError::UnterminatedNestedComment);
        } else {
            cursor.advance();
        }
    }
}

/// `//` up to, not including, the line break.
pub(super) fn line(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.eat_while(|c| c.is_some_and(|c| c != '\n'));
    Ok(Terminal::CommentLine.into())
}

/// `////` up to the end of input.
pub(super) fn rest(cursor: &mut Cursor<'_>) -> ScanResult {
    cursor.eat_while(|c| c.is_some());
    Ok(Terminal::CommentRest.into())
}
