use super::*;

// === Keyword translation ===

#[test]
fn function_keywords_share_one_terminal() {
    for n in [
        NonTerminal::Fun,
        NonTerminal::Fn,
        NonTerminal::Fnx,
        NonTerminal::PrFun,
        NonTerminal::PrFn,
        NonTerminal::Praxi,
        NonTerminal::CastFn,
    ] {
        assert_eq!(n.terminal(), Terminal::Fun, "{n:?}");
    }
}

#[test]
fn bare_sort_keywords_may_be_identifiers() {
    for n in [
        NonTerminal::Prop,
        NonTerminal::Type,
        NonTerminal::View,
        NonTerminal::ViewType,
    ] {
        assert_eq!(n.terminal(), Terminal::TypeOrIdent, "{n:?}");
    }
    assert_eq!(NonTerminal::T0ype.terminal(), Terminal::Type);
    assert_eq!(NonTerminal::TypePos.terminal(), Terminal::Type);
}

#[test]
fn both_comment_styles_are_block_comments() {
    assert_eq!(NonTerminal::CommentBlockC.terminal(), Terminal::CommentBlock);
    assert_eq!(NonTerminal::CommentBlockMl.terminal(), Terminal::CommentBlock);
}

#[test]
fn effect_mask_arguments_collapse() {
    for n in [
        NonTerminal::DlrEffmaskAll,
        NonTerminal::DlrEffmaskExn,
        NonTerminal::DlrEffmaskNtm,
        NonTerminal::DlrEffmaskRef,
        NonTerminal::DlrEffmaskWrt,
    ] {
        assert_eq!(n.terminal(), Terminal::DlrEffmaskArg);
    }
}

#[test]
fn outcome_translates_only_non_terminals() {
    assert_eq!(Outcome::from(Terminal::If).terminal(), Terminal::If);
    assert_eq!(
        Outcome::from(NonTerminal::Implmnt).terminal(),
        Terminal::Implement
    );
}

// === Terminal classification ===

#[test]
fn trivia_is_space_and_comments() {
    assert!(Terminal::Space.is_trivia());
    assert!(Terminal::CommentBlock.is_trivia());
    assert!(Terminal::CommentLine.is_trivia());
    assert!(Terminal::CommentRest.is_trivia());
    assert!(!Terminal::Space.is_comment());
    assert!(!Terminal::Extcode.is_trivia());
    assert!(!Terminal::Err.is_trivia());
}

#[test]
fn eof_and_err_terminate() {
    assert!(Terminal::Eof.is_terminating());
    assert!(Terminal::Err.is_terminating());
    assert!(!Terminal::IdentExternal.is_terminating());
}

// === Lexeme ===

#[test]
fn lexeme_accessors() {
    let lexeme = Lexeme::new(Terminal::IdentAlpha, Span::new(4, 7), "foo");
    assert_eq!(lexeme.start(), 4);
    assert_eq!(lexeme.end(), 7);
    assert_eq!(lexeme.span.len(), 3);
    assert!(!lexeme.span.is_empty());
}

#[test]
fn into_error_keeps_span_and_text() {
    let lexeme = Lexeme::new(Terminal::IdentHash, Span::new(0, 4), "#foo");
    let err = lexeme.into_error();
    assert_eq!(err.tag, Terminal::Err);
    assert_eq!(err.span, Span::new(0, 4));
    assert_eq!(err.text, "#foo");
}

#[test]
fn span_display() {
    assert_eq!(Span::new(3, 9).to_string(), "3..9");
}
