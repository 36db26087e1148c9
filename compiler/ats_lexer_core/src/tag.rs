//! Lexeme categories.
//!
//! Three disjoint kinds of tags:
//! - [`Terminal`]: final token categories, the only tags carried by lexemes.
//! - [`NonTerminal`]: keyword spellings that collapse to one terminal each
//!   (e.g. `fun`, `fn`, `prfun` all become [`Terminal::Fun`]).
//! - [`Start`]: prefixes that hand over to a dedicated sub-scanner.
//!
//! The names follow the ATS2 compiler's own token names. `…OrIdent` tags are
//! spellings the parser may still accept as identifiers.

/// Final token category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {
    AbsType,
    AddrAt,
    AddrOrIdent,
    And,
    As,
    Assume,
    AtLBrace,
    AtLBracket,
    AtLParen,
    AtOrSIdent,
    BackslashOrIdent,
    BangOrIdent,
    Bar,
    Begin,
    BQuote,
    BQuoteLParen,
    Case,
    Char,
    ClassDec,
    Colon,
    ColonLt,
    Comma,
    CommaLParen,
    CommentBlock,
    CommentLine,
    CommentRest,
    DataSort,
    DataType,
    DlrArrPsz,
    DlrBreak,
    DlrContinue,
    DlrD2cType,
    DlrDelay,
    DlrEffmask,
    DlrEffmaskArg,
    DlrExtern,
    DlrExtfcall,
    DlrExtkind,
    DlrExtmcall,
    DlrExtval,
    DlrExtype,
    DlrExtypeStruct,
    DlrLiteral,
    DlrLst,
    DlrMyFilename,
    DlrMyFunction,
    DlrMyLocation,
    DlrRaise,
    DlrRec,
    DlrShowType,
    DlrSolAssert,
    DlrSolVerify,
    DlrTempEnver,
    DlrTup,
    DlrTyRep,
    DlrVarArg,
    DlrVCopyEnv,
    Do,
    Dollar,
    Dot,
    DotDot,
    DotDotDot,
    DotInt,
    DotLt,
    DotLtGtDot,
    Else,
    End,
    /// End of input. Always the last raw lexeme; its span is empty.
    Eof,
    EqGt,
    EqGtGt,
    EqLt,
    EqLtGt,
    EqOrDIdent,
    EqSlashEqGt,
    EqSlashEqGtGt,
    /// Lexical error. Ends the filtered stream.
    Err,
    Exception,
    Extcode,
    Extern,
    ExtVar,
    ExType,
    Fix,
    Fixity,
    Float,
    FoldAt,
    FoldOrIdent,
    For,
    ForStar,
    FreeAt,
    FreeOrIdent,
    Fun,
    GtDot,
    GtLtOrDIdent,
    GtOrIdent,
    Hash,
    HashLBracket,
    /// Alphabetic identifier with no keyword meaning.
    IdentAlpha,
    /// Alphabetic identifier directly followed by `[`.
    IdentArray,
    /// `$`-prefixed identifier with no keyword meaning.
    IdentDollar,
    /// Alphabetic identifier directly followed by `!` (external-call style).
    IdentExternal,
    /// `#`-prefixed identifier with no keyword meaning (reserved namespace).
    IdentHash,
    /// Symbolic identifier with no keyword meaning.
    IdentSymbol,
    /// Alphabetic identifier directly followed by `<`.
    IdentTemplate,
    If,
    IfCase,
    Implement,
    Import,
    In,
    Int,
    IntZero,
    Lam,
    LBrace,
    LBracket,
    Let,
    Local,
    LParen,
    LtOrIdent,
    MacDef,
    MinusGtOrSIdent,
    MinusLt,
    MinusLtGt,
    NonFix,
    Of,
    Op,
    Overload,
    PercentLParen,
    PercentOrIdent,
    QMarkOrIdent,
    QuoteLBrace,
    QuoteLBracket,
    QuoteLParen,
    RBrace,
    RBracket,
    Reassume,
    Rec,
    RParen,
    SCase,
    Semicolon,
    SIf,
    SortDef,
    /// Run of space characters.
    Space,
    SrpAssert,
    SrpCodegen2,
    SrpDefine,
    SrpDynload,
    SrpElif,
    SrpElifDef,
    SrpElifNDef,
    SrpElse,
    SrpEndif,
    SrpError,
    SrpIf,
    SrpIfDef,
    SrpIfNDef,
    SrpInclude,
    SrpPragma,
    SrpPrErr,
    SrpPrint,
    SrpRequire,
    SrpStaload,
    SrpThen,
    SrpUndef,
    StaCst,
    StaDef,
    Static,
    String,
    SymElim,
    SymIntr,
    Then,
    TildeOrIdent,
    TKinDef,
    Try,
    Type,
    TypeDef,
    TypeOrIdent,
    Val,
    Var,
    ViewAt,
    When,
    Where,
    While,
    WhileStar,
    With,
    WithType,
}

impl Terminal {
    /// Returns `true` for the three comment categories.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Terminal::CommentBlock | Terminal::CommentLine | Terminal::CommentRest
        )
    }

    /// Returns `true` for lexemes a parser never sees: space and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self == Terminal::Space || self.is_comment()
    }

    /// Returns `true` for the tags that end a lexeme stream.
    #[inline]
    pub fn is_terminating(self) -> bool {
        matches!(self, Terminal::Eof | Terminal::Err)
    }
}

/// Keyword category that translates to exactly one [`Terminal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    AbsProp,
    AbsT0ype,
    AbsType,
    AbsView,
    AbsViewT0ype,
    AbsViewType,
    Case,
    CaseNeg,
    CasePos,
    CastFn,
    CommentBlockC,
    CommentBlockMl,
    DataProp,
    DataType,
    DataView,
    DataVType,
    DlrDelay,
    DlrEffmaskAll,
    DlrEffmaskExn,
    DlrEffmaskNtm,
    DlrEffmaskRef,
    DlrEffmaskWrt,
    DlrLDelay,
    DlrLst,
    DlrLstT,
    DlrLstVt,
    DlrRec,
    DlrRecT,
    DlrRecVt,
    DlrTup,
    DlrTupT,
    DlrTupVt,
    DlrVCopyEnvV,
    DlrVCopyEnvVt,
    Fix,
    FixAt,
    Fn,
    Fnx,
    Fun,
    Implement,
    Implmnt,
    Infix,
    InfixL,
    InfixR,
    Lam,
    LamAt,
    LLam,
    LLamAt,
    MacDef,
    MacroDef,
    Postfix,
    Praxi,
    Prefix,
    PrFn,
    PrFun,
    PrImplmnt,
    Prop,
    PropDef,
    PropNeg,
    PropPos,
    PrVal,
    PrVar,
    T0ype,
    T0ypeNeg,
    T0ypePos,
    Type,
    TypeDef,
    TypeNeg,
    TypePos,
    Val,
    ValNeg,
    ValPos,
    Var,
    View,
    ViewDef,
    ViewNeg,
    ViewPos,
    ViewT0ype,
    ViewT0ypeNeg,
    ViewT0ypePos,
    ViewType,
    ViewTypeDef,
    ViewTypeNeg,
    ViewTypePos,
    WithProp,
    WithType,
    WithView,
    WithViewType,
}

impl NonTerminal {
    /// The terminal this keyword category collapses to.
    pub fn terminal(self) -> Terminal {
        use NonTerminal as N;
        match self {
            N::AbsProp
            | N::AbsT0ype
            | N::AbsType
            | N::AbsView
            | N::AbsViewT0ype
            | N::AbsViewType => Terminal::AbsType,
            N::Case | N::CaseNeg | N::CasePos => Terminal::Case,
            N::CastFn | N::Fn | N::Fnx | N::Fun | N::Praxi | N::PrFn | N::PrFun => Terminal::Fun,
            N::CommentBlockC | N::CommentBlockMl => Terminal::CommentBlock,
            N::DataProp | N::DataType | N::DataView | N::DataVType => Terminal::DataType,
            N::DlrDelay | N::DlrLDelay => Terminal::DlrDelay,
            N::DlrEffmaskAll
            | N::DlrEffmaskExn
            | N::DlrEffmaskNtm
            | N::DlrEffmaskRef
            | N::DlrEffmaskWrt => Terminal::DlrEffmaskArg,
            N::DlrLst | N::DlrLstT | N::DlrLstVt => Terminal::DlrLst,
            N::DlrRec | N::DlrRecT | N::DlrRecVt => Terminal::DlrRec,
            N::DlrTup | N::DlrTupT | N::DlrTupVt => Terminal::DlrTup,
            N::DlrVCopyEnvV | N::DlrVCopyEnvVt => Terminal::DlrVCopyEnv,
            N::Fix | N::FixAt => Terminal::Fix,
            N::Implement | N::Implmnt | N::PrImplmnt => Terminal::Implement,
            N::Infix | N::InfixL | N::InfixR | N::Postfix | N::Prefix => Terminal::Fixity,
            N::Lam | N::LamAt | N::LLam | N::LLamAt => Terminal::Lam,
            N::MacDef | N::MacroDef => Terminal::MacDef,
            N::PropDef | N::TypeDef | N::ViewDef | N::ViewTypeDef => Terminal::TypeDef,
            N::Prop | N::Type | N::View | N::ViewType => Terminal::TypeOrIdent,
            N::PropNeg
            | N::PropPos
            | N::T0ype
            | N::T0ypeNeg
            | N::T0ypePos
            | N::TypeNeg
            | N::TypePos
            | N::ViewNeg
            | N::ViewPos
            | N::ViewT0ype
            | N::ViewT0ypeNeg
            | N::ViewT0ypePos
            | N::ViewTypeNeg
            | N::ViewTypePos => Terminal::Type,
            N::PrVal | N::Val | N::ValNeg | N::ValPos => Terminal::Val,
            N::PrVar | N::Var => Terminal::Var,
            N::WithProp | N::WithType | N::WithView | N::WithViewType => Terminal::WithType,
        }
    }
}

/// Prefix that needs a dedicated sub-scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Start {
    /// `'`
    Char,
    /// `/*`
    BlockComment,
    /// `(*`
    NestedComment,
    /// `//`
    LineComment,
    /// `////`
    RestComment,
    /// `.` followed by a digit.
    DotInt,
    /// `0.`, `0e`, `0E`
    ZeroFloat,
    /// `$` followed by an identifier start.
    DollarIdent,
    /// `#` followed by an identifier start.
    HashIdent,
    /// A symbol character, or `$` followed by one.
    SymbolIdent,
    /// An identifier start.
    AlphaIdent,
    /// `0` followed by an octal digit.
    Octal,
    /// `?>`
    QmarkGt,
    /// `"`
    String,
    /// `1` to `9`.
    Decimal,
    /// `0x`, `0X`
    Hex,
}

/// What a prefix-trie node may recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Product {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
    Start(Start),
}

/// What sub-scanners and identifier resolution produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Outcome {
    /// The final category, translating keyword categories.
    #[inline]
    pub fn terminal(self) -> Terminal {
        match self {
            Outcome::Terminal(t) => t,
            Outcome::NonTerminal(n) => n.terminal(),
        }
    }
}

impl From<Terminal> for Outcome {
    fn from(t: Terminal) -> Self {
        Outcome::Terminal(t)
    }
}

impl From<NonTerminal> for Outcome {
    fn from(n: NonTerminal) -> Self {
        Outcome::NonTerminal(n)
    }
}

/// Half-open range of character offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A tagged span of source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub tag: Terminal,
    pub span: Span,
    /// The covered source text, verbatim.
    pub text: String,
}

impl Lexeme {
    pub fn new(tag: Terminal, span: Span, text: impl Into<String>) -> Self {
        Self {
            tag,
            span,
            text: text.into(),
        }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }

    /// The same lexeme re-tagged as an error.
    #[must_use]
    pub fn into_error(self) -> Self {
        Self {
            tag: Terminal::Err,
            ..self
        }
    }
}

#[cfg(test)]
mod tests;
