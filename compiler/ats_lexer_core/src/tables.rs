//! Fixed lexical tables: the prefix trie, the identifier resolution table
//! and the external-call allowlist.
//!
//! The prefix trie is built once on first use and shared read-only. The
//! identifier table and the allowlist are plain `match` expressions.

use std::sync::OnceLock;

use crate::char_class::{
    ascii_members, is_digit, is_exponent_marker, is_hex_marker, is_ident_start, is_octal,
    is_symbolic,
};
use crate::tag::{NonTerminal as N, Outcome, Product, Start, Terminal as T};
use crate::trie::{Trie, TrieError};

/// Literals recognized as final terminals straight from the trie.
const TERMINAL_PREFIXES: &[(&str, T)] = &[
    ("0", T::IntZero),
    ("addr@", T::AddrAt),
    ("fold@", T::FoldAt),
    ("for*", T::ForStar),
    ("free@", T::FreeAt),
    ("view@", T::ViewAt),
    ("while*", T::WhileStar),
    ("@{", T::AtLBrace),
    ("@[", T::AtLBracket),
    ("@(", T::AtLParen),
    ("\\", T::BackslashOrIdent),
    ("`(", T::BQuoteLParen),
    (":<", T::ColonLt),
    (",", T::Comma),
    (",(", T::CommaLParen),
    ("#[", T::HashLBracket),
    ("$", T::IdentSymbol),
    ("{", T::LBrace),
    ("[", T::LBracket),
    ("(", T::LParen),
    ("%(", T::PercentLParen),
    ("'{", T::QuoteLBrace),
    ("'[", T::QuoteLBracket),
    ("'(", T::QuoteLParen),
    ("}", T::RBrace),
    ("]", T::RBracket),
    (")", T::RParen),
    (";", T::Semicolon),
];

/// Keyword spellings that an identifier scan would split, such as `t@ype`
/// or `case+`.
const NON_TERMINAL_PREFIXES: &[(&str, N)] = &[
    ("abst@ype", N::AbsT0ype),
    ("absviewt@ype", N::AbsViewT0ype),
    ("absvt@ype", N::AbsViewT0ype),
    ("case-", N::CaseNeg),
    ("case+", N::CasePos),
    ("fix@", N::FixAt),
    ("lam@", N::LamAt),
    ("llam@", N::LLamAt),
    ("prop-", N::PropNeg),
    ("prop+", N::PropPos),
    ("t0ype-", N::T0ypeNeg),
    ("t0ype+", N::T0ypePos),
    ("t@ype", N::T0ype),
    ("t@ype-", N::T0ypeNeg),
    ("t@ype+", N::T0ypePos),
    ("type-", N::TypeNeg),
    ("type+", N::TypePos),
    ("val-", N::ValNeg),
    ("val+", N::ValPos),
    ("view-", N::ViewNeg),
    ("view+", N::ViewPos),
    ("viewt0ype-", N::ViewT0ypeNeg),
    ("viewt0ype+", N::ViewT0ypePos),
    ("viewt@ype", N::ViewT0ype),
    ("viewt@ype-", N::ViewT0ypeNeg),
    ("viewt@ype+", N::ViewT0ypePos),
    ("viewtype-", N::ViewTypeNeg),
    ("viewtype+", N::ViewTypePos),
    ("vt0ype-", N::ViewT0ypeNeg),
    ("vt0ype+", N::ViewT0ypePos),
    ("vt@ype", N::ViewT0ype),
    ("vt@ype-", N::ViewT0ypeNeg),
    ("vt@ype+", N::ViewT0ypePos),
    ("vtype-", N::ViewTypeNeg),
    ("vtype+", N::ViewTypePos),
];

/// Fixed literals that introduce a sub-scanner.
const START_PREFIXES: &[(&str, Start)] = &[
    ("'", Start::Char),
    ("/*", Start::BlockComment),
    ("(*", Start::NestedComment),
    ("//", Start::LineComment),
    ("////", Start::RestComment),
    ("0.", Start::ZeroFloat),
    ("?>", Start::QmarkGt),
    ("\"", Start::String),
];

/// Build the prefix trie from the fixed tables.
///
/// Fails if two entries share a literal.
pub(crate) fn build_prefix_trie() -> Result<Trie<Product>, TrieError> {
    let mut trie = Trie::new();
    trie.insert_end_of_input(Product::Terminal(T::Eof))?;

    for &(literal, t) in TERMINAL_PREFIXES {
        trie.insert(literal, Product::Terminal(t))?;
    }
    for &(literal, n) in NON_TERMINAL_PREFIXES {
        trie.insert(literal, Product::NonTerminal(n))?;
    }
    for &(literal, s) in START_PREFIXES {
        trie.insert(literal, Product::Start(s))?;
    }

    let mut two = |first: char, second: fn(Option<char>) -> bool, s: Start| {
        ascii_members(second).try_for_each(|c| {
            let literal: String = [first, c].iter().collect();
            trie.insert(&literal, Product::Start(s))
        })
    };
    two('.', is_digit, Start::DotInt)?;
    two('0', is_exponent_marker, Start::ZeroFloat)?;
    two('$', is_ident_start, Start::DollarIdent)?;
    two('#', is_ident_start, Start::HashIdent)?;
    two('$', is_symbolic, Start::SymbolIdent)?;
    two('0', is_octal, Start::Octal)?;
    two('0', is_hex_marker, Start::Hex)?;

    let mut one = |class: fn(Option<char>) -> bool, s: Start| {
        ascii_members(class)
            .filter(|&c| c != '0')
            .try_for_each(|c| trie.insert(c.encode_utf8(&mut [0; 4]), Product::Start(s)))
    };
    one(is_symbolic, Start::SymbolIdent)?;
    one(is_ident_start, Start::AlphaIdent)?;
    // `0` alone is `IntZero`, registered above.
    one(is_digit, Start::Decimal)?;

    Ok(trie)
}

static PREFIX_TRIE: OnceLock<Trie<Product>> = OnceLock::new();

/// The shared prefix trie (built on first use).
#[allow(
    clippy::expect_used,
    reason = "the fixed table is checked collision-free by unit tests"
)]
pub fn prefix_trie() -> &'static Trie<Product> {
    PREFIX_TRIE.get_or_init(|| build_prefix_trie().expect("prefix table has a collision"))
}

/// Resolve an identifier spelling.
///
/// `default` is the generic tag the sub-scanner classified the spelling as.
/// Inside a function-effect-mask argument list, `>` closes the list and
/// resolves to [`Terminal::GtOrIdent`](T::GtOrIdent) whenever it would
/// otherwise be a plain symbolic identifier.
pub fn resolve_identifier(text: &str, default: T, in_effect_mask: bool) -> Outcome {
    // The table also maps `>` to `GtOrIdent`; inside an effect mask the
    // result holds without it.
    if in_effect_mask && default == T::IdentSymbol && text == ">" {
        return Outcome::Terminal(T::GtOrIdent);
    }
    lookup(text).unwrap_or(Outcome::Terminal(default))
}

/// Exact-spelling identifier table.
#[allow(clippy::match_same_arms, reason = "one arm per spelling reads as a table")]
fn lookup(text: &str) -> Option<Outcome> {
    let t = |t: T| Some(Outcome::Terminal(t));
    let n = |n: N| Some(Outcome::NonTerminal(n));
    match text {
        // Symbols
        "@" => t(T::AtOrSIdent),
        "!" => t(T::BangOrIdent),
        "|" => t(T::Bar),
        "`" => t(T::BQuote),
        ":" => t(T::Colon),
        "$" => t(T::Dollar),
        "." => t(T::Dot),
        ".." => t(T::DotDot),
        "..." => t(T::DotDotDot),
        ".<>." => t(T::DotLtGtDot),
        ".<" => t(T::DotLt),
        "=" => t(T::EqOrDIdent),
        "=>" => t(T::EqGt),
        "=>>" => t(T::EqGtGt),
        "=<" => t(T::EqLt),
        "=<>" => t(T::EqLtGt),
        "=/=>" => t(T::EqSlashEqGt),
        "=/=>>" => t(T::EqSlashEqGtGt),
        ">." => t(T::GtDot),
        ">" => t(T::GtOrIdent),
        "><" => t(T::GtLtOrDIdent),
        "#" => t(T::Hash),
        "<" => t(T::LtOrIdent),
        "->" => t(T::MinusGtOrSIdent),
        "-<" => t(T::MinusLt),
        "-<>" => t(T::MinusLtGt),
        "%" => t(T::PercentOrIdent),
        "?" => t(T::QMarkOrIdent),
        "~" => t(T::TildeOrIdent),

        // Dollar identifiers
        "$arrpsz" | "$arrptrsize" => t(T::DlrArrPsz),
        "$break" => t(T::DlrBreak),
        "$continue" => t(T::DlrContinue),
        "$d2ctype" => t(T::DlrD2cType),
        "$effmask" => t(T::DlrEffmask),
        "$extern" => t(T::DlrExtern),
        "$extfcall" => t(T::DlrExtfcall),
        "$extkind" => t(T::DlrExtkind),
        "$extmcall" => t(T::DlrExtmcall),
        "$extval" => t(T::DlrExtval),
        "$extype" => t(T::DlrExtype),
        "$extype_struct" => t(T::DlrExtypeStruct),
        "$literal" => t(T::DlrLiteral),
        "$myfilename" => t(T::DlrMyFilename),
        "$myfunction" => t(T::DlrMyFunction),
        "$mylocation" => t(T::DlrMyLocation),
        "$raise" => t(T::DlrRaise),
        "$showtype" => t(T::DlrShowType),
        "$solver_assert" => t(T::DlrSolAssert),
        "$solver_verify" => t(T::DlrSolVerify),
        "$tempenver" => t(T::DlrTempEnver),
        "$tyrep" => t(T::DlrTyRep),
        "$vararg" => t(T::DlrVarArg),
        "$delay" => n(N::DlrDelay),
        "$ldelay" => n(N::DlrLDelay),
        "$effmask_all" => n(N::DlrEffmaskAll),
        "$effmask_exn" => n(N::DlrEffmaskExn),
        "$effmask_ntm" => n(N::DlrEffmaskNtm),
        "$effmask_ref" => n(N::DlrEffmaskRef),
        "$effmask_wrt" => n(N::DlrEffmaskWrt),
        "$list" | "$lst" => n(N::DlrLst),
        "$list_t" | "$lst_t" => n(N::DlrLstT),
        "$list_vt" | "$lst_vt" => n(N::DlrLstVt),
        "$rec" | "$record" => n(N::DlrRec),
        "$rec_t" | "$record_t" => n(N::DlrRecT),
        "$rec_vt" | "$record_vt" => n(N::DlrRecVt),
        "$tup" | "$tuple" => n(N::DlrTup),
        "$tup_t" | "$tuple_t" => n(N::DlrTupT),
        "$tup_vt" | "$tuple_vt" => n(N::DlrTupVt),
        "$vcopyenv_v" => n(N::DlrVCopyEnvV),
        "$vcopyenv_vt" => n(N::DlrVCopyEnvVt),

        // Hash identifiers (preprocessor directives)
        "#assert" => t(T::SrpAssert),
        "#codegen2" => t(T::SrpCodegen2),
        "#define" => t(T::SrpDefine),
        "#dynload" | "dynload" => t(T::SrpDynload),
        "#elif" => t(T::SrpElif),
        "#elifdef" => t(T::SrpElifDef),
        "#elifndef" => t(T::SrpElifNDef),
        "#else" => t(T::SrpElse),
        "#endif" => t(T::SrpEndif),
        "#error" => t(T::SrpError),
        "#if" => t(T::SrpIf),
        "#ifdef" => t(T::SrpIfDef),
        "#ifndef" => t(T::SrpIfNDef),
        "#include" => t(T::SrpInclude),
        "#pragma" => t(T::SrpPragma),
        "#prerr" => t(T::SrpPrErr),
        "#print" => t(T::SrpPrint),
        "#require" => t(T::SrpRequire),
        "#staload" | "staload" => t(T::SrpStaload),
        "#then" => t(T::SrpThen),
        "#undef" => t(T::SrpUndef),

        // Alphabetic keywords
        "and" => t(T::And),
        "as" => t(T::As),
        "assume" | "absimpl" => t(T::Assume),
        "begin" => t(T::Begin),
        "classdec" => t(T::ClassDec),
        "datasort" => t(T::DataSort),
        "do" => t(T::Do),
        "else" => t(T::Else),
        "end" => t(T::End),
        "exception" => t(T::Exception),
        "extern" => t(T::Extern),
        "extvar" => t(T::ExtVar),
        "extype" => t(T::ExType),
        "ifcase" => t(T::IfCase),
        "if" => t(T::If),
        "import" => t(T::Import),
        "in" => t(T::In),
        "let" => t(T::Let),
        "local" => t(T::Local),
        "nonfix" => t(T::NonFix),
        "of" => t(T::Of),
        "op" => t(T::Op),
        "overload" => t(T::Overload),
        "reassume" | "absreimpl" => t(T::Reassume),
        "rec" => t(T::Rec),
        "scase" => t(T::SCase),
        "sif" => t(T::SIf),
        "sortdef" => t(T::SortDef),
        "sta" | "stacst" => t(T::StaCst),
        "stadef" => t(T::StaDef),
        "static" => t(T::Static),
        "symelim" => t(T::SymElim),
        "symintr" => t(T::SymIntr),
        "then" => t(T::Then),
        "tkindef" => t(T::TKinDef),
        "try" => t(T::Try),
        "when" => t(T::When),
        "where" => t(T::Where),
        "with" => t(T::With),
        "for" => t(T::For),
        "while" => t(T::While),
        "addr" => t(T::AddrOrIdent),
        "fold" => t(T::FoldOrIdent),
        "free" => t(T::FreeOrIdent),
        "absprop" => n(N::AbsProp),
        "abst0ype" | "abstflat" => n(N::AbsT0ype),
        "abstype" | "abstbox" => n(N::AbsType),
        "absview" => n(N::AbsView),
        "absviewt0ype" | "absvt0ype" | "absvtflat" => n(N::AbsViewT0ype),
        "absviewtype" | "absvtbox" | "absvtype" => n(N::AbsViewType),
        "case" => n(N::Case),
        "castfn" => n(N::CastFn),
        "dataprop" => n(N::DataProp),
        "datatype" => n(N::DataType),
        "dataview" => n(N::DataView),
        "dataviewtype" | "datavtype" => n(N::DataVType),
        "fix" => n(N::Fix),
        "fn" => n(N::Fn),
        "fnx" => n(N::Fnx),
        "fun" => n(N::Fun),
        "implement" => n(N::Implement),
        "implmnt" => n(N::Implmnt),
        "infix" => n(N::Infix),
        "infixl" => n(N::InfixL),
        "infixr" => n(N::InfixR),
        "lam" => n(N::Lam),
        "llam" => n(N::LLam),
        "macdef" => n(N::MacDef),
        "macrodef" => n(N::MacroDef),
        "postfix" => n(N::Postfix),
        "praxi" => n(N::Praxi),
        "prefix" => n(N::Prefix),
        "prfn" => n(N::PrFn),
        "prfun" => n(N::PrFun),
        "primplement" | "primplmnt" => n(N::PrImplmnt),
        "prop" => n(N::Prop),
        "propdef" => n(N::PropDef),
        "prval" => n(N::PrVal),
        "prvar" => n(N::PrVar),
        "t0ype" => n(N::T0ype),
        "type" => n(N::Type),
        "typedef" => n(N::TypeDef),
        "val" => n(N::Val),
        "var" => n(N::Var),
        "view" => n(N::View),
        "viewdef" => n(N::ViewDef),
        "viewt0ype" | "vt0ype" => n(N::ViewT0ype),
        "viewtype" | "vtype" => n(N::ViewType),
        "viewtypedef" | "vtypedef" => n(N::ViewTypeDef),
        "withprop" => n(N::WithProp),
        "withtype" => n(N::WithType),
        "withview" => n(N::WithView),
        "withviewtype" | "withvtype" => n(N::WithViewType),
        _ => None,
    }
}

/// Returns `true` if `text` is an external-call style identifier the
/// filtering stage lets through.
pub fn is_allowed_external_call(text: &str) -> bool {
    matches!(
        text,
        "car!"
            | "cdr!"
            | "fprint!"
            | "fprintln!"
            | "gprint!"
            | "gprintln!"
            | "iscons!"
            | "islist!"
            | "isnil!"
            | "prerr!"
            | "prerrln!"
            | "print!"
            | "println!"
            | "tupz!"
    )
}
