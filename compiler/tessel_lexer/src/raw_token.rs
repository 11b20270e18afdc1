//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output. Unlike a
//! compiler lexer, nothing is skipped: whitespace, newlines and comments are
//! tokens too, so the formatter can see (and re-emit) every byte.

use logos::Logos;

/// Consume a block comment body up to and including `*/`.
fn block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    // === Trivia ===
    #[regex(r"[ \t\r\f]+")]
    Whitespace,
    #[regex(r"\n+")]
    Newline,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // === Keywords ===
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("do")]
    Do,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("throw")]
    Throw,
    #[token("throws")]
    Throws,
    #[token("new")]
    New,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("import")]
    Import,
    #[token("package")]
    Package,
    #[token("public")]
    Public,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("static")]
    Static,
    #[token("final")]
    Final,
    #[token("void")]
    Void,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("boolean")]
    Boolean,
    #[token("char")]
    Char,
    #[token("double")]
    Double,
    #[token("float")]
    Float,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("this")]
    This,
    #[token("super")]
    Super,

    // === Literals ===
    #[regex(r"[0-9]+[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    IntLiteral,
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[fFdD]?")]
    FloatLiteral,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,
    #[regex(r"'([^'\\\n]|\\.)'")]
    CharLiteral,

    // === Identifier ===
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,

    // === Operators ===
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!")]
    Bang,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token("<<")]
    Shl,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token(">>")]
    Shr,
    #[token("+")]
    Plus,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEq,
    #[token("-")]
    Minus,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusEq,
    #[token("->")]
    Arrow,
    #[token("*")]
    Star,
    #[token("*=")]
    StarEq,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEq,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("&&")]
    AndAnd,
    #[token("|")]
    Pipe,
    #[token("||")]
    OrOr,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
}

impl RawToken {
    /// Every variant, in declaration order (`ALL[i] as usize == i`).
    pub const ALL: [RawToken; 91] = [
        RawToken::Whitespace,
        RawToken::Newline,
        RawToken::LineComment,
        RawToken::BlockComment,
        RawToken::If,
        RawToken::Else,
        RawToken::While,
        RawToken::For,
        RawToken::Do,
        RawToken::Switch,
        RawToken::Case,
        RawToken::Default,
        RawToken::Break,
        RawToken::Continue,
        RawToken::Return,
        RawToken::Try,
        RawToken::Catch,
        RawToken::Finally,
        RawToken::Throw,
        RawToken::Throws,
        RawToken::New,
        RawToken::Class,
        RawToken::Interface,
        RawToken::Enum,
        RawToken::Extends,
        RawToken::Implements,
        RawToken::Import,
        RawToken::Package,
        RawToken::Public,
        RawToken::Private,
        RawToken::Protected,
        RawToken::Static,
        RawToken::Final,
        RawToken::Void,
        RawToken::Int,
        RawToken::Long,
        RawToken::Boolean,
        RawToken::Char,
        RawToken::Double,
        RawToken::Float,
        RawToken::True,
        RawToken::False,
        RawToken::Null,
        RawToken::This,
        RawToken::Super,
        RawToken::IntLiteral,
        RawToken::FloatLiteral,
        RawToken::StringLiteral,
        RawToken::CharLiteral,
        RawToken::Ident,
        RawToken::LParen,
        RawToken::RParen,
        RawToken::LBrace,
        RawToken::RBrace,
        RawToken::LBracket,
        RawToken::RBracket,
        RawToken::Semi,
        RawToken::Comma,
        RawToken::Dot,
        RawToken::At,
        RawToken::Assign,
        RawToken::EqEq,
        RawToken::Bang,
        RawToken::NotEq,
        RawToken::Lt,
        RawToken::LtEq,
        RawToken::Shl,
        RawToken::Gt,
        RawToken::GtEq,
        RawToken::Shr,
        RawToken::Plus,
        RawToken::PlusPlus,
        RawToken::PlusEq,
        RawToken::Minus,
        RawToken::MinusMinus,
        RawToken::MinusEq,
        RawToken::Arrow,
        RawToken::Star,
        RawToken::StarEq,
        RawToken::Slash,
        RawToken::SlashEq,
        RawToken::Percent,
        RawToken::Amp,
        RawToken::AndAnd,
        RawToken::Pipe,
        RawToken::OrOr,
        RawToken::Caret,
        RawToken::Tilde,
        RawToken::Question,
        RawToken::Colon,
        RawToken::ColonColon,
    ];

    /// Display name, ANTLR-style: literal tokens are quoted.
    pub fn name(self) -> &'static str {
        match self {
            RawToken::Whitespace => "WS",
            RawToken::Newline => "NL",
            RawToken::LineComment => "LINE_COMMENT",
            RawToken::BlockComment => "COMMENT",
            RawToken::If => "'if'",
            RawToken::Else => "'else'",
            RawToken::While => "'while'",
            RawToken::For => "'for'",
            RawToken::Do => "'do'",
            RawToken::Switch => "'switch'",
            RawToken::Case => "'case'",
            RawToken::Default => "'default'",
            RawToken::Break => "'break'",
            RawToken::Continue => "'continue'",
            RawToken::Return => "'return'",
            RawToken::Try => "'try'",
            RawToken::Catch => "'catch'",
            RawToken::Finally => "'finally'",
            RawToken::Throw => "'throw'",
            RawToken::Throws => "'throws'",
            RawToken::New => "'new'",
            RawToken::Class => "'class'",
            RawToken::Interface => "'interface'",
            RawToken::Enum => "'enum'",
            RawToken::Extends => "'extends'",
            RawToken::Implements => "'implements'",
            RawToken::Import => "'import'",
            RawToken::Package => "'package'",
            RawToken::Public => "'public'",
            RawToken::Private => "'private'",
            RawToken::Protected => "'protected'",
            RawToken::Static => "'static'",
            RawToken::Final => "'final'",
            RawToken::Void => "'void'",
            RawToken::Int => "'int'",
            RawToken::Long => "'long'",
            RawToken::Boolean => "'boolean'",
            RawToken::Char => "'char'",
            RawToken::Double => "'double'",
            RawToken::Float => "'float'",
            RawToken::True => "'true'",
            RawToken::False => "'false'",
            RawToken::Null => "'null'",
            RawToken::This => "'this'",
            RawToken::Super => "'super'",
            RawToken::IntLiteral => "IntegerLiteral",
            RawToken::FloatLiteral => "FloatingPointLiteral",
            RawToken::StringLiteral => "StringLiteral",
            RawToken::CharLiteral => "CharacterLiteral",
            RawToken::Ident => "Identifier",
            RawToken::LParen => "'('",
            RawToken::RParen => "')'",
            RawToken::LBrace => "'{'",
            RawToken::RBrace => "'}'",
            RawToken::LBracket => "'['",
            RawToken::RBracket => "']'",
            RawToken::Semi => "';'",
            RawToken::Comma => "','",
            RawToken::Dot => "'.'",
            RawToken::At => "'@'",
            RawToken::Assign => "'='",
            RawToken::EqEq => "'=='",
            RawToken::Bang => "'!'",
            RawToken::NotEq => "'!='",
            RawToken::Lt => "'<'",
            RawToken::LtEq => "'<='",
            RawToken::Shl => "'<<'",
            RawToken::Gt => "'>'",
            RawToken::GtEq => "'>='",
            RawToken::Shr => "'>>'",
            RawToken::Plus => "'+'",
            RawToken::PlusPlus => "'++'",
            RawToken::PlusEq => "'+='",
            RawToken::Minus => "'-'",
            RawToken::MinusMinus => "'--'",
            RawToken::MinusEq => "'-='",
            RawToken::Arrow => "'->'",
            RawToken::Star => "'*'",
            RawToken::StarEq => "'*='",
            RawToken::Slash => "'/'",
            RawToken::SlashEq => "'/='",
            RawToken::Percent => "'%'",
            RawToken::Amp => "'&'",
            RawToken::AndAnd => "'&&'",
            RawToken::Pipe => "'|'",
            RawToken::OrOr => "'||'",
            RawToken::Caret => "'^'",
            RawToken::Tilde => "'~'",
            RawToken::Question => "'?'",
            RawToken::Colon => "':'",
            RawToken::ColonColon => "'::'",
        }
    }
}
