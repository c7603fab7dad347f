//! Token definitions for the Lox lexer.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// A token produced by the scanner.
///
/// The `lexeme` is always the exact source substring that was matched; it
/// borrows from the scanned source and is empty only for the terminal
/// [`TokenKind::Eof`] token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    /// The kind of token
    pub kind: TokenKind,
    /// The matched source text
    pub lexeme: &'src str,
    /// Decoded literal value, if this token carries one
    pub literal: Literal<'src>,
    /// 1-based line of the token's first character
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: &'src str, literal: Literal<'src>, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {} {}", self.kind, self.lexeme, self.literal)
    }
}

/// Decoded value carried by literal tokens.
///
/// Only [`TokenKind::Number`] and [`TokenKind::String`] tokens carry a value;
/// every other kind uses [`Literal::None`]. String content borrows the source
/// text between the quotes; Lox strings have no escape sequences, so the raw
/// slice is already the decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Literal<'src> {
    /// No literal value
    #[default]
    None,
    /// Numeric value, always double-precision
    Number(f64),
    /// String content without the surrounding quotes
    Str(&'src str),
}

impl std::fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::None => write!(f, "nil"),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "{s}"),
        }
    }
}

/// The different kinds of tokens in Lox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// .
    Dot,
    /// -
    Minus,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// /
    Slash,
    /// *
    Star,

    // One/two-character operators
    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal
    String,
    /// Numeric literal
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Returns true if this token is a literal (including identifiers).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::String | TokenKind::Number
        )
    }
}

/// Reserved words, built once and shared read-only by every scanner.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("and", TokenKind::And);
    map.insert("class", TokenKind::Class);
    map.insert("else", TokenKind::Else);
    map.insert("false", TokenKind::False);
    map.insert("for", TokenKind::For);
    map.insert("fun", TokenKind::Fun);
    map.insert("if", TokenKind::If);
    map.insert("nil", TokenKind::Nil);
    map.insert("or", TokenKind::Or);
    map.insert("print", TokenKind::Print);
    map.insert("return", TokenKind::Return);
    map.insert("super", TokenKind::Super);
    map.insert("this", TokenKind::This);
    map.insert("true", TokenKind::True);
    map.insert("var", TokenKind::Var);
    map.insert("while", TokenKind::While);
    map
});

/// Looks up a reserved word, returning its kind if `text` is one.
///
/// Matching is exact and case-sensitive: `"class"` is a keyword, `"Class"`
/// and `"classify"` are not.
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}
