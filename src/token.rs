//! Lexical token kinds and the keyword lookup table.
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// The kind of a [`Token`]. Carries no data of its own — the matching
/// source text lives in `Token::literal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    Ident,
    Int,
    String,

    Assign,
    Plus,
    Minus,
    Bang,
    Asterix,
    Slash,

    Lt,
    Gt,
    Equals,
    NotEquals,

    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    Function,
    Binding,
    True,
    False,
    If,
    Else,
    Return,
}

/// A single lexical token: its kind plus the exact source substring it
/// matched (empty for EOF).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

impl TokenKind {
    /// The bit-exact name used in parser diagnostics — the token's own
    /// literal for single-meaning punctuation, the type name otherwise.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "is",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterix => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Binding => "BINDING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("fn", TokenKind::Function);
    m.insert("jeff's", TokenKind::Binding);
    m.insert("right", TokenKind::True);
    m.insert("huang", TokenKind::False);
    m.insert("if", TokenKind::If);
    m.insert("else", TokenKind::Else);
    m.insert("return", TokenKind::Return);
    m.insert("is", TokenKind::Assign);
    m
});

/// Looks up `identifier` in the keyword table, falling back to `Ident`.
/// Case-sensitive, matching the lexer's case-sensitive keyword dispatch.
pub fn lookup_identifier(identifier: &str) -> TokenKind {
    KEYWORDS
        .get(identifier)
        .copied()
        .unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(lookup_identifier("if"), TokenKind::If);
        assert_eq!(lookup_identifier("If"), TokenKind::Ident);
    }

    #[test]
    fn jeffs_binding_keyword() {
        assert_eq!(lookup_identifier("jeff's"), TokenKind::Binding);
    }

    #[test]
    fn unknown_identifier_falls_back_to_ident() {
        assert_eq!(lookup_identifier("foobar"), TokenKind::Ident);
    }
}
