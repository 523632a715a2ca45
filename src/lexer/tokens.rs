use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Keywords keyed by their upper-case spelling. Lookups upper-case the
    /// candidate first, so `if`, `If` and `IF` all resolve to the same kind.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ELSE", TokenKind::Else);
        map.insert("READ", TokenKind::Read);
        map.insert("WRITE", TokenKind::Write);
        map.insert("REPEAT", TokenKind::Repeat);
        map.insert("UNTIL", TokenKind::Until);
        map.insert("END", TokenKind::End);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Mul);
        map.insert('/', TokenKind::Div);
        map.insert('=', TokenKind::Eq);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('<', TokenKind::Lt);
        map.insert(';', TokenKind::Semicolon);
        map.insert(',', TokenKind::Comma);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,
    Identifier,
    Comment,

    Assign, // :=

    Plus,      // +
    Minus,     // -
    Mul,       // *
    Div,       // /
    Eq,        // =
    LParen,    // (
    RParen,    // )
    Lt,        // <
    Semicolon, // ;
    Comma,     // ,

    // Reserved
    If,
    Then,
    Else,
    Read,
    Write,
    Repeat,
    Until,
    End,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::Read
                | TokenKind::Write
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::End
        )
    }

    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Eq
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Lt
                | TokenKind::Semicolon
                | TokenKind::Comma
        )
    }

    /// Category name shown to users when a token is rendered.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "literal_string",
            TokenKind::Identifier => "identifier",
            TokenKind::Comment => "comment",
            TokenKind::Assign => "assign",
            kind if kind.is_keyword() => "keyword",
            _ => "special_symbol",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Token {
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: <type: {} /> ", self.line, self.kind.display_name())?;

        if self.kind == TokenKind::Number {
            write!(f, "<value: {} />", self.value)
        } else {
            write!(f, "<value: \"{}\" />", self.value)
        }
    }
}
