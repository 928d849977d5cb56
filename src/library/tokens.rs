use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    DoubleEqual,
    NotEqual,
}

impl Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RelOp::LessThan => "<",
            RelOp::GreaterThan => ">",
            RelOp::LessOrEqual => "<=",
            RelOp::GreaterOrEqual => ">=",
            RelOp::DoubleEqual => "==",
            RelOp::NotEqual => "!=",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Tokens with contents
    Identifier(String),
    Number(String),
    RelOp(RelOp),

    // Keywords
    KWWhile,

    // Punctuation
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Plus,
    Hyphen,
    Star,
    Slash,
    EqualSign,
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Number(s) => write!(f, "{}", s),
            Token::RelOp(op) => write!(f, "{}", op),
            Token::KWWhile => write!(f, "while"),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::OpenBrace => write!(f, "{{"),
            Token::CloseBrace => write!(f, "}}"),
            Token::Semicolon => write!(f, ";"),
            Token::Plus => write!(f, "+"),
            Token::Hyphen => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::EqualSign => write!(f, "="),
        }
    }
}

/// A token together with the 1-based source line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedToken {
    pub token: Token,
    pub line: usize,
}

impl LocatedToken {
    pub fn new(token: Token, line: usize) -> Self {
        LocatedToken { token, line }
    }
}
