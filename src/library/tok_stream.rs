use std::vec::IntoIter;

use super::tokens::{LocatedToken, Token};

#[derive(Debug)]
pub struct TokenStream {
    tokens: IntoIter<LocatedToken>,
    // Line of the most recently taken token, so end-of-input errors can
    // still point somewhere sensible.
    last_line: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<LocatedToken>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            last_line: 1,
        }
    }

    pub fn take_token(&mut self) -> Option<LocatedToken> {
        let next = self.tokens.next();
        if let Some(t) = &next {
            self.last_line = t.line;
        }
        next
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.as_slice().first().map(|t| &t.token)
    }

    pub fn peek_located(&self) -> Option<&LocatedToken> {
        self.tokens.as_slice().first()
    }

    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.as_slice().get(n).map(|t| &t.token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.as_slice().is_empty()
    }

    pub fn last_line(&self) -> usize {
        self.last_line
    }
}
