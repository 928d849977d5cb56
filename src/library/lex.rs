use super::diagnostics::Diagnostic;
use super::tokens::{LocatedToken, RelOp, Token};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct TokenDef {
    re: Regex,
    converter: fn(&str) -> Token,
}

#[derive(Clone, Debug)]
pub struct MatchDef {
    matched_substring: String,
    matching_token: TokenDef,
}

pub struct Lexer {
    token_defs: Vec<TokenDef>,
}

impl Lexer {
    pub fn new() -> Self {
        // Two-character operators must come before their one-character
        // prefixes so the first match is the longest one.
        let token_defs = vec![
            TokenDef {
                re: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*\b").unwrap(),
                converter: Lexer::convert_identifier,
            },
            TokenDef {
                re: Regex::new(r"^[0-9]+\b").unwrap(),
                converter: |s| Token::Number(s.to_string()),
            },
            TokenDef {
                re: Regex::new("^<=").unwrap(),
                converter: |_s| Token::RelOp(RelOp::LessOrEqual),
            },
            TokenDef {
                re: Regex::new("^>=").unwrap(),
                converter: |_s| Token::RelOp(RelOp::GreaterOrEqual),
            },
            TokenDef {
                re: Regex::new("^==").unwrap(),
                converter: |_s| Token::RelOp(RelOp::DoubleEqual),
            },
            TokenDef {
                re: Regex::new("^!=").unwrap(),
                converter: |_s| Token::RelOp(RelOp::NotEqual),
            },
            TokenDef {
                re: Regex::new("^<").unwrap(),
                converter: |_s| Token::RelOp(RelOp::LessThan),
            },
            TokenDef {
                re: Regex::new("^>").unwrap(),
                converter: |_s| Token::RelOp(RelOp::GreaterThan),
            },
            TokenDef {
                re: Regex::new(r"^\(").unwrap(),
                converter: |_s| Token::OpenParen,
            },
            TokenDef {
                re: Regex::new(r"^\)").unwrap(),
                converter: |_s| Token::CloseParen,
            },
            TokenDef {
                re: Regex::new(r"^\{").unwrap(),
                converter: |_s| Token::OpenBrace,
            },
            TokenDef {
                re: Regex::new(r"^\}").unwrap(),
                converter: |_s| Token::CloseBrace,
            },
            TokenDef {
                re: Regex::new("^;").unwrap(),
                converter: |_s| Token::Semicolon,
            },
            TokenDef {
                re: Regex::new(r"^\+").unwrap(),
                converter: |_s| Token::Plus,
            },
            TokenDef {
                re: Regex::new("^-").unwrap(),
                converter: |_s| Token::Hyphen,
            },
            TokenDef {
                re: Regex::new(r"^\*").unwrap(),
                converter: |_s| Token::Star,
            },
            TokenDef {
                re: Regex::new("^/").unwrap(),
                converter: |_s| Token::Slash,
            },
            TokenDef {
                re: Regex::new("^=").unwrap(),
                converter: |_s| Token::EqualSign,
            },
        ];
        Lexer { token_defs }
    }

    /// Scan the whole input. Unrecognized characters are reported and
    /// skipped rather than aborting the scan, so one bad character does
    /// not cost the rest of the program its token stream.
    pub fn lex(&self, input: &str) -> (Vec<LocatedToken>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();
        let mut rest = input;
        let mut line = 1;

        while !rest.is_empty() {
            if let Some(ws) = leading_ws(rest) {
                line += ws.matches('\n').count();
                rest = &rest[ws.len()..];
            }
            if rest.is_empty() {
                break;
            }
            match self.find_match(rest) {
                Some(match_def) => {
                    let token = (match_def.matching_token.converter)(&match_def.matched_substring);
                    tokens.push(LocatedToken::new(token, line));
                    rest = &rest[match_def.matched_substring.len()..];
                }
                None => {
                    let bad = rest.chars().next().unwrap();
                    diagnostics.push(Diagnostic::new(
                        line,
                        bad.to_string(),
                        "unrecognized character",
                    ));
                    rest = &rest[bad.len_utf8()..];
                }
            }
        }

        (tokens, diagnostics)
    }

    fn find_match(&self, input: &str) -> Option<MatchDef> {
        for token_def in &self.token_defs {
            if let Some(m) = token_def.re.find(input) {
                return Some(MatchDef {
                    matched_substring: m.as_str().to_string(),
                    matching_token: token_def.clone(),
                });
            }
        }
        None
    }

    fn convert_identifier(s: &str) -> Token {
        match s {
            "while" => Token::KWWhile,
            _ => Token::Identifier(s.to_string()),
        }
    }
}

fn leading_ws(s: &str) -> Option<&str> {
    let ws_matcher = Regex::new(r"^\s+").unwrap();
    ws_matcher.find(s).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        let (tokens, diagnostics) = Lexer::new().lex(input);
        assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
        tokens.into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn leading_whitespace() {
        assert_eq!(kinds("  while"), vec![Token::KWWhile]);
    }

    #[test]
    fn trailing_whitespace() {
        assert_eq!(
            kinds("0;\t\n"),
            vec![Token::Number("0".to_string()), Token::Semicolon]
        );
    }

    #[test]
    fn a_full_statement() {
        assert_eq!(
            kinds("x = a + 10;"),
            vec![
                Token::Identifier("x".to_string()),
                Token::EqualSign,
                Token::Identifier("a".to_string()),
                Token::Plus,
                Token::Number("10".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn two_char_relops_win_over_one_char() {
        assert_eq!(
            kinds("< <= > >= == !="),
            vec![
                Token::RelOp(RelOp::LessThan),
                Token::RelOp(RelOp::LessOrEqual),
                Token::RelOp(RelOp::GreaterThan),
                Token::RelOp(RelOp::GreaterOrEqual),
                Token::RelOp(RelOp::DoubleEqual),
                Token::RelOp(RelOp::NotEqual),
            ]
        );
    }

    #[test]
    fn while_keyword_vs_identifier() {
        assert_eq!(
            kinds("while whilex"),
            vec![Token::KWWhile, Token::Identifier("whilex".to_string())]
        );
    }

    #[test]
    fn line_numbers_follow_newlines() {
        let (tokens, _) = Lexer::new().lex("a\nb\n\nc");
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn unknown_character_is_reported_and_skipped() {
        let (tokens, diagnostics) = Lexer::new().lex("a @ b");
        assert_eq!(
            tokens.into_iter().map(|t| t.token).collect::<Vec<_>>(),
            vec![
                Token::Identifier("a".to_string()),
                Token::Identifier("b".to_string()),
            ]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].lexeme, "@");
        assert_eq!(diagnostics[0].line, 1);
    }
}
