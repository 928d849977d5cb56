use thiserror::Error;

/// One reported problem with the input program. Diagnostics go to the
/// error channel; they never appear in the TAC output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: at '{lexeme}': {message}")]
pub struct Diagnostic {
    pub line: usize,
    pub lexeme: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, lexeme: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            lexeme: lexeme.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_line_lexeme_and_message() {
        let d = Diagnostic::new(3, ";", "expected expression");
        assert_eq!(d.to_string(), "line 3: at ';': expected expression");
    }
}
