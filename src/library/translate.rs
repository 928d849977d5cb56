use super::diagnostics::Diagnostic;
use super::loops::LoopStack;
use super::tac::{BinaryOp, Instruction, Value};
use super::tok_stream::TokenStream;
use super::tokens::{LocatedToken, Token};
use super::unique_names::NameGen;

/// Syntax-directed translator: a recursive-descent parse over the token
/// stream whose actions append three-address instructions as each
/// construct completes. One pass, no AST, no back-patching — a loop's
/// branch targets are all allocated before its body is emitted.
pub struct Translator {
    tokens: TokenStream,
    names: NameGen,
    loops: LoopStack,
    instructions: Vec<Instruction>,
    diagnostics: Vec<Diagnostic>,
}

impl Translator {
    pub fn new(tokens: Vec<LocatedToken>) -> Self {
        Translator {
            tokens: TokenStream::new(tokens),
            names: NameGen::new(),
            loops: LoopStack::new(),
            instructions: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn run(mut self) -> (Vec<Instruction>, Vec<Diagnostic>) {
        while !self.tokens.is_empty() {
            if let Err(diagnostic) = self.statement() {
                self.diagnostics.push(diagnostic);
                self.synchronize();
            }
        }
        debug_assert_eq!(self.loops.depth(), 0);
        (self.instructions, self.diagnostics)
    }

    fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    fn emit_binary(&mut self, op: BinaryOp, lhs: Value, rhs: Value) -> Value {
        let dst = self.names.temporary();
        self.emit(Instruction::Binary {
            dst: dst.clone(),
            op,
            lhs,
            rhs,
        });
        Value::Temporary(dst)
    }

    fn error_here(&self, message: impl Into<String>) -> Diagnostic {
        match self.tokens.peek_located() {
            Some(t) => Diagnostic::new(t.line, t.token.to_string(), message),
            None => Diagnostic::new(self.tokens.last_line(), "end of input", message),
        }
    }

    /// Consume the next token if it matches; report without consuming
    /// otherwise, so recovery starts at the offending token.
    fn expect(&mut self, expected: Token) -> Result<(), Diagnostic> {
        match self.tokens.peek() {
            Some(token) if *token == expected => {
                self.tokens.take_token();
                Ok(())
            }
            _ => Err(self.error_here(format!("expected '{}'", expected))),
        }
    }

    /// Discard tokens up to and including the next `;`. A `}` would close
    /// an enclosing loop body, so inside one the discard stops short of it;
    /// at the top level a stray `}` is just more junk to skip.
    fn synchronize(&mut self) {
        while let Some(token) = self.tokens.peek() {
            match token {
                Token::Semicolon => {
                    self.tokens.take_token();
                    return;
                }
                Token::CloseBrace if self.loops.depth() > 0 => return,
                _ => {
                    self.tokens.take_token();
                }
            }
        }
    }

    fn statement(&mut self) -> Result<(), Diagnostic> {
        match self.tokens.peek() {
            Some(Token::KWWhile) => self.while_loop(),
            Some(Token::Identifier(_)) if self.tokens.peek_nth(1) == Some(&Token::EqualSign) => {
                self.assignment()
            }
            _ => {
                // standalone expression: observe the value and discard it
                let value = self.expr()?;
                self.expect(Token::Semicolon)?;
                self.emit(Instruction::ExprStmt(value));
                Ok(())
            }
        }
    }

    fn assignment(&mut self) -> Result<(), Diagnostic> {
        let dst = match self.tokens.take_token() {
            Some(LocatedToken {
                token: Token::Identifier(name),
                ..
            }) => name,
            _ => unreachable!("assignment caller checked the lookahead"),
        };
        self.tokens.take_token(); // '='
        let src = self.expr()?;
        self.expect(Token::Semicolon)?;
        self.emit(Instruction::Copy { dst, src });
        Ok(())
    }

    fn while_loop(&mut self) -> Result<(), Diagnostic> {
        self.tokens.take_token(); // 'while'

        // loop-entry marker: the begin label marks where the condition is
        // re-evaluated on every iteration
        let begin = self.names.label();
        self.emit(Instruction::Label(begin.clone()));
        self.loops.enter(begin);

        let result = self.while_rest();
        if result.is_err() {
            // keep the stack balanced when recovery skips the rest of
            // this loop
            self.loops.abandon();
        }
        result
    }

    fn while_rest(&mut self) -> Result<(), Diagnostic> {
        self.expect(Token::OpenParen)?;
        let cond = self.condition()?;
        self.expect(Token::CloseParen)?;

        // post-condition marker: both branch targets exist before any body
        // instruction, so the branches need no later patching
        let body_label = self.names.label();
        let end_label = self.names.label();
        self.emit(Instruction::JumpIfTrue {
            cond,
            target: body_label.clone(),
        });
        self.emit(Instruction::Jump(end_label.clone()));
        self.emit(Instruction::Label(body_label));
        self.loops.complete(end_label);

        self.expect(Token::OpenBrace)?;
        while !matches!(self.tokens.peek(), Some(Token::CloseBrace) | None) {
            if let Err(diagnostic) = self.statement() {
                self.diagnostics.push(diagnostic);
                self.synchronize();
            }
        }
        self.expect(Token::CloseBrace)?;

        // post-body marker
        let (begin, end) = self.loops.exit();
        self.emit(Instruction::Jump(begin));
        self.emit(Instruction::Label(end));
        Ok(())
    }

    /// Exactly one comparison of two expressions.
    fn condition(&mut self) -> Result<Value, Diagnostic> {
        let lhs = self.expr()?;
        let op = match self.tokens.peek() {
            Some(Token::RelOp(op)) => BinaryOp::from(*op),
            _ => return Err(self.error_here("expected relational operator")),
        };
        self.tokens.take_token();
        let rhs = self.expr()?;
        Ok(self.emit_binary(op, lhs, rhs))
    }

    fn expr(&mut self) -> Result<Value, Diagnostic> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.tokens.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Hyphen) => BinaryOp::Subtract,
                _ => break,
            };
            self.tokens.take_token();
            let rhs = self.term()?;
            lhs = self.emit_binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Value, Diagnostic> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.tokens.peek() {
                Some(Token::Star) => BinaryOp::Multiply,
                Some(Token::Slash) => BinaryOp::Divide,
                _ => break,
            };
            self.tokens.take_token();
            let rhs = self.factor()?;
            lhs = self.emit_binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Value, Diagnostic> {
        let value = match self.tokens.peek() {
            Some(Token::OpenParen) => {
                self.tokens.take_token();
                let inner = self.expr()?;
                self.expect(Token::CloseParen)?;
                inner
            }
            Some(Token::Identifier(name)) => {
                let value = Value::Identifier(name.clone());
                self.tokens.take_token();
                value
            }
            Some(Token::Number(text)) => {
                let value = Value::Literal(text.clone());
                self.tokens.take_token();
                value
            }
            _ => return Err(self.error_here("expected expression")),
        };
        Ok(value)
    }
}
