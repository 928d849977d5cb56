use std::fmt::{self, Display};

use super::tokens::RelOp;

/// The synthesized attribute of every expression-shaped production: the
/// name of the place holding its value. The tag records where the name
/// came from; rendering is identical for all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Identifier(String),
    Literal(String),
    Temporary(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Identifier(s) | Value::Literal(s) | Value::Temporary(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

impl From<RelOp> for BinaryOp {
    fn from(op: RelOp) -> Self {
        match op {
            RelOp::LessThan => BinaryOp::LessThan,
            RelOp::GreaterThan => BinaryOp::GreaterThan,
            RelOp::LessOrEqual => BinaryOp::LessOrEqual,
            RelOp::GreaterOrEqual => BinaryOp::GreaterOrEqual,
            RelOp::DoubleEqual => BinaryOp::Equal,
            RelOp::NotEqual => BinaryOp::NotEqual,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessOrEqual => "<=",
            BinaryOp::GreaterOrEqual => ">=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
        };
        write!(f, "{}", s)
    }
}

/// One line of three-address code. Instructions are appended in program
/// order and never revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Copy {
        dst: String,
        src: Value,
    },
    Binary {
        dst: String,
        op: BinaryOp,
        lhs: Value,
        rhs: Value,
    },
    /// A standalone expression statement: the value is observed and
    /// discarded. Rendered with the historical `print` spelling.
    ExprStmt(Value),
    JumpIfTrue {
        cond: Value,
        target: String,
    },
    Jump(String),
    Label(String),
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Copy { dst, src } => write!(f, "{} = {}", dst, src),
            Instruction::Binary { dst, op, lhs, rhs } => {
                write!(f, "{} = {} {} {}", dst, lhs, op, rhs)
            }
            Instruction::ExprStmt(value) => write!(f, "print {}", value),
            Instruction::JumpIfTrue { cond, target } => write!(f, "if ({}) goto {}", cond, target),
            Instruction::Jump(label) => write!(f, "goto {}", label),
            Instruction::Label(label) => write!(f, "{}:", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_renders_as_assignment() {
        let instr = Instruction::Copy {
            dst: "x".to_string(),
            src: Value::Temporary("t0".to_string()),
        };
        assert_eq!(instr.to_string(), "x = t0");
    }

    #[test]
    fn binary_renders_with_operator_between_operands() {
        let instr = Instruction::Binary {
            dst: "t1".to_string(),
            op: BinaryOp::Multiply,
            lhs: Value::Identifier("b".to_string()),
            rhs: Value::Literal("2".to_string()),
        };
        assert_eq!(instr.to_string(), "t1 = b * 2");
    }

    #[test]
    fn relational_binary_keeps_source_operator_text() {
        let instr = Instruction::Binary {
            dst: "t0".to_string(),
            op: RelOp::LessOrEqual.into(),
            lhs: Value::Identifier("a".to_string()),
            rhs: Value::Identifier("b".to_string()),
        };
        assert_eq!(instr.to_string(), "t0 = a <= b");
    }

    #[test]
    fn control_flow_forms() {
        assert_eq!(
            Instruction::JumpIfTrue {
                cond: Value::Temporary("t0".to_string()),
                target: "L1".to_string(),
            }
            .to_string(),
            "if (t0) goto L1"
        );
        assert_eq!(Instruction::Jump("L0".to_string()).to_string(), "goto L0");
        assert_eq!(Instruction::Label("L2".to_string()).to_string(), "L2:");
    }

    #[test]
    fn expression_statement_form() {
        let instr = Instruction::ExprStmt(Value::Identifier("a".to_string()));
        assert_eq!(instr.to_string(), "print a");
    }
}
