use thiserror::Error;

use crate::context::SymbolTable;
use crate::token::{Operator, Token};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalErr {
    #[error("empty expression")]
    EmptyExpression,
    #[error("invalid token '{token}' at position {pos}, valid expression inputs: {alphabet}")]
    InvalidToken {
        token: char,
        pos: usize,
        alphabet: String,
    },
    #[error("invalid expression: {0}")]
    Malformed(#[from] Malformed),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Malformed {
    #[error("operator '{op}' at position {pos} needs two operands, found {found}")]
    MissingOperands { op: Operator, pos: usize, found: usize },
    #[error("{0} values left over, expected exactly one")]
    LeftoverOperands(usize),
}

impl SymbolTable {
    /// Evaluate a postfix expression such as `"abc*+d-"`.
    ///
    /// The sentinel must already be stripped. Each character is validated as
    /// it's reached, so the first problem in scan order is the one reported.
    pub fn eval(&self, expr: &str) -> Result<f64, EvalErr> {
        self.reduce(expr, |_, value| value, |op, l, r| op.apply(l, r))
    }

    // Single left to right pass over 'expr' with an operand stack. Variables
    // become leaves, operators combine the two topmost entries. Both eval and
    // parse are this same walk with different leaf/node builders.
    pub(crate) fn reduce<T, L, N>(&self, expr: &str, leaf: L, node: N) -> Result<T, EvalErr>
    where
        L: Fn(char, f64) -> T,
        N: Fn(Operator, T, T) -> T,
    {
        if expr.is_empty() {
            return Err(EvalErr::EmptyExpression);
        }
        let mut operands = Vec::new();

        for (pos, c) in expr.chars().enumerate() {
            match self.token(c) {
                Some(Token::Var(name, value)) => operands.push(leaf(name, value)),
                Some(Token::Op(op)) => {
                    // top of the stack was pushed last, it's the right hand side
                    let found = operands.len();
                    match (operands.pop(), operands.pop()) {
                        (Some(r), Some(l)) => operands.push(node(op, l, r)),
                        _ => return Err(Malformed::MissingOperands { op, pos, found }.into()),
                    }
                }
                None => {
                    return Err(EvalErr::InvalidToken {
                        token: c,
                        pos,
                        alphabet: self.alphabet(),
                    })
                }
            }
        }

        match (operands.pop(), operands.len()) {
            (Some(result), 0) => Ok(result),
            (Some(_), rest) => Err(Malformed::LeftoverOperands(rest + 1).into()),
            (None, _) => Err(Malformed::LeftoverOperands(0).into()),
        }
    }
}

/// Evaluate `expr` against the reference bindings (a=5, b=7, c=2, d=4).
pub fn evaluate(expr: &str) -> Result<f64, EvalErr> {
    SymbolTable::reference().eval(expr)
}
