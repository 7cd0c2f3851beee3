use crate::context::SymbolTable;
use crate::rpneval::EvalErr;
use crate::token::{Assoc, Operator};
use std::fmt;
use std::mem;

/// Tree form of a postfix expression, mostly useful to show it as infix.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(char),
    BinOp(Operator, Box<Expr>, Box<Expr>),
}

impl SymbolTable {
    /// Build the tree for `expr`, rejecting exactly what `eval` rejects.
    pub fn parse(&self, expr: &str) -> Result<Expr, EvalErr> {
        self.reduce(
            expr,
            |name, _| Expr::Var(name),
            |op, l, r| Expr::BinOp(op, Box::new(l), Box::new(r)),
        )
    }

    /// Tree and value of `expr` out of a single pass.
    pub fn parse_eval(&self, expr: &str) -> Result<(Expr, f64), EvalErr> {
        self.reduce(
            expr,
            |name, value| (Expr::Var(name), value),
            |op, (l, lv), (r, rv)| (Expr::BinOp(op, Box::new(l), Box::new(r)), op.apply(lv, rv)),
        )
    }
}

// leaves bind tighter than any operator
const LEAF: usize = 99;

impl Expr {
    fn precedence(&self) -> usize {
        match self {
            Expr::Var(_) => LEAF,
            Expr::BinOp(op, _, _) => op.precedence().0,
        }
    }
}

// Children are unlinked into a worklist so a long chain of boxes doesn't
// recurse once per level when dropped.
impl Drop for Expr {
    fn drop(&mut self) {
        fn unlink(expr: &mut Expr, pending: &mut Vec<Expr>) {
            if let Expr::BinOp(_, lhs, rhs) = expr {
                pending.push(mem::replace(lhs.as_mut(), Expr::Var('_')));
                pending.push(mem::replace(rhs.as_mut(), Expr::Var('_')));
            }
        }
        let mut pending = Vec::new();
        unlink(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            unlink(&mut expr, &mut pending);
        }
    }
}

enum Emit<'a> {
    Expr(&'a Expr, bool),
    Op(Operator),
    Close,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // explicit stack, output is written left to right as frames pop
        let mut frames = vec![Emit::Expr(self, false)];
        while let Some(frame) = frames.pop() {
            match frame {
                Emit::Op(op) => write!(f, " {} ", op)?,
                Emit::Close => write!(f, ")")?,
                Emit::Expr(Expr::Var(name), _) => write!(f, "{}", name)?,
                Emit::Expr(Expr::BinOp(op, lhs, rhs), parens) => {
                    let (prec, assoc) = op.precedence();
                    let (lp, rp) = (lhs.precedence(), rhs.precedence());
                    let lh = prec > lp || (prec == lp && assoc != Assoc::Left);
                    // 'a - (b - c)' needs the parens, '(a - b) - c' doesn't
                    let rh = prec > rp || (prec == rp && assoc != Assoc::Right);
                    if parens {
                        write!(f, "(")?;
                        frames.push(Emit::Close);
                    }
                    frames.push(Emit::Expr(&**rhs, rh));
                    frames.push(Emit::Op(*op));
                    frames.push(Emit::Expr(&**lhs, lh));
                }
            }
        }
        Ok(())
    }
}
