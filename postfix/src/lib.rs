//! Evaluate postfix (RPN) expressions like `abc*+d-` where every character
//! is either a single letter variable or one of `+ - * /`.
//!
//! ```
//! assert_eq!(postfix::evaluate("abc*+d-"), Ok(15.0));
//! ```

pub use context::{SymbolTable, TableErr, REFERENCE_VARS};
pub use rpneval::{evaluate, EvalErr, Malformed};
pub use rpnprint::Expr;
pub use token::{Operator, Token};

pub mod context;
pub mod repl;
pub mod token;

mod rpneval;

mod rpnprint;
#[cfg(test)]
mod rpnprint_test;
