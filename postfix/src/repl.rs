//! Line oriented front end: sentinel handling and the prompt/continue loop.
//!
//! Input lines look like `abc*+d-$`. Errors on one line are reported and the
//! user is prompted again, a bad expression never ends the session.

use std::io::{self, Write};

use thiserror::Error;

use crate::context::SymbolTable;
use crate::rpneval::EvalErr;

pub const SENTINEL: char = '$';
pub const CONTINUE_PROMPT: &str = "CONTINUE(y/n)? ";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReplErr {
    #[error("invalid input: expression must end with '{0}'")]
    MissingSentinel(char),
    #[error("invalid input: expected at least one token before '{0}'")]
    TooShort(char),
    #[error("sentinel '{sentinel}' clashes with {alphabet}")]
    SentinelClash { sentinel: char, alphabet: String },
    #[error(transparent)]
    Eval(#[from] EvalErr),
}

pub fn expr_prompt(sentinel: char) -> String {
    format!("Enter a postfix expression with {} at the end: ", sentinel)
}

/// The sentinel can't be a character expressions are made of.
pub fn check_sentinel(cx: &SymbolTable, sentinel: char) -> Result<(), ReplErr> {
    match cx.token(sentinel) {
        Some(_) => Err(ReplErr::SentinelClash {
            sentinel,
            alphabet: cx.alphabet(),
        }),
        None => Ok(()),
    }
}

/// Drop the trailing sentinel, `"ab+$"` becomes `"ab+"`.
pub fn strip_sentinel(input: &str, sentinel: char) -> Result<&str, ReplErr> {
    let input = input.trim_end_matches(&['\r', '\n'][..]);
    let expr = input
        .strip_suffix(sentinel)
        .ok_or(ReplErr::MissingSentinel(sentinel))?;
    if expr.is_empty() {
        return Err(ReplErr::TooShort(sentinel));
    }
    Ok(expr)
}

pub fn evalline(cx: &SymbolTable, input: &str, sentinel: char) -> Result<f64, ReplErr> {
    let expr = strip_sentinel(input, sentinel)?;
    Ok(cx.eval(expr)?)
}

/// Only an explicit `y` keeps the session going.
pub fn wants_continue(answer: &str) -> bool {
    answer.trim() == "y"
}

// answers to the continue prompt stay out of line history
pub fn keep_in_history(prompt: &str) -> bool {
    prompt != CONTINUE_PROMPT
}

/// Drive the prompt loop until the user declines to continue or `readline`
/// runs out of input. `readline` gets the prompt to display and returns
/// `None` on EOF/interrupt.
pub fn run<R, W>(cx: &SymbolTable, sentinel: char, mut readline: R, out: &mut W) -> io::Result<()>
where
    R: FnMut(&str) -> Option<String>,
    W: Write,
{
    let prompt = expr_prompt(sentinel);
    while let Some(input) = readline(&prompt) {
        match evalline(cx, &input, sentinel) {
            Ok(value) => writeln!(out, "Value = {}", value)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        match readline(CONTINUE_PROMPT) {
            Some(answer) if wants_continue(&answer) => (),
            _ => break,
        }
    }
    out.flush()
}
