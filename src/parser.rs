//! Token classification
//!
//! Turns raw caller input into [`Op`] values. A token is either a numeric
//! literal or a case-insensitive command name; anything else is rejected with
//! [`CalcError::UnknownCommand`] carrying the token as it was typed.

use crate::vm::{BinaryOp, CalcError, Constant, Op, UnaryOp};
use once_cell::sync::Lazy;
use regex::Regex;

/// Locale-free decimal literal: optional sign, digits with an optional decimal
/// point, optional exponent.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("number pattern is valid")
});

/// Command reference shown by `help`
pub const HELP_TEXT: &str = "\
Enter numbers to push them, or a command to operate on the stack.

Arithmetic (pop two, push one):
  +  -  *  /   add, subtract, multiply, divide
  pow          second-from-top raised to the top

Functions (pop one, push one):
  sin cos tan  trigonometry in radians
  neg          change sign
  sq  sqrt     square, square root
  log ln       base-10 and natural logarithm
  inv          reciprocal

Constants:
  pi e         push the constant

Stack:
  dup          duplicate the top value
  swap         exchange the top two values
  drop         discard the top value
  clear clr    empty the stack

Other:
  help         show this text
  q quit       leave the calculator";

/// Parse a numeric literal, if the token is one
///
/// Only finite values count as numbers; `inf`, `nan` and literals that overflow
/// fall through to command lookup.
pub fn parse_number(token: &str) -> Option<f64> {
    if !NUMBER.is_match(token) {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Look up a command name, ignoring case
pub fn parse_command(token: &str) -> Option<Op> {
    let op = match token.to_lowercase().as_str() {
        "+" => Op::Binary(BinaryOp::Add),
        "-" => Op::Binary(BinaryOp::Sub),
        "*" => Op::Binary(BinaryOp::Mul),
        "/" => Op::Binary(BinaryOp::Div),
        "pow" => Op::Binary(BinaryOp::Pow),
        "sin" => Op::Unary(UnaryOp::Sin),
        "cos" => Op::Unary(UnaryOp::Cos),
        "tan" => Op::Unary(UnaryOp::Tan),
        "neg" => Op::Unary(UnaryOp::Neg),
        "sq" => Op::Unary(UnaryOp::Square),
        "sqrt" => Op::Unary(UnaryOp::Sqrt),
        "log" => Op::Unary(UnaryOp::Log),
        "ln" => Op::Unary(UnaryOp::Ln),
        "inv" => Op::Unary(UnaryOp::Inv),
        "pi" => Op::Constant(Constant::Pi),
        "e" => Op::Constant(Constant::E),
        "dup" => Op::Dup,
        "swap" => Op::Swap,
        "drop" => Op::Drop,
        "clear" | "clr" => Op::Clear,
        "help" => Op::Help,
        "q" | "quit" => Op::Quit,
        _ => return None,
    };
    Some(op)
}

/// Classify a single token
pub fn parse_token(token: &str) -> Result<Op, CalcError> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(Op::Nop);
    }

    if let Some(value) = parse_number(token) {
        return Ok(Op::Push(value));
    }

    parse_command(token).ok_or_else(|| CalcError::UnknownCommand(token.to_string()))
}

/// Split a line of input into tokens
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}
