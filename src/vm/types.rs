//! Type definitions for the calculator
//!
//! This module contains the closed set of operations the machine understands and
//! the outcome type reported back to shells.
//!
//! The primary types defined here include:
//! - `Op`: every operation a token can resolve to
//! - `BinaryOp`, `UnaryOp`, `Constant`: the arithmetic vocabulary
//! - `Outcome`: what a successful evaluation reports

use crate::format::format_value;
use serde::{Deserialize, Serialize};
use std::f64::consts;
use std::fmt;

/// Operations that pop two values and push one
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// a * b
    Mul,
    /// a / b, fails when b is zero
    Div,
    /// a raised to the power b
    Pow,
}

impl BinaryOp {
    /// The token that names this operation
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "pow",
        }
    }
}

/// Operations that pop one value and push one
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Neg,
    Square,
    Sqrt,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Reciprocal
    Inv,
}

impl UnaryOp {
    /// The token that names this operation
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Neg => "neg",
            UnaryOp::Square => "sq",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Log => "log",
            UnaryOp::Ln => "ln",
            UnaryOp::Inv => "inv",
        }
    }
}

/// Named mathematical constants
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
        }
    }

    /// Symbol used in confirmation messages
    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
        }
    }
}

/// Operation types for the calculator
///
/// A token resolves to exactly one of these; the machine executes them against
/// its operand stack.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum Op {
    /// Push a numeric literal onto the stack
    Push(#[serde(with = "crate::format::lossless")] f64),

    /// Push a named constant
    Constant(Constant),

    /// Pop one value, apply a function, push the result
    Unary(UnaryOp),

    /// Pop two values, combine them, push the result
    Binary(BinaryOp),

    /// Duplicate the top value on the stack
    Dup,

    /// Swap the top two values on the stack
    Swap,

    /// Pop and discard the top value
    Drop,

    /// Remove every value from the stack
    Clear,

    /// Show the command reference
    Help,

    /// Ask the shell to stop; the machine itself does nothing
    Quit,

    /// No operation, does nothing
    Nop,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Push(value) => write!(f, "push {}", format_value(*value)),
            Op::Constant(c) => write!(f, "{}", c.symbol()),
            Op::Unary(op) => write!(f, "{}", op.symbol()),
            Op::Binary(op) => write!(f, "{}", op.symbol()),
            Op::Dup => write!(f, "dup"),
            Op::Swap => write!(f, "swap"),
            Op::Drop => write!(f, "drop"),
            Op::Clear => write!(f, "clear"),
            Op::Help => write!(f, "help"),
            Op::Quit => write!(f, "quit"),
            Op::Nop => write!(f, "nop"),
        }
    }
}

/// What a successful evaluation reports to the caller
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Outcome {
    /// A numeric literal was pushed
    Pushed(#[serde(with = "crate::format::lossless")] f64),

    /// A stack operation, constant or help lookup completed
    Message(String),

    /// An arithmetic operation produced this value, now on top of the stack
    Result(#[serde(with = "crate::format::lossless")] f64),

    /// Nothing to do (empty token)
    Idle,

    /// The caller asked to quit
    Quit,
}

impl Outcome {
    /// The numeric value carried by this outcome, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Pushed(v) | Outcome::Result(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pushed(v) => write!(f, "Pushed {}", format_value(*v)),
            Outcome::Message(text) => write!(f, "{}", text),
            Outcome::Result(v) => write!(f, "Result: {}", format_value(*v)),
            Outcome::Idle => Ok(()),
            Outcome::Quit => write!(f, "Goodbye!"),
        }
    }
}
