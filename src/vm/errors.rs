//! Error types for calculator operations
//!
//! This module defines every failure the stack machine can report. None of them
//! are fatal: the machine stays usable and its stack is left exactly as it was
//! before the failing operation.

use thiserror::Error;

/// Error variants that can occur while evaluating a token
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// An operation needed more values than the stack holds
    #[error("stack underflow: {context}")]
    StackUnderflow { context: String },

    /// `/` with a zero right operand
    #[error("division by zero")]
    DivisionByZero,

    /// `inv` applied to zero
    #[error("cannot invert zero")]
    ZeroDivision,

    /// A domain-restricted function was given a value outside its domain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The token is neither a number nor a known command
    #[error("unknown token '{0}'")]
    UnknownCommand(String),
}

impl CalcError {
    pub(crate) fn underflow(context: impl Into<String>) -> Self {
        CalcError::StackUnderflow {
            context: context.into(),
        }
    }
}
