//! Operation execution logic
//!
//! Pure numeric semantics of the binary and unary operations, including their
//! domain checks. Nothing here touches the stack: the machine reads the operands,
//! calls into this module, and only commits the result when it succeeds.

use crate::vm::errors::CalcError;
use crate::vm::types::{BinaryOp, UnaryOp};

/// Compute `a OP b`
pub fn execute_binary(op: BinaryOp, a: f64, b: f64) -> Result<f64, CalcError> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        // Undefined real powers come back as NaN and are pushed as such.
        BinaryOp::Pow => Ok(a.powf(b)),
    }
}

/// Compute `OP(v)`
pub fn execute_unary(op: UnaryOp, v: f64) -> Result<f64, CalcError> {
    match op {
        UnaryOp::Sin => Ok(v.sin()),
        UnaryOp::Cos => Ok(v.cos()),
        UnaryOp::Tan => Ok(v.tan()),
        UnaryOp::Neg => Ok(-v),
        UnaryOp::Square => Ok(v * v),
        UnaryOp::Sqrt => {
            if v < 0.0 {
                Err(CalcError::InvalidInput(
                    "cannot take square root of a negative number".to_string(),
                ))
            } else {
                Ok(v.sqrt())
            }
        }
        UnaryOp::Log => positive(v, "log").map(f64::log10),
        UnaryOp::Ln => positive(v, "ln").map(f64::ln),
        UnaryOp::Inv => {
            if v == 0.0 {
                Err(CalcError::ZeroDivision)
            } else {
                Ok(1.0 / v)
            }
        }
    }
}

fn positive(v: f64, name: &str) -> Result<f64, CalcError> {
    if v <= 0.0 {
        Err(CalcError::InvalidInput(format!(
            "'{}' requires a positive value",
            name
        )))
    } else {
        Ok(v)
    }
}
