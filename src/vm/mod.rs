//! Stack machine for Reverse Polish Notation evaluation
//!
//! This module contains the calculator core. It is split into focused components:
//!
//! - **stack.rs**: the operand stack and its push/pop/peek/dup/swap/drop/clear primitives.
//! - **types.rs**: the closed `Op` vocabulary and the `Outcome` reported to callers.
//! - **execution.rs**: numeric semantics and domain checks of every operation.
//! - **errors.rs**: the `CalcError` taxonomy.
//! - **vm.rs**: the `Calculator` that ties token classification, execution and the stack together.

mod errors;
mod execution;
mod stack;
mod types;

pub use errors::CalcError;
pub use execution::{execute_binary, execute_unary};
pub use stack::OperandStack;
pub use types::{BinaryOp, Constant, Op, Outcome, UnaryOp};

// Main calculator struct that coordinates components
mod vm;
pub use vm::Calculator;
