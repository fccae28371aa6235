//! Main calculator implementation
//!
//! The `Calculator` owns the operand stack and is the only way to mutate it.
//! It classifies tokens, executes the resulting operation and reports an
//! [`Outcome`] or a [`CalcError`].
//!
//! Every operation checks its stack depth and its numeric domain before it
//! commits anything, so a failed evaluation leaves the stack exactly as it was.

use crate::format::format_value;
use crate::parser::{self, HELP_TEXT};
use crate::vm::errors::CalcError;
use crate::vm::execution::{execute_binary, execute_unary};
use crate::vm::stack::OperandStack;
use crate::vm::types::{BinaryOp, Constant, Op, Outcome, UnaryOp};
use log::debug;

/// Reverse Polish Notation stack machine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// Operand stack
    stack: OperandStack,
}

impl Calculator {
    /// Create a calculator with an empty stack
    pub fn new() -> Self {
        Self {
            stack: OperandStack::new(),
        }
    }

    /// Classify and execute a single token
    pub fn evaluate(&mut self, token: &str) -> Result<Outcome, CalcError> {
        let op = parser::parse_token(token)?;
        self.execute(op)
    }

    /// Evaluate every whitespace-separated token of a line in order
    ///
    /// Failures are recorded and evaluation continues with the next token.
    /// A `quit` token ends the line.
    pub fn evaluate_line(&mut self, line: &str) -> Vec<(String, Result<Outcome, CalcError>)> {
        let mut results = Vec::new();
        for token in parser::tokenize(line) {
            let result = self.evaluate(token);
            let quit = matches!(result, Ok(Outcome::Quit));
            results.push((token.to_string(), result));
            if quit {
                break;
            }
        }
        results
    }

    /// Execute an already classified operation
    pub fn execute(&mut self, op: Op) -> Result<Outcome, CalcError> {
        debug!("execute {} on depth {}", op, self.stack.len());

        match op {
            Op::Push(value) => {
                self.stack.push(value);
                Ok(Outcome::Pushed(value))
            }

            Op::Constant(constant) => {
                let value = self.push_constant(constant);
                Ok(Outcome::Message(format!(
                    "Pushed {} = {}",
                    constant.symbol(),
                    format_value(value)
                )))
            }

            Op::Binary(op) => self.binary_op(op).map(Outcome::Result),

            Op::Unary(op) => self.unary_op(op).map(Outcome::Result),

            Op::Dup => {
                let value = self.stack.dup()?;
                Ok(Outcome::Message(format!("Duplicated {}", format_value(value))))
            }

            Op::Swap => {
                self.stack.swap()?;
                Ok(Outcome::Message("Swapped top two values".to_string()))
            }

            Op::Drop => {
                let value = self.stack.drop()?;
                Ok(Outcome::Message(format!("Dropped {}", format_value(value))))
            }

            Op::Clear => {
                self.reset();
                Ok(Outcome::Message("Stack cleared".to_string()))
            }

            Op::Help => Ok(Outcome::Message(HELP_TEXT.to_string())),

            Op::Quit => Ok(Outcome::Quit),

            Op::Nop => Ok(Outcome::Idle),
        }
    }

    /// Pop `b` then `a`, push `a OP b`
    pub fn binary_op(&mut self, op: BinaryOp) -> Result<f64, CalcError> {
        let context = format!("need at least two values for '{}'", op.symbol());
        let (a, b) = match self.stack.top_n(2, &context)? {
            [a, b] => (*a, *b),
            _ => return Err(CalcError::underflow(context)),
        };

        let result = execute_binary(op, a, b)?;
        self.stack.replace_top(2, result);
        Ok(result)
    }

    /// Pop `v`, push `OP(v)`
    pub fn unary_op(&mut self, op: UnaryOp) -> Result<f64, CalcError> {
        let context = format!("need at least one value for '{}'", op.symbol());
        let value = self.stack.top_n(1, &context)?[0];

        let result = execute_unary(op, value)?;
        self.stack.replace_top(1, result);
        Ok(result)
    }

    /// Push a named constant and return its value
    pub fn push_constant(&mut self, constant: Constant) -> f64 {
        let value = constant.value();
        self.stack.push(value);
        value
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    /// Pop the top value
    pub fn pop(&mut self) -> Result<f64, CalcError> {
        self.stack.pop()
    }

    /// Read the top value without removing it
    pub fn peek(&self) -> Result<f64, CalcError> {
        self.stack.peek()
    }

    /// Get the top value if there is one
    pub fn top(&self) -> Option<f64> {
        self.stack.top()
    }

    /// Empty the stack
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Read-only view of the stack, bottom to top
    pub fn snapshot(&self) -> &[f64] {
        self.stack.as_slice()
    }

    /// Number of values on the stack
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
