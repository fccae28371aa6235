//! Operand stack
//!
//! This module provides the stack manipulation primitives used by the calculator.
//! Every fallible primitive checks its precondition before touching the stack, so a
//! failed call never leaves a partial mutation behind.

use crate::vm::errors::CalcError;

const EMPTY: &str = "stack is empty";

/// The ordered working memory of the calculator, top = last element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    /// The values on the stack, bottom first
    stack: Vec<f64>,
}

impl OperandStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    /// Pop a value from the stack
    pub fn pop(&mut self) -> Result<f64, CalcError> {
        self.stack.pop().ok_or_else(|| CalcError::underflow(EMPTY))
    }

    /// Return the top value without popping it
    pub fn peek(&self) -> Result<f64, CalcError> {
        self.top().ok_or_else(|| CalcError::underflow(EMPTY))
    }

    /// Return the top value if there is one
    pub fn top(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    /// Pop the top value and hand it back for reporting
    pub fn drop(&mut self) -> Result<f64, CalcError> {
        self.pop()
    }

    /// Duplicate the top value on the stack
    pub fn dup(&mut self) -> Result<f64, CalcError> {
        let value = self.peek()?;
        self.push(value);
        Ok(value)
    }

    /// Swap the top two values on the stack
    pub fn swap(&mut self) -> Result<(), CalcError> {
        if self.stack.len() < 2 {
            return Err(CalcError::underflow("need at least two values to swap"));
        }

        let len = self.stack.len();
        self.stack.swap(len - 1, len - 2);
        Ok(())
    }

    /// Read the top `n` values, deepest first, without removing them
    pub fn top_n(&self, n: usize, context: &str) -> Result<&[f64], CalcError> {
        if self.stack.len() < n {
            return Err(CalcError::underflow(context));
        }
        Ok(&self.stack[self.stack.len() - n..])
    }

    /// Replace the top `n` values with a single result
    ///
    /// Callers check the depth with [`OperandStack::top_n`] first.
    pub fn replace_top(&mut self, n: usize, value: f64) {
        let keep = self.stack.len().saturating_sub(n);
        self.stack.truncate(keep);
        self.stack.push(value);
    }

    /// Clear the stack
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Get the stack length
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Read-only view of the stack, bottom to top
    pub fn as_slice(&self) -> &[f64] {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[f64]) -> OperandStack {
        let mut stack = OperandStack::new();
        for &v in values {
            stack.push(v);
        }
        stack
    }

    #[test]
    fn test_push_pop() {
        let mut stack = OperandStack::new();
        stack.push(42.0);
        assert_eq!(stack.pop().unwrap(), 42.0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_count() {
        let stack = stack_of(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = OperandStack::new();
        let result = stack.pop();
        assert!(matches!(result, Err(CalcError::StackUnderflow { .. })));
        assert!(stack.is_empty());
        assert!(stack.peek().is_err());
        assert!(stack.drop().is_err());
    }

    #[test]
    fn test_dup() {
        let mut stack = stack_of(&[1.0, 2.0]);
        assert_eq!(stack.dup().unwrap(), 2.0);
        assert_eq!(stack.as_slice(), &[1.0, 2.0, 2.0]);

        let mut empty = OperandStack::new();
        assert!(empty.dup().is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_swap() {
        let mut stack = stack_of(&[1.0, 2.0, 3.0]);
        stack.swap().unwrap();
        assert_eq!(stack.as_slice(), &[1.0, 3.0, 2.0]);
        stack.swap().unwrap();
        assert_eq!(stack.as_slice(), &[1.0, 2.0, 3.0]);

        let mut single = stack_of(&[7.0]);
        let err = single.swap().unwrap_err();
        assert_eq!(
            err,
            CalcError::StackUnderflow {
                context: "need at least two values to swap".to_string()
            }
        );
        assert_eq!(single.as_slice(), &[7.0]);
    }

    #[test]
    fn test_top_n_and_replace() {
        let mut stack = stack_of(&[1.0, 5.0, 3.0]);
        assert_eq!(stack.top_n(2, "test").unwrap(), &[5.0, 3.0]);
        assert!(stack.top_n(4, "test").is_err());

        stack.replace_top(2, 2.0);
        assert_eq!(stack.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_clear() {
        let mut stack = stack_of(&[1.0, 2.0]);
        stack.clear();
        assert!(stack.is_empty());
        stack.clear();
        assert_eq!(stack.len(), 0);
    }
}
