//! Reverse Polish Notation calculator
//!
//! The `rpn_calc` crate provides a numeric stack machine that evaluates tokens
//! (numbers or named operations) against an operand stack, plus the terminal
//! shell built on top of it.
//!
//! Key features:
//! - Operand stack with push/pop/peek/dup/swap/drop/clear
//! - Arithmetic, power, trigonometric and logarithmic operations with domain checks
//! - Case-insensitive token dispatch over a closed operation set
//! - Failed operations never change the stack
//!
//! ```
//! use rpn_calc::{Calculator, Outcome};
//!
//! let mut calc = Calculator::new();
//! for token in ["3", "4", "+", "2", "*"] {
//!     calc.evaluate(token).unwrap();
//! }
//! assert_eq!(calc.snapshot(), &[14.0]);
//! assert_eq!(calc.evaluate("sqrt").unwrap(), Outcome::Result(14f64.sqrt()));
//! ```

pub mod cli;
pub mod config;
pub mod format;
pub mod parser;
pub mod vm;

// Re-export key types for convenience
pub use crate::config::ShellConfig;
pub use crate::format::{format_value, render_stack};
pub use crate::parser::parse_token;
pub use crate::vm::{CalcError, Calculator, Op, Outcome};
