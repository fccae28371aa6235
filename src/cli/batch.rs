//! Non-interactive evaluation of expressions and script files
//!
//! Scripts are read line by line; anything after `#` on a line is a comment.
//! A failing token is reported and evaluation moves on to the next one. A
//! `quit` token stops the whole run.

use crate::cli::{status_line, write_stack, AppError};
use crate::config::ShellConfig;
use crate::format::lossless;
use crate::vm::{Calculator, Outcome};
use log::debug;
use serde::Serialize;
use std::io::Write;

/// Result of evaluating one source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStatus {
    /// Tokens that failed
    pub failures: usize,
    /// A `quit` token was seen
    pub quit: bool,
}

impl BatchStatus {
    /// Fold another source's status into this one
    pub fn merge(&mut self, other: BatchStatus) {
        self.failures += other.failures;
        self.quit |= other.quit;
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct StackRecord<'a> {
    #[serde(serialize_with = "lossless::serialize_slice")]
    stack: &'a [f64],
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Evaluate every line of `source`, writing one status record per token
pub fn run_source<W: Write>(
    calc: &mut Calculator,
    source: &str,
    config: &ShellConfig,
    out: &mut W,
) -> Result<BatchStatus, AppError> {
    let mut status = BatchStatus::default();

    for (number, line) in source.lines().enumerate() {
        let code = strip_comment(line);
        if code.trim().is_empty() {
            continue;
        }
        debug!("line {}: {}", number + 1, code.trim());

        for (token, result) in calc.evaluate_line(code) {
            if let Err(err) = &result {
                debug!("token '{}' failed: {}", token, err);
                status.failures += 1;
            }

            if config.json {
                let record = TokenRecord {
                    token: &token,
                    outcome: result.as_ref().ok(),
                    error: result.as_ref().err().map(|e| e.to_string()),
                };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            } else if let Some(text) = status_line(&result) {
                writeln!(out, "{}", text)?;
            }

            if matches!(result, Ok(Outcome::Quit)) {
                status.quit = true;
                return Ok(status);
            }
        }
    }

    Ok(status)
}

/// Write the final stack in the configured format
pub fn write_final_stack<W: Write>(
    calc: &Calculator,
    config: &ShellConfig,
    out: &mut W,
) -> Result<(), AppError> {
    if config.json {
        let record = StackRecord {
            stack: calc.snapshot(),
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    } else {
        write_stack(out, calc.snapshot(), config.depth)?;
    }
    Ok(())
}
