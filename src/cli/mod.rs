pub mod batch;
pub mod error;
pub mod repl;

// Re-export key components
pub use batch::{run_source, write_final_stack, BatchStatus};
pub use error::AppError;
pub use repl::run_interactive;

use crate::format::render_stack;
use crate::vm::{CalcError, Outcome};
use colored::Colorize;
use std::io::{self, Write};

/// Status line for one evaluated token, `None` when there is nothing to say
pub fn status_line(result: &Result<Outcome, CalcError>) -> Option<String> {
    match result {
        Ok(Outcome::Idle) | Ok(Outcome::Quit) => None,
        Ok(outcome) if outcome.value().is_some() => {
            Some(outcome.to_string().green().to_string())
        }
        Ok(outcome) => Some(outcome.to_string()),
        Err(err) => Some(format!("Error: {}", err).red().to_string()),
    }
}

/// Write the stack view: a header and the last `depth` entries
pub fn write_stack<W: Write>(out: &mut W, stack: &[f64], depth: usize) -> io::Result<()> {
    writeln!(out, "{}", "Stack (bottom -> top):".bold())?;
    for line in render_stack(stack, depth) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        colored::control::set_override(false);

        assert_eq!(status_line(&Ok(Outcome::Idle)), None);
        assert_eq!(status_line(&Ok(Outcome::Quit)), None);
        assert_eq!(
            status_line(&Ok(Outcome::Result(14.0))),
            Some("Result: 14".to_string())
        );
        assert_eq!(
            status_line(&Ok(Outcome::Pushed(f64::NAN))),
            Some("Pushed nan".to_string())
        );
        assert_eq!(
            status_line(&Ok(Outcome::Message("Stack cleared".to_string()))),
            Some("Stack cleared".to_string())
        );
        assert_eq!(
            status_line(&Err(CalcError::DivisionByZero)),
            Some("Error: division by zero".to_string())
        );
    }

    #[test]
    fn test_write_stack() {
        colored::control::set_override(false);

        let mut out = Vec::new();
        write_stack(&mut out, &[1.0, 2.0], 3).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Stack (bottom -> top):\n  -: \n  1: 1\n  2: 2\n");
    }
}
