//! Interactive prompt-eval loop
//!
//! Each input line is split into tokens and evaluated in order. After every line
//! the status of each token and the visible part of the stack are printed.

use crate::cli::{status_line, write_stack, AppError};
use crate::config::ShellConfig;
use crate::vm::{Calculator, Outcome};
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

const BANNER: &str = "RPN calculator ready. Enter numbers and commands separated by spaces.";
const COMMANDS: &str =
    "Commands: + - * / pow sin cos tan inv neg sq sqrt log ln pi e swap drop dup clear help quit.";

/// Evaluate one line of input and print what happened
///
/// Returns `false` when the line asked to quit.
pub fn process_line<W: Write>(
    calc: &mut Calculator,
    line: &str,
    config: &ShellConfig,
    out: &mut W,
) -> Result<bool, AppError> {
    for (token, result) in calc.evaluate_line(line) {
        if let Err(err) = &result {
            debug!("token '{}' failed: {}", token, err);
        }
        if matches!(result, Ok(Outcome::Quit)) {
            return Ok(false);
        }
        if let Some(text) = status_line(&result) {
            writeln!(out, "{}", text)?;
        }
    }

    write_stack(out, calc.snapshot(), config.depth)?;
    Ok(true)
}

/// Run the REPL until `quit`, Ctrl-D or end of input
pub fn run_interactive(calc: &mut Calculator, config: &ShellConfig) -> Result<(), AppError> {
    let stdout = io::stdout();

    println!("{}", BANNER);
    println!("{}", COMMANDS);
    if config.verbose {
        println!("Verbose mode: enabled");
    }

    // Create an editor for interactive input
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &config.history {
        if let Err(e) = rl.load_history(path) {
            debug!("no history loaded from {}: {}", path.display(), e);
        }
    }

    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Use 'quit' to exit.");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => return Err(e.into()),
        };

        if !line.trim().is_empty() {
            rl.add_history_entry(line.as_str())?;
        }

        if !process_line(calc, &line, config, &mut stdout.lock())? {
            break;
        }
    }

    if let Some(path) = &config.history {
        if let Err(e) = rl.save_history(path) {
            warn!("could not save history to {}: {}", path.display(), e);
        }
    }

    println!("Goodbye!");
    Ok(())
}
