//! Shell configuration
//!
//! Settings are layered: built-in defaults, then environment variables, then
//! command-line flags (applied by the binary).

use crate::format::{DEFAULT_DEPTH, MAX_DEPTH};
use log::warn;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

pub const PROMPT_VAR: &str = "RPN_CALC_PROMPT";
pub const DEPTH_VAR: &str = "RPN_CALC_DEPTH";
pub const HISTORY_VAR: &str = "RPN_CALC_HISTORY";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

pub const DEFAULT_PROMPT: &str = ">> ";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShellConfig {
    /// REPL prompt
    pub prompt: String,
    /// Number of stack rows shown after each line
    pub depth: usize,
    /// Readline history file, if any
    pub history: Option<PathBuf>,
    /// Colored status lines
    pub color: bool,
    /// Emit JSON records instead of text in batch modes
    pub json: bool,
    /// Debug logging and a verbose-mode notice in the REPL
    pub verbose: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            depth: DEFAULT_DEPTH,
            history: None,
            color: true,
            json: false,
            verbose: false,
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        if let Some(raw) = lookup(DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => config.depth = depth,
                _ => warn!(
                    "ignoring {}={:?}, expected an integer from 1 to {}; using {}",
                    DEPTH_VAR, raw, MAX_DEPTH, DEFAULT_DEPTH
                ),
            }
        }

        if let Some(path) = lookup(HISTORY_VAR).filter(|p| !p.trim().is_empty()) {
            config.history = Some(PathBuf::from(path));
        }

        if lookup(NO_COLOR_VAR).is_some() {
            config.color = false;
        }

        config
    }
}
