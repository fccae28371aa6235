use thiserror::Error;

/// Failures of the terminal shell
///
/// Calculator errors are reported per token and do not stop a session; these
/// are the errors that end one.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} token(s) failed")]
    Failed(usize),

    #[error("{0}")]
    Other(String),
}
