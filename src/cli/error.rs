//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::{ParseError, RenderError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) => crate::exitcode::DATAERR,
            CliError::Render(e) => match e {
                RenderError::Io(_) => crate::exitcode::IOERR,
            },
        }
    }
}
