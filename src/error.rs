use miette::Diagnostic;
use thiserror::Error;

/// Result type for jsdoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the outer surfaces (CLI, style files, action dispatch).
///
/// Classification and synthesis never fail; these only cover loading input,
/// reading styles and addressing buffer positions.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(jsdoc::io_error))]
    Io(String),

    #[error("Invalid style configuration: {message}")]
    #[diagnostic(code(jsdoc::config_error))]
    Config { message: String },

    #[error("Position {row}:{column} is outside the buffer ({rows} rows)")]
    #[diagnostic(
        code(jsdoc::invalid_position),
        help("rows and columns are zero-based")
    )]
    InvalidPosition {
        row: usize,
        column: usize,
        rows: usize,
    },

    #[error("Unknown action: {name}")]
    #[diagnostic(
        code(jsdoc::unknown_action),
        help("known actions are `jsdoc:block` and `editor:newline`")
    )]
    UnknownAction { name: String },

    #[error("Internal error: {message}")]
    #[diagnostic(code(jsdoc::internal_error))]
    Internal { message: String },
}

impl Error {
    /// Create a style configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config {
            message: err.to_string(),
        }
    }
}
