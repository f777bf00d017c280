//! Application-wide error types.
//!
//! Task store operations cannot fail; the errors here come from the
//! surrounding infrastructure: configuration, the terminal and logging.

pub use crate::config::ConfigError;

/// Failure while starting or running the terminal session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key event channel closed or the terminal could not be driven.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A global logger was already installed.
    #[error("Logger error: {0}")]
    Logger(String),
}

pub type AppResult<T> = Result<T, AppError>;
