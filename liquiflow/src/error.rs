//! Error types for liquiflow

use thiserror::Error;

use crate::command::CommandError;

/// Result type for liquiflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for liquiflow
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Flow execution error: {0}")]
    FlowExecutionError(#[from] CommandError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
