//! Error types for civicdir.

use thiserror::Error;

/// Errors that can occur in civicdir operations.
#[derive(Error, Debug)]
pub enum CivicdirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("An event with id '{0}' already exists")]
    DuplicateEvent(String),

    #[error("Unknown event category '{0}' (expected one of: Town Hall, Forum, Meeting, Rally, Debate, Conference)")]
    UnknownCategory(String),

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for civicdir operations.
pub type CivicdirResult<T> = Result<T, CivicdirError>;
