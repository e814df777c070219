//! Error types for VaultFlow
//!
//! Authorization answers are plain booleans and never produce these errors.
//! Only identity resolution, persistence and parsing can fail.

/// Result type for VaultFlow operations
pub type Result<T> = std::result::Result<T, Error>;

/// VaultFlow error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
