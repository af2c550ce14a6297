//! Error types for Atelier
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the Atelier core
#[derive(Error, Debug)]
pub enum AtelierError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Atelier
pub type Result<T> = std::result::Result<T, AtelierError>;
