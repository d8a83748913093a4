//! Error types for the financial document crew

use thiserror::Error;

/// Result type alias for crew operations
pub type Result<T> = std::result::Result<T, CrewError>;

#[derive(Error, Debug)]
pub enum CrewError {

    // =============================
    // Core Errors
    // =============================

    #[error("Document read error: {0}")]
    DocumentRead(String),

    #[error("Upstream model error: {0}")]
    UpstreamModel(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid tool input: {0}")]
    InvalidToolInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
