//! @acp:module "Errors"
//! @acp:summary "Error types for catalog and configuration loading"
//! @acp:domain cli
//! @acp:layer types
//!
//! The matching pipeline itself never fails. Errors only come from the
//! edges: reading files and decoding catalogs or configs.

use thiserror::Error;

/// Errors raised by trait-finder
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid category: {0} (expected 1, 2, 3, op1, op2 or op3)")]
    InvalidCategory(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, FinderError>;
