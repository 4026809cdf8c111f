//! Error types for pinche-rules.

use thiserror::Error;

/// Error type for rule generation.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error (rule provider documents and config files)
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Transport-level download failure
    #[error("download error: {0}")]
    Download(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for pinche-rules operations.
pub type Result<T> = std::result::Result<T, Error>;
