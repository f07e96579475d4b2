//! Top-level error for the binary. Everything here ends the program.

use crate::api_client::ApiClientError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Building the HTTP client failed; request failures never end up here.
    #[error("API client setup failed: {0}")]
    Api(#[from] ApiClientError),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
