//! Server error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors from starting and running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to bind the listen address.
    #[error("failed to bind listen address: {0}")]
    Bind(std::io::Error),

    /// The server loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(std::io::Error),
}
