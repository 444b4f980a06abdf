//! CLI command implementations.

pub mod cart;

use aavakaaram_cart::ConfigError;
use thiserror::Error;

/// Errors that can end a CLI invocation.
///
/// Cart operations themselves never fail; only setup and argument parsing can.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A price argument was not a non-negative decimal.
    #[error("Invalid price '{0}': {1}")]
    InvalidPrice(String, String),

    /// Output could not be encoded.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
