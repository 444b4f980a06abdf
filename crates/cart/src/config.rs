//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_DIR` - Directory holding file-backed carts (default: `.aavakaaram`)
//! - `CART_NAMESPACE` - Storage key for the cart blob (default: `aavakaaram-cart`)
//! - `CART_CURRENCY` - ISO 4217 code used to format prices (default: `INR`)

use std::path::PathBuf;

use thiserror::Error;

use aavakaaram_core::CurrencyCode;

use crate::storage::FileStorage;

/// Default storage key, shared by every session on the same device.
pub const DEFAULT_NAMESPACE: &str = "aavakaaram-cart";

const DEFAULT_STORAGE_DIR: &str = ".aavakaaram";
const MAX_NAMESPACE_LENGTH: usize = 64;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory for file-backed storage
    pub storage_dir: PathBuf,
    /// Storage key for the persisted blob
    pub namespace: String,
    /// Currency used when formatting views
    pub currency: CurrencyCode,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            namespace: DEFAULT_NAMESPACE.to_string(),
            currency: CurrencyCode::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_dir = lookup("CART_STORAGE_DIR").map_or(defaults.storage_dir, PathBuf::from);

        let namespace = lookup("CART_NAMESPACE").unwrap_or(defaults.namespace);
        validate_namespace(&namespace, "CART_NAMESPACE")?;

        let currency = match lookup("CART_CURRENCY") {
            Some(code) => code.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("CART_CURRENCY".to_string(), e.to_string())
            })?,
            None => defaults.currency,
        };

        Ok(Self {
            storage_dir,
            namespace,
            currency,
        })
    }

    /// File storage for the configured directory and namespace.
    #[must_use]
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(&self.storage_dir, &self.namespace)
    }
}

/// The namespace becomes a file name, so only `[A-Za-z0-9_-]` is allowed.
fn validate_namespace(namespace: &str, var_name: &str) -> Result<(), ConfigError> {
    if namespace.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    if namespace.len() > MAX_NAMESPACE_LENGTH {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be at most {MAX_NAMESPACE_LENGTH} characters"),
        ));
    }
    if let Some(bad) = namespace
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("contains invalid character '{bad}'"),
        ));
    }
    Ok(())
}
