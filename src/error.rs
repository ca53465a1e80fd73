//! Error types used across modules.

use thiserror::Error;

/// Fixture lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No fixture with the given id exists in the catalog.
    #[error("fixture not found: {0}")]
    NotFound(String),
}

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors that stop a live feed other than a peer disconnect.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A match state could not be encoded as JSON.
    #[error("failed to encode match state: {0}")]
    Encode(#[from] serde_json::Error),
}
