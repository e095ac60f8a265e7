//! Unified error handling.
//!
//! Provides a unified `AppError` that the outer surfaces (the CLI, the
//! screens) can hold in one place. Registry-level business errors
//! (`UserAlreadyExists`, `InvalidCredentials`) arrive as [`AuthError`]
//! variants for user-facing messaging; storage I/O failures propagate
//! unchanged with no automatic retry. Malformed persisted JSON never reaches
//! this type - the store swallows it as "absent".

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::AuthError;
use crate::store::StorageError;

/// Application-level error type for the client core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Record store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Menu source failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
