//! Integration tests for Tamarind.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tamarind-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, sign-in/out and session-pointer behavior
//! - `payment_methods` - Registry ordering, removal and persistence
//! - `checkout_flow` - Cart, summary and clear-on-checkout scenarios
//!
//! Each test builds its own [`TestContext`] over a temporary directory, so
//! nothing is shared between tests and no cleanup is needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;

use tamarind_client::AppState;
use tamarind_client::config::ClientConfig;

/// An isolated app instance over a temporary storage directory.
pub struct TestContext {
    /// Keeps the storage directory alive for the test's duration.
    dir: TempDir,
    /// The app state under test.
    pub state: AppState,
}

impl TestContext {
    /// Build a fresh context with an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or store cannot be created; tests
    /// cannot proceed without them.
    #[allow(clippy::unwrap_used)]
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(ClientConfig::with_data_dir(dir.path()))
            .await
            .unwrap();
        Self { dir, state }
    }

    /// Path of the underlying storage directory.
    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
