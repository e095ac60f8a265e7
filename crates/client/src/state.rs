//! Application state shared across screens.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cart::Cart;
use crate::catalog::{BundledCatalog, MenuSource};
use crate::config::ClientConfig;
use crate::services::{AuthService, PaymentMethodRegistry};
use crate::store::{RecordStore, StorageError};

/// Application state shared across all screens.
///
/// Cheaply cloneable via `Arc`. Explicitly constructed and passed to callers
/// rather than living in a module-level singleton, so tests can build
/// isolated instances over temporary directories.
///
/// Generic over the menu source: [`AppState::new`] serves the bundled
/// catalog, while [`AppState::with_menu_source`] accepts any composed
/// source, such as a hosted catalog wrapped in
/// [`FallbackMenu`](crate::catalog::FallbackMenu).
///
/// The cart sits behind a mutex only to serialize access from the async
/// surface; there is still a single logical writer (the UI issuing one
/// action at a time).
pub struct AppState<M = BundledCatalog> {
    inner: Arc<AppStateInner<M>>,
}

impl<M> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct AppStateInner<M> {
    config: ClientConfig,
    store: RecordStore,
    menu: M,
    cart: Mutex<Cart>,
}

impl AppState {
    /// Create a new application state over the bundled menu catalog,
    /// opening the record store under the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the data directory cannot be created.
    pub async fn new(config: ClientConfig) -> Result<Self, StorageError> {
        Self::with_menu_source(config, BundledCatalog::new()).await
    }
}

impl<M: MenuSource> AppState<M> {
    /// Create an application state serving menu data from `menu`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the data directory cannot be created.
    pub async fn with_menu_source(
        config: ClientConfig,
        menu: M,
    ) -> Result<Self, StorageError> {
        let store = RecordStore::open(&config.data_dir).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                menu,
                cart: Mutex::new(Cart::new()),
            }),
        })
    }

    /// Get a reference to the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }

    /// Get a reference to the menu source.
    #[must_use]
    pub fn catalog(&self) -> &M {
        &self.inner.menu
    }

    /// The auth registry over this state's store.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.store())
    }

    /// The payment-method registry over this state's store.
    #[must_use]
    pub fn payments(&self) -> PaymentMethodRegistry<'_> {
        PaymentMethodRegistry::new(self.store())
    }

    /// The cart, guarded for access from the async surface.
    #[must_use]
    pub fn cart(&self) -> &Mutex<Cart> {
        &self.inner.cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tempfile::TempDir;

    use crate::catalog::{CatalogError, FallbackMenu, MenuQuery};
    use crate::models::{Category, MenuItem};

    use super::*;

    #[tokio::test]
    async fn isolated_instances_do_not_share_records() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();

        let a = AppState::new(ClientConfig::with_data_dir(dir_a.path()))
            .await
            .unwrap();
        let b = AppState::new(ClientConfig::with_data_dir(dir_b.path()))
            .await
            .unwrap();

        a.auth()
            .register("Ada", "ada@example.com", "correct horse")
            .await
            .unwrap();

        assert!(a.auth().current_user().await.unwrap().is_some());
        assert!(b.auth().current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clones_share_the_same_cart() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(ClientConfig::with_data_dir(dir.path()))
            .await
            .unwrap();
        let clone = state.clone();

        {
            let mut cart = state.cart().lock().await;
            cart.add_item(crate::cart::CartLine {
                item: tamarind_core::MenuItemId::new("burger"),
                name: "burger".to_owned(),
                unit_price: tamarind_core::Price::from_major(10),
                image_url: String::new(),
                customizations: vec![],
                quantity: 1,
            });
        }

        assert_eq!(clone.cart().lock().await.total_items(), 1);
    }

    /// Stands in for a hosted catalog that cannot be reached.
    struct UnreachableCatalog;

    impl MenuSource for UnreachableCatalog {
        async fn fetch_menu(&self, _query: &MenuQuery) -> Result<Vec<MenuItem>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".to_owned()))
        }

        async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".to_owned()))
        }
    }

    #[tokio::test]
    async fn composed_fallback_source_serves_the_bundled_menu() {
        let dir = TempDir::new().unwrap();
        let menu = FallbackMenu::new(UnreachableCatalog, BundledCatalog::new());
        let state = AppState::with_menu_source(ClientConfig::with_data_dir(dir.path()), menu)
            .await
            .unwrap();

        let items = state.catalog().fetch_menu(&MenuQuery::all()).await.unwrap();
        assert!(!items.is_empty());

        let categories = state.catalog().fetch_categories().await.unwrap();
        assert!(!categories.is_empty());
    }
}
