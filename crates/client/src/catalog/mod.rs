//! Menu catalog seam.
//!
//! Menu data comes from a hosted backend in production; this crate only
//! defines the seam and a bundled fallback. A [`MenuSource`] must return an
//! empty list rather than an error when nothing matches a query - errors are
//! reserved for the source itself being unavailable.
//!
//! [`FallbackMenu`] substitutes the bundled catalog only when the primary
//! source *fails*. An empty successful result passes through untouched, so
//! "no rows found" is never mistaken for an outage.

pub mod sample;

use tracing::warn;

use crate::models::{Category, MenuItem};

/// Errors from a menu source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The source could not be reached or answered with a failure.
    #[error("menu source unavailable: {0}")]
    Unavailable(String),
}

/// A menu listing query. `None` fields mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    /// Restrict to one category, by ID or display name. The sentinel value
    /// `all` means no filter, matching what the screens send.
    pub category: Option<String>,
    /// Case-insensitive substring match on item names.
    pub search: Option<String>,
}

impl MenuQuery {
    /// A query with no filters.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    fn category_filter(&self) -> Option<&str> {
        match self.category.as_deref() {
            None | Some("all") => None,
            Some(c) => Some(c),
        }
    }
}

/// Something that can serve menu listings.
pub trait MenuSource {
    /// Fetch menu items matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` only when the source itself
    /// fails; an empty match is `Ok(vec![])`.
    fn fetch_menu(
        &self,
        query: &MenuQuery,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CatalogError>> + Send;

    /// Fetch all categories.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` when the source fails.
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>, CatalogError>> + Send;
}

/// The curated menu that ships with the app.
///
/// Serves as the offline stand-in for the hosted catalog and as the fallback
/// half of [`FallbackMenu`].
#[derive(Debug, Clone)]
pub struct BundledCatalog {
    items: Vec<MenuItem>,
    categories: Vec<Category>,
}

impl Default for BundledCatalog {
    fn default() -> Self {
        let (categories, items) = sample::sample_data();
        Self { items, categories }
    }
}

impl BundledCatalog {
    /// Build the catalog from the bundled sample data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn matches_category(&self, item: &MenuItem, wanted: &str) -> bool {
        // The query may carry a category ID rather than a name
        let name = self
            .categories
            .iter()
            .find(|c| c.id.as_str() == wanted)
            .map_or(wanted, |c| c.name.as_str());
        item.category.eq_ignore_ascii_case(name)
    }
}

impl MenuSource for BundledCatalog {
    async fn fetch_menu(&self, query: &MenuQuery) -> Result<Vec<MenuItem>, CatalogError> {
        let mut items: Vec<MenuItem> = self.items.clone();

        if let Some(category) = query.category_filter() {
            items.retain(|i| self.matches_category(i, category));
        }

        if let Some(search) = query.search.as_deref() {
            let needle = search.to_lowercase();
            items.retain(|i| i.name.to_lowercase().contains(&needle));
        }

        Ok(items)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }
}

/// A menu source that falls back to a second source when the first fails.
///
/// Fallback triggers on `Err` only. If the fallback fails too, the primary
/// error is what the caller sees.
#[derive(Debug, Clone)]
pub struct FallbackMenu<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackMenu<P, F>
where
    P: MenuSource + Sync,
    F: MenuSource + Sync,
{
    /// Wrap `primary` with `fallback`.
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> MenuSource for FallbackMenu<P, F>
where
    P: MenuSource + Sync,
    F: MenuSource + Sync,
{
    async fn fetch_menu(&self, query: &MenuQuery) -> Result<Vec<MenuItem>, CatalogError> {
        match self.primary.fetch_menu(query).await {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(error = %err, "menu source failed, serving fallback");
                match self.fallback.fetch_menu(query).await {
                    Ok(items) => Ok(items),
                    Err(_) => Err(err),
                }
            }
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        match self.primary.fetch_categories().await {
            Ok(categories) => Ok(categories),
            Err(err) => {
                warn!(error = %err, "category source failed, serving fallback");
                match self.fallback.fetch_categories().await {
                    Ok(categories) => Ok(categories),
                    Err(_) => Err(err),
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// A source that always fails, standing in for an unreachable backend.
    struct DownSource;

    impl MenuSource for DownSource {
        async fn fetch_menu(&self, _query: &MenuQuery) -> Result<Vec<MenuItem>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".to_owned()))
        }

        async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".to_owned()))
        }
    }

    /// A healthy source with nothing on the menu.
    struct EmptySource;

    impl MenuSource for EmptySource {
        async fn fetch_menu(&self, _query: &MenuQuery) -> Result<Vec<MenuItem>, CatalogError> {
            Ok(vec![])
        }

        async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn bundled_catalog_unfiltered_returns_everything() {
        let catalog = BundledCatalog::new();
        let items = catalog.fetch_menu(&MenuQuery::all()).await.unwrap();
        assert!(!items.is_empty());

        let categories = catalog.fetch_categories().await.unwrap();
        assert!(!categories.is_empty());
    }

    #[tokio::test]
    async fn category_all_sentinel_means_no_filter() {
        let catalog = BundledCatalog::new();
        let all = catalog.fetch_menu(&MenuQuery::all()).await.unwrap();
        let sentinel = catalog
            .fetch_menu(&MenuQuery {
                category: Some("all".to_owned()),
                search: None,
            })
            .await
            .unwrap();
        assert_eq!(all, sentinel);
    }

    #[tokio::test]
    async fn category_filter_accepts_id_or_name() {
        let catalog = BundledCatalog::new();
        let categories = catalog.fetch_categories().await.unwrap();
        let first = categories.first().unwrap();

        let by_id = catalog
            .fetch_menu(&MenuQuery {
                category: Some(first.id.as_str().to_owned()),
                search: None,
            })
            .await
            .unwrap();
        let by_name = catalog
            .fetch_menu(&MenuQuery {
                category: Some(first.name.clone()),
                search: None,
            })
            .await
            .unwrap();

        assert!(!by_id.is_empty());
        assert_eq!(by_id, by_name);
        assert!(
            by_id
                .iter()
                .all(|i| i.category.eq_ignore_ascii_case(&first.name))
        );
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let catalog = BundledCatalog::new();
        let all = catalog.fetch_menu(&MenuQuery::all()).await.unwrap();
        let first_name = all.first().unwrap().name.clone();

        let found = catalog
            .fetch_menu(&MenuQuery {
                category: None,
                search: Some(first_name.to_uppercase()),
            })
            .await
            .unwrap();
        assert!(found.iter().any(|i| i.name == first_name));
    }

    #[tokio::test]
    async fn no_match_is_empty_not_an_error() {
        let catalog = BundledCatalog::new();
        let items = catalog
            .fetch_menu(&MenuQuery {
                category: None,
                search: Some("zzz-no-such-dish".to_owned()),
            })
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn fallback_substitutes_on_failure() {
        let menu = FallbackMenu::new(DownSource, BundledCatalog::new());
        let items = menu.fetch_menu(&MenuQuery::all()).await.unwrap();
        assert!(!items.is_empty());
    }

    #[tokio::test]
    async fn fallback_does_not_trigger_on_empty_result() {
        let menu = FallbackMenu::new(EmptySource, BundledCatalog::new());
        let items = menu.fetch_menu(&MenuQuery::all()).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn both_sources_down_surfaces_primary_error() {
        let menu = FallbackMenu::new(DownSource, DownSource);
        let err = menu.fetch_menu(&MenuQuery::all()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }
}
