//! Menu browsing commands.

use tamarind_client::AppState;
use tamarind_client::catalog::{CatalogError, MenuQuery, MenuSource};

/// List menu items, optionally filtered by category and search text.
///
/// # Errors
///
/// Returns `CatalogError` if the catalog fails (the bundled catalog never
/// does).
pub async fn list(
    state: &AppState,
    category: Option<String>,
    search: Option<String>,
) -> Result<(), CatalogError> {
    let query = MenuQuery { category, search };
    let items = state.catalog().fetch_menu(&query).await?;

    if items.is_empty() {
        tracing::info!("No menu items match");
        return Ok(());
    }

    for item in &items {
        tracing::info!(
            "{} - {} ({}, {} kcal, {}g protein)",
            item.price,
            item.name,
            item.category,
            item.calories,
            item.protein
        );
    }
    Ok(())
}

/// List the menu categories.
///
/// # Errors
///
/// Returns `CatalogError` if the catalog fails.
pub async fn categories(state: &AppState) -> Result<(), CatalogError> {
    for category in state.catalog().fetch_categories().await? {
        tracing::info!("{} [{}] - {}", category.name, category.id, category.description);
    }
    Ok(())
}
