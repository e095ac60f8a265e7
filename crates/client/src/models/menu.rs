//! Menu domain types.
//!
//! These are what a menu source returns. The client core does not own menu
//! data; it only turns menu items into cart lines.

use serde::{Deserialize, Serialize};

use tamarind_core::{CategoryId, MenuItemId, Price};

/// One orderable menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique item ID.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Base price, before customizations.
    pub price: Price,
    /// Image asset URL.
    pub image_url: String,
    /// Display name of the category this item belongs to.
    pub category: String,
    /// Customer rating out of 5.
    pub rating: f32,
    /// Calories per serving.
    pub calories: u32,
    /// Grams of protein per serving.
    pub protein: u32,
}

/// A menu category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
}
