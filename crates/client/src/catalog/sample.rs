//! Bundled sample menu.
//!
//! A small curated catalog used when no hosted menu source is reachable.
//! IDs use the `local-` prefix so screens can tell bundled rows from hosted
//! ones.

use rust_decimal::Decimal;

use tamarind_core::{CategoryId, MenuItemId, Price};

use crate::models::{Category, MenuItem};

struct SampleItem {
    name: &'static str,
    description: &'static str,
    cents: i64,
    category: &'static str,
    rating: f32,
    calories: u32,
    protein: u32,
}

const CATEGORIES: &[(&str, &str)] = &[
    ("Burgers", "Stacked, saucy and flame-grilled"),
    ("Pizzas", "Stone-baked with fresh toppings"),
    ("Wraps", "Rolled fresh to order"),
    ("Bowls", "Hearty grain and salad bowls"),
];

const ITEMS: &[SampleItem] = &[
    SampleItem {
        name: "Classic Cheeseburger",
        description: "Beef patty, cheddar, pickles and house sauce",
        cents: 10_00,
        category: "Burgers",
        rating: 4.5,
        calories: 650,
        protein: 32,
    },
    SampleItem {
        name: "Smash Double",
        description: "Two smashed patties with grilled onions",
        cents: 12_50,
        category: "Burgers",
        rating: 4.7,
        calories: 820,
        protein: 45,
    },
    SampleItem {
        name: "Crispy Chicken Burger",
        description: "Buttermilk-fried chicken with slaw",
        cents: 11_00,
        category: "Burgers",
        rating: 4.3,
        calories: 700,
        protein: 38,
    },
    SampleItem {
        name: "Margherita",
        description: "Tomato, mozzarella and basil",
        cents: 9_50,
        category: "Pizzas",
        rating: 4.4,
        calories: 580,
        protein: 24,
    },
    SampleItem {
        name: "Pepperoni Feast",
        description: "Double pepperoni with mozzarella",
        cents: 12_00,
        category: "Pizzas",
        rating: 4.6,
        calories: 760,
        protein: 34,
    },
    SampleItem {
        name: "BBQ Chicken Pizza",
        description: "Smoky barbecue base with roast chicken",
        cents: 12_50,
        category: "Pizzas",
        rating: 4.2,
        calories: 720,
        protein: 36,
    },
    SampleItem {
        name: "Falafel Wrap",
        description: "Falafel, hummus and pickled cabbage",
        cents: 8_00,
        category: "Wraps",
        rating: 4.1,
        calories: 480,
        protein: 18,
    },
    SampleItem {
        name: "Grilled Chicken Wrap",
        description: "Chicken, garlic sauce and crunchy lettuce",
        cents: 8_50,
        category: "Wraps",
        rating: 4.4,
        calories: 520,
        protein: 30,
    },
    SampleItem {
        name: "Teriyaki Bowl",
        description: "Rice bowl with teriyaki chicken and greens",
        cents: 11_50,
        category: "Bowls",
        rating: 4.5,
        calories: 610,
        protein: 35,
    },
    SampleItem {
        name: "Buddha Bowl",
        description: "Quinoa, roast veg and tahini dressing",
        cents: 10_50,
        category: "Bowls",
        rating: 4.3,
        calories: 540,
        protein: 16,
    },
];

/// The bundled categories and menu items.
#[must_use]
pub fn sample_data() -> (Vec<Category>, Vec<MenuItem>) {
    let categories = CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, (name, description))| Category {
            id: CategoryId::new(format!("local-cat-{idx}")),
            name: (*name).to_owned(),
            description: (*description).to_owned(),
        })
        .collect();

    let items = ITEMS
        .iter()
        .enumerate()
        .map(|(idx, item)| MenuItem {
            id: MenuItemId::new(format!("local-menu-{idx}")),
            name: item.name.to_owned(),
            description: item.description.to_owned(),
            price: Price::new(Decimal::new(item.cents, 2)),
            image_url: format!("https://cdn.tamarind.app/menu/local-menu-{idx}.png"),
            category: item.category.to_owned(),
            rating: item.rating,
            calories: item.calories,
            protein: item.protein,
        })
        .collect();

    (categories, items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_item_belongs_to_a_listed_category() {
        let (categories, items) = sample_data();
        let names: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        for item in &items {
            assert!(names.contains(item.category.as_str()), "{}", item.name);
        }
    }

    #[test]
    fn ids_are_unique() {
        let (categories, items) = sample_data();
        let cat_ids: HashSet<_> = categories.iter().map(|c| c.id.as_str()).collect();
        let item_ids: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(cat_ids.len(), categories.len());
        assert_eq!(item_ids.len(), items.len());
    }
}
