//! Cart aggregate.
//!
//! An in-memory, insertion-ordered collection of cart lines with derived
//! totals. The cart is process-local and single-user; it never touches the
//! record store. Totals are recomputed on demand, never cached.
//!
//! Two lines are the same entry iff they reference the same menu item *and*
//! carry the exact same ordered customization-ID sequence. Order matters for
//! matching, not for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tamarind_core::{CustomizationId, MenuItemId, Price};

use crate::models::MenuItem;

/// A customization applied to a cart line (extra topping, size, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    /// Unique customization ID.
    pub id: CustomizationId,
    /// Display name.
    pub name: String,
    /// Price added on top of the line's unit price. May be zero.
    pub price_delta: Price,
    /// What kind of customization this is.
    pub kind: CustomizationKind,
}

/// Customization kinds offered on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomizationKind {
    Topping,
    Side,
    Size,
    Crust,
    Bread,
    Sauce,
}

/// One distinct (menu item, customization sequence) entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The menu item this line references.
    pub item: MenuItemId,
    /// Display name, copied from the menu item.
    pub name: String,
    /// Price per unit before customizations.
    pub unit_price: Price,
    /// Image asset URL, copied from the menu item.
    pub image_url: String,
    /// Applied customizations, in selection order.
    pub customizations: Vec<Customization>,
    /// Number of units. Always at least 1 while the line is in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Build a line (quantity 1) from a menu item and selected customizations.
    #[must_use]
    pub fn from_menu_item(item: &MenuItem, customizations: Vec<Customization>) -> Self {
        Self {
            item: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            image_url: item.image_url.clone(),
            customizations,
            quantity: 1,
        }
    }

    /// Price of one unit including customization deltas.
    #[must_use]
    pub fn unit_price_with_customizations(&self) -> Price {
        self.customizations
            .iter()
            .fold(self.unit_price, |acc, c| acc + c.price_delta)
    }

    /// Total price of this line (`quantity x unit incl. customizations`).
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.unit_price_with_customizations() * self.quantity
    }

    fn matches(&self, item: &MenuItemId, customizations: &[CustomizationId]) -> bool {
        self.item == *item
            && self
                .customizations
                .iter()
                .map(|c| &c.id)
                .eq(customizations.iter())
    }
}

/// The cart: an insertion-ordered sequence of lines.
///
/// Cleared entirely once a checkout commits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines currently in the cart, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `line`'s entry.
    ///
    /// If an entry with the same item and customization sequence already
    /// exists its quantity goes up by one; otherwise the line is appended
    /// with quantity 1.
    pub fn add_item(&mut self, line: CartLine) {
        let ids: Vec<CustomizationId> = line.customizations.iter().map(|c| c.id.clone()).collect();
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(&line.item, &ids))
        {
            existing.quantity += 1;
        } else {
            self.lines.push(CartLine { quantity: 1, ..line });
        }
    }

    /// Remove one unit of the matching entry.
    ///
    /// The line is dropped entirely once its quantity reaches zero; a line
    /// with `quantity = 0` is never retained. No-op when nothing matches.
    pub fn remove_item(&mut self, item: &MenuItemId, customizations: &[CustomizationId]) {
        let Some(pos) = self
            .lines
            .iter()
            .position(|l| l.matches(item, customizations))
        else {
            return;
        };

        if let Some(line) = self.lines.get_mut(pos) {
            if line.quantity > 1 {
                line.quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price across all lines, customizations included.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_price).sum()
    }
}

/// The figures shown on the payment summary before checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Total unit count.
    pub total_items: u32,
    /// Cart total before fees.
    pub subtotal: Price,
    /// Flat delivery fee.
    pub delivery_fee: Price,
    /// Flat promotional discount.
    pub discount: Price,
    /// `subtotal + delivery_fee - discount`.
    pub grand_total: Price,
}

impl CheckoutSummary {
    /// Compute the summary for a cart. An empty cart yields all zeros.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self {
                total_items: 0,
                subtotal: Price::ZERO,
                delivery_fee: Price::ZERO,
                discount: Price::ZERO,
                grand_total: Price::ZERO,
            };
        }

        let subtotal = cart.total_price();
        let delivery_fee = Price::new(Decimal::new(500, 2));
        let discount = Price::new(Decimal::new(50, 2));
        Self {
            total_items: cart.total_items(),
            subtotal,
            delivery_fee,
            discount,
            grand_total: subtotal + delivery_fee - discount,
        }
    }
}
