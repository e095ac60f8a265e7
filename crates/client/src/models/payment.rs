//! Payment-method domain types.
//!
//! A closed sum over the three kinds of saved payment modes. Consumers match
//! exhaustively; there is no string-typed discriminator beyond the serde tag
//! on the wire.

use core::fmt;

use serde::{Deserialize, Serialize};

use tamarind_core::PaymentMethodId;

/// A saved payment method.
///
/// These are display stubs for a dummy checkout flow: no card number beyond
/// the last four digits is ever stored, and nothing links to a real payment
/// processor. Duplicates are permitted by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaymentMethod {
    /// A saved card, identified only by its last four digits.
    #[serde(rename_all = "camelCase")]
    Card {
        /// Unique ID, generated at creation.
        id: PaymentMethodId,
        /// Last four digits of the card number.
        last4: String,
        /// Card brand label, when known.
        #[serde(skip_serializing_if = "Option::is_none")]
        brand: Option<String>,
        /// Name on the card.
        #[serde(skip_serializing_if = "Option::is_none")]
        cardholder_name: Option<String>,
    },
    /// A UPI handle.
    #[serde(rename_all = "camelCase")]
    Upi {
        /// Unique ID, generated at creation.
        id: PaymentMethodId,
        /// UPI provider.
        provider: UpiProvider,
        /// The UPI ID (e.g. `name@bank`), when entered.
        #[serde(skip_serializing_if = "Option::is_none")]
        upi_id: Option<String>,
    },
    /// A wallet account.
    #[serde(rename_all = "camelCase")]
    Wallet {
        /// Unique ID, generated at creation.
        id: PaymentMethodId,
        /// Which wallet.
        wallet_kind: WalletKind,
    },
}

impl PaymentMethod {
    /// The method's unique ID.
    #[must_use]
    pub const fn id(&self) -> &PaymentMethodId {
        match self {
            Self::Card { id, .. } | Self::Upi { id, .. } | Self::Wallet { id, .. } => id,
        }
    }
}

/// UPI providers offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpiProvider {
    Gpay,
    Phonepe,
    GenericUpi,
}

impl fmt::Display for UpiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpay => write!(f, "Google Pay"),
            Self::Phonepe => write!(f, "PhonePe"),
            Self::GenericUpi => write!(f, "UPI"),
        }
    }
}

/// Wallet kinds offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletKind {
    Amazonpay,
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amazonpay => write!(f, "Amazon Pay"),
        }
    }
}
