//! Payment-method registry.
//!
//! An ordered collection of saved payment methods persisted under one record
//! key, most-recent-first. Creation prepends, removal filters by ID, and
//! there is no update-in-place. No uniqueness rule applies across methods:
//! two cards with the same last four digits are fine, since nothing here
//! talks to a real payment processor.

use tamarind_core::PaymentMethodId;

use crate::models::{PaymentMethod, UpiProvider, WalletKind};
use crate::store::{RecordStore, StorageError, ids, keys};

/// Registry of saved payment methods over the record store.
pub struct PaymentMethodRegistry<'a> {
    store: &'a RecordStore,
}

impl<'a> PaymentMethodRegistry<'a> {
    /// Create a registry over `store`.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// All saved methods, most-recent-first.
    ///
    /// A missing or malformed record reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` only for genuine I/O failures.
    pub async fn list(&self) -> Result<Vec<PaymentMethod>, StorageError> {
        self.store.read_or_default(keys::PAYMENT_METHODS).await
    }

    /// Save a card. Only the last four digits of `number` are kept.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated list cannot be persisted.
    pub async fn add_card(
        &self,
        number: &str,
        cardholder_name: Option<&str>,
    ) -> Result<PaymentMethod, StorageError> {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        let last4 = digits
            .get(digits.len().saturating_sub(4)..)
            .unwrap_or(&digits)
            .to_owned();

        let method = PaymentMethod::Card {
            id: PaymentMethodId::new(ids::generate("card")),
            last4,
            brand: Some("Card".to_owned()),
            cardholder_name: cardholder_name.map(str::to_owned),
        };
        self.prepend(method).await
    }

    /// Save a UPI handle.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated list cannot be persisted.
    pub async fn add_upi(
        &self,
        provider: UpiProvider,
        upi_id: Option<&str>,
    ) -> Result<PaymentMethod, StorageError> {
        let method = PaymentMethod::Upi {
            id: PaymentMethodId::new(ids::generate("upi")),
            provider,
            upi_id: upi_id.map(str::to_owned),
        };
        self.prepend(method).await
    }

    /// Save a wallet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated list cannot be persisted.
    pub async fn add_wallet(&self, wallet_kind: WalletKind) -> Result<PaymentMethod, StorageError> {
        let method = PaymentMethod::Wallet {
            id: PaymentMethodId::new(ids::generate("wallet")),
            wallet_kind,
        };
        self.prepend(method).await
    }

    /// Remove a method by ID. Removing an absent ID is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the updated list cannot be persisted.
    pub async fn remove(&self, id: &PaymentMethodId) -> Result<(), StorageError> {
        let mut methods = self.list().await?;
        methods.retain(|m| m.id() != id);
        self.store.set(keys::PAYMENT_METHODS, &methods).await
    }

    async fn prepend(&self, method: PaymentMethod) -> Result<PaymentMethod, StorageError> {
        let mut methods = self.list().await?;
        methods.insert(0, method.clone());
        self.store.set(keys::PAYMENT_METHODS, &methods).await?;
        tracing::debug!(id = %method.id(), "payment method saved");
        Ok(method)
    }
}
