//! Payment-method commands.

use thiserror::Error;

use tamarind_client::AppState;
use tamarind_client::models::{PaymentMethod, UpiProvider, WalletKind};
use tamarind_client::store::StorageError;
use tamarind_core::PaymentMethodId;

/// Errors that can occur during payment-method operations.
#[derive(Debug, Error)]
pub enum PaymentsError {
    /// Unknown UPI provider name on the command line.
    #[error("Invalid provider: {0}. Valid providers: gpay, phonepe, upi")]
    InvalidProvider(String),

    /// Unknown wallet name on the command line.
    #[error("Invalid wallet: {0}. Valid wallets: amazonpay")]
    InvalidWallet(String),

    /// Record store error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Save a card.
///
/// # Errors
///
/// Returns `PaymentsError::Storage` if the method cannot be persisted.
pub async fn add_card(
    state: &AppState,
    number: &str,
    cardholder: Option<&str>,
) -> Result<(), PaymentsError> {
    let method = state.payments().add_card(number, cardholder).await?;
    tracing::info!("Saved {}", describe(&method));
    Ok(())
}

/// Save a UPI handle.
///
/// # Errors
///
/// Returns `PaymentsError::InvalidProvider` for an unknown provider name.
pub async fn add_upi(
    state: &AppState,
    provider: &str,
    upi_id: Option<&str>,
) -> Result<(), PaymentsError> {
    let provider = parse_provider(provider)?;
    let method = state.payments().add_upi(provider, upi_id).await?;
    tracing::info!("Saved {}", describe(&method));
    Ok(())
}

/// Save a wallet.
///
/// # Errors
///
/// Returns `PaymentsError::InvalidWallet` for an unknown wallet name.
pub async fn add_wallet(state: &AppState, wallet: &str) -> Result<(), PaymentsError> {
    let wallet = parse_wallet(wallet)?;
    let method = state.payments().add_wallet(wallet).await?;
    tracing::info!("Saved {}", describe(&method));
    Ok(())
}

/// List saved methods, newest first.
///
/// # Errors
///
/// Returns `PaymentsError::Storage` on I/O failure.
pub async fn list(state: &AppState) -> Result<(), PaymentsError> {
    let methods = state.payments().list().await?;
    if methods.is_empty() {
        tracing::info!("No saved payment methods");
        return Ok(());
    }

    for method in &methods {
        tracing::info!("{} [{}]", describe(method), method.id());
    }
    Ok(())
}

/// Remove a method by ID. Absent IDs are a no-op.
///
/// # Errors
///
/// Returns `PaymentsError::Storage` if the updated list cannot be persisted.
pub async fn remove(state: &AppState, id: &str) -> Result<(), PaymentsError> {
    state
        .payments()
        .remove(&PaymentMethodId::new(id))
        .await?;
    tracing::info!("Removed {id} (if present)");
    Ok(())
}

fn parse_provider(provider: &str) -> Result<UpiProvider, PaymentsError> {
    match provider.to_lowercase().as_str() {
        "gpay" => Ok(UpiProvider::Gpay),
        "phonepe" => Ok(UpiProvider::Phonepe),
        "upi" => Ok(UpiProvider::GenericUpi),
        other => Err(PaymentsError::InvalidProvider(other.to_owned())),
    }
}

fn parse_wallet(wallet: &str) -> Result<WalletKind, PaymentsError> {
    match wallet.to_lowercase().as_str() {
        "amazonpay" => Ok(WalletKind::Amazonpay),
        other => Err(PaymentsError::InvalidWallet(other.to_owned())),
    }
}

fn describe(method: &PaymentMethod) -> String {
    match method {
        PaymentMethod::Card {
            last4,
            cardholder_name,
            ..
        } => cardholder_name.as_ref().map_or_else(
            || format!("card ending {last4}"),
            |name| format!("card ending {last4} ({name})"),
        ),
        PaymentMethod::Upi {
            provider, upi_id, ..
        } => upi_id.as_ref().map_or_else(
            || format!("{provider}"),
            |id| format!("{provider} ({id})"),
        ),
        PaymentMethod::Wallet { wallet_kind, .. } => format!("{wallet_kind} wallet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names_parse() {
        assert!(matches!(parse_provider("gpay"), Ok(UpiProvider::Gpay)));
        assert!(matches!(parse_provider("PhonePe"), Ok(UpiProvider::Phonepe)));
        assert!(matches!(parse_provider("upi"), Ok(UpiProvider::GenericUpi)));
        assert!(matches!(
            parse_provider("paytm"),
            Err(PaymentsError::InvalidProvider(_))
        ));
    }

    #[test]
    fn wallet_names_parse() {
        assert!(matches!(parse_wallet("amazonpay"), Ok(WalletKind::Amazonpay)));
        assert!(matches!(
            parse_wallet("applepay"),
            Err(PaymentsError::InvalidWallet(_))
        ));
    }
}
