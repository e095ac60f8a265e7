//! Raw record inspection commands.

use tamarind_client::AppState;
use tamarind_client::store::StorageError;

/// Print the raw JSON stored under `key`.
///
/// # Errors
///
/// Returns `StorageError::Io` on read failure. A malformed record reads as
/// absent, same as the registries see it.
pub async fn get(state: &AppState, key: &str) -> Result<(), StorageError> {
    match state.store().get(key).await? {
        Some(value) => {
            let pretty = serde_json::to_string_pretty(&value)?;
            tracing::info!("{key}:\n{pretty}");
        }
        None => tracing::info!("{key}: absent"),
    }
    Ok(())
}

/// Remove the record stored under `key`.
///
/// # Errors
///
/// Returns `StorageError::Io` on removal failure.
pub async fn remove(state: &AppState, key: &str) -> Result<(), StorageError> {
    state.store().remove(key).await?;
    tracing::info!("Removed {key}");
    Ok(())
}
