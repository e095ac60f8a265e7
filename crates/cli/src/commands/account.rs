//! Local account commands.

use tamarind_client::{AppState, Result};

/// Register a new account and sign in.
///
/// # Errors
///
/// Returns `AppError::Auth` on duplicate email, weak password or storage
/// failure.
pub async fn register(state: &AppState, name: &str, email: &str, password: &str) -> Result<()> {
    let session = state.auth().register(name, email, password).await?;

    tracing::info!("Registered and signed in");
    tracing::info!("  ID: {}", session.id);
    tracing::info!("  Name: {}", session.name);
    tracing::info!("  Email: {}", session.email);
    Ok(())
}

/// Sign in to an existing account.
///
/// # Errors
///
/// Returns `AppError::Auth` when the email/password pair matches no
/// stored record.
pub async fn sign_in(state: &AppState, email: &str, password: &str) -> Result<()> {
    let session = state.auth().sign_in(email, password).await?;
    tracing::info!("Signed in as {} <{}>", session.name, session.email);
    Ok(())
}

/// Sign out of the current session.
///
/// # Errors
///
/// Returns `AppError::Auth` if the session pointer cannot be removed.
pub async fn sign_out(state: &AppState) -> Result<()> {
    state.auth().sign_out().await?;
    tracing::info!("Signed out");
    Ok(())
}

/// Show the current session, if any.
///
/// # Errors
///
/// Returns `AppError::Auth` on I/O failure.
pub async fn whoami(state: &AppState) -> Result<()> {
    match state.auth().current_user().await? {
        Some(session) => {
            tracing::info!("Signed in as {} <{}>", session.name, session.email);
            tracing::info!("  ID: {}", session.id);
            tracing::info!("  Avatar: {}", session.avatar_url);
        }
        None => tracing::info!("Not signed in"),
    }
    Ok(())
}
