//! Local authentication registry.
//!
//! Fakes an auth backend on top of the record store: the full user records
//! (hash included) live in one array record, and the "current session" is a
//! separate pointer record holding the public subset of at most one user.
//!
//! The session state machine is `SignedOut -> SignedIn`: registering or
//! signing in writes the pointer, signing out removes it. Sign-out is
//! idempotent. A crash between the users write and the pointer write can
//! leave the two records inconsistent; that is accepted for a local
//! single-device cache.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use tamarind_core::{Email, UserId};

use crate::models::{SessionUser, StoredUser};
use crate::store::{RecordStore, ids, keys};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Local authentication service over the record store.
pub struct AuthService<'a> {
    store: &'a RecordStore,
}

impl<'a> AuthService<'a> {
    /// Create an auth service over `store`.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Register a new user and sign them in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already
    /// registered, compared case-insensitively.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let mut users: Vec<StoredUser> = self.store.read_or_default(keys::AUTH_USERS).await?;
        if users.iter().any(|u| u.email.eq_ignore_case(&email)) {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = hash_password(password)?;
        let user = StoredUser {
            id: UserId::new(ids::generate("user")),
            name: name.to_owned(),
            email,
            password_hash,
            avatar_url: avatar_url_for(name),
        };

        let session = SessionUser::from(&user);
        users.push(user);
        self.store.set(keys::AUTH_USERS, &users).await?;
        self.store.set(keys::AUTH_CURRENT_USER, &session).await?;

        tracing::debug!(user = %session.id, "registered and signed in");
        Ok(session)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when no stored record matches
    /// the email (case-insensitively) and password. A malformed email input
    /// also maps here: it can never match a record.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let Ok(email) = Email::parse(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let users: Vec<StoredUser> = self.store.read_or_default(keys::AUTH_USERS).await?;
        let user = users
            .iter()
            .find(|u| u.email.eq_ignore_case(&email))
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        let session = SessionUser::from(user);
        self.store.set(keys::AUTH_CURRENT_USER, &session).await?;

        tracing::debug!(user = %session.id, "signed in");
        Ok(session)
    }

    /// Sign out. Idempotent: signing out while signed out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the pointer record cannot be removed.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.store.remove(keys::AUTH_CURRENT_USER).await?;
        Ok(())
    }

    /// The currently signed-in user's public record, if any.
    ///
    /// A missing or malformed session pointer reads as `None`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` only for genuine I/O failures.
    pub async fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        Ok(self.store.read_or_default(keys::AUTH_CURRENT_USER).await?)
    }
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Generated avatar URL for a display name.
fn avatar_url_for(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}",
        urlencoding::encode(name)
    )
}
