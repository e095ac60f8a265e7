//! Well-known record keys.
//!
//! The persisted layout is three independent named records. Key names are
//! part of the on-disk format and must not change.

/// JSON array of stored user records, including password hashes.
/// Never echoed to callers as-is; the public subset lives under
/// [`AUTH_CURRENT_USER`].
pub const AUTH_USERS: &str = "auth_users";

/// JSON object holding the public subset of the signed-in user, or absent
/// when signed out.
pub const AUTH_CURRENT_USER: &str = "auth_current_user";

/// JSON array of payment-method records, most-recent-first.
pub const PAYMENT_METHODS: &str = "payment_methods";
