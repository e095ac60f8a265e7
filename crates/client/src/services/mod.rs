//! Registries built on top of the record store.

pub mod auth;
pub mod payments;

pub use auth::{AuthError, AuthService};
pub use payments::PaymentMethodRegistry;
