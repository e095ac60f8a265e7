//! Domain types persisted or served by the client core.

pub mod menu;
pub mod payment;
pub mod user;

pub use menu::{Category, MenuItem};
pub use payment::{PaymentMethod, UpiProvider, WalletKind};
pub use user::{SessionUser, StoredUser};
