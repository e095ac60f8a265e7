//! Command implementations.

pub mod account;
pub mod menu;
pub mod payments;
pub mod store;
