//! Tamarind client core.
//!
//! This crate is the non-visual core of the Tamarind food-ordering app:
//! everything the screens call into, without the screens themselves.
//!
//! # Architecture
//!
//! - [`store`] - Key-value record store persisting JSON blobs under named keys
//! - [`cart`] - In-memory cart aggregate with derived totals
//! - [`services`] - Local auth and payment-method registries over the store
//! - [`catalog`] - Menu source seam with bundled-data fallback
//! - [`state`] - Injectable application state container
//!
//! The store fakes what a hosted backend would provide: sign-up/sign-in and
//! saved payment methods live in local JSON records. There is no server, no
//! real payment processing, and no cross-key atomicity - a single logical
//! writer (the UI) issues one operation at a time.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

pub use error::{AppError, Result};
pub use state::AppState;
