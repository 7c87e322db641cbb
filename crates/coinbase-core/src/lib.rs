//! Core types and traits for the Coinbase API client.
//!
//! This crate provides the foundational pieces shared across the Coinbase
//! library:
//!
//! - **Authentication**: the [`Authentication`] capability implemented by
//!   every authentication strategy
//! - **Errors**: error handling with [`CoinbaseError`]

#![doc(html_root_url = "https://docs.rs/coinbase-core/0.1.0")]

mod auth;
mod error;

pub use auth::Authentication;
pub use error::{CoinbaseError, Result};
