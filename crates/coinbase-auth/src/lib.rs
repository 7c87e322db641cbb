//! Authentication strategies for the Coinbase API.
//!
//! This crate provides [`ServiceOAuth`], the mutual-TLS-backed strategy used
//! for RPC calls made on behalf of the service itself. The strategy carries
//! no request-level credentials; trust is established during the TLS
//! handshake against a root certificate bundle loaded at construction time.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use coinbase_auth::{Authentication, ServiceOAuth};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = ServiceOAuth::new("/etc/coinbase/ca.pem")?;
//!
//! let response = auth
//!     .client()
//!     .get(format!("{}api/v1/time", auth.base_url()))
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/coinbase-auth/0.1.0")]

mod config;
mod service_oauth;

pub use config::TlsOptions;
pub use service_oauth::{ServiceOAuth, ServiceOAuthBuilder};
pub use coinbase_core::{Authentication, CoinbaseError, Result};
