//! TLS transport configuration types.

use std::time::Duration;

/// Fixed dial timeout applied to every connection attempt
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// TLS transport options for a [`crate::ServiceOAuth`] provider
#[derive(Debug, Clone)]
pub struct TlsOptions {
    /// Timeout for establishing a connection to the API host
    pub connect_timeout: Duration,

    /// Whether a certificate bundle that yields zero usable roots should
    /// fail construction instead of producing a client that trusts nothing
    pub strict_certs: bool,
}

impl Default for TlsOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TlsOptions {
    /// Create options with the default dial timeout and lenient loading
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            strict_certs: false,
        }
    }

    /// Set the connection timeout
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set strict certificate loading
    #[must_use]
    pub const fn strict_certs(mut self, strict: bool) -> Self {
        self.strict_certs = strict;
        self
    }
}
