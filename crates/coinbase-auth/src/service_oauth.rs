//! Service OAuth authentication over mutual TLS.

use std::path::{Path, PathBuf};

use reqwest::{Certificate, Client as HttpClient, Request};
use tracing::{debug, warn};

use crate::config::TlsOptions;
use coinbase_core::{Authentication, CoinbaseError, Result};

/// The Coinbase API base URL
const DEFAULT_BASE_URL: &str = "https://coinbase.com/";

/// Authentication strategy for RPC calls made on behalf of the service
/// itself (e.g. token exchange).
///
/// Service OAuth requests carry no request-level credentials. Trust is
/// established during the TLS handshake instead: the provider's client
/// validates the peer against the root certificate bundle loaded at
/// construction time, and [`Authentication::authenticate`] contributes
/// nothing to the request.
///
/// The base URL and trust configuration are fixed once the provider is
/// built; picking up a new certificate means constructing a new provider.
#[derive(Clone)]
pub struct ServiceOAuth {
    base_url: String,
    client: HttpClient,
}

impl ServiceOAuth {
    /// Create a provider trusting the roots in the given PEM bundle,
    /// using default settings.
    pub fn new(cert_path: impl Into<PathBuf>) -> Result<Self> {
        ServiceOAuthBuilder::new(cert_path).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(cert_path: impl Into<PathBuf>) -> ServiceOAuthBuilder {
        ServiceOAuthBuilder::new(cert_path)
    }
}

impl Authentication for ServiceOAuth {
    /// Service OAuth requires no additional headers. The trust pool wired
    /// into the client's TLS configuration carries the authentication.
    fn authenticate(&self, _request: &mut Request, _endpoint: &str, _body: &[u8]) -> Result<()> {
        Ok(())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn client(&self) -> &HttpClient {
        &self.client
    }
}

/// Builder for configuring a [`ServiceOAuth`] provider
pub struct ServiceOAuthBuilder {
    cert_path: PathBuf,
    base_url: String,
    user_agent: String,
    tls: TlsOptions,
}

impl ServiceOAuthBuilder {
    /// Create a new builder for the given certificate bundle path
    #[must_use]
    pub fn new(cert_path: impl Into<PathBuf>) -> Self {
        Self {
            cert_path: cert_path.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("coinbase-rust/{}", env!("CARGO_PKG_VERSION")),
            tls: TlsOptions::new(),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set TLS transport options
    #[must_use]
    pub fn tls(mut self, options: TlsOptions) -> Self {
        self.tls = options;
        self
    }

    /// Build the provider.
    ///
    /// Reads the certificate bundle from disk, builds the trust pool, and
    /// configures the HTTP client with it as the sole root of trust.
    pub fn build(self) -> Result<ServiceOAuth> {
        let roots = load_trust_pool(&self.cert_path, self.tls.strict_certs)?;

        let mut builder = HttpClient::builder()
            .connect_timeout(self.tls.connect_timeout)
            .user_agent(&self.user_agent)
            .tls_built_in_root_certs(false);
        for cert in roots {
            builder = builder.add_root_certificate(cert);
        }

        let client = builder
            .build()
            .map_err(|e| CoinbaseError::Http(e.to_string()))?;

        Ok(ServiceOAuth {
            base_url: self.base_url,
            client,
        })
    }
}

/// Load every root certificate from a PEM bundle file.
///
/// Non-certificate blocks and blocks that fail to parse are skipped. Unless
/// `strict` is set, a bundle that yields no roots still succeeds; the
/// resulting client trusts nothing and handshakes against it fail at
/// connection time rather than here.
fn load_trust_pool(path: &Path, strict: bool) -> Result<Vec<Certificate>> {
    let pem_data = std::fs::read(path)?;

    let blocks = match pem::parse_many(&pem_data) {
        Ok(blocks) => blocks,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unparseable PEM data in bundle");
            Vec::new()
        }
    };

    let mut roots = Vec::new();
    for block in &blocks {
        if block.tag() != "CERTIFICATE" {
            continue;
        }
        match Certificate::from_der(block.contents()) {
            Ok(cert) => roots.push(cert),
            Err(e) => debug!(path = %path.display(), error = %e, "skipping cert in bundle"),
        }
    }

    if roots.is_empty() {
        if strict {
            return Err(CoinbaseError::Certificate(format!(
                "no root certificates parsed from {}",
                path.display()
            )));
        }
        warn!(path = %path.display(), "certificate bundle yielded no roots, TLS handshakes will fail");
    } else {
        debug!(path = %path.display(), roots = roots.len(), "loaded root certificate bundle");
    }

    Ok(roots)
}
