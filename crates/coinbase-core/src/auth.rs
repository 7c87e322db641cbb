//! The authentication capability shared by all strategies.

use crate::Result;
use reqwest::{Client, Request};

/// Capability implemented by every authentication strategy.
///
/// A strategy contributes whatever credentials its mechanism requires to an
/// outbound RPC call. Header-based strategies mutate the request before it is
/// sent; transport-based strategies configure the client they hand out and
/// leave the request untouched. Callers treat all strategies uniformly
/// through this trait, either statically or as `&dyn Authentication`.
pub trait Authentication {
    /// Apply the strategy's credentials to an outbound request.
    ///
    /// `endpoint` is the API path being called and `body` the raw request
    /// body; strategies that sign requests need both.
    fn authenticate(&self, request: &mut Request, endpoint: &str, body: &[u8]) -> Result<()>;

    /// The base URL requests should be issued against.
    fn base_url(&self) -> &str;

    /// The HTTP client configured for this strategy.
    ///
    /// The returned client is cheap to clone and safe to share across tasks;
    /// no holder can invalidate it for the others.
    fn client(&self) -> &Client;
}
