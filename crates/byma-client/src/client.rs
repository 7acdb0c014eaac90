/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Client facade: construction, scope check, endpoint groups and shutdown.

use crate::endpoints::{
  derivatives::DerivativesEndpoints, financing::FinancingEndpoints, market::MarketEndpoints,
  securities::SecuritiesEndpoints,
};
use crate::transport::Transport;
use byma_core::{Config, Endpoint, Error, Result};
use serde_json::Value;
use tracing::{debug, info};

/// Main BYMADATA API client
///
/// Bound to a single [`Endpoint`] for its whole life. Construction performs
/// the first token exchange and fails if the selected endpoint is not among
/// the granted scopes. Resource operations are reached through the endpoint
/// groups ([`securities`](Self::securities), [`derivatives`](Self::derivatives),
/// [`financing`](Self::financing), [`market`](Self::market)).
///
/// # Examples
///
/// ```rust,no_run
/// use byma_client::{BymaClient, Config, Endpoint, FuturesQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?.with_endpoint(Endpoint::EndOfDay);
///     let client = BymaClient::new(config).await?;
///
///     let dollar_futures = client.derivatives().futures(&FuturesQuery::default()).await?;
///     println!("{} currency futures", dollar_futures.len());
///
///     client.close().await;
///     Ok(())
/// }
/// ```
pub struct BymaClient {
  transport: Transport,
}

impl BymaClient {
  /// Create a new client and obtain the first token
  ///
  /// # Errors
  ///
  /// * `InvalidArgument` if the credentials are empty
  /// * `Config` if the URLs are malformed or the HTTP client cannot be built
  /// * `Authentication` if the token exchange fails
  /// * `Permission` if the configured endpoint was not granted
  pub async fn new(config: Config) -> Result<Self> {
    config.validate()?;

    let transport = Transport::new(&config)?;
    let token = transport.auth().ensure_fresh().await?;

    if !token.has_scope(config.endpoint.segment()) {
      return Err(Error::Permission(format!("No permissions for {} endpoint.", config.endpoint)));
    }

    info!("BYMADATA client ready on {} endpoint", config.endpoint);
    Ok(Self { transport })
  }

  /// Client bound to real-time snapshots
  pub async fn snapshot(client_id: &str, client_secret: &str) -> Result<Self> {
    Self::new(Config::new(client_id, client_secret, Endpoint::RealTime)).await
  }

  /// Client bound to 20 minute delayed snapshots
  pub async fn delayed(client_id: &str, client_secret: &str) -> Result<Self> {
    Self::new(Config::new(client_id, client_secret, Endpoint::Delayed)).await
  }

  /// Client bound to end-of-day snapshots
  pub async fn end_of_day(client_id: &str, client_secret: &str) -> Result<Self> {
    Self::new(Config::new(client_id, client_secret, Endpoint::EndOfDay)).await
  }

  /// Create a client from `BYMA_*` environment variables
  pub async fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?).await
  }

  /// Endpoint this client is bound to
  pub fn endpoint(&self) -> Endpoint {
    self.transport.endpoint()
  }

  /// Scopes granted to the current token
  pub async fn scopes(&self) -> Vec<String> {
    self.transport.auth().scopes().await
  }

  /// Equities, fixed income and options
  pub fn securities(&self) -> SecuritiesEndpoints<'_> {
    SecuritiesEndpoints::new(&self.transport)
  }

  /// Futures
  pub fn derivatives(&self) -> DerivativesEndpoints<'_> {
    DerivativesEndpoints::new(&self.transport)
  }

  /// Repos, trading lots and loans
  pub fn financing(&self) -> FinancingEndpoints<'_> {
    FinancingEndpoints::new(&self.transport)
  }

  /// Indices, turnover and intraday trades
  pub fn market(&self) -> MarketEndpoints<'_> {
    MarketEndpoints::new(&self.transport)
  }

  /// Raw request against a resource path given as a string.
  ///
  /// The path must be in the allow-list (`equity`, `fixed_income`, ...);
  /// no validation is applied to `params`.
  pub async fn fetch_raw(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
    self.transport.fetch_path(path, params).await
  }

  /// Release the cached token and the connection pool
  pub async fn close(self) {
    self.transport.auth().clear().await;
    debug!("Closing BYMADATA client on {} endpoint", self.transport.endpoint());
    drop(self.transport);
  }
}

impl std::fmt::Debug for BymaClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BymaClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_empty_credentials_fail_before_network() {
    let err = BymaClient::new(Config::new("", "", Endpoint::RealTime)).await.unwrap_err();
    assert!(err.is_argument_error());
  }

  #[tokio::test]
  async fn test_malformed_auth_url_is_config_error() {
    let config = Config::new("id", "secret", Endpoint::Delayed).with_urls("::", "http://localhost");
    let err = BymaClient::new(config).await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
  }
}
