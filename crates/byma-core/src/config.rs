//! Configuration management for the BYMADATA client

use crate::error::{Error, Result};
use crate::types::Endpoint;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the BYMADATA client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// OAuth client identifier
  pub client_id: String,

  /// OAuth client secret
  pub client_secret: String,

  /// Market data feed to bind to
  pub endpoint: Endpoint,

  /// Token endpoint for the client credentials grant
  pub auth_url: String,

  /// Base URL for market data requests
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Connect timeout in seconds
  pub connect_timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let client_id = env::var("BYMA_CLIENT_ID")
      .map_err(|_| Error::Config("BYMA_CLIENT_ID not set".to_string()))?;

    let client_secret = env::var("BYMA_CLIENT_SECRET")
      .map_err(|_| Error::Config("BYMA_CLIENT_SECRET not set".to_string()))?;

    let endpoint = optional_var("BYMA_ENDPOINT")?
      .unwrap_or_else(|| Endpoint::RealTime.to_string())
      .parse()?;

    let timeout_secs = optional_var("BYMA_TIMEOUT_SECS")?
      .unwrap_or_else(|| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid BYMA_TIMEOUT_SECS".to_string()))?;

    let connect_timeout_secs = optional_var("BYMA_CONNECT_TIMEOUT_SECS")?
      .unwrap_or_else(|| crate::DEFAULT_CONNECT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid BYMA_CONNECT_TIMEOUT_SECS".to_string()))?;

    let auth_url = optional_var("BYMA_AUTH_URL")?.unwrap_or_else(|| crate::BYMA_AUTH_URL.to_string());
    let base_url = optional_var("BYMA_BASE_URL")?.unwrap_or_else(|| crate::BYMA_BASE_URL.to_string());

    Ok(Config {
      client_id,
      client_secret,
      endpoint,
      auth_url,
      base_url,
      timeout_secs,
      connect_timeout_secs,
    })
  }

  /// Create a config with default URLs and timeouts
  pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>, endpoint: Endpoint) -> Self {
    Config {
      client_id: client_id.into(),
      client_secret: client_secret.into(),
      endpoint,
      auth_url: crate::BYMA_AUTH_URL.to_string(),
      base_url: crate::BYMA_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      connect_timeout_secs: crate::DEFAULT_CONNECT_TIMEOUT_SECS,
    }
  }

  /// Point both the auth and data URLs at another host (mock servers, staging)
  pub fn with_urls(mut self, auth_url: impl Into<String>, base_url: impl Into<String>) -> Self {
    self.auth_url = auth_url.into();
    self.base_url = base_url.into();
    self
  }

  /// Same credentials and URLs, different feed
  pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
    self.endpoint = endpoint;
    self
  }

  /// Check credentials and URLs before any network activity
  pub fn validate(&self) -> Result<()> {
    if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
      return Err(Error::InvalidArgument(
        "Insert valid BymaData client ID and client secret key.".to_string(),
      ));
    }

    for (name, value) in [("auth_url", &self.auth_url), ("base_url", &self.base_url)] {
      Url::parse(value).map_err(|e| Error::Config(format!("Invalid {}: {}", name, e)))?;
    }

    if self.timeout_secs == 0 {
      return Err(Error::Config("timeout_secs must be greater than zero".to_string()));
    }

    if self.connect_timeout_secs == 0 {
      return Err(Error::Config("connect_timeout_secs must be greater than zero".to_string()));
    }

    Ok(())
  }
}

/// Unset is `None`; a value that is set but not Unicode is an error
fn optional_var(name: &str) -> Result<Option<String>> {
  match env::var(name) {
    Ok(value) => Ok(Some(value)),
    Err(env::VarError::NotPresent) => Ok(None),
    Err(e) => Err(e.into()),
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("client_id", &self.client_id)
      .field("client_secret", &"[REDACTED]")
      .field("endpoint", &self.endpoint)
      .field("auth_url", &self.auth_url)
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .field("connect_timeout_secs", &self.connect_timeout_secs)
      .finish()
  }
}
