//! HTTP transport layer for BYMADATA requests

use crate::auth::TokenManager;
use byma_core::{Config, Endpoint, Error, ResourcePath, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

const NO_DESCRIPTION: &str = "Server responded with a 400 status without a description";

/// HTTP transport for market data requests. Owns the connection pool and the
/// token manager; every request goes through [`TokenManager::ensure_fresh`]
/// first.
pub struct Transport {
  client: Client,
  base_url: String,
  endpoint: Endpoint,
  timeout: Duration,
  auth: TokenManager,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
      .user_agent(concat!("byma-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    let auth = TokenManager::new(client.clone(), config);

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      endpoint: config.endpoint,
      timeout: Duration::from_secs(config.timeout_secs),
      auth,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    let config = Config::new("test_id", "test_secret", Endpoint::RealTime)
      .with_urls("https://mock.bymadata.test/oauth/token", "https://mock.bymadata.test/api/");
    Self::new(&config).expect("mock transport")
  }

  /// Make a GET request and decode the JSON body into `T`
  pub async fn get<T>(&self, resource: ResourcePath, params: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let value = self.fetch(resource, params).await?;
    serde_json::from_value(value)
      .map_err(|e| Error::Parse(format!("Unexpected body for {}: {}", resource, e)))
  }

  /// Make a GET request against `{base}/{endpoint}/{resource}`
  ///
  /// # Errors
  ///
  /// * `Authentication` if the token could not be refreshed
  /// * `Client` on a 400 response (carrying the server description when
  ///   present) or on a transport failure
  /// * `UnexpectedResponse` on any other non-200 status
  #[instrument(skip(self, params), fields(endpoint = %self.endpoint))]
  pub async fn fetch(&self, resource: ResourcePath, params: &[(&str, String)]) -> Result<Value> {
    let url = self.build_url(resource, params)?;
    let token = self.auth.ensure_fresh().await?;

    debug!("Making request to: {}", url);
    let response = self
      .client
      .get(url)
      .bearer_auth(&token.access_token)
      .send()
      .await
      .map_err(|e| {
        error!("Request failed: {}", e);
        Error::Client(format!("An error occurred when processing the request: {}", e))
      })?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| Error::Client(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with {} bytes", status, body.len());
    #[cfg(feature = "debug-logging")]
    tracing::trace!("Response body: {}", body);

    process_response(status, &body)
  }

  /// Same as [`Transport::fetch`] for a path given as a string; unknown
  /// paths fail before any request is made.
  pub async fn fetch_path(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
    let resource: ResourcePath = path.parse()?;
    self.fetch(resource, params).await
  }

  /// Build the full URL for a resource request
  fn build_url(&self, resource: ResourcePath, params: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(&format!(
      "{}/{}/{}",
      self.base_url.trim_end_matches('/'),
      self.endpoint,
      resource
    ))
    .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    if !params.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// Token manager shared by every request
  pub fn auth(&self) -> &TokenManager {
    &self.auth
  }

  /// Endpoint segment used for every request
  pub fn endpoint(&self) -> Endpoint {
    self.endpoint
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("endpoint", &self.endpoint)
      .field("timeout", &self.timeout)
      .field("auth", &self.auth)
      .finish()
  }
}

/// Map a response status and body onto the client's outcome
pub(crate) fn process_response(status: StatusCode, body: &str) -> Result<Value> {
  match status {
    StatusCode::OK => serde_json::from_str(body)
      .map_err(|e| Error::Parse(format!("Failed to parse response: {}", e))),
    StatusCode::BAD_REQUEST => {
      let description = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("descripcion").and_then(Value::as_str).map(str::to_string));
      warn!("Bad request: {}", description.as_deref().unwrap_or(NO_DESCRIPTION));
      Err(Error::Client(description.unwrap_or_else(|| NO_DESCRIPTION.to_string())))
    }
    other => {
      error!("Request failed with status: {}", other);
      Err(Error::UnexpectedResponse(other.as_u16()))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_build_url() {
    let transport = Transport::new_mock();
    let params = vec![("group", "ACCIONES".to_string()), ("settlPeriod", "0003".to_string())];

    let url = transport.build_url(ResourcePath::Equity, &params).unwrap().to_string();

    assert!(url.starts_with("https://mock.bymadata.test/api/snapshot/equity?"));
    assert!(url.contains("group=ACCIONES"));
    assert!(url.contains("settlPeriod=0003"));
  }

  #[test]
  fn test_build_url_without_params() {
    let transport = Transport::new_mock();
    let url = transport.build_url(ResourcePath::Turnover, &[]).unwrap();
    assert_eq!(url.as_str(), "https://mock.bymadata.test/api/snapshot/turnover");
  }

  #[test]
  fn test_process_response_ok() {
    let value = process_response(StatusCode::OK, r#"{"result": [{"security_id": "GGAL"}]}"#).unwrap();
    assert_eq!(value["result"][0]["security_id"], "GGAL");
  }

  #[test]
  fn test_process_response_bad_request_with_description() {
    let err = process_response(StatusCode::BAD_REQUEST, r#"{"descripcion": "bad request"}"#).unwrap_err();
    match err {
      Error::Client(msg) => assert_eq!(msg, "bad request"),
      other => panic!("Expected Client error, got {:?}", other),
    }
  }

  #[test]
  fn test_process_response_bad_request_without_description() {
    for body in ["", "not json", r#"{"error": "x"}"#] {
      let err = process_response(StatusCode::BAD_REQUEST, body).unwrap_err();
      assert_eq!(err.to_string(), NO_DESCRIPTION);
    }
  }

  #[test]
  fn test_process_response_unexpected_status() {
    let err = process_response(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap_err();
    assert!(matches!(err, Error::UnexpectedResponse(500)));

    let err = process_response(StatusCode::UNAUTHORIZED, "").unwrap_err();
    assert_eq!(err.status(), Some(401));
  }

  #[test]
  fn test_process_response_malformed_success_body() {
    let err = process_response(StatusCode::OK, "<html>").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
  }

  #[tokio::test]
  async fn test_fetch_path_rejects_unknown_path() {
    let transport = Transport::new_mock();
    let err = transport.fetch_path("bonds", &[]).await.unwrap_err();
    assert!(err.is_argument_error());
    assert!(transport.auth().current().await.is_none());
  }
}
