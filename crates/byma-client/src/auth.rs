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

//! Client credentials token lifecycle.
//!
//! [`TokenManager`] owns the credential pair and the current [`Token`]. The
//! token is refreshed lazily: [`TokenManager::ensure_fresh`] runs before
//! every data request and only talks to the auth server when no token is
//! held or the one held has 60 seconds or less left.

use byma_core::{Config, Error, Result, TOKEN_REFRESH_MARGIN_SECS};
use byma_models::TokenResponse;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Bearer token with its granted scopes and absolute expiry
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
  /// Token value sent in the `Authorization` header
  pub access_token: String,
  /// Token type reported by the auth server
  pub token_type: String,
  /// Endpoint segments this token may access
  pub scopes: Vec<String>,
  /// Absolute expiry
  pub expires_at: DateTime<Utc>,
}

impl Token {
  /// Build a token from an exchange response; `issued_at` is when the
  /// request was sent.
  ///
  /// Fails with `Authentication` when `expires_in` does not fit a timestamp.
  pub fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Result<Self> {
    let expires_at = Duration::try_seconds(response.expires_in)
      .and_then(|validity| issued_at.checked_add_signed(validity))
      .ok_or_else(|| {
        Error::Authentication("Malformed token response: expires_in out of range".to_string())
      })?;

    Ok(Self {
      access_token: response.access_token,
      token_type: response.token_type,
      scopes: response.scope,
      expires_at,
    })
  }

  /// Validity left at `now` (negative once expired)
  pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
    self.expires_at - now
  }

  /// True when 60 seconds or less of validity remain at `now`
  pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
    self.remaining(now) <= Duration::seconds(TOKEN_REFRESH_MARGIN_SECS)
  }

  /// Whether `scope` was granted
  pub fn has_scope(&self, scope: &str) -> bool {
    self.scopes.iter().any(|s| s == scope)
  }
}

impl std::fmt::Debug for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Token")
      .field("access_token", &mask(&self.access_token))
      .field("token_type", &self.token_type)
      .field("scopes", &self.scopes)
      .field("expires_at", &self.expires_at)
      .finish()
  }
}

/// First and last four characters only
pub(crate) fn mask(secret: &str) -> String {
  let chars: Vec<char> = secret.chars().collect();
  if chars.len() <= 8 {
    return "****".to_string();
  }
  let head: String = chars[..4].iter().collect();
  let tail: String = chars[chars.len() - 4..].iter().collect();
  format!("{}...{}", head, tail)
}

/// Owns the credentials and serializes token refreshes
pub struct TokenManager {
  http: Client,
  auth_url: String,
  client_id: String,
  client_secret: String,
  state: Mutex<Option<Token>>,
}

impl TokenManager {
  /// Create a manager with no token held yet
  pub fn new(http: Client, config: &Config) -> Self {
    Self {
      http,
      auth_url: config.auth_url.clone(),
      client_id: config.client_id.clone(),
      client_secret: config.client_secret.clone(),
      state: Mutex::new(None),
    }
  }

  /// Return a token with more than 60 seconds of validity, exchanging the
  /// credentials first if needed.
  ///
  /// The lock is held across the exchange so concurrent callers wait for a
  /// single refresh. On failure the previously held token (if any) is left
  /// as it was.
  pub async fn ensure_fresh(&self) -> Result<Token> {
    let mut state = self.state.lock().await;

    let now = Utc::now();
    if let Some(token) = state.as_ref() {
      if !token.needs_refresh(now) {
        return Ok(token.clone());
      }
      debug!("Token has {}s left, refreshing", token.remaining(now).num_seconds());
    } else {
      debug!("No token held, requesting one");
    }

    let token = self.request_token().await?;
    *state = Some(token.clone());
    Ok(token)
  }

  /// Scopes granted to the currently held token
  pub async fn scopes(&self) -> Vec<String> {
    self.state.lock().await.as_ref().map(|t| t.scopes.clone()).unwrap_or_default()
  }

  /// Currently held token, without refreshing
  pub async fn current(&self) -> Option<Token> {
    self.state.lock().await.clone()
  }

  /// Drop the held token
  pub async fn clear(&self) {
    self.state.lock().await.take();
  }

  async fn request_token(&self) -> Result<Token> {
    let issued_at = Utc::now();
    let form = [
      ("grant_type", "client_credentials"),
      ("client_id", self.client_id.as_str()),
      ("client_secret", self.client_secret.as_str()),
    ];

    let response = self
      .http
      .post(&self.auth_url)
      .form(&form)
      .send()
      .await
      .map_err(|e| Error::Authentication(format!("Token request failed: {}", e)))?;

    let status = response.status();
    if status != StatusCode::OK {
      warn!("Token endpoint responded with status {}", status);
      return Err(Error::Authentication(format!(
        "Token endpoint responded with status {}",
        status.as_u16()
      )));
    }

    let body = response
      .text()
      .await
      .map_err(|e| Error::Authentication(format!("Failed to read token response: {}", e)))?;

    let parsed: TokenResponse = serde_json::from_str(&body)
      .map_err(|e| Error::Authentication(format!("Malformed token response: {}", e)))?;

    let token = Token::from_response(parsed, issued_at)?;
    info!(
      "Obtained access token {} (scopes: {}, expires {})",
      mask(&token.access_token),
      token.scopes.join(","),
      token.expires_at
    );
    Ok(token)
  }
}

impl std::fmt::Debug for TokenManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenManager")
      .field("auth_url", &self.auth_url)
      .field("client_id", &self.client_id)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn token_expiring_in(secs: i64, now: DateTime<Utc>) -> Token {
    Token {
      access_token: "abcdefghijklmnop".to_string(),
      token_type: "Bearer".to_string(),
      scopes: vec!["snapshot".to_string()],
      expires_at: now + Duration::seconds(secs),
    }
  }

  #[test]
  fn test_refresh_margin_boundary() {
    let now = Utc::now();
    assert!(token_expiring_in(60, now).needs_refresh(now));
    assert!(token_expiring_in(30, now).needs_refresh(now));
    assert!(token_expiring_in(-5, now).needs_refresh(now));
    assert!(!token_expiring_in(61, now).needs_refresh(now));
    assert!(!token_expiring_in(3600, now).needs_refresh(now));
  }

  #[test]
  fn test_from_response_sets_absolute_expiry() {
    let issued_at = Utc::now();
    let response = TokenResponse {
      access_token: "tok".to_string(),
      token_type: "Bearer".to_string(),
      scope: vec!["eod".to_string()],
      expires_in: 900,
    };
    let token = Token::from_response(response, issued_at).unwrap();
    assert_eq!(token.expires_at, issued_at + Duration::seconds(900));
    assert!(token.has_scope("eod"));
    assert!(!token.has_scope("snapshot"));
  }

  #[test]
  fn test_from_response_rejects_out_of_range_expiry() {
    for expires_in in [i64::MAX, 100_000_000_000_000_000, i64::MIN] {
      let response = TokenResponse {
        access_token: "tok".to_string(),
        token_type: "Bearer".to_string(),
        scope: vec![],
        expires_in,
      };
      let err = Token::from_response(response, Utc::now()).unwrap_err();
      assert!(matches!(err, Error::Authentication(_)), "expires_in {} accepted", expires_in);
    }
  }

  #[test]
  fn test_debug_masks_token() {
    let token = token_expiring_in(100, Utc::now());
    let rendered = format!("{:?}", token);
    assert!(rendered.contains("abcd...mnop"));
    assert!(!rendered.contains("abcdefghijklmnop"));
    assert_eq!(mask("short"), "****");
  }

  #[tokio::test]
  async fn test_new_manager_holds_no_token() {
    let config = Config::new("id", "secret", byma_core::Endpoint::RealTime);
    let manager = TokenManager::new(Client::new(), &config);
    assert!(manager.current().await.is_none());
    assert!(manager.scopes().await.is_empty());
  }
}
