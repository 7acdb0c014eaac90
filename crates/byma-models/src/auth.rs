//! OAuth token exchange payloads

use serde::{Deserialize, Deserializer, Serialize};

/// Body of a successful client credentials exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
  /// Bearer token value
  pub access_token: String,

  /// Token type, normally `Bearer`
  #[serde(default = "default_token_type")]
  pub token_type: String,

  /// Scopes granted to this token (endpoint segments)
  #[serde(default, deserialize_with = "deserialize_scopes")]
  pub scope: Scopes,

  /// Validity in seconds from issue
  pub expires_in: i64,
}

/// Granted scopes
pub type Scopes = Vec<String>;

fn default_token_type() -> String {
  "Bearer".to_string()
}

/// Accepts either a JSON list or an RFC 6749 space-delimited string
fn deserialize_scopes<'de, D>(deserializer: D) -> Result<Scopes, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum ScopeField {
    List(Vec<String>),
    Delimited(String),
  }

  Ok(match Option::<ScopeField>::deserialize(deserializer)? {
    Some(ScopeField::List(list)) => list,
    Some(ScopeField::Delimited(s)) => s.split_whitespace().map(str::to_string).collect(),
    None => Vec::new(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_token_response_with_scope_list() {
    let json = r#"{
      "access_token": "abc123",
      "token_type": "Bearer",
      "scope": ["snapshot", "eod"],
      "expires_in": 3600
    }"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.scope, vec!["snapshot", "eod"]);
    assert_eq!(token.expires_in, 3600);
  }

  #[test]
  fn test_token_response_with_delimited_scope() {
    let json = r#"{"access_token": "abc", "scope": "delay20 eod", "expires_in": 60}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.scope, vec!["delay20", "eod"]);
  }

  #[test]
  fn test_token_response_requires_access_token() {
    let json = r#"{"token_type": "Bearer", "expires_in": 60}"#;
    assert!(serde_json::from_str::<TokenResponse>(json).is_err());
  }
}
