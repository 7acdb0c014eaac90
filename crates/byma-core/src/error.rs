use thiserror::Error;

/// The main error type for byma-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Bad constructor argument, unknown resource path or a parameter that
  /// failed validation. Always raised before any network activity.
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// Client credential exchange failed
  #[error("Authentication failed: {0}")]
  Authentication(String),

  /// The selected endpoint is not among the scopes granted to the token
  #[error("{0}")]
  Permission(String),

  /// 400 responses and transport level failures
  #[error("{0}")]
  Client(String),

  /// Any status other than 200 or 400
  #[error("Received unexpected status code: {0}")]
  UnexpectedResponse(u16),

  /// Response body could not be decoded
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// Status code carried by an unexpected-response error
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::UnexpectedResponse(status) => Some(*status),
      _ => None,
    }
  }

  /// True for errors raised before any request was sent
  pub fn is_argument_error(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }
}

/// Result type alias for byma-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_error_displays_server_description() {
    let err = Error::Client("bad request".to_string());
    assert_eq!(err.to_string(), "bad request");
  }

  #[test]
  fn unexpected_response_carries_status() {
    let err = Error::UnexpectedResponse(500);
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
    assert!(!err.is_argument_error());
  }
}
