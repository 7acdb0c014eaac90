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

//! Endpoint selector and resource allow-list.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Market data feed the client is bound to. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
  /// Real-time snapshots
  #[serde(rename = "snapshot")]
  RealTime,
  /// Snapshots delayed by 20 minutes
  #[serde(rename = "delay20")]
  Delayed,
  /// End-of-day snapshots
  #[serde(rename = "eod")]
  EndOfDay,
}

impl Endpoint {
  /// All recognized endpoints
  pub const ALL: [Endpoint; 3] = [Endpoint::RealTime, Endpoint::Delayed, Endpoint::EndOfDay];

  /// URL segment, also the scope name granted by the auth server
  pub fn segment(&self) -> &'static str {
    match self {
      Endpoint::RealTime => "snapshot",
      Endpoint::Delayed => "delay20",
      Endpoint::EndOfDay => "eod",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.segment())
  }
}

impl FromStr for Endpoint {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Endpoint::ALL.into_iter().find(|e| e.segment() == s).ok_or_else(|| {
      let valid: Vec<&str> = Endpoint::ALL.iter().map(|e| e.segment()).collect();
      Error::InvalidArgument(format!(
        "Invalid endpoint parameter: {}. Must be one of: {}",
        s,
        valid.join(", ")
      ))
    })
  }
}

/// Resource paths served under each endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourcePath {
  Equity,
  FixedIncome,
  Futures,
  Options,
  CollateralizedRepos,
  TradingLots,
  Loans,
  Indices,
  Turnover,
  Intraday,
}

impl ResourcePath {
  /// The full allow-list
  pub const ALL: [ResourcePath; 10] = [
    ResourcePath::Equity,
    ResourcePath::FixedIncome,
    ResourcePath::Futures,
    ResourcePath::Options,
    ResourcePath::CollateralizedRepos,
    ResourcePath::TradingLots,
    ResourcePath::Loans,
    ResourcePath::Indices,
    ResourcePath::Turnover,
    ResourcePath::Intraday,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      ResourcePath::Equity => "equity",
      ResourcePath::FixedIncome => "fixed_income",
      ResourcePath::Futures => "futures",
      ResourcePath::Options => "options",
      ResourcePath::CollateralizedRepos => "collateralized_repos",
      ResourcePath::TradingLots => "trading_lots",
      ResourcePath::Loans => "loans",
      ResourcePath::Indices => "indices",
      ResourcePath::Turnover => "turnover",
      ResourcePath::Intraday => "intraday",
    }
  }

  /// Whether results carry a `security_id` that can be prefix filtered
  pub fn is_ticker_bearing(&self) -> bool {
    matches!(self, ResourcePath::Equity | ResourcePath::FixedIncome | ResourcePath::Options)
  }
}

impl std::fmt::Display for ResourcePath {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for ResourcePath {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    ResourcePath::ALL.into_iter().find(|p| p.as_str() == s).ok_or_else(|| {
      let valid: Vec<&str> = ResourcePath::ALL.iter().map(|p| p.as_str()).collect();
      Error::InvalidArgument(format!("Invalid path: {}. Must be one of: {}", s, valid.join(", ")))
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_segments() {
    assert_eq!(Endpoint::RealTime.to_string(), "snapshot");
    assert_eq!(Endpoint::Delayed.to_string(), "delay20");
    assert_eq!(Endpoint::EndOfDay.to_string(), "eod");
    assert_eq!("delay20".parse::<Endpoint>().unwrap(), Endpoint::Delayed);
  }

  #[test]
  fn test_unknown_endpoint_is_argument_error() {
    let err = "live".parse::<Endpoint>().unwrap_err();
    assert!(err.is_argument_error());
    assert!(err.to_string().contains("snapshot, delay20, eod"));
  }

  #[test]
  fn test_resource_path_allow_list() {
    for path in ResourcePath::ALL {
      assert_eq!(path.as_str().parse::<ResourcePath>().unwrap(), path);
    }
    assert!(matches!("bonds".parse::<ResourcePath>(), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn test_endpoint_serde_uses_segment() {
    let json = serde_json::to_string(&Endpoint::EndOfDay).unwrap();
    assert_eq!(json, "\"eod\"");
  }
}
