//! Per-resource request descriptions.
//!
//! Every query struct starts from the upstream defaults via [`Default`] and
//! exposes chainable setters. A query knows which resource it targets, which
//! of its arguments go through schema validation and how they are spelled on
//! the wire.

use byma_core::{Error, ResourcePath, Result};

/// A request against one market data resource
pub trait ResourceQuery {
  /// Target resource
  const RESOURCE: ResourcePath;

  /// Non-null arguments to validate against the resource schema. The
  /// ticker filter is not part of the schema and is never included.
  fn validated_params(&self) -> Vec<(&'static str, &str)>;

  /// Query string parameters using upstream field names
  fn query_params(&self) -> Result<Vec<(&'static str, String)>>;

  /// Prefix applied to `security_id` after the response arrives
  fn ticker_filter(&self) -> Option<&str> {
    None
  }
}

macro_rules! query_setters {
  ($query:ident { $($field:ident),* $(,)? }) => {
    impl $query {
      $(
        #[doc = concat!("Set `", stringify!($field), "`")]
        pub fn $field(mut self, value: impl Into<String>) -> Self {
          self.$field = value.into();
          self
        }
      )*
    }
  };
}

macro_rules! optional_setters {
  ($query:ident { $($field:ident),* $(,)? }) => {
    impl $query {
      $(
        #[doc = concat!("Set `", stringify!($field), "`")]
        pub fn $field(mut self, value: impl Into<String>) -> Self {
          self.$field = Some(value.into());
          self
        }
      )*
    }
  };
}

/// Equities (`equity`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityQuery {
  pub ticker: Option<String>,
  pub settle_period: String,
  pub group: String,
  pub subgroup: Option<String>,
  pub operative_form: String,
  pub currency: String,
}

impl Default for EquityQuery {
  fn default() -> Self {
    Self {
      ticker: None,
      settle_period: "0003".to_string(),
      group: "ACCIONES".to_string(),
      subgroup: None,
      operative_form: "CONTADO".to_string(),
      currency: "ARS".to_string(),
    }
  }
}

query_setters!(EquityQuery { settle_period, group, operative_form, currency });
optional_setters!(EquityQuery { ticker, subgroup });

impl ResourceQuery for EquityQuery {
  const RESOURCE: ResourcePath = ResourcePath::Equity;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    let mut params = vec![
      ("settle_period", self.settle_period.as_str()),
      ("group", self.group.as_str()),
      ("operative_form", self.operative_form.as_str()),
      ("currency", self.currency.as_str()),
    ];
    if let Some(subgroup) = &self.subgroup {
      params.push(("subgroup", subgroup.as_str()));
    }
    params
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    let mut params = vec![("group", self.group.clone())];
    if let Some(subgroup) = &self.subgroup {
      params.push(("subGroup", subgroup.clone()));
    }
    params.push(("settlPeriod", self.settle_period.clone()));
    params.push(("operativeForm", self.operative_form.clone()));
    params.push(("currency", self.currency.clone()));
    Ok(params)
  }

  fn ticker_filter(&self) -> Option<&str> {
    self.ticker.as_deref()
  }
}

/// Fixed income (`fixed_income`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIncomeQuery {
  pub ticker: Option<String>,
  pub settle_period: String,
  pub group: String,
  pub market: String,
  pub operative_form: String,
  pub currency: String,
}

impl Default for FixedIncomeQuery {
  fn default() -> Self {
    Self {
      ticker: None,
      settle_period: "0003".to_string(),
      group: "TITULOSPUBLICOS".to_string(),
      market: "PPT".to_string(),
      operative_form: "CONTADO".to_string(),
      currency: "ARS".to_string(),
    }
  }
}

query_setters!(FixedIncomeQuery { settle_period, group, market, operative_form, currency });
optional_setters!(FixedIncomeQuery { ticker });

impl ResourceQuery for FixedIncomeQuery {
  const RESOURCE: ResourcePath = ResourcePath::FixedIncome;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    vec![
      ("settle_period", self.settle_period.as_str()),
      ("group", self.group.as_str()),
      ("market", self.market.as_str()),
      ("operative_form", self.operative_form.as_str()),
      ("currency", self.currency.as_str()),
    ]
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![
      ("group", self.group.clone()),
      ("settlPeriod", self.settle_period.clone()),
      ("market", self.market.clone()),
      ("operativeForm", self.operative_form.clone()),
      ("currency", self.currency.clone()),
    ])
  }

  fn ticker_filter(&self) -> Option<&str> {
    self.ticker.as_deref()
  }
}

/// Futures (`futures`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturesQuery {
  pub group: String,
}

impl Default for FuturesQuery {
  fn default() -> Self {
    Self { group: "FUTMONEDAS".to_string() }
  }
}

query_setters!(FuturesQuery { group });

impl ResourceQuery for FuturesQuery {
  const RESOURCE: ResourcePath = ResourcePath::Futures;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    vec![("group", self.group.as_str())]
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("group", self.group.clone())])
  }
}

/// Group sent with every options request
pub const OPTIONS_GROUP: &str = "OPCIONES";

/// Options (`options`). The group is fixed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsQuery {
  pub ticker: Option<String>,
  pub currency: String,
}

impl Default for OptionsQuery {
  fn default() -> Self {
    Self { ticker: None, currency: "ARS".to_string() }
  }
}

query_setters!(OptionsQuery { currency });
optional_setters!(OptionsQuery { ticker });

impl ResourceQuery for OptionsQuery {
  const RESOURCE: ResourcePath = ResourcePath::Options;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    vec![("group", OPTIONS_GROUP), ("currency", self.currency.as_str())]
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("group", OPTIONS_GROUP.to_string()), ("currency", self.currency.clone())])
  }

  fn ticker_filter(&self) -> Option<&str> {
    self.ticker.as_deref()
  }
}

/// Collateralized repos (`collateralized_repos`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoQuery {
  pub group: String,
}

impl Default for RepoQuery {
  fn default() -> Self {
    Self { group: "CAUCIONES".to_string() }
  }
}

query_setters!(RepoQuery { group });

impl ResourceQuery for RepoQuery {
  const RESOURCE: ResourcePath = ResourcePath::CollateralizedRepos;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    vec![("group", self.group.as_str())]
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("group", self.group.clone())])
  }
}

/// Trading lots (`trading_lots`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingLotsQuery {
  pub group: String,
  pub currency: String,
}

impl Default for TradingLotsQuery {
  fn default() -> Self {
    Self { group: "PXL".to_string(), currency: "ARS".to_string() }
  }
}

query_setters!(TradingLotsQuery { group, currency });

impl ResourceQuery for TradingLotsQuery {
  const RESOURCE: ResourcePath = ResourcePath::TradingLots;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    vec![("group", self.group.as_str()), ("currency", self.currency.as_str())]
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("group", self.group.clone()), ("currency", self.currency.clone())])
  }
}

/// Securities loans (`loans`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoansQuery {
  pub group: String,
  pub currency: String,
}

impl Default for LoansQuery {
  fn default() -> Self {
    Self { group: "PRESTAMOSV".to_string(), currency: "ARS".to_string() }
  }
}

query_setters!(LoansQuery { group, currency });

impl ResourceQuery for LoansQuery {
  const RESOURCE: ResourcePath = ResourcePath::Loans;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    vec![("group", self.group.as_str()), ("currency", self.currency.as_str())]
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("group", self.group.clone()), ("currency", self.currency.clone())])
  }
}

/// Intraday trades for a single instrument (`intraday`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntradayQuery {
  pub ticker: Option<String>,
  pub settle_period: String,
  pub currency: String,
  pub market: String,
  pub operative_form: String,
  pub security_id: Option<String>,
}

impl Default for IntradayQuery {
  fn default() -> Self {
    Self {
      ticker: None,
      settle_period: "0003".to_string(),
      currency: "ARS".to_string(),
      market: "CT".to_string(),
      operative_form: "C".to_string(),
      security_id: None,
    }
  }
}

query_setters!(IntradayQuery { settle_period, currency, market, operative_form });
optional_setters!(IntradayQuery { ticker, security_id });

impl IntradayQuery {
  /// Instrument identifier: the explicit `security_id`, or
  /// `TICKER-SETTLE-FORM-MARKET-CURRENCY` built from the parts.
  pub fn instrument(&self) -> Result<String> {
    if let Some(security_id) = self.security_id.as_deref().filter(|s| !s.is_empty()) {
      return Ok(security_id.to_string());
    }

    match self.ticker.as_deref().filter(|s| !s.is_empty()) {
      Some(ticker) => Ok(format!(
        "{}-{}-{}-{}-{}",
        ticker, self.settle_period, self.operative_form, self.market, self.currency
      )),
      None => Err(Error::InvalidArgument(
        "Intraday requests need either a ticker or a security_id".to_string(),
      )),
    }
  }
}

impl ResourceQuery for IntradayQuery {
  const RESOURCE: ResourcePath = ResourcePath::Intraday;

  fn validated_params(&self) -> Vec<(&'static str, &str)> {
    Vec::new()
  }

  fn query_params(&self) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![("instrument", self.instrument()?)])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use byma_core::validate_params;

  #[test]
  fn test_defaults_pass_validation() {
    fn check<Q: ResourceQuery + Default>() {
      let query = Q::default();
      assert!(
        validate_params(Q::RESOURCE, &query.validated_params()).is_ok(),
        "defaults for {} failed validation",
        Q::RESOURCE
      );
    }

    check::<EquityQuery>();
    check::<FixedIncomeQuery>();
    check::<FuturesQuery>();
    check::<OptionsQuery>();
    check::<RepoQuery>();
    check::<TradingLotsQuery>();
    check::<LoansQuery>();
  }

  #[test]
  fn test_equity_wire_names() {
    let query = EquityQuery::default().subgroup("LIDER").settle_period("0000");
    let params = query.query_params().unwrap();
    assert_eq!(
      params,
      vec![
        ("group", "ACCIONES".to_string()),
        ("subGroup", "LIDER".to_string()),
        ("settlPeriod", "0000".to_string()),
        ("operativeForm", "CONTADO".to_string()),
        ("currency", "ARS".to_string()),
      ]
    );
  }

  #[test]
  fn test_ticker_is_not_validated() {
    let query = EquityQuery::default().ticker("anything at all");
    assert!(query.validated_params().iter().all(|(name, _)| *name != "ticker"));
    assert_eq!(query.ticker_filter(), Some("anything at all"));
  }

  #[test]
  fn test_options_sends_fixed_group() {
    let params = OptionsQuery::default().currency("USD").query_params().unwrap();
    assert_eq!(params[0], ("group", "OPCIONES".to_string()));
    assert_eq!(params[1], ("currency", "USD".to_string()));
  }

  #[test]
  fn test_intraday_builds_instrument_from_parts() {
    let query = IntradayQuery::default().ticker("GGAL");
    assert_eq!(query.instrument().unwrap(), "GGAL-0003-C-CT-ARS");
  }

  #[test]
  fn test_intraday_prefers_security_id() {
    let query = IntradayQuery::default().ticker("GGAL").security_id("AL30-0001-C-CT-USD");
    assert_eq!(
      query.query_params().unwrap(),
      vec![("instrument", "AL30-0001-C-CT-USD".to_string())]
    );
  }

  #[test]
  fn test_intraday_without_identifier_fails() {
    let err = IntradayQuery::default().instrument().unwrap_err();
    assert!(err.is_argument_error());
  }
}
