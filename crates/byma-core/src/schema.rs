//! Parameter enumerations per resource and the validator that checks
//! request arguments against them.
//!
//! The table is plain static data: each resource maps to a [`ParamSchema`]
//! listing required and optional parameters together with the closed set of
//! values each one accepts. Validation never touches the network.

use crate::error::{Error, Result};
use crate::types::ResourcePath;

/// A parameter name together with its allowed values
pub type ParamSpec = (&'static str, &'static [&'static str]);

/// Required and optional parameters accepted by a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSchema {
  pub required: &'static [ParamSpec],
  pub optional: &'static [ParamSpec],
}

impl ParamSchema {
  /// Look up the allowed values for `name`
  pub fn allowed(&self, name: &str) -> Option<&'static [&'static str]> {
    self
      .required
      .iter()
      .chain(self.optional.iter())
      .find(|(param, _)| *param == name)
      .map(|(_, values)| *values)
  }
}

const CURRENCY: &[&str] = &["ARS", "USD", "EXT"];
const SETTLE_PERIOD: &[&str] = &["0000", "0001", "0002", "0003"];
const OPERATIVE_FORM: &[&str] = &["CONTADO", "GRIS"];

const EQUITY: ParamSchema = ParamSchema {
  required: &[("group", &["ACCIONES", "CEDEARS", "FONDOSINVERSION"]), ("operative_form", OPERATIVE_FORM)],
  optional: &[
    ("subgroup", &["GENERAL", "LIDER"]),
    ("currency", CURRENCY),
    ("settle_period", SETTLE_PERIOD),
  ],
};

const FIXED_INCOME: ParamSchema = ParamSchema {
  required: &[
    (
      "group",
      &[
        "TITULOSPUBLICOS",
        "BONOSCONSOLIDACION",
        "LETRAS",
        "LETRASTESORO",
        "TITULOSDEUDA",
        "CERTPARTICIPACION",
        "OBLIGACIONESNEGOC",
        "ONPYMES",
      ],
    ),
    ("market", &["PPT", "SENEBI"]),
    ("operative_form", OPERATIVE_FORM),
  ],
  optional: &[("currency", CURRENCY), ("settle_period", SETTLE_PERIOD)],
};

const FUTURES: ParamSchema =
  ParamSchema { required: &[("group", &["FUTMONEDAS", "FUTINDyTIT"])], optional: &[] };

const OPTIONS: ParamSchema =
  ParamSchema { required: &[("group", &["OPCIONES"]), ("currency", CURRENCY)], optional: &[] };

const REPOS: ParamSchema = ParamSchema { required: &[("group", &["CAUCIONES"])], optional: &[] };

const TRADING_LOTS: ParamSchema =
  ParamSchema { required: &[("group", &["PXL"]), ("currency", CURRENCY)], optional: &[] };

const LOANS: ParamSchema = ParamSchema {
  required: &[("group", &["PRESTAMOSV", "PRESTAMOSL"]), ("currency", CURRENCY)],
  optional: &[],
};

/// Schema for a resource, `None` for resources without enumerated parameters
pub fn schema_for(resource: ResourcePath) -> Option<&'static ParamSchema> {
  match resource {
    ResourcePath::Equity => Some(&EQUITY),
    ResourcePath::FixedIncome => Some(&FIXED_INCOME),
    ResourcePath::Futures => Some(&FUTURES),
    ResourcePath::Options => Some(&OPTIONS),
    ResourcePath::CollateralizedRepos => Some(&REPOS),
    ResourcePath::TradingLots => Some(&TRADING_LOTS),
    ResourcePath::Loans => Some(&LOANS),
    ResourcePath::Indices | ResourcePath::Turnover | ResourcePath::Intraday => None,
  }
}

/// Validate supplied (non-null) arguments for `resource`.
///
/// Fails with [`Error::InvalidArgument`] when a required parameter is
/// missing (naming all of them), when a name is unknown, or when a value is
/// outside its enumeration (naming the parameter, the value and the allowed
/// set).
pub fn validate_params(resource: ResourcePath, supplied: &[(&str, &str)]) -> Result<()> {
  let Some(schema) = schema_for(resource) else {
    return match supplied.first() {
      Some((name, _)) => Err(Error::InvalidArgument(format!("Unknown parameter: {}", name))),
      None => Ok(()),
    };
  };

  let missing: Vec<&str> = schema
    .required
    .iter()
    .map(|(name, _)| *name)
    .filter(|name| !supplied.iter().any(|(key, _)| key == name))
    .collect();
  if !missing.is_empty() {
    return Err(Error::InvalidArgument(format!(
      "Missing required parameters: {}",
      missing.join(", ")
    )));
  }

  for (name, value) in supplied {
    let allowed = schema
      .allowed(name)
      .ok_or_else(|| Error::InvalidArgument(format!("Unknown parameter: {}", name)))?;

    if !allowed.contains(value) {
      return Err(Error::InvalidArgument(format!(
        "Invalid value for {} parameter: {}. Must be one of {}",
        name,
        value,
        allowed.join(", ")
      )));
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn message(err: Error) -> String {
    match err {
      Error::InvalidArgument(msg) => msg,
      other => panic!("expected InvalidArgument, got {:?}", other),
    }
  }

  #[test]
  fn accepts_defaults_for_every_schema_resource() {
    let cases: &[(ResourcePath, &[(&str, &str)])] = &[
      (
        ResourcePath::Equity,
        &[("group", "ACCIONES"), ("operative_form", "CONTADO"), ("currency", "ARS"), ("settle_period", "0003")],
      ),
      (
        ResourcePath::FixedIncome,
        &[("group", "TITULOSPUBLICOS"), ("market", "PPT"), ("operative_form", "CONTADO")],
      ),
      (ResourcePath::Futures, &[("group", "FUTMONEDAS")]),
      (ResourcePath::Options, &[("group", "OPCIONES"), ("currency", "ARS")]),
      (ResourcePath::CollateralizedRepos, &[("group", "CAUCIONES")]),
      (ResourcePath::TradingLots, &[("group", "PXL"), ("currency", "ARS")]),
      (ResourcePath::Loans, &[("group", "PRESTAMOSL"), ("currency", "USD")]),
    ];

    for (resource, params) in cases {
      assert!(validate_params(*resource, params).is_ok(), "{} rejected defaults", resource);
    }
  }

  #[test]
  fn rejects_value_outside_enumeration() {
    let err = validate_params(
      ResourcePath::Equity,
      &[("group", "BONOS"), ("operative_form", "CONTADO")],
    )
    .unwrap_err();

    let msg = message(err);
    assert!(msg.contains("group"));
    assert!(msg.contains("BONOS"));
    assert!(msg.contains("ACCIONES, CEDEARS, FONDOSINVERSION"));
  }

  #[test]
  fn rejects_invalid_optional_value() {
    let err = validate_params(
      ResourcePath::Equity,
      &[("group", "CEDEARS"), ("operative_form", "GRIS"), ("subgroup", "PANEL")],
    )
    .unwrap_err();
    assert!(message(err).starts_with("Invalid value for subgroup parameter: PANEL"));
  }

  #[test]
  fn names_all_missing_required_parameters() {
    let err = validate_params(ResourcePath::FixedIncome, &[("group", "LETRAS")]).unwrap_err();
    assert_eq!(message(err), "Missing required parameters: market, operative_form");
  }

  #[test]
  fn rejects_unknown_parameter() {
    let err = validate_params(ResourcePath::Futures, &[("group", "FUTMONEDAS"), ("currency", "ARS")])
      .unwrap_err();
    assert_eq!(message(err), "Unknown parameter: currency");
  }

  #[test]
  fn schemaless_resources_accept_only_empty_input() {
    assert!(validate_params(ResourcePath::Indices, &[]).is_ok());
    assert!(validate_params(ResourcePath::Turnover, &[("group", "X")]).is_err());
  }

  #[test]
  fn allowed_lookup_covers_optional_fields() {
    let schema = schema_for(ResourcePath::Equity).unwrap();
    assert_eq!(schema.allowed("settle_period"), Some(SETTLE_PERIOD));
    assert_eq!(schema.allowed("ticker"), None);
  }
}
