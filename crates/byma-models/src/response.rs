//! Response envelope shared by every market data resource

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single market data record. Shape is resource specific.
pub type Record = Map<String, Value>;

/// `{"result": [...]}` envelope returned by every data endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataResponse {
  /// Records for the requested resource
  pub result: Vec<Record>,
}

impl DataResponse {
  /// Take the records, keeping only those matching `ticker` when given.
  /// An empty ticker means no filter.
  pub fn filter_by_ticker(self, ticker: Option<&str>) -> Vec<Record> {
    match ticker.filter(|t| !t.is_empty()) {
      Some(prefix) => filter_by_ticker(self.result, prefix),
      None => self.result,
    }
  }
}

/// Keep records whose `security_id` starts with `prefix`.
///
/// Records without a string `security_id` are dropped.
pub fn filter_by_ticker(records: Vec<Record>, prefix: &str) -> Vec<Record> {
  records
    .into_iter()
    .filter(|record| {
      record
        .get("security_id")
        .and_then(Value::as_str)
        .is_some_and(|id| id.starts_with(prefix))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn envelope(ids: &[&str]) -> DataResponse {
    let body = json!({
      "result": ids.iter().map(|id| json!({"security_id": id, "price": 1.0})).collect::<Vec<_>>()
    });
    serde_json::from_value(body).unwrap()
  }

  fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().filter_map(|r| r["security_id"].as_str()).collect()
  }

  #[test]
  fn test_filter_by_prefix() {
    let records = envelope(&["GGAL", "GGALX", "PAMP"]).filter_by_ticker(Some("GGAL"));
    assert_eq!(ids(&records), vec!["GGAL", "GGALX"]);
  }

  #[test]
  fn test_no_filter_returns_everything() {
    let records = envelope(&["GGAL", "GGALX", "PAMP"]).filter_by_ticker(None);
    assert_eq!(records.len(), 3);
  }

  #[test]
  fn test_empty_ticker_is_no_filter() {
    let body = json!({
      "result": [{"security_id": "GGAL"}, {"symbol": "X"}, {"security_id": null}]
    });
    let response: DataResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.filter_by_ticker(Some("")).len(), 3);
  }

  #[test]
  fn test_records_without_security_id_are_dropped() {
    let mut records = envelope(&["YPFD"]).result;
    records.push(json!({"symbol": "YPFD"}).as_object().cloned().unwrap());
    records.push(json!({"security_id": 42}).as_object().cloned().unwrap());
    assert_eq!(filter_by_ticker(records, "YPF").len(), 1);
  }

  #[test]
  fn test_missing_result_is_rejected() {
    assert!(serde_json::from_str::<DataResponse>(r#"{"data": []}"#).is_err());
  }
}
