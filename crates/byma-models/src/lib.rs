//! # byma-models
//!
//! Request and response models for the BYMADATA market data API.
//!
//! Market data records are kept opaque ([`Record`]): their shape is
//! resource specific and this layer only reads `security_id` for ticker
//! filtering. Requests are described by one query struct per resource, each
//! carrying the upstream defaults.
//!
//! ## Usage
//!
//! ```ignore
//! use byma_models::{EquityQuery, DataResponse};
//!
//! let query = EquityQuery::default().group("CEDEARS").ticker("AAPL");
//! let envelope: DataResponse = serde_json::from_str(&response_json)?;
//! let records = envelope.filter_by_ticker(query.ticker_filter());
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod query;
pub mod response;

pub use auth::{Scopes, TokenResponse};
pub use query::*;
pub use response::{filter_by_ticker, DataResponse, Record};
