//! # byma-client
//!
//! An async client for the BYMADATA market data REST API.
//!
//! ## Features
//!
//! - **Client credentials auth**: the bearer token is fetched on construction
//!   and refreshed lazily whenever it is missing or within 60 seconds of
//!   expiry
//! - **Validation first**: every resource call checks its arguments against
//!   the upstream enumerations before anything reaches the network
//! - **Explicit lifetime**: [`BymaClient::close`] releases the connection pool
//!   and the cached token
//!
//! ## Usage
//!
//! ```rust,no_run
//! use byma_client::BymaClient;
//! use byma_models::EquityQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BymaClient::delayed("client-id", "client-secret").await?;
//!
//!     let cedears = client
//!         .securities()
//!         .equity(&EquityQuery::default().group("CEDEARS").ticker("AAPL"))
//!         .await?;
//!     println!("{} AAPL cedear books", cedears.len());
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, byma_core::Error>`. Argument and validation
//! problems surface as `Error::InvalidArgument` without any request being
//! sent; HTTP failures map to `Client`, `UnexpectedResponse` or
//! `Authentication`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use byma_core::{Config, Endpoint, Error, ResourcePath, Result};
pub use byma_models::*;
pub use client::BymaClient;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  derivatives::DerivativesEndpoints, financing::FinancingEndpoints, market::MarketEndpoints,
  securities::SecuritiesEndpoints,
};
