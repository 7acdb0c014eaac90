//! Futures books

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use byma_core::Result;
use byma_models::{FuturesQuery, Record};
use tracing::instrument;

/// Futures endpoints
pub struct DerivativesEndpoints<'a> {
  transport: &'a Transport,
}

impl<'a> DerivativesEndpoints<'a> {
  /// Create a new derivatives endpoints instance
  pub fn new(transport: &'a Transport) -> Self {
    Self { transport }
  }

  /// Currency futures (`FUTMONEDAS`) or index and equity futures
  /// (`FUTINDyTIT`)
  #[instrument(skip(self))]
  pub async fn futures(&self, query: &FuturesQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }
}

impl_endpoint_base!(DerivativesEndpoints);
