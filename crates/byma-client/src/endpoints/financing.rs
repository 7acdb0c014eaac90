//! Repo, trading lot and securities loan books

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use byma_core::Result;
use byma_models::{LoansQuery, Record, RepoQuery, TradingLotsQuery};
use tracing::instrument;

/// Collateralized repos, trading lots and securities loans
pub struct FinancingEndpoints<'a> {
  transport: &'a Transport,
}

impl<'a> FinancingEndpoints<'a> {
  /// Create a new financing endpoints instance
  pub fn new(transport: &'a Transport) -> Self {
    Self { transport }
  }

  /// Collateralized repos (cauciones)
  #[instrument(skip(self))]
  pub async fn repos(&self, query: &RepoQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }

  /// Term trades by lots (`PXL`)
  #[instrument(skip(self))]
  pub async fn trading_lots(&self, query: &TradingLotsQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }

  /// Securities lending: short sale (`PRESTAMOSV`) or settlement failure
  /// (`PRESTAMOSL`)
  #[instrument(skip(self))]
  pub async fn loans(&self, query: &LoansQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }
}

impl_endpoint_base!(FinancingEndpoints);
