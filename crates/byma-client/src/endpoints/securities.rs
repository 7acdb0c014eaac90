//! Equity, fixed income and options books

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use byma_core::Result;
use byma_models::{EquityQuery, FixedIncomeQuery, OptionsQuery, Record};
use tracing::instrument;

/// Equities, fixed income and options endpoints
///
/// These resources carry a `security_id` per record, so each query accepts
/// an optional ticker prefix filter.
pub struct SecuritiesEndpoints<'a> {
  transport: &'a Transport,
}

impl<'a> SecuritiesEndpoints<'a> {
  /// Create a new securities endpoints instance
  pub fn new(transport: &'a Transport) -> Self {
    Self { transport }
  }

  /// Equity books (shares, CEDEARs, mutual funds)
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use byma_client::{BymaClient, EquityQuery};
  /// # async fn run(client: BymaClient) -> byma_client::Result<()> {
  /// // Leading panel shares, spot, settled T+0, filtered to GGAL*
  /// let query = EquityQuery::default()
  ///   .subgroup("LIDER")
  ///   .settle_period("0000")
  ///   .ticker("GGAL");
  /// let books = client.securities().equity(&query).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn equity(&self, query: &EquityQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }

  /// Government and corporate bonds, bills and other fixed income
  #[instrument(skip(self))]
  pub async fn fixed_income(&self, query: &FixedIncomeQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }

  /// Listed options
  #[instrument(skip(self))]
  pub async fn options(&self, query: &OptionsQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }
}

impl_endpoint_base!(SecuritiesEndpoints);
