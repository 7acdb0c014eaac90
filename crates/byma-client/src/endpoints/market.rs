//! Indices, turnover and intraday trades

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use byma_core::{ResourcePath, Result};
use byma_models::{DataResponse, IntradayQuery, Record};
use tracing::instrument;

/// Market-wide data: indices, turnover and intraday trades
pub struct MarketEndpoints<'a> {
  transport: &'a Transport,
}

impl<'a> MarketEndpoints<'a> {
  /// Create a new market endpoints instance
  pub fn new(transport: &'a Transport) -> Self {
    Self { transport }
  }

  /// Index levels
  #[instrument(skip(self))]
  pub async fn indices(&self) -> Result<Vec<Record>> {
    let response: DataResponse = self.transport().get(ResourcePath::Indices, &[]).await?;
    Ok(response.result)
  }

  /// Traded volume by segment
  #[instrument(skip(self))]
  pub async fn turnover(&self) -> Result<Vec<Record>> {
    let response: DataResponse = self.transport().get(ResourcePath::Turnover, &[]).await?;
    Ok(response.result)
  }

  /// Trades of the day for one instrument.
  ///
  /// The instrument is `query.security_id` when set, otherwise
  /// `TICKER-SETTLE-FORM-MARKET-CURRENCY`, e.g. `GGAL-0003-C-CT-ARS`.
  #[instrument(skip(self))]
  pub async fn intraday(&self, query: &IntradayQuery) -> Result<Vec<Record>> {
    self.fetch_records(query).await
  }
}

impl_endpoint_base!(MarketEndpoints);
