//! Resource operations, grouped by market segment.
//!
//! Every operation follows the same path: validate the query against its
//! resource schema, build the wire parameters, dispatch through the
//! transport, unwrap the `result` envelope and apply the optional ticker
//! filter.

pub mod derivatives;
pub mod financing;
pub mod market;
pub mod securities;

use crate::transport::Transport;
use byma_core::{validate_params, Result};
use byma_models::{DataResponse, Record, ResourceQuery};

/// Base trait for endpoint implementations
///
/// Provides the shared validate-dispatch-filter sequence used by every
/// endpoint group.
pub(crate) trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Transport;

  /// Validate `query`, dispatch it and return the (filtered) records
  async fn fetch_records<Q: ResourceQuery + Sync>(&self, query: &Q) -> Result<Vec<Record>> {
    validate_params(Q::RESOURCE, &query.validated_params())?;
    let params = query.query_params()?;

    let response: DataResponse = self.transport().get(Q::RESOURCE, &params).await?;
    Ok(response.filter_by_ticker(query.ticker_filter()))
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name<'_> {
      fn transport(&self) -> &Transport {
        self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
mod tests {
  use super::*;
  use byma_models::EquityQuery;

  struct Probe<'a> {
    transport: &'a Transport,
  }

  impl_endpoint_base!(Probe);

  #[tokio::test]
  async fn test_validation_runs_before_dispatch() {
    let transport = Transport::new_mock();
    let probe = Probe { transport: &transport };

    let err = probe.fetch_records(&EquityQuery::default().currency("BRL")).await.unwrap_err();

    assert!(err.is_argument_error());
    assert!(err.to_string().contains("currency"));
    // No token exchange was attempted
    assert!(transport.auth().current().await.is_none());
  }
}
