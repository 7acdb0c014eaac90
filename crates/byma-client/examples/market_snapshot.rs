//! Market snapshot example
//!
//! Pulls a quick overview of the local market: leading panel shares, a few
//! sovereign bonds, currency futures, repo rates and index levels.
//!
//! Credentials are read from the environment (or a `.env` file):
//!
//! ```text
//! BYMA_CLIENT_ID=...
//! BYMA_CLIENT_SECRET=...
//! BYMA_ENDPOINT=delay20   # snapshot | delay20 | eod
//! ```
//!
//! Run with `cargo run --example market_snapshot -- GGAL`.

use byma_client::{
  BymaClient, Config, EquityQuery, FixedIncomeQuery, FuturesQuery, Record, RepoQuery,
};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn field(record: &Record, name: &str) -> String {
  record.get(name).map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_table(title: &str, records: &[Record], columns: &[&str]) {
  println!("\n== {} ({} rows)", title, records.len());
  println!("{}", columns.join("\t"));
  for record in records.iter().take(10) {
    let row: Vec<String> = columns.iter().map(|c| field(record, c)).collect();
    println!("{}", row.join("\t"));
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let ticker = env::args().nth(1);

  let config = Config::from_env()?;
  info!("Connecting to BYMADATA {} endpoint", config.endpoint);
  let client = BymaClient::new(config).await?;

  let mut shares = EquityQuery::default().subgroup("LIDER");
  if let Some(t) = &ticker {
    shares = shares.ticker(t.as_str());
  }
  let equities = client.securities().equity(&shares).await?;
  print_table("Leading panel", &equities, &["security_id", "trade", "volume"]);

  let bonds = client
    .securities()
    .fixed_income(&FixedIncomeQuery::default().ticker("AL").currency("USD"))
    .await?;
  print_table("USD sovereign bonds", &bonds, &["security_id", "trade", "volume"]);

  match client.derivatives().futures(&FuturesQuery::default()).await {
    Ok(futures) => print_table("Currency futures", &futures, &["security_id", "trade"]),
    Err(e) => warn!("Futures unavailable: {}", e),
  }

  let repos = client.financing().repos(&RepoQuery::default()).await?;
  print_table("Repos", &repos, &["security_id", "trade"]);

  let indices = client.market().indices().await?;
  print_table("Indices", &indices, &["description", "price"]);

  client.close().await;
  Ok(())
}
