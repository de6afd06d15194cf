//! Example: Generate the smoke dataset and export it as JSONL.
//!
//! This creates a small but fully consistent dataset for eyeballing the
//! output format:
//! - 10 users and 2 restaurants with 5 menu items each
//! - 3 promotions and 20 orders priced against them
//! - 5 reviews plus one payment per order
//!
//! Run with:
//! ```
//! cargo run -p demo-data --example generate_smoke
//! ```

use demo_data::builders::DatasetBuilder;
use demo_data::config::DEFAULT_SEED;
use demo_data::sink::{JsonlSink, Sink};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

    let result = DatasetBuilder::smoke_test()
        .with_metrics(true)
        .build_data(&mut rng);

    comedor::validate(&result.dataset)?;

    let mut sink = JsonlSink::new("exports/smoke");
    let report = sink.export(&result.dataset)?;

    tracing::info!("Smoke dataset exported!");
    tracing::info!("  Files: {}", report.collections.len());
    tracing::info!("  Rows: {}", report.total_rows());
    tracing::info!("  Bytes: {}", report.total_bytes());

    // Print some order stats
    let dataset = &result.dataset;
    let discounted = dataset
        .ordenes
        .iter()
        .filter(|o| o.promocion_aplicada.is_some())
        .count();
    let revenue: f64 = dataset.ordenes.iter().map(|o| o.total).sum();

    tracing::info!("Order stats:");
    tracing::info!("  Discounted: {}/{}", discounted, dataset.ordenes.len());
    tracing::info!("  Revenue: {:.2}", revenue);

    Ok(())
}
