//! Example: Generate a mid-size neighborhood dataset and export it as CSV.
//!
//! This creates test data for exercising the flat-file export path:
//! - 200 users ordering from 8 restaurants with large menus
//! - 40 promotions competing over the same menus
//! - 600 orders, 150 reviews, and one payment per order
//!
//! Run with:
//! ```
//! cargo run -p demo-data --example export_csv
//! ```

use demo_data::builders::DatasetBuilder;
use demo_data::generators::MenuGenConfig;
use demo_data::sink::{CsvSink, Sink};
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

    let mut rng = StdRng::seed_from_u64(7);

    let result = DatasetBuilder::new()
        .with_usuarios(200)
        .with_restaurantes(8)
        .with_menu_config(MenuGenConfig {
            items_por_restaurante: 12..=20,
            ..MenuGenConfig::default()
        })
        .with_promociones(40)
        .with_ordenes(600)
        .with_resenas(150)
        .with_metrics(true)
        .build_data(&mut rng);

    comedor::validate(&result.dataset)?;

    let mut sink = CsvSink::new("exports/neighborhood");
    let report = sink.export(&result.dataset)?;

    tracing::info!("Neighborhood dataset exported!");
    for collection in &report.collections {
        tracing::info!(
            "  {}: {} rows, {} bytes",
            collection.name,
            collection.rows,
            collection.bytes
        );
    }

    // Print some review stats
    let mut ratings: Vec<f64> = result
        .dataset
        .resenas
        .iter()
        .map(|r| r.calificacion)
        .collect();
    ratings.sort_by(|a, b| a.partial_cmp(b).unwrap());

    if !ratings.is_empty() {
        let lowest = ratings[0];
        let median = ratings[ratings.len() / 2];
        let highest = ratings[ratings.len() - 1];

        tracing::info!("Review ratings:");
        tracing::info!("  Lowest:  {:.1}", lowest);
        tracing::info!("  Median:  {:.1}", median);
        tracing::info!("  Highest: {:.1}", highest);
    }

    Ok(())
}
