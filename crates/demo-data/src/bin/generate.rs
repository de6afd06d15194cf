//! Demo data generator - builds the dataset, validates it, and exports it.
//!
//! Run with:
//! ```
//! cargo run -p demo-data --bin generate
//! ```
//!
//! Environment variables:
//! - `SEED`: generator seed (default 42; same seed, same files)
//! - `SCENARIO`: `full` or `smoke` (default `full`)
//! - `SINK`: `csv`, `jsonl`, or `both` (default `both`)
//! - `OUT_DIR`: export directory (default `exports`)

use anyhow::bail;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use demo_data::builders::DatasetBuilder;
use demo_data::config::DEFAULT_SEED;
use demo_data::sink::{CsvSink, JsonlSink, Sink};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed: u64 = match std::env::var("SEED") {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_SEED,
    };
    let scenario = std::env::var("SCENARIO").unwrap_or_else(|_| "full".to_string());
    let sink_choice = std::env::var("SINK").unwrap_or_else(|_| "both".to_string());
    let out_dir = std::env::var("OUT_DIR").unwrap_or_else(|_| "exports".to_string());

    let builder = match scenario.as_str() {
        "full" => DatasetBuilder::full_demo(),
        "smoke" => DatasetBuilder::smoke_test(),
        other => bail!("Unknown SCENARIO '{other}' (expected 'full' or 'smoke')"),
    };

    let mut sinks: Vec<Box<dyn Sink>> = match sink_choice.as_str() {
        "csv" => vec![Box::new(CsvSink::new(&out_dir))],
        "jsonl" => vec![Box::new(JsonlSink::new(&out_dir))],
        "both" => vec![
            Box::new(CsvSink::new(&out_dir)),
            Box::new(JsonlSink::new(&out_dir)),
        ],
        other => bail!("Unknown SINK '{other}' (expected 'csv', 'jsonl', or 'both')"),
    };

    tracing::info!("Generating '{scenario}' dataset with seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let result = builder.with_metrics(true).build_data(&mut rng);

    comedor::validate(&result.dataset)?;
    tracing::info!("Validation passed");

    for sink in &mut sinks {
        let report = sink.export(&result.dataset)?;
        tracing::info!(
            "{} export: {} rows, {} bytes",
            sink.name(),
            report.total_rows(),
            report.total_bytes()
        );
    }

    // Summary output
    let dataset = &result.dataset;
    tracing::info!("Generation completed!");
    tracing::info!("  Usuarios: {}", dataset.usuarios.len());
    tracing::info!("  Restaurantes: {}", dataset.restaurantes.len());
    tracing::info!("  Menu items: {}", dataset.menu.len());
    tracing::info!("  Promociones: {}", dataset.promociones.len());
    tracing::info!("  Ordenes: {}", dataset.ordenes.len());
    tracing::info!("  Resenas: {}", dataset.resenas.len());
    tracing::info!("  Pagos: {}", dataset.pagos.len());
    if let Some(metrics) = &result.metrics {
        tracing::info!("  Generation time: {}ms", metrics.generation_time_ms);
    }

    Ok(())
}
