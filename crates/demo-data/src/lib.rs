//! Seeded demo data generation for comedor.
//!
//! This crate produces a referentially consistent restaurant-delivery dataset
//! (users, restaurants, menus, promotions, orders, reviews, and payments) and
//! exports it as CSV tables or JSONL document files for demos and load tests.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use demo_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
//!
//! let result = DatasetBuilder::new()
//!     .with_usuarios(100)
//!     .with_restaurantes(20)
//!     .with_ordenes(500)
//!     .with_metrics(true)
//!     .build_data(&mut rng);
//!
//! comedor::validate(&result.dataset)?;
//!
//! let mut sink = JsonlSink::new("exports");
//! let report = sink.export(&result.dataset)?;
//! println!("{} rows written", report.total_rows());
//! ```
//!
//! The same seed always yields byte-identical export files.

pub mod builders;
pub mod config;
pub mod generators;
pub mod sink;
pub mod window;

// Re-export core types from the comedor crate
pub use comedor::{Dataset, GeoPoint, ValidationError, validate};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{BuildMetrics, DatasetBuilder, DatasetResult};
    pub use crate::config::{BoundingBox, DEFAULT_SEED, EmptyMenuPolicy, Region};
    pub use crate::generators::{
        MenuGenerator, OrdenGenerator, PagoGenerator, PromocionGenerator, ResenaGenerator,
        RestauranteGenerator, UsuarioGenerator,
    };
    pub use crate::sink::{CollectionReport, CsvSink, JsonlSink, Sink, SinkReport};
    pub use crate::window::SynthesisWindow;
    pub use crate::{Dataset, GeoPoint, validate};
    pub use rand::SeedableRng;
    pub use rand::rngs::StdRng;
}
