//! Domain model for the comedor demo dataset.
//!
//! Seven entity collections (usuarios, restaurantes, menu, promociones,
//! ordenes, resenas, pagos) with typed identifiers, the wire field names the
//! demo backend expects, and pre-export validation of cross-collection
//! consistency.

pub mod dataset;
pub mod geo;
pub mod ids;
pub mod models;
pub mod rounding;
pub mod validate;

pub use dataset::{Dataset, MenuIndex};
pub use geo::GeoPoint;
pub use ids::{MenuId, OrdenId, PagoId, PromocionId, ResenaId, RestauranteId, UsuarioId};
pub use validate::{ValidationError, validate};
