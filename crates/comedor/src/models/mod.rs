//! Entity records and their wire shapes.
//!
//! Field names match the backend's document schemas, so serialized output
//! needs no translation layer. Fields the pipeline adds on top of those
//! schemas (typed references, the applied-promotion slot) keep the same
//! naming style.

mod menu;
mod orden;
mod pago;
mod promocion;
mod resena;
mod restaurante;
mod usuario;

pub use menu::MenuItem;
pub use orden::{EstadoOrden, LineaOrden, Orden};
pub use pago::{EstadoPago, MetodoPago, Pago};
pub use promocion::{Promocion, TipoPromocion};
pub use resena::Resena;
pub use restaurante::Restaurante;
pub use usuario::{Genero, Usuario};
