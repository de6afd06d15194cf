use serde::Serialize;
use time::OffsetDateTime;

use crate::ids::{OrdenId, ResenaId, RestauranteId, UsuarioId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resena {
    #[serde(rename = "_id")]
    pub id: ResenaId,
    pub orden_id: OrdenId,
    /// Carried forward from the reviewed order.
    pub usuario_id: UsuarioId,
    /// Carried forward from the reviewed order.
    pub restaurante_id: RestauranteId,
    /// 1.0 to 5.0, one decimal place.
    pub calificacion: f64,
    pub comentario: String,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha: OffsetDateTime,
}
