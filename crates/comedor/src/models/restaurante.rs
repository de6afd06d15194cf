use serde::Serialize;
use time::OffsetDateTime;

use crate::geo::GeoPoint;
use crate::ids::{MenuId, RestauranteId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurante {
    #[serde(rename = "_id")]
    pub id: RestauranteId,
    pub nombre: String,
    pub direccion: String,
    pub ubicacion: GeoPoint,
    pub categorias: Vec<String>,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Back-references to this restaurant's menu items. Filled in one
    /// consistency step after menu generation; not part of the wire shape.
    #[serde(skip)]
    pub menu: Vec<MenuId>,
}
