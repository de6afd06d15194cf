use serde::Serialize;
use time::OffsetDateTime;

use crate::ids::{MenuId, RestauranteId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: MenuId,
    pub restaurante_id: RestauranteId,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub disponible: bool,
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
