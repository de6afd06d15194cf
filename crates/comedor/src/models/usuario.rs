use serde::Serialize;
use time::OffsetDateTime;

use crate::geo::GeoPoint;
use crate::ids::UsuarioId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Usuario {
    #[serde(rename = "_id")]
    pub id: UsuarioId,
    pub nombre: String,
    /// Unique within a run, lowercase.
    pub email: String,
    pub ubicacion: GeoPoint,
    #[serde(rename = "fechaRegistro", with = "time::serde::rfc3339")]
    pub fecha_registro: OffsetDateTime,
    pub edad: u8,
    pub genero: Genero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Genero {
    #[serde(rename = "masculino")]
    Masculino,
    #[serde(rename = "femenino")]
    Femenino,
}

impl Genero {
    pub const ALL: [Genero; 2] = [Genero::Masculino, Genero::Femenino];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genero::Masculino => "masculino",
            Genero::Femenino => "femenino",
        }
    }
}
