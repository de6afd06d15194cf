use serde::Serialize;
use time::OffsetDateTime;

use crate::ids::{MenuId, PromocionId, RestauranteId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Promocion {
    #[serde(rename = "_id")]
    pub id: PromocionId,
    pub restaurante_id: RestauranteId,
    pub nombre: String,
    #[serde(rename = "fechaInicio", with = "time::serde::rfc3339")]
    pub fecha_inicio: OffsetDateTime,
    #[serde(rename = "fechaFin", with = "time::serde::rfc3339")]
    pub fecha_fin: OffsetDateTime,
    pub tipo: TipoPromocion,
    /// Menu items the promotion covers, all owned by `restaurante_id`.
    pub items_aplicables: Vec<MenuId>,
    /// Discount fraction, present iff `tipo` is `Descuento`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descuento: Option<f64>,
}

impl Promocion {
    /// Whether the validity window contains `at` (both ends inclusive).
    pub fn is_active_at(&self, at: OffsetDateTime) -> bool {
        self.fecha_inicio <= at && at <= self.fecha_fin
    }

    /// Whether the promotion covers the given menu item.
    pub fn covers(&self, item: MenuId) -> bool {
        self.items_aplicables.contains(&item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TipoPromocion {
    #[serde(rename = "descuento")]
    Descuento,
    #[serde(rename = "2x1")]
    DosPorUno,
    #[serde(rename = "combo")]
    Combo,
}

impl TipoPromocion {
    pub const ALL: [TipoPromocion; 3] = [
        TipoPromocion::Descuento,
        TipoPromocion::DosPorUno,
        TipoPromocion::Combo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipoPromocion::Descuento => "descuento",
            TipoPromocion::DosPorUno => "2x1",
            TipoPromocion::Combo => "combo",
        }
    }
}
