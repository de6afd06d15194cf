use serde::Serialize;
use time::OffsetDateTime;

use crate::ids::{MenuId, OrdenId, PromocionId, RestauranteId, UsuarioId};

/// One line of an order, with the unit price captured at order time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineaOrden {
    pub menu_id: MenuId,
    pub nombre: String,
    pub cantidad: u32,
    pub precio_unitario: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Orden {
    #[serde(rename = "_id")]
    pub id: OrdenId,
    pub usuario_id: UsuarioId,
    pub restaurante_id: RestauranteId,
    pub estado: EstadoOrden,
    #[serde(rename = "fechaPedido", with = "time::serde::rfc3339")]
    pub fecha_pedido: OffsetDateTime,
    #[serde(rename = "fechaInicioPreparacion", with = "time::serde::rfc3339")]
    pub fecha_inicio_preparacion: OffsetDateTime,
    /// Present iff `estado` is `Entregado`.
    #[serde(
        rename = "fechaEntrega",
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_entrega: Option<OffsetDateTime>,
    pub items: Vec<LineaOrden>,
    pub total: f64,
    /// First promotion that discounted any line, `None` when no active
    /// discount promotion covered an ordered item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promocion_aplicada: Option<PromocionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EstadoOrden {
    #[serde(rename = "pendiente")]
    Pendiente,
    #[serde(rename = "en preparación")]
    EnPreparacion,
    #[serde(rename = "entregado")]
    Entregado,
}

impl EstadoOrden {
    pub const ALL: [EstadoOrden; 3] = [
        EstadoOrden::Pendiente,
        EstadoOrden::EnPreparacion,
        EstadoOrden::Entregado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoOrden::Pendiente => "pendiente",
            EstadoOrden::EnPreparacion => "en preparación",
            EstadoOrden::Entregado => "entregado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    #[test]
    fn test_absent_optionals_are_omitted() {
        let mut rng = StdRng::seed_from_u64(5);
        let orden = Orden {
            id: OrdenId::generate(&mut rng),
            usuario_id: UsuarioId::generate(&mut rng),
            restaurante_id: RestauranteId::generate(&mut rng),
            estado: EstadoOrden::Pendiente,
            fecha_pedido: datetime!(2025-06-03 18:00:00 UTC),
            fecha_inicio_preparacion: datetime!(2025-06-03 18:05:00 UTC),
            fecha_entrega: None,
            items: vec![LineaOrden {
                menu_id: MenuId::generate(&mut rng),
                nombre: "Tostadas Mixtas".into(),
                cantidad: 2,
                precio_unitario: 85.5,
            }],
            total: 171.0,
            promocion_aplicada: None,
        };

        let value = serde_json::to_value(&orden).unwrap();
        assert!(value.get("fechaEntrega").is_none());
        assert!(value.get("promocion_aplicada").is_none());
        assert_eq!(value["items"][0]["precio_unitario"], 85.5);
        assert_eq!(value["estado"], "pendiente");
    }
}
