use serde::Serialize;
use time::OffsetDateTime;

use crate::ids::{OrdenId, PagoId, UsuarioId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pago {
    #[serde(rename = "_id")]
    pub id: PagoId,
    pub orden_id: OrdenId,
    pub usuario_id: UsuarioId,
    /// Equals the order's total.
    pub monto: f64,
    #[serde(rename = "metodoPago")]
    pub metodo_pago: MetodoPago,
    pub estado: EstadoPago,
    #[serde(with = "time::serde::rfc3339")]
    pub fecha: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetodoPago {
    #[serde(rename = "tarjeta de crédito")]
    TarjetaCredito,
    #[serde(rename = "efectivo")]
    Efectivo,
    #[serde(rename = "tarjeta de débito")]
    TarjetaDebito,
}

impl MetodoPago {
    pub const ALL: [MetodoPago; 3] = [
        MetodoPago::TarjetaCredito,
        MetodoPago::Efectivo,
        MetodoPago::TarjetaDebito,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetodoPago::TarjetaCredito => "tarjeta de crédito",
            MetodoPago::Efectivo => "efectivo",
            MetodoPago::TarjetaDebito => "tarjeta de débito",
        }
    }
}

/// Payment lifecycle states the backend accepts. Generation always produces
/// `Completado`; the other states exist for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EstadoPago {
    #[serde(rename = "completado")]
    Completado,
    #[serde(rename = "fallido")]
    Fallido,
    #[serde(rename = "pendiente")]
    Pendiente,
}

impl EstadoPago {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPago::Completado => "completado",
            EstadoPago::Fallido => "fallido",
            EstadoPago::Pendiente => "pendiente",
        }
    }
}
