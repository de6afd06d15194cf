//! Payment generation, exactly one per order.

use rand::Rng;
use time::Duration;

use comedor::ids::PagoId;
use comedor::models::{EstadoPago, MetodoPago, Orden, Pago};

/// Configuration for payment generation.
#[derive(Debug, Clone)]
pub struct PagoGenConfig {
    /// Delay from order placement to payment settlement.
    pub pago_delay: Duration,
}

impl Default for PagoGenConfig {
    fn default() -> Self {
        Self {
            pago_delay: Duration::minutes(10),
        }
    }
}

/// Generates payments. Every payment settles the full order total.
pub struct PagoGenerator {
    config: PagoGenConfig,
}

impl PagoGenerator {
    /// Creates a new payment generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: PagoGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PagoGenConfig) -> Self {
        Self { config }
    }

    /// Generates the payment for one order.
    pub fn generate_for_orden(&self, orden: &Orden, rng: &mut impl Rng) -> Pago {
        let id = PagoId::generate(rng);
        let metodo_pago = MetodoPago::ALL[rng.gen_range(0..MetodoPago::ALL.len())];

        Pago {
            id,
            orden_id: orden.id,
            usuario_id: orden.usuario_id,
            monto: orden.total,
            metodo_pago,
            estado: EstadoPago::Completado,
            fecha: orden.fecha_pedido + self.config.pago_delay,
        }
    }

    /// Generates one payment per order, preserving order.
    pub fn generate_batch(&self, ordenes: &[Orden], rng: &mut impl Rng) -> Vec<Pago> {
        ordenes
            .iter()
            .map(|orden| self.generate_for_orden(orden, rng))
            .collect()
    }
}

impl Default for PagoGenerator {
    fn default() -> Self {
        Self::new()
    }
}
