//! Order generation with promotion-aware pricing.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::index;
use time::{Duration, OffsetDateTime};

use comedor::dataset::MenuIndex;
use comedor::ids::{MenuId, OrdenId, RestauranteId};
use comedor::models::{
    EstadoOrden, LineaOrden, MenuItem, Orden, Promocion, Restaurante, TipoPromocion, Usuario,
};
use comedor::rounding::round2;

use crate::config::EmptyMenuPolicy;
use crate::window::SynthesisWindow;

/// Discount promotions active at a fixed instant, indexed by restaurant.
///
/// Promotions keep their input order within each restaurant; the first one
/// covering a line's item is the one applied to that line.
pub struct ActivePromotions<'a> {
    by_restaurante: HashMap<RestauranteId, Vec<&'a Promocion>>,
}

impl<'a> ActivePromotions<'a> {
    /// Indexes the `descuento`-type promotions whose validity window contains
    /// `at`. Other promotion types never change pricing.
    pub fn at(promociones: &'a [Promocion], at: OffsetDateTime) -> Self {
        let mut by_restaurante: HashMap<RestauranteId, Vec<&'a Promocion>> = HashMap::new();
        for promocion in promociones {
            if promocion.tipo == TipoPromocion::Descuento && promocion.is_active_at(at) {
                by_restaurante
                    .entry(promocion.restaurante_id)
                    .or_default()
                    .push(promocion);
            }
        }
        Self { by_restaurante }
    }

    /// First active promotion of `restaurante` covering `item`, if any.
    pub fn discount_for(&self, restaurante: RestauranteId, item: MenuId) -> Option<&'a Promocion> {
        self.by_restaurante
            .get(&restaurante)?
            .iter()
            .find(|promocion| promocion.covers(item))
            .copied()
    }
}

/// Configuration for order generation.
#[derive(Debug, Clone)]
pub struct OrdenGenConfig {
    /// How many distinct lines an order asks for, clamped to the menu size.
    pub items_range: RangeInclusive<usize>,
    /// Units per line (inclusive).
    pub cantidad_range: RangeInclusive<u32>,
    /// Delay from order placement to preparation start.
    pub prep_delay: Duration,
    /// Delay from order placement to delivery.
    pub delivery_delay: Duration,
    /// What to do when the chosen restaurant has no menu items.
    pub empty_menu_policy: EmptyMenuPolicy,
}

impl Default for OrdenGenConfig {
    fn default() -> Self {
        Self {
            items_range: 1..=5,
            cantidad_range: 1..=3,
            prep_delay: Duration::minutes(5),
            delivery_delay: Duration::minutes(40),
            empty_menu_policy: EmptyMenuPolicy::default(),
        }
    }
}

/// Generates orders against existing users, restaurants, menus, and
/// promotions.
pub struct OrdenGenerator {
    config: OrdenGenConfig,
}

impl OrdenGenerator {
    /// Creates a new order generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: OrdenGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: OrdenGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single order, sampling its lines without replacement from
    /// the chosen restaurant's menu. Returns `None` when the restaurant has
    /// no menu and the policy is [`EmptyMenuPolicy::Skip`].
    ///
    /// `usuarios` and `restaurantes` must not be empty;
    /// [`Self::generate_batch`] guards this.
    #[allow(clippy::too_many_arguments)]
    pub fn generate(
        &self,
        usuarios: &[Usuario],
        restaurantes: &[Restaurante],
        menu: &[MenuItem],
        menu_index: &MenuIndex,
        promociones: &ActivePromotions<'_>,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Option<Orden> {
        let id = OrdenId::generate(rng);
        let usuario = &usuarios[rng.gen_range(0..usuarios.len())];
        let restaurante = &restaurantes[rng.gen_range(0..restaurantes.len())];

        let positions = menu_index.items_for(restaurante.id);
        if positions.is_empty() && self.config.empty_menu_policy == EmptyMenuPolicy::Skip {
            return None;
        }

        let mut items = Vec::new();
        let mut total = 0.0;
        let mut promocion_aplicada = None;

        if !positions.is_empty() {
            let requested = rng.gen_range(self.config.items_range.clone());
            let amount = requested.min(positions.len());

            for i in index::sample(rng, positions.len(), amount).iter() {
                let item = &menu[positions[i]];
                let cantidad = rng.gen_range(self.config.cantidad_range.clone());

                let mut descuento = 0.0;
                if let Some(promocion) = promociones.discount_for(restaurante.id, item.id) {
                    descuento = promocion.descuento.unwrap_or(0.0);
                    if promocion_aplicada.is_none() {
                        promocion_aplicada = Some(promocion.id);
                    }
                }

                total += item.precio * f64::from(cantidad) * (1.0 - descuento);
                items.push(LineaOrden {
                    menu_id: item.id,
                    nombre: item.nombre.clone(),
                    cantidad,
                    precio_unitario: item.precio,
                });
            }
        }

        let estado = EstadoOrden::ALL[rng.gen_range(0..EstadoOrden::ALL.len())];
        let fecha_pedido = window.datetime_this_month(rng);
        let fecha_inicio_preparacion = fecha_pedido + self.config.prep_delay;
        let fecha_entrega =
            (estado == EstadoOrden::Entregado).then(|| fecha_pedido + self.config.delivery_delay);

        Some(Orden {
            id,
            usuario_id: usuario.id,
            restaurante_id: restaurante.id,
            estado,
            fecha_pedido,
            fecha_inicio_preparacion,
            fecha_entrega,
            items,
            total: round2(total),
            promocion_aplicada,
        })
    }

    /// Generates up to `count` orders, skipping draws that land on menuless
    /// restaurants under [`EmptyMenuPolicy::Skip`]. Returns the orders plus
    /// the number of skipped draws.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_batch(
        &self,
        count: usize,
        usuarios: &[Usuario],
        restaurantes: &[Restaurante],
        menu: &[MenuItem],
        menu_index: &MenuIndex,
        promociones: &ActivePromotions<'_>,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> (Vec<Orden>, usize) {
        if usuarios.is_empty() || restaurantes.is_empty() {
            return (Vec::new(), 0);
        }

        let mut ordenes = Vec::with_capacity(count);
        let mut skipped = 0;
        for _ in 0..count {
            match self.generate(
                usuarios,
                restaurantes,
                menu,
                menu_index,
                promociones,
                window,
                rng,
            ) {
                Some(orden) => ordenes.push(orden),
                None => skipped += 1,
            }
        }
        (ordenes, skipped)
    }
}

impl Default for OrdenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
