//! Promotion generation, scoped to a single restaurant's menu.

use std::ops::Range;

use rand::Rng;
use rand::seq::index;
use time::Duration;

use comedor::dataset::MenuIndex;
use comedor::ids::{MenuId, PromocionId};
use comedor::models::{MenuItem, Promocion, Restaurante, TipoPromocion};
use comedor::rounding::round2;

use super::capitalized_word;
use crate::window::SynthesisWindow;

/// Configuration for promotion generation.
#[derive(Debug, Clone)]
pub struct PromocionGenConfig {
    /// Upper bound on covered menu items, clamped to the menu size.
    pub max_items_aplicables: usize,
    /// Discount fraction range for `descuento`-type promotions.
    pub descuento_range: Range<f64>,
    /// Validity period length in days.
    pub dias_validez: i64,
}

impl Default for PromocionGenConfig {
    fn default() -> Self {
        Self {
            max_items_aplicables: 3,
            descuento_range: 0.10..0.30,
            dias_validez: 7,
        }
    }
}

/// Generates promotions. Each promotion belongs to one restaurant and only
/// covers items from that restaurant's menu.
pub struct PromocionGenerator {
    config: PromocionGenConfig,
}

impl PromocionGenerator {
    /// Creates a new promotion generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: PromocionGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: PromocionGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single promotion for a uniformly chosen restaurant.
    /// `restaurantes` must not be empty; [`Self::generate_batch`] guards this.
    pub fn generate(
        &self,
        restaurantes: &[Restaurante],
        menu: &[MenuItem],
        menu_index: &MenuIndex,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Promocion {
        let id = PromocionId::generate(rng);
        let restaurante = &restaurantes[rng.gen_range(0..restaurantes.len())];
        let nombre = format!("Promo {}", capitalized_word(rng));

        let fecha_inicio = window.datetime_this_month(rng);
        let fecha_fin = fecha_inicio + Duration::days(self.config.dias_validez);

        let tipo = TipoPromocion::ALL[rng.gen_range(0..TipoPromocion::ALL.len())];
        let items_aplicables = self.pick_items(restaurante, menu, menu_index, rng);
        let descuento = (tipo == TipoPromocion::Descuento)
            .then(|| round2(rng.gen_range(self.config.descuento_range.clone())));

        Promocion {
            id,
            restaurante_id: restaurante.id,
            nombre,
            fecha_inicio,
            fecha_fin,
            tipo,
            items_aplicables,
            descuento,
        }
    }

    /// Generates multiple promotions. Returns an empty vector when there are
    /// no restaurants to attach them to.
    pub fn generate_batch(
        &self,
        count: usize,
        restaurantes: &[Restaurante],
        menu: &[MenuItem],
        menu_index: &MenuIndex,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Vec<Promocion> {
        if restaurantes.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| self.generate(restaurantes, menu, menu_index, window, rng))
            .collect()
    }

    /// Samples covered items from the owning restaurant's menu.
    fn pick_items(
        &self,
        restaurante: &Restaurante,
        menu: &[MenuItem],
        menu_index: &MenuIndex,
        rng: &mut impl Rng,
    ) -> Vec<MenuId> {
        let positions = menu_index.items_for(restaurante.id);
        let amount = self.config.max_items_aplicables.min(positions.len());
        index::sample(rng, positions.len(), amount)
            .iter()
            .map(|i| menu[positions[i]].id)
            .collect()
    }
}

impl Default for PromocionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{MenuGenerator, RestauranteGenerator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture(rng: &mut StdRng) -> (Vec<Restaurante>, Vec<MenuItem>) {
        let window = SynthesisWindow::default();
        let restaurantes = RestauranteGenerator::new().generate_batch(3, &window, rng);
        let menu_gen = MenuGenerator::new();
        let menu: Vec<MenuItem> = restaurantes
            .iter()
            .flat_map(|r| menu_gen.generate_for_restaurante(r.id, &window, rng))
            .collect();
        (restaurantes, menu)
    }

    #[test]
    fn test_validity_window_is_seven_days() {
        let mut rng = StdRng::seed_from_u64(42);
        let (restaurantes, menu) = fixture(&mut rng);
        let menu_index = MenuIndex::build(&menu);
        let window = SynthesisWindow::default();
        let promo_gen = PromocionGenerator::new();

        for _ in 0..20 {
            let promo = promo_gen.generate(&restaurantes, &menu, &menu_index, &window, &mut rng);
            assert_eq!(promo.fecha_fin - promo.fecha_inicio, Duration::days(7));
        }
    }

    #[test]
    fn test_items_belong_to_owning_restaurante() {
        let mut rng = StdRng::seed_from_u64(42);
        let (restaurantes, menu) = fixture(&mut rng);
        let menu_index = MenuIndex::build(&menu);
        let window = SynthesisWindow::default();
        let promo_gen = PromocionGenerator::new();

        for _ in 0..30 {
            let promo = promo_gen.generate(&restaurantes, &menu, &menu_index, &window, &mut rng);
            assert!(!promo.items_aplicables.is_empty());
            for item_id in &promo.items_aplicables {
                let item = menu.iter().find(|m| m.id == *item_id).unwrap();
                assert_eq!(item.restaurante_id, promo.restaurante_id);
            }
        }
    }

    #[test]
    fn test_descuento_only_for_descuento_tipo() {
        let mut rng = StdRng::seed_from_u64(42);
        let (restaurantes, menu) = fixture(&mut rng);
        let menu_index = MenuIndex::build(&menu);
        let window = SynthesisWindow::default();
        let promo_gen = PromocionGenerator::new();

        let promos =
            promo_gen.generate_batch(60, &restaurantes, &menu, &menu_index, &window, &mut rng);
        for promo in &promos {
            match promo.tipo {
                TipoPromocion::Descuento => {
                    let descuento = promo.descuento.unwrap();
                    assert!((0.10..=0.30).contains(&descuento));
                }
                _ => assert!(promo.descuento.is_none()),
            }
        }
        assert!(promos.iter().any(|p| p.descuento.is_some()));
    }

    #[test]
    fn test_batch_empty_without_restaurantes() {
        let mut rng = StdRng::seed_from_u64(42);
        let menu_index = MenuIndex::build(&[]);
        let window = SynthesisWindow::default();
        let promo_gen = PromocionGenerator::new();

        let promos = promo_gen.generate_batch(10, &[], &[], &menu_index, &window, &mut rng);
        assert!(promos.is_empty());
    }
}
