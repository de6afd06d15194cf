//! Fluent builder for assembling the demo dataset.

use std::time::Instant;

use rand::Rng;
use tracing::warn;

use comedor::Dataset;
use comedor::dataset::MenuIndex;

use crate::generators::{
    menu::{MenuGenConfig, MenuGenerator},
    orden::{ActivePromotions, OrdenGenConfig, OrdenGenerator},
    pago::{PagoGenConfig, PagoGenerator},
    promocion::{PromocionGenConfig, PromocionGenerator},
    resena::{ResenaGenConfig, ResenaGenerator},
    restaurante::{RestauranteGenConfig, RestauranteGenerator},
    usuario::{UsuarioGenConfig, UsuarioGenerator},
};
use crate::window::SynthesisWindow;

/// Result of building a demo dataset.
#[derive(Debug)]
pub struct DatasetResult {
    pub dataset: Dataset,
    /// Metrics from dataset generation (populated if metrics tracking enabled).
    pub metrics: Option<BuildMetrics>,
}

/// Performance metrics from dataset generation.
#[derive(Debug, Clone)]
pub struct BuildMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Number of users generated.
    pub usuario_count: usize,
    /// Number of restaurants generated.
    pub restaurante_count: usize,
    /// Number of menu items generated across all restaurants.
    pub menu_item_count: usize,
    /// Number of promotions generated.
    pub promocion_count: usize,
    /// Number of orders generated.
    pub orden_count: usize,
    /// Number of reviews generated.
    pub resena_count: usize,
    /// Number of payments generated.
    pub pago_count: usize,
    /// Order draws skipped because the chosen restaurant had no menu.
    pub skipped_orden_draws: usize,
}

/// Builder for creating complete demo datasets.
///
/// # Example
///
/// ```rust,ignore
/// let result = DatasetBuilder::new()
///     .with_usuarios(100)
///     .with_restaurantes(20)
///     .with_ordenes(500)
///     .with_metrics(true)
///     .build_data(&mut rng);
/// ```
pub struct DatasetBuilder {
    // Collection sizes
    usuario_count: usize,
    restaurante_count: usize,
    promocion_count: usize,
    orden_count: usize,
    resena_count: usize,

    // Per-collection generator configuration
    usuario_config: UsuarioGenConfig,
    restaurante_config: RestauranteGenConfig,
    menu_config: MenuGenConfig,
    promocion_config: PromocionGenConfig,
    orden_config: OrdenGenConfig,
    resena_config: ResenaGenConfig,
    pago_config: PagoGenConfig,

    // Misc
    window: SynthesisWindow,
    track_metrics: bool,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a new dataset builder with default settings.
    pub fn new() -> Self {
        Self {
            usuario_count: 100,
            restaurante_count: 20,
            promocion_count: 50,
            orden_count: 500,
            resena_count: 100,
            usuario_config: UsuarioGenConfig::default(),
            restaurante_config: RestauranteGenConfig::default(),
            menu_config: MenuGenConfig::default(),
            promocion_config: PromocionGenConfig::default(),
            orden_config: OrdenGenConfig::default(),
            resena_config: ResenaGenConfig::default(),
            pago_config: PagoGenConfig::default(),
            window: SynthesisWindow::default(),
            track_metrics: false,
        }
    }

    /// Sets the number of users to generate.
    pub fn with_usuarios(mut self, count: usize) -> Self {
        self.usuario_count = count;
        self
    }

    /// Sets the number of restaurants to generate.
    pub fn with_restaurantes(mut self, count: usize) -> Self {
        self.restaurante_count = count;
        self
    }

    /// Sets the number of promotions to generate.
    pub fn with_promociones(mut self, count: usize) -> Self {
        self.promocion_count = count;
        self
    }

    /// Sets the number of orders to generate.
    pub fn with_ordenes(mut self, count: usize) -> Self {
        self.orden_count = count;
        self
    }

    /// Sets the number of reviews to generate.
    pub fn with_resenas(mut self, count: usize) -> Self {
        self.resena_count = count;
        self
    }

    /// Sets the user generation configuration.
    pub fn with_usuario_config(mut self, config: UsuarioGenConfig) -> Self {
        self.usuario_config = config;
        self
    }

    /// Sets the restaurant generation configuration.
    pub fn with_restaurante_config(mut self, config: RestauranteGenConfig) -> Self {
        self.restaurante_config = config;
        self
    }

    /// Sets the menu generation configuration.
    pub fn with_menu_config(mut self, config: MenuGenConfig) -> Self {
        self.menu_config = config;
        self
    }

    /// Sets the promotion generation configuration.
    pub fn with_promocion_config(mut self, config: PromocionGenConfig) -> Self {
        self.promocion_config = config;
        self
    }

    /// Sets the order generation configuration.
    pub fn with_orden_config(mut self, config: OrdenGenConfig) -> Self {
        self.orden_config = config;
        self
    }

    /// Sets the review generation configuration.
    pub fn with_resena_config(mut self, config: ResenaGenConfig) -> Self {
        self.resena_config = config;
        self
    }

    /// Sets the payment generation configuration.
    pub fn with_pago_config(mut self, config: PagoGenConfig) -> Self {
        self.pago_config = config;
        self
    }

    /// Sets the time window timestamps are drawn from.
    pub fn with_window(mut self, window: SynthesisWindow) -> Self {
        self.window = window;
        self
    }

    /// Enables metrics tracking for performance analysis.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Builds the dataset in dependency order.
    pub fn build_data(&self, rng: &mut impl Rng) -> DatasetResult {
        let start_time = if self.track_metrics {
            Some(Instant::now())
        } else {
            None
        };

        // Generate the independent collections
        let usuario_gen = UsuarioGenerator::with_config(self.usuario_config.clone());
        let usuarios = usuario_gen.generate_batch(self.usuario_count, &self.window, rng);

        let restaurante_gen = RestauranteGenerator::with_config(self.restaurante_config.clone());
        let mut restaurantes =
            restaurante_gen.generate_batch(self.restaurante_count, &self.window, rng);

        // Generate each restaurant's menu
        let menu_gen = MenuGenerator::with_config(self.menu_config.clone());
        let mut menu = Vec::new();
        for restaurante in &restaurantes {
            menu.extend(menu_gen.generate_for_restaurante(restaurante.id, &self.window, rng));
        }
        let menu_index = MenuIndex::build(&menu);

        // Restore the restaurant-side item references in one pass
        for restaurante in &mut restaurantes {
            restaurante.menu = menu_index
                .items_for(restaurante.id)
                .iter()
                .map(|&position| menu[position].id)
                .collect();
        }

        // Generate promotions over the menus
        let promocion_gen = PromocionGenerator::with_config(self.promocion_config.clone());
        let promociones = promocion_gen.generate_batch(
            self.promocion_count,
            &restaurantes,
            &menu,
            &menu_index,
            &self.window,
            rng,
        );

        // Generate orders, pricing lines against the promotions active at the
        // window anchor
        let active = ActivePromotions::at(&promociones, self.window.anchor());
        let orden_gen = OrdenGenerator::with_config(self.orden_config.clone());
        let (ordenes, skipped_orden_draws) = orden_gen.generate_batch(
            self.orden_count,
            &usuarios,
            &restaurantes,
            &menu,
            &menu_index,
            &active,
            &self.window,
            rng,
        );
        if skipped_orden_draws > 0 {
            warn!("Skipped {skipped_orden_draws} order draws on restaurants without menu items");
        }

        // Generate reviews and payments from the orders
        let resena_gen = ResenaGenerator::with_config(self.resena_config.clone());
        let resenas = resena_gen.generate_batch(self.resena_count, &ordenes, &self.window, rng);

        let pago_gen = PagoGenerator::with_config(self.pago_config.clone());
        let pagos = pago_gen.generate_batch(&ordenes, rng);

        let dataset = Dataset {
            usuarios,
            restaurantes,
            menu,
            promociones,
            ordenes,
            resenas,
            pagos,
        };

        // Collect metrics if tracking enabled
        let metrics = start_time.map(|start| BuildMetrics {
            generation_time_ms: start.elapsed().as_millis() as u64,
            usuario_count: dataset.usuarios.len(),
            restaurante_count: dataset.restaurantes.len(),
            menu_item_count: dataset.menu.len(),
            promocion_count: dataset.promociones.len(),
            orden_count: dataset.ordenes.len(),
            resena_count: dataset.resenas.len(),
            pago_count: dataset.pagos.len(),
            skipped_orden_draws,
        });

        DatasetResult { dataset, metrics }
    }
}

/// Preset scenarios for common demo needs.
impl DatasetBuilder {
    /// Creates the full-size demo dataset.
    ///
    /// - 8000 users and 300 restaurants with 5-10 menu items each
    /// - 3000 promotions and 52000 orders priced against them
    /// - 10000 reviews plus one payment per order
    pub fn full_demo() -> Self {
        Self::new()
            .with_usuarios(8000)
            .with_restaurantes(300)
            .with_promociones(3000)
            .with_ordenes(52000)
            .with_resenas(10000)
    }

    /// Creates a minimal scenario for quick end-to-end checks.
    ///
    /// - 10 users and 2 restaurants with exactly 5 menu items each
    /// - 3 promotions, 20 orders, and 5 reviews
    pub fn smoke_test() -> Self {
        Self::new()
            .with_usuarios(10)
            .with_restaurantes(2)
            .with_menu_config(MenuGenConfig {
                items_por_restaurante: 5..=5,
                ..MenuGenConfig::default()
            })
            .with_promociones(3)
            .with_ordenes(20)
            .with_resenas(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_data_counts() {
        let mut rng = StdRng::seed_from_u64(42);

        let result = DatasetBuilder::new()
            .with_usuarios(10)
            .with_restaurantes(3)
            .with_promociones(5)
            .with_ordenes(25)
            .with_resenas(8)
            .build_data(&mut rng);

        let dataset = &result.dataset;
        assert_eq!(dataset.usuarios.len(), 10);
        assert_eq!(dataset.restaurantes.len(), 3);
        assert!((15..=30).contains(&dataset.menu.len()));
        assert_eq!(dataset.promociones.len(), 5);
        assert_eq!(dataset.ordenes.len(), 25);
        assert_eq!(dataset.resenas.len(), 8);
        assert_eq!(dataset.pagos.len(), dataset.ordenes.len());
        assert!(result.metrics.is_none());
    }

    #[test]
    fn test_build_data_passes_validation() {
        let mut rng = StdRng::seed_from_u64(7);

        let result = DatasetBuilder::new()
            .with_usuarios(20)
            .with_restaurantes(4)
            .with_promociones(12)
            .with_ordenes(60)
            .with_resenas(15)
            .build_data(&mut rng);

        comedor::validate(&result.dataset).unwrap();
    }

    #[test]
    fn test_menu_back_references_restored() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = DatasetBuilder::new()
            .with_usuarios(5)
            .with_restaurantes(4)
            .with_ordenes(10)
            .build_data(&mut rng);

        for restaurante in &result.dataset.restaurantes {
            assert!(!restaurante.menu.is_empty());
            for item_id in &restaurante.menu {
                let item = result
                    .dataset
                    .menu
                    .iter()
                    .find(|m| m.id == *item_id)
                    .unwrap();
                assert_eq!(item.restaurante_id, restaurante.id);
            }
        }
    }

    #[test]
    fn test_metrics_gated_by_flag() {
        let mut rng = StdRng::seed_from_u64(42);

        let result = DatasetBuilder::new()
            .with_usuarios(5)
            .with_restaurantes(2)
            .with_ordenes(10)
            .with_metrics(true)
            .build_data(&mut rng);

        let metrics = result.metrics.unwrap();
        assert_eq!(metrics.usuario_count, result.dataset.usuarios.len());
        assert_eq!(metrics.menu_item_count, result.dataset.menu.len());
        assert_eq!(metrics.pago_count, metrics.orden_count);
        assert_eq!(metrics.skipped_orden_draws, 0);
    }

    #[test]
    fn test_preset_smoke_test() {
        let builder = DatasetBuilder::smoke_test();
        assert_eq!(builder.usuario_count, 10);
        assert_eq!(builder.restaurante_count, 2);
        assert_eq!(builder.orden_count, 20);
        assert_eq!(builder.menu_config.items_por_restaurante, 5..=5);
    }

    #[test]
    fn test_preset_full_demo() {
        let builder = DatasetBuilder::full_demo();
        assert_eq!(builder.usuario_count, 8000);
        assert_eq!(builder.restaurante_count, 300);
        assert_eq!(builder.promocion_count, 3000);
        assert_eq!(builder.orden_count, 52000);
        assert_eq!(builder.resena_count, 10000);
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let build = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            DatasetBuilder::new()
                .with_usuarios(8)
                .with_restaurantes(2)
                .with_ordenes(12)
                .build_data(&mut rng)
                .dataset
        };

        assert_eq!(build(11), build(11));
        assert_ne!(build(11), build(12));
    }
}
