//! Restaurant generation with address and cuisine categories.

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::company::en::CompanyName;
use rand::Rng;
use rand::seq::index;

use comedor::ids::RestauranteId;
use comedor::models::Restaurante;

use crate::config::{BoundingBox, Region};
use crate::window::SynthesisWindow;

/// Configuration for restaurant generation.
#[derive(Debug, Clone)]
pub struct RestauranteGenConfig {
    /// Area the restaurant locations are drawn from.
    pub area: BoundingBox,
    /// Cuisine category vocabulary.
    pub categorias: Vec<String>,
    /// How many categories each restaurant gets.
    pub categorias_por_restaurante: usize,
}

impl Default for RestauranteGenConfig {
    fn default() -> Self {
        Self {
            area: Region::GUATEMALA,
            categorias: vec![
                "italiana".to_string(),
                "mexicana".to_string(),
                "vegetariana".to_string(),
                "rapida".to_string(),
                "asiatica".to_string(),
                "postres".to_string(),
            ],
            categorias_por_restaurante: 2,
        }
    }
}

/// Generates restaurants. Menus start empty and are linked up once the menu
/// items themselves have been generated.
pub struct RestauranteGenerator {
    config: RestauranteGenConfig,
}

impl RestauranteGenerator {
    /// Creates a new restaurant generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: RestauranteGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: RestauranteGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single restaurant.
    pub fn generate(&self, window: &SynthesisWindow, rng: &mut impl Rng) -> Restaurante {
        let id = RestauranteId::generate(rng);
        let nombre: String = CompanyName().fake_with_rng(rng);

        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let direccion = format!("{building} {street}, {city}");

        let ubicacion = self.config.area.random_point(rng);
        let categorias = self.pick_categorias(rng);
        let created_at = window.datetime_this_year(rng);

        Restaurante {
            id,
            nombre,
            direccion,
            ubicacion,
            categorias,
            created_at,
            menu: Vec::new(),
        }
    }

    /// Generates multiple restaurants.
    pub fn generate_batch(
        &self,
        count: usize,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Vec<Restaurante> {
        (0..count).map(|_| self.generate(window, rng)).collect()
    }

    /// Samples distinct categories from the vocabulary.
    fn pick_categorias(&self, rng: &mut impl Rng) -> Vec<String> {
        let vocab = &self.config.categorias;
        let amount = self.config.categorias_por_restaurante.min(vocab.len());
        index::sample(rng, vocab.len(), amount)
            .iter()
            .map(|i| vocab[i].clone())
            .collect()
    }
}

impl Default for RestauranteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_restaurante() {
        let rest_gen = RestauranteGenerator::new();
        let window = SynthesisWindow::default();
        let mut rng = StdRng::seed_from_u64(42);
        let restaurante = rest_gen.generate(&window, &mut rng);

        assert!(!restaurante.nombre.is_empty());
        assert!(restaurante.direccion.contains(", "));
        assert!(restaurante.menu.is_empty());
    }

    #[test]
    fn test_categorias_are_distinct() {
        let rest_gen = RestauranteGenerator::new();
        let window = SynthesisWindow::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let restaurante = rest_gen.generate(&window, &mut rng);
            assert_eq!(restaurante.categorias.len(), 2);

            let unique: HashSet<_> = restaurante.categorias.iter().collect();
            assert_eq!(unique.len(), 2);
        }
    }

    #[test]
    fn test_category_count_clamped_to_vocabulary() {
        let config = RestauranteGenConfig {
            categorias: vec!["italiana".to_string()],
            categorias_por_restaurante: 4,
            ..RestauranteGenConfig::default()
        };
        let rest_gen = RestauranteGenerator::with_config(config);
        let window = SynthesisWindow::default();
        let mut rng = StdRng::seed_from_u64(42);

        let restaurante = rest_gen.generate(&window, &mut rng);
        assert_eq!(restaurante.categorias, vec!["italiana".to_string()]);
    }
}
