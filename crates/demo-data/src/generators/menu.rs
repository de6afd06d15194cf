//! Menu item generation, per restaurant.

use std::ops::{Range, RangeInclusive};

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use rand::seq::index;

use comedor::ids::{MenuId, RestauranteId};
use comedor::models::MenuItem;
use comedor::rounding::round2;

use super::capitalized_word;
use crate::window::SynthesisWindow;

/// Configuration for menu generation.
#[derive(Debug, Clone)]
pub struct MenuGenConfig {
    /// How many items each restaurant offers (inclusive).
    pub items_por_restaurante: RangeInclusive<usize>,
    /// Unit price range, rounded to cents.
    pub precio_range: Range<f64>,
    /// Dietary tag vocabulary.
    pub tags: Vec<String>,
    /// How many tags each item gets.
    pub tags_por_item: usize,
    /// Probability that an item is currently available.
    pub disponible_probability: f64,
}

impl Default for MenuGenConfig {
    fn default() -> Self {
        Self {
            items_por_restaurante: 5..=10,
            precio_range: 50.0..350.0,
            tags: vec![
                "vegetariano".to_string(),
                "picante".to_string(),
                "gluten-free".to_string(),
                "vegano".to_string(),
                "bajo en calorías".to_string(),
            ],
            tags_por_item: 2,
            disponible_probability: 0.5,
        }
    }
}

/// Generates menu items owned by a single restaurant.
pub struct MenuGenerator {
    config: MenuGenConfig,
}

impl MenuGenerator {
    /// Creates a new menu generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: MenuGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: MenuGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single menu item for the given restaurant.
    pub fn generate(
        &self,
        restaurante_id: RestauranteId,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> MenuItem {
        let id = MenuId::generate(rng);
        let nombre = format!("{} {}", capitalized_word(rng), capitalized_word(rng));
        let descripcion: String = Sentence(4..10).fake_with_rng(rng);
        let precio = round2(rng.gen_range(self.config.precio_range.clone()));
        let disponible = rng.gen_bool(self.config.disponible_probability);
        let tags = self.pick_tags(rng);
        let created_at = window.datetime_this_year(rng);

        MenuItem {
            id,
            restaurante_id,
            nombre,
            descripcion,
            precio,
            disponible,
            tags,
            created_at,
        }
    }

    /// Generates a full menu for one restaurant, sized from the configured
    /// range.
    pub fn generate_for_restaurante(
        &self,
        restaurante_id: RestauranteId,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Vec<MenuItem> {
        let count = rng.gen_range(self.config.items_por_restaurante.clone());
        (0..count)
            .map(|_| self.generate(restaurante_id, window, rng))
            .collect()
    }

    /// Samples distinct tags from the vocabulary.
    fn pick_tags(&self, rng: &mut impl Rng) -> Vec<String> {
        let vocab = &self.config.tags;
        let amount = self.config.tags_por_item.min(vocab.len());
        index::sample(rng, vocab.len(), amount)
            .iter()
            .map(|i| vocab[i].clone())
            .collect()
    }
}

impl Default for MenuGenerator {
    fn default() -> Self {
        Self::new()
    }
}
