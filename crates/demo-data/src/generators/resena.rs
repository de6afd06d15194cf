//! Review generation against existing orders.

use std::ops::RangeInclusive;

use fake::Fake;
use fake::faker::lorem::en::Paragraph;
use rand::Rng;

use comedor::ids::ResenaId;
use comedor::models::{Orden, Resena};
use comedor::rounding::round1;
use comedor::validate::MAX_COMENTARIO_LEN;

use crate::window::SynthesisWindow;

/// Configuration for review generation.
#[derive(Debug, Clone)]
pub struct ResenaGenConfig {
    /// Rating range (inclusive), rounded to one decimal.
    pub calificacion_range: RangeInclusive<f64>,
    /// Maximum comment length in characters.
    pub max_comentario_len: usize,
}

impl Default for ResenaGenConfig {
    fn default() -> Self {
        Self {
            calificacion_range: 1.0..=5.0,
            max_comentario_len: MAX_COMENTARIO_LEN,
        }
    }
}

/// Generates reviews. Each review picks an existing order and carries that
/// order's user and restaurant, so reviews never dangle.
pub struct ResenaGenerator {
    config: ResenaGenConfig,
}

impl ResenaGenerator {
    /// Creates a new review generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ResenaGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ResenaGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single review for a uniformly chosen order.
    /// `ordenes` must not be empty; [`Self::generate_batch`] guards this.
    pub fn generate(
        &self,
        ordenes: &[Orden],
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Resena {
        let id = ResenaId::generate(rng);
        let orden = &ordenes[rng.gen_range(0..ordenes.len())];

        let calificacion = round1(rng.gen_range(self.config.calificacion_range.clone()));
        let mut comentario: String = Paragraph(3..7).fake_with_rng(rng);
        if comentario.chars().count() > self.config.max_comentario_len {
            comentario = comentario
                .chars()
                .take(self.config.max_comentario_len)
                .collect();
        }
        let fecha = window.datetime_this_month(rng);

        Resena {
            id,
            orden_id: orden.id,
            usuario_id: orden.usuario_id,
            restaurante_id: orden.restaurante_id,
            calificacion,
            comentario,
            fecha,
        }
    }

    /// Generates multiple reviews. Returns an empty vector when there are no
    /// orders to review.
    pub fn generate_batch(
        &self,
        count: usize,
        ordenes: &[Orden],
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Vec<Resena> {
        if ordenes.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| self.generate(ordenes, window, rng))
            .collect()
    }
}

impl Default for ResenaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
