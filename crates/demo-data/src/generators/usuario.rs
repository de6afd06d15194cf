//! User generation with demographics.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use fake::{Fake, faker::name::en::Name};
use rand::Rng;

use comedor::ids::UsuarioId;
use comedor::models::{Genero, Usuario};

use crate::config::{BoundingBox, Region};
use crate::window::SynthesisWindow;

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UsuarioGenConfig {
    /// Area the delivery locations are drawn from.
    pub area: BoundingBox,
    /// Age range (inclusive).
    pub edad_range: RangeInclusive<u8>,
    /// Domains used when deriving an email from the name.
    pub email_domains: Vec<String>,
}

impl Default for UsuarioGenConfig {
    fn default() -> Self {
        Self {
            area: Region::GUATEMALA,
            edad_range: 18..=70,
            email_domains: vec![
                "gmail.com".to_string(),
                "outlook.com".to_string(),
                "yahoo.com".to_string(),
                "proton.me".to_string(),
            ],
        }
    }
}

/// Generates users with demographics and a delivery location.
pub struct UsuarioGenerator {
    config: UsuarioGenConfig,
}

impl UsuarioGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UsuarioGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UsuarioGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single user. Registration dates fall within the decade
    /// ending at the window anchor.
    pub fn generate(&self, window: &SynthesisWindow, rng: &mut impl Rng) -> Usuario {
        let id = UsuarioId::generate(rng);
        let nombre: String = Name().fake_with_rng(rng);
        let email = self.generate_email(&nombre, rng);
        let ubicacion = self.config.area.random_point(rng);
        let fecha_registro = window.datetime_this_decade(rng);
        let edad = rng.gen_range(self.config.edad_range.clone());
        let genero = Genero::ALL[rng.gen_range(0..Genero::ALL.len())];

        Usuario {
            id,
            nombre,
            email,
            ubicacion,
            fecha_registro,
            edad,
            genero,
        }
    }

    /// Generates multiple users with unique emails.
    pub fn generate_batch(
        &self,
        count: usize,
        window: &SynthesisWindow,
        rng: &mut impl Rng,
    ) -> Vec<Usuario> {
        let mut emails = HashSet::with_capacity(count);
        (0..count)
            .map(|_| {
                let mut usuario = self.generate(window, rng);
                while !emails.insert(usuario.email.clone()) {
                    usuario.email = self.generate_email(&usuario.nombre, rng);
                }
                usuario
            })
            .collect()
    }

    /// Generates an email from a name.
    fn generate_email(&self, nombre: &str, rng: &mut impl Rng) -> String {
        let normalized: String = nombre
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        let suffix: u32 = rng.gen_range(1..9999);
        let domains = &self.config.email_domains;
        let domain = &domains[rng.gen_range(0..domains.len())];

        format!("{normalized}{suffix}@{domain}")
    }
}

impl Default for UsuarioGenerator {
    fn default() -> Self {
        Self::new()
    }
}
