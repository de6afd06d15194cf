//! Entity generators for the demo dataset.
//!
//! This module provides one generator per collection:
//! - [`UsuarioGenerator`]: Users with demographics and a delivery location
//! - [`RestauranteGenerator`]: Restaurants with address and cuisine categories
//! - [`MenuGenerator`]: Menu items owned by a single restaurant
//! - [`PromocionGenerator`]: Time-boxed promotions over one restaurant's menu
//! - [`OrdenGenerator`]: Orders with line items and promotion-aware pricing
//! - [`ResenaGenerator`]: Reviews attached to existing orders
//! - [`PagoGenerator`]: Exactly one payment per order

pub mod menu;
pub mod orden;
pub mod pago;
pub mod promocion;
pub mod resena;
pub mod restaurante;
pub mod usuario;

pub use menu::{MenuGenConfig, MenuGenerator};
pub use orden::{ActivePromotions, OrdenGenConfig, OrdenGenerator};
pub use pago::{PagoGenConfig, PagoGenerator};
pub use promocion::{PromocionGenConfig, PromocionGenerator};
pub use resena::{ResenaGenConfig, ResenaGenerator};
pub use restaurante::{RestauranteGenConfig, RestauranteGenerator};
pub use usuario::{UsuarioGenConfig, UsuarioGenerator};

use fake::Fake;
use fake::faker::lorem::en::Word;
use rand::Rng;

/// Draws a lorem word and capitalizes it, for display names.
pub(crate) fn capitalized_word(rng: &mut impl Rng) -> String {
    let word: String = Word().fake_with_rng(rng);
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_capitalized_word() {
        let mut rng = StdRng::seed_from_u64(5);
        let word = capitalized_word(&mut rng);
        assert!(word.chars().next().is_some_and(char::is_uppercase));
    }
}
