//! Typed entity identifiers.
//!
//! Every collection gets its own opaque id type so a reference to a usuario
//! cannot be confused with a reference to an orden. Ids wrap a UUID built
//! from the run's random generator, which keeps them reproducible under a
//! fixed seed.

use rand::Rng;
use uuid::Uuid;

/// Builds a version-4 UUID from generator output instead of OS entropy.
pub fn random_uuid(rng: &mut impl Rng) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    // Set the version (4) and variant (RFC 4122) bits.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes)
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Draws a fresh id from the run's generator.
            pub fn generate(rng: &mut impl Rng) -> Self {
                Self(random_uuid(rng))
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(UsuarioId);
entity_id!(RestauranteId);
entity_id!(MenuId);
entity_id!(PromocionId);
entity_id!(OrdenId);
entity_id!(ResenaId);
entity_id!(PagoId);
