//! Configuration types for demo data generation.

use comedor::GeoPoint;
use comedor::rounding::round6;
use serde::{Deserialize, Serialize};

/// Default seed used by the `generate` binary when `SEED` is unset.
pub const DEFAULT_SEED: u64 = 42;

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lon: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Returns a random point within the bounding box, rounded to six decimals.
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> GeoPoint {
        let lat = rng.gen_range(self.min_lat..self.max_lat);
        let lon = rng.gen_range(self.min_lon..self.max_lon);
        GeoPoint::new(round6(lat), round6(lon))
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

/// Pre-defined geographic regions for demo data generation.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Guatemala - the delivery area the demo dataset is modeled on.
    pub const GUATEMALA: BoundingBox = BoundingBox::new(13.7, -92.3, 17.8, -88.2);
}

/// Controls what an order generator does when the chosen restaurant has no
/// menu items to order from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyMenuPolicy {
    /// Skip the order entirely and pick again on the next draw.
    #[default]
    Skip,
    /// Emit the order with no lines and a total of zero.
    EmptyOrder,
}
