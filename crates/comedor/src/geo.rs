//! Geographic points in the GeoJSON shape the demo backend stores.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A WGS84 point. Serializes as `{"type": "Point", "coordinates": [lon, lat]}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Coordinates in GeoJSON order (longitude first).
    pub fn coordinates(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl Serialize for GeoPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("type", "Point")?;
        state.serialize_field("coordinates", &self.coordinates())?;
        state.end()
    }
}
