//! Geographic coordinate type

use serde::{Deserialize, Serialize};

/// A point in degrees, WGS84 assumed.
///
/// Range is not checked: `lat = 200.0` is carried through unchanged and simply
/// fails to match any known site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(33.4, -112.1).is_finite());
        assert!(Coordinate::new(200.0, 0.0).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_serializes_as_lat_lon() {
        let v = serde_json::to_value(Coordinate::new(33.403, -112.118)).unwrap();
        assert_eq!(v["lat"], 33.403);
        assert_eq!(v["lon"], -112.118);
    }
}
