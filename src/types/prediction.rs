//! Prediction output record

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Coordinate, Metal, MetalMap};

/// Where the concentration values of a prediction came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    /// Measured values of a monitoring site within the match radius.
    KnownSite { name: String },
    /// Synthetic values scaled by the location factor.
    Estimated { location_factor: f64 },
}

impl ValueSource {
    pub const fn is_known_site(&self) -> bool {
        matches!(self, Self::KnownSite { .. })
    }
}

/// A single metal line in the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetalPrediction {
    pub name: Metal,
    pub ppm: f64,
    /// Uncertainty, percent.
    pub error: f64,
}

/// Per-metal risk scores in `[0, 100]` plus their rounded mean.
///
/// Serialized flat: `{"Fe": .., "Cr": .., "Mn": .., "Mo": .., "In": .., "Average": ..}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScores {
    pub per_metal: MetalMap,
    pub average: f64,
}

impl Serialize for RiskScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Metal::ALL.len() + 1))?;
        for (metal, score) in self.per_metal.iter() {
            map.serialize_entry(metal.symbol(), &score)?;
        }
        map.serialize_entry("Average", &self.average)?;
        map.end()
    }
}

/// Result of one prediction call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub location: Coordinate,
    pub metals: Vec<MetalPrediction>,
    pub risk_scores: RiskScores,
    #[serde(skip)]
    pub source: ValueSource,
}

impl PredictionResult {
    pub const fn is_known_site(&self) -> bool {
        self.source.is_known_site()
    }

    pub fn metal(&self, metal: Metal) -> Option<&MetalPrediction> {
        self.metals.iter().find(|m| m.name == metal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let result = PredictionResult {
            location: Coordinate::new(0.0, 0.0),
            metals: vec![MetalPrediction {
                name: Metal::Fe,
                ppm: 100.0,
                error: 4.2,
            }],
            risk_scores: RiskScores {
                per_metal: MetalMap::new(1.0, 2.0, 3.0, 4.0, 5.0),
                average: 3.0,
            },
            source: ValueSource::Estimated {
                location_factor: 0.5,
            },
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["metals"][0]["name"], "Fe");
        assert_eq!(v["metals"][0]["error"], 4.2);
        assert_eq!(v["risk_scores"]["Average"], 3.0);
        assert_eq!(v["risk_scores"]["In"], 5.0);
        assert!(v.get("source").is_none());
    }
}
