//! Predicted metals and the fixed-order per-metal value map

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Metals covered by the prediction engine.
///
/// Tantalum appears in the sample upload schema but is not predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metal {
    Fe,
    Cr,
    Mn,
    Mo,
    In,
}

impl Metal {
    /// Iteration order used for every map, draw sequence and response list.
    pub const ALL: [Self; 5] = [Self::Fe, Self::Cr, Self::Mn, Self::Mo, Self::In];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Fe => "Fe",
            Self::Cr => "Cr",
            Self::Mn => "Mn",
            Self::Mo => "Mo",
            Self::In => "In",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Metal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One value per metal (ppm or score), iterated in [`Metal::ALL`] order.
///
/// Serializes as a JSON object keyed by metal symbol, preserving that order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetalMap {
    values: [f64; 5],
}

impl MetalMap {
    /// Build from values listed as Fe, Cr, Mn, Mo, In.
    pub const fn new(fe: f64, cr: f64, mn: f64, mo: f64, indium: f64) -> Self {
        Self {
            values: [fe, cr, mn, mo, indium],
        }
    }

    /// Build by evaluating `f` once per metal, in iteration order.
    pub fn from_fn(mut f: impl FnMut(Metal) -> f64) -> Self {
        let mut values = [0.0; 5];
        for metal in Metal::ALL {
            values[metal.index()] = f(metal);
        }
        Self { values }
    }

    pub const fn get(&self, metal: Metal) -> f64 {
        self.values[metal.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metal, f64)> + '_ {
        Metal::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Unweighted mean over all five metals.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

impl std::ops::Index<Metal> for MetalMap {
    type Output = f64;

    fn index(&self, metal: Metal) -> &f64 {
        &self.values[metal.index()]
    }
}

impl Serialize for MetalMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (metal, value) in self.iter() {
            map.serialize_entry(metal.symbol(), &value)?;
        }
        map.end()
    }
}
