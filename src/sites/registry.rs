//! Static table of Arizona monitoring sites

use std::sync::OnceLock;

use serde::Serialize;

use crate::types::{Coordinate, MetalMap};

/// A monitoring site with recorded and background concentrations (ppm).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnownSite {
    pub name: String,
    pub location: Coordinate,
    /// Recorded concentrations, returned as-is for a match.
    pub measured: MetalMap,
    /// Background concentrations, used as the risk denominator.
    pub baseline: MetalMap,
}

impl KnownSite {
    pub fn new(name: impl Into<String>, location: Coordinate, measured: MetalMap, baseline: MetalMap) -> Self {
        Self {
            name: name.into(),
            location,
            measured,
            baseline,
        }
    }
}

/// Ordered, immutable collection of known sites.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteRegistry {
    sites: Vec<KnownSite>,
}

static ARIZONA: OnceLock<SiteRegistry> = OnceLock::new();

impl SiteRegistry {
    /// Registry over `sites`, in the given order.
    pub const fn new(sites: Vec<KnownSite>) -> Self {
        Self { sites }
    }

    /// The six Phoenix-area sites, built once per process.
    pub fn arizona() -> &'static Self {
        ARIZONA.get_or_init(|| Self::new(arizona_sites()))
    }

    pub fn sites(&self) -> &[KnownSite] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

}

fn arizona_sites() -> Vec<KnownSite> {
    vec![
        KnownSite::new(
            "Alvord Lake",
            Coordinate::new(33.403, -112.118),
            MetalMap::new(51_600.0, 190.0, 200.0, 10.0, 18.2),
            MetalMap::new(45_000.0, 90.0, 600.0, 1.2, 0.0),
        ),
        KnownSite::new(
            "Desert West Lake",
            Coordinate::new(33.470, -112.166),
            MetalMap::new(73_000.0, 170.0, 150.0, 15.0, 10.4),
            MetalMap::new(46_000.0, 85.0, 590.0, 1.5, 0.0),
        ),
        KnownSite::new(
            "Steele Park",
            Coordinate::new(33.506, -112.065),
            MetalMap::new(3_000.0, 20.0, 10.0, 3.0, 0.5),
            MetalMap::new(48_000.0, 95.0, 610.0, 1.0, 0.0),
        ),
        KnownSite::new(
            "Gila Canal",
            Coordinate::new(33.390, -112.126),
            MetalMap::new(26_900.0, 80.0, 90.0, 9.3, 0.0),
            MetalMap::new(44_000.0, 80.0, 580.0, 1.3, 0.0),
        ),
        KnownSite::new(
            "Papago Park",
            Coordinate::new(33.460, -111.944),
            MetalMap::new(62_800.0, 30.0, 50.0, 7.5, 11.0),
            MetalMap::new(45_500.0, 88.0, 605.0, 1.4, 0.0),
        ),
        KnownSite::new(
            "Tres Rios",
            Coordinate::new(33.381, -112.307),
            MetalMap::new(68_200.0, 190.0, 200.0, 12.2, 0.0),
            MetalMap::new(47_000.0, 87.0, 595.0, 1.6, 0.0),
        ),
    ]
}
