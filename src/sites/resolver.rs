//! Coordinate to known-site resolution

use crate::config::defaults::SITE_MATCH_RADIUS_KM;
use crate::geodesy::haversine_km;
use crate::types::Coordinate;

use super::{KnownSite, SiteRegistry};

/// Linear scan over a [`SiteRegistry`] with a fixed match radius.
///
/// The first site in registry order whose distance is `<= radius_km` wins,
/// even when a later site is closer. No match is a normal outcome.
#[derive(Debug, Clone, Copy)]
pub struct SiteResolver<'a> {
    registry: &'a SiteRegistry,
    radius_km: f64,
}

impl<'a> SiteResolver<'a> {
    pub const fn new(registry: &'a SiteRegistry, radius_km: f64) -> Self {
        Self { registry, radius_km }
    }

    /// Resolver over `registry` with the 3-mile radius.
    pub const fn with_default_radius(registry: &'a SiteRegistry) -> Self {
        Self::new(registry, SITE_MATCH_RADIUS_KM)
    }

    pub const fn registry(&self) -> &'a SiteRegistry {
        self.registry
    }

    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn resolve(&self, coord: Coordinate) -> Option<&'a KnownSite> {
        self.registry
            .sites()
            .iter()
            .find(|site| haversine_km(coord, site.location) <= self.radius_km)
    }
}
