//! Prediction Engine
//!
//! Turns a coordinate into per-metal concentrations, uncertainty percentages
//! and risk scores:
//!
//! 1. **Value sourcing**: measured values of the first known site within the
//!    match radius, or location-factor estimates plus uniform noise
//! 2. **Uncertainty**: one uniform draw per metal, `[2, 6]`% for known sites
//!    and `[3, 8]`% for estimates
//! 3. **Risk scoring**: `predicted / (baseline + 1) · 25`, clamped to `[0, 100]`
//!
//! Randomness comes from the caller's `Rng`. Each draw is a single `f64` in
//! `[0, 1)`; an estimate consumes five noise draws then five error draws, a
//! known site consumes only the five error draws. With a seeded generator the
//! output is fully reproducible.

pub mod estimate;
pub mod risk;
pub mod uncertainty;

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::config::defaults::DEFAULT_BASELINE_PPM;
use crate::sites::{SiteRegistry, SiteResolver};
use crate::types::{Coordinate, MetalPrediction, PredictionResult, ValueSource};

/// Errors surfaced by the prediction boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// Latitude/longitude missing, not a number, or not finite.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure; the message is for logs, never for clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Round half up to `decimals` places: `floor(x·10^d + 0.5) / 10^d`.
pub(crate) fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

/// Stateless prediction over a read-only site registry.
///
/// Safe to share across threads; every call owns its own draws.
#[derive(Debug, Clone, Copy)]
pub struct PredictionEngine<'a> {
    resolver: SiteResolver<'a>,
}

impl PredictionEngine<'static> {
    /// Engine over the built-in Arizona sites with the given radius.
    pub fn arizona(radius_km: f64) -> Self {
        Self::new(SiteResolver::new(SiteRegistry::arizona(), radius_km))
    }
}

impl<'a> PredictionEngine<'a> {
    pub const fn new(resolver: SiteResolver<'a>) -> Self {
        Self { resolver }
    }

    pub const fn resolver(&self) -> &SiteResolver<'a> {
        &self.resolver
    }

    /// Reject coordinates that are not finite numbers.
    pub fn validate(coord: Coordinate) -> Result<Coordinate, PredictionError> {
        if coord.is_finite() {
            Ok(coord)
        } else {
            Err(PredictionError::InvalidInput(
                "lat and lon must be finite numbers".to_string(),
            ))
        }
    }

    /// Validate, then predict.
    pub fn try_predict<R: Rng + ?Sized>(
        &self,
        coord: Coordinate,
        rng: &mut R,
    ) -> Result<PredictionResult, PredictionError> {
        let coord = Self::validate(coord)?;
        Ok(self.predict(coord, rng))
    }

    /// Predict concentrations, errors and risk scores at `coord`.
    ///
    /// Never fails for finite input.
    pub fn predict<R: Rng + ?Sized>(&self, coord: Coordinate, rng: &mut R) -> PredictionResult {
        let (values, baseline, source) = match self.resolver.resolve(coord) {
            Some(site) => {
                debug!(site = %site.name, lat = coord.lat, lon = coord.lon, "Using measured values from known site");
                (
                    site.measured,
                    site.baseline,
                    ValueSource::KnownSite {
                        name: site.name.clone(),
                    },
                )
            }
            None => {
                let factor = estimate::location_factor(coord);
                debug!(lat = coord.lat, lon = coord.lon, factor, "No known site in range, estimating");
                (
                    estimate::estimate_values(factor, rng),
                    DEFAULT_BASELINE_PPM,
                    ValueSource::Estimated {
                        location_factor: factor,
                    },
                )
            }
        };

        let errors = uncertainty::draw_errors(source.is_known_site(), rng);
        let risk_scores = risk::risk_scores(&values, &baseline);

        let metals = values
            .iter()
            .map(|(metal, ppm)| MetalPrediction {
                name: metal,
                ppm,
                error: errors[metal],
            })
            .collect();

        PredictionResult {
            location: coord,
            metals,
            risk_scores,
            source,
        }
    }
}
