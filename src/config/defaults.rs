//! System-wide default constants.
//!
//! Centralises the numeric constants of the prediction model.
//! Grouped by subsystem for easy discovery.

use crate::types::MetalMap;

// ============================================================================
// Geodesy / Site Matching
// ============================================================================

/// Mean Earth radius used by the Haversine formula (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius within which a coordinate resolves to a known site (km).
///
/// 3 miles.
pub const SITE_MATCH_RADIUS_KM: f64 = 4.82;

// ============================================================================
// Estimation (unknown locations)
// ============================================================================

/// Base concentration at location factor 1.0 (ppm), Fe, Cr, Mn, Mo, In.
pub const ESTIMATE_BASE_PPM: MetalMap = MetalMap::new(25_000.0, 500.0, 1_500.0, 20.0, 0.25);

/// Half-width of the uniform noise added to each estimate (ppm).
///
/// Noise is `u * 2w - w` for `u` in `[0, 1)`.
pub const ESTIMATE_NOISE_HALF_WIDTH_PPM: MetalMap = MetalMap::new(5_000.0, 100.0, 300.0, 5.0, 0.1);

/// Background levels used as the risk denominator when no site matches (ppm).
pub const DEFAULT_BASELINE_PPM: MetalMap = MetalMap::new(45_000.0, 90.0, 600.0, 1.2, 0.1);

// ============================================================================
// Uncertainty
// ============================================================================

/// Error-percentage range for values taken from a known site.
pub const KNOWN_SITE_ERROR_PCT: (f64, f64) = (2.0, 6.0);

/// Error-percentage range for estimated values.
pub const ESTIMATE_ERROR_PCT: (f64, f64) = (3.0, 8.0);

// ============================================================================
// Risk Scoring
// ============================================================================

/// `risk = predicted / (baseline + RISK_DENOMINATOR_OFFSET) * RISK_SCALE`
pub const RISK_SCALE: f64 = 25.0;

/// Added to every baseline so a zero baseline never divides by zero.
pub const RISK_DENOMINATOR_OFFSET: f64 = 1.0;

/// Upper clamp of a risk score.
pub const RISK_MAX: f64 = 100.0;

// ============================================================================
// Server
// ============================================================================

/// Default HTTP bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

/// Maximum accepted request body (bytes). 1 MiB.
pub const MAX_BODY_BYTES: usize = 1_048_576;
