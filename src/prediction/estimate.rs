//! Synthetic concentrations for locations with no known site
//!
//! The location factor is a smooth function of raw degree values, not a
//! geospatial model. It is kept exactly as-is for output parity.

use rand::Rng;

use crate::config::defaults::{ESTIMATE_BASE_PPM, ESTIMATE_NOISE_HALF_WIDTH_PPM};
use crate::types::{Coordinate, Metal, MetalMap};

use super::round_half_up;

/// `((sin(lat/10)·0.5 + 0.5) + (cos(lon/15)·0.5 + 0.5)) / 2`, in `[0, 1]`.
pub fn location_factor(coord: Coordinate) -> f64 {
    let lat_factor = (coord.lat / 10.0).sin() * 0.5 + 0.5;
    let lon_factor = (coord.lon / 15.0).cos() * 0.5 + 0.5;
    (lat_factor + lon_factor) / 2.0
}

/// Decimal places kept for an estimated metal.
const fn estimate_decimals(metal: Metal) -> i32 {
    match metal {
        Metal::Fe | Metal::Cr | Metal::Mn => 0,
        Metal::Mo | Metal::In => 2,
    }
}

/// Estimate one metal from a uniform draw `u` in `[0, 1)`.
///
/// `base·f + (u·2w − w)`, rounded. Not clamped: large negative noise at a low
/// factor can yield a negative concentration.
pub fn estimate_metal(metal: Metal, factor: f64, u: f64) -> f64 {
    let half_width = ESTIMATE_NOISE_HALF_WIDTH_PPM[metal];
    let noise = u * (2.0 * half_width) - half_width;
    round_half_up(ESTIMATE_BASE_PPM[metal] * factor + noise, estimate_decimals(metal))
}

/// Estimate all five metals, drawing once per metal in iteration order.
pub fn estimate_values<R: Rng + ?Sized>(factor: f64, rng: &mut R) -> MetalMap {
    MetalMap::from_fn(|metal| estimate_metal(metal, factor, rng.gen::<f64>()))
}
