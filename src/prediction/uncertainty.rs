//! Per-metal uncertainty percentages
//!
//! These are labelled random draws, not derived from the values: narrower for
//! known sites, wider for estimates.

use rand::Rng;

use crate::config::defaults::{ESTIMATE_ERROR_PCT, KNOWN_SITE_ERROR_PCT};
use crate::types::MetalMap;

use super::round_half_up;

/// Error range `(low, high)` in percent for the given value source.
pub const fn error_range(is_known_site: bool) -> (f64, f64) {
    if is_known_site {
        KNOWN_SITE_ERROR_PCT
    } else {
        ESTIMATE_ERROR_PCT
    }
}

/// Map a uniform draw `u` in `[0, 1)` onto `[low, high]`, one decimal.
pub fn error_from_draw(range: (f64, f64), u: f64) -> f64 {
    let (low, high) = range;
    round_half_up(u * (high - low) + low, 1)
}

/// Draw one error percentage per metal, in iteration order.
pub fn draw_errors<R: Rng + ?Sized>(is_known_site: bool, rng: &mut R) -> MetalMap {
    let range = error_range(is_known_site);
    MetalMap::from_fn(|_| error_from_draw(range, rng.gen::<f64>()))
}
