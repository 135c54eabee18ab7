//! Known monitoring sites and coordinate-to-site resolution
//!
//! The registry is an ordered list: resolution returns the first site within
//! the match radius in registry order, not the closest one.

mod registry;
mod resolver;

pub use registry::{KnownSite, SiteRegistry};
pub use resolver::SiteResolver;
