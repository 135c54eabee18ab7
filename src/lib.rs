//! Bluvia: groundwater heavy-metal prediction for Arizona
//!
//! Click a point on the map, get predicted Fe, Cr, Mn, Mo and In
//! concentrations with uncertainty and 0-100 risk scores.
//!
//! ## Architecture
//!
//! - **Sites**: six monitoring sites with measured and background levels
//! - **Prediction Engine**: known-site lookup or location-factor estimate,
//!   uncertainty draws, risk scoring
//! - **Ingest**: sample CSV parsing
//! - **API**: axum HTTP boundary

pub mod api;
pub mod config;
pub mod geodesy;
pub mod ingest;
pub mod prediction;
pub mod sites;
pub mod types;

// Re-export service configuration
pub use config::ServiceConfig;

// Re-export commonly used types
pub use types::{
    Coordinate, Metal, MetalMap, MetalPrediction, PredictionResult, RiskScores, ValueSource,
    WaterSample,
};

// Re-export prediction components
pub use prediction::{PredictionEngine, PredictionError};
pub use sites::{KnownSite, SiteRegistry, SiteResolver};
