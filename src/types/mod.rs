//! Shared data structures for groundwater metal prediction
//!
//! - `Coordinate`: WGS84 point supplied by the caller
//! - `Metal` / `MetalMap`: the five predicted metals and per-metal values
//! - `PredictionResult`: the record returned to the map client
//! - `WaterSample`: one row of an uploaded sample CSV

mod geo;
mod metals;
mod prediction;
mod sample;

pub use geo::*;
pub use metals::*;
pub use prediction::*;
pub use sample::*;
