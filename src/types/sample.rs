//! Uploaded water-sample row

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column order of the sample CSV upload.
pub const SAMPLE_COLUMNS: [&str; 9] = [
    "location",
    "sample_date",
    "ph_level",
    "iron_ppm",
    "chromium_ppm",
    "manganese_ppm",
    "molybdenum_ppm",
    "indium_ppm",
    "tantalum_ppm",
];

/// One parsed sample row. Blank or unparseable cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    pub location: Option<String>,
    pub sample_date: Option<NaiveDate>,
    pub ph_level: Option<f64>,
    pub iron_ppm: Option<f64>,
    pub chromium_ppm: Option<f64>,
    pub manganese_ppm: Option<f64>,
    pub molybdenum_ppm: Option<f64>,
    pub indium_ppm: Option<f64>,
    pub tantalum_ppm: Option<f64>,
}
