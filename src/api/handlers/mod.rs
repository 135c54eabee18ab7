//! API route handlers
//!
//! Request handling logic for all API endpoints including:
//! - Metal prediction for a clicked map coordinate
//! - Water-sample CSV upload parsing
//! - Static informational content
//! - Health and Prometheus counters

mod info;
mod predict;
mod samples;
mod status;

pub use info::*;
pub use predict::*;
pub use samples::*;
pub use status::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ServiceConfig;
use crate::prediction::{PredictionEngine, PredictionError};
use crate::types::{Coordinate, PredictionResult};

// ============================================================================
// Random Source
// ============================================================================

/// Where request handlers draw their randomness from.
#[derive(Debug, Clone)]
pub enum RandomSource {
    /// Per-thread OS-seeded generator; independent draws per request.
    Thread,
    /// One seeded generator shared by all requests, for reproducible runs.
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))),
            None => Self::Thread,
        }
    }

    /// Run one prediction with this source's generator.
    pub fn predict(
        &self,
        engine: &PredictionEngine<'_>,
        coord: Coordinate,
    ) -> Result<PredictionResult, PredictionError> {
        match self {
            Self::Thread => engine.try_predict(coord, &mut rand::thread_rng()),
            Self::Seeded(rng) => {
                let mut rng = rng
                    .lock()
                    .map_err(|_| PredictionError::Internal("seeded RNG mutex poisoned".to_string()))?;
                engine.try_predict(coord, &mut *rng)
            }
        }
    }
}

// ============================================================================
// Counters
// ============================================================================

/// Monotonic request counters exposed on `/api/metrics`.
#[derive(Debug, Default)]
pub struct Counters {
    pub predictions_known_site: AtomicU64,
    pub predictions_estimated: AtomicU64,
    pub requests_rejected: AtomicU64,
    pub uploads_accepted: AtomicU64,
    pub samples_ingested: AtomicU64,
}

impl Counters {
    pub fn record_prediction(&self, result: &PredictionResult) {
        let counter = if result.is_known_site() {
            &self.predictions_known_site
        } else {
            &self.predictions_estimated
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upload(&self, samples: usize) {
        self.uploads_accepted.fetch_add(1, Ordering::Relaxed);
        self.samples_ingested.fetch_add(samples as u64, Ordering::Relaxed);
    }
}

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Prediction engine over the built-in site registry
    pub engine: PredictionEngine<'static>,
    /// Randomness for prediction draws
    pub rng: RandomSource,
    /// Request counters
    pub counters: Arc<Counters>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
    /// Request body cap in bytes
    pub max_body_bytes: usize,
}

impl ApiState {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            engine: PredictionEngine::arizona(config.prediction.match_radius_km),
            rng: RandomSource::from_seed(config.prediction.seed),
            counters: Arc::new(Counters::default()),
            started_at: Instant::now(),
            max_body_bytes: config.server.max_body_bytes,
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
