use super::recommendation::Recommendation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Crop-health assessment derived from a historical reading sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropAnalysis {
    /// Overall health score, 0-100.
    pub health: u8,
    pub risk_factors: Vec<String>,
    /// Top recommendations for the latest reading, at most three.
    pub recommendations: Vec<Recommendation>,
    pub predictions: Predictions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predictions {
    /// Yield estimate as a percentage of optimal.
    pub yield_estimate: f64,
    pub harvest_date: DateTime<Utc>,
    pub next_irrigation: DateTime<Utc>,
}
