//! Rule-based agronomic recommendation engine for IoT farm sensor data.
//!
//! A [`RecommendationEngine`] turns a raw [`SensorReading`] into prioritized,
//! deduplicated recommendations via five threshold rules, optionally augmented
//! by an injected text-generation capability ([`TextGenerator`]). Crop health
//! over a historical reading sequence is available through
//! [`RecommendationEngine::analyze_crop_health`].
//!
//! ```no_run
//! use agrisense::{RecommendationEngine, SensorReading};
//!
//! # async fn demo() {
//! let engine = RecommendationEngine::new();
//! let reading = SensorReading {
//!     soil_moisture: Some(15.0),
//!     ..Default::default()
//! };
//! let recommendations = engine.generate_recommendations(&reading).await;
//! # }
//! ```

pub mod augment;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use augment::{AugmentationService, GeminiClient, TextGenerator};
pub use config::GeminiConfig;
pub use error::{AgriSenseError, Result};
pub use logic::{RecommendationEngine, Rule};
pub use models::*;
