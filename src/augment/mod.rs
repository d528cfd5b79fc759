pub mod gemini;
mod parse;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{CanonicalReading, Category, Predictions, Priority, Recommendation};

/// Injected text-generation capability. The engine assumes nothing about the
/// implementation beyond: it may be absent, it may fail, and on success it
/// returns free text that may or may not contain parseable structure.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Crop assessment produced by the capability, already repaired with
/// defaults. The engine attaches the recommendation list.
#[derive(Debug, Clone)]
pub(crate) struct CropAssessment {
    pub health: u8,
    pub risk_factors: Vec<String>,
    pub predictions: Predictions,
}

/// Adapter around a [`TextGenerator`]: builds prompts, parses candidates out
/// of the response, and degrades to empty output on every failure mode.
/// Nothing in here returns an error to the caller.
pub struct AugmentationService {
    generator: Arc<dyn TextGenerator>,
}

impl AugmentationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the capability for up to three candidate recommendations.
    pub async fn recommend(&self, reading: &CanonicalReading) -> Vec<Recommendation> {
        let prompt = recommendation_prompt(reading);
        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Text generation failed, continuing without augmentation: {}", e);
                return Vec::new();
            }
        };

        parse::parse_candidates(&text)
            .into_iter()
            .map(complete_candidate)
            .collect()
    }

    /// Ask the capability for a richer crop assessment over the latest
    /// reading plus sequence-length context. `None` on any failure.
    pub(crate) async fn assess_crop(
        &self,
        latest: &CanonicalReading,
        history_len: usize,
    ) -> Option<CropAssessment> {
        let prompt = assessment_prompt(latest, history_len);
        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Crop assessment generation failed, falling back: {}", e);
                return None;
            }
        };

        let candidate = parse::parse_assessment(&text)?;
        let health = candidate.health.unwrap_or(75.0).round().clamp(0.0, 100.0) as u8;
        let harvest_days = candidate.harvest_days.unwrap_or(30.0).clamp(0.0, 1825.0) as i64;
        let next_irrigation = candidate
            .next_irrigation
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc::now() + Duration::days(2));

        Some(CropAssessment {
            health,
            risk_factors: candidate.risk_factors.unwrap_or_default(),
            predictions: Predictions {
                yield_estimate: candidate.yield_prediction.unwrap_or(85.0),
                harvest_date: Utc::now() + Duration::days(harvest_days),
                next_irrigation,
            },
        })
    }
}

/// Fill in whatever the model left out so every candidate becomes a
/// complete recommendation.
fn complete_candidate(candidate: parse::CandidateRecommendation) -> Recommendation {
    let category = candidate
        .kind
        .as_deref()
        .and_then(Category::from_keyword)
        .unwrap_or(Category::Disease);
    let priority = candidate
        .priority
        .as_deref()
        .and_then(Priority::from_keyword)
        .unwrap_or(Priority::Medium);

    Recommendation {
        id: augmented_id(),
        category,
        priority,
        title: candidate
            .title
            .unwrap_or_else(|| "AI Recommendation".to_string()),
        description: candidate
            .description
            .unwrap_or_else(|| "Please review your farm conditions.".to_string()),
        action_required: priority == Priority::High,
        confidence: candidate.confidence.unwrap_or(0.85).clamp(0.0, 1.0),
        created_at: Utc::now(),
        actions: category.follow_up_actions(),
    }
}

fn augmented_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("aug-{}-{}", Utc::now().timestamp_millis(), suffix)
}

fn recommendation_prompt(reading: &CanonicalReading) -> String {
    format!(
        "As an agricultural AI assistant, analyze the following sensor data and provide \
         actionable recommendations for farm management.\n\n\
         Sensor Data:\n\
         - Temperature: {:.1}°C\n\
         - Humidity: {:.1}%\n\
         - Soil Moisture: {:.1}%\n\
         - pH Level: {:.1}\n\
         - Nitrogen: {:.1} ppm\n\
         - Phosphorus: {:.1} ppm\n\
         - Potassium: {:.1} ppm\n\
         - Wind Speed: {:.1} km/h\n\
         - Rain Rate: {:.1} mm/h\n\
         - Light: {:.0} lux\n\
         - Solar Power: {:.2} W\n\n\
         Based on this data, provide up to 3 critical recommendations. \
         For each recommendation, provide:\n\
         1. Type (irrigation/fertilizer/disease/weather/energy)\n\
         2. Priority (high/medium/low)\n\
         3. Title (brief, with emoji)\n\
         4. Description (specific actionable advice, 2-3 sentences max)\n\
         5. Confidence score (0-1)\n\n\
         Format your response as JSON array. Example:\n\
         [\n  {{\n    \"type\": \"irrigation\",\n    \"priority\": \"high\",\n    \
         \"title\": \"💧 Immediate Irrigation Needed\",\n    \
         \"description\": \"Soil moisture at 15% is critically low. Irrigate for 45 minutes \
         tonight at 8 PM to prevent crop stress.\",\n    \"confidence\": 0.95\n  }}\n]\n\n\
         Focus on the most critical issues that require immediate attention. \
         Be specific and actionable.",
        reading.temperature,
        reading.humidity,
        reading.soil_moisture,
        reading.ph,
        reading.nitrogen,
        reading.phosphorus,
        reading.potassium,
        reading.wind_kmh,
        reading.rain_rate_mm_h,
        reading.light_lux,
        reading.sol_power_w,
    )
}

fn assessment_prompt(latest: &CanonicalReading, history_len: usize) -> String {
    let latest_json = serde_json::to_string(latest).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Analyze the following agricultural sensor data trends and provide a comprehensive \
         crop health assessment.\n\n\
         Latest readings: {}\n\
         Historical data points: {}\n\n\
         Provide:\n\
         1. Overall health score (0-100)\n\
         2. Top 3 risk factors\n\
         3. Yield prediction (percentage of optimal)\n\
         4. Estimated days until harvest\n\
         5. Next irrigation timing recommendation\n\n\
         Format response as JSON with keys: health, riskFactors (array), yieldPrediction, \
         harvestDays, nextIrrigation",
        latest_json, history_len
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgriSenseError;

    struct CannedGenerator {
        reply: &'static str,
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.reply.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(AgriSenseError::Generation("model offline".into()))
        }
    }

    #[tokio::test]
    async fn failing_generator_degrades_to_empty() {
        let service = AugmentationService::new(Arc::new(FailingGenerator));
        let recs = service.recommend(&CanonicalReading::default()).await;
        assert!(recs.is_empty());

        let assessment = service.assess_crop(&CanonicalReading::default(), 5).await;
        assert!(assessment.is_none());
    }

    #[tokio::test]
    async fn unparseable_reply_degrades_to_empty() {
        let service = AugmentationService::new(Arc::new(CannedGenerator {
            reply: "Your crops are doing great, keep it up!",
        }));
        let recs = service.recommend(&CanonicalReading::default()).await;
        assert!(recs.is_empty());
    }

    #[tokio::test]
    async fn sparse_candidates_are_completed_with_defaults() {
        let service = AugmentationService::new(Arc::new(CannedGenerator {
            reply: r#"Here you go: [{"title": "Check the field"}, {"priority": "high", "confidence": 1.7}]"#,
        }));
        let recs = service.recommend(&CanonicalReading::default()).await;
        assert_eq!(recs.len(), 2);

        assert_eq!(recs[0].category, Category::Disease);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(recs[0].title, "Check the field");
        assert_eq!(recs[0].description, "Please review your farm conditions.");
        assert!(!recs[0].action_required);
        assert_eq!(recs[0].confidence, 0.85);
        assert_eq!(recs[0].actions, Category::Disease.follow_up_actions());

        // High priority implies action required; confidence is clamped
        assert!(recs[1].action_required);
        assert_eq!(recs[1].confidence, 1.0);
        assert_eq!(recs[1].title, "AI Recommendation");
    }

    #[tokio::test]
    async fn assessment_defaults_and_clamps() {
        let service = AugmentationService::new(Arc::new(CannedGenerator {
            reply: r#"{"health": 250, "harvestDays": 14}"#,
        }));
        let assessment = service
            .assess_crop(&CanonicalReading::default(), 10)
            .await
            .unwrap();
        assert_eq!(assessment.health, 100);
        assert!(assessment.risk_factors.is_empty());
        assert_eq!(assessment.predictions.yield_estimate, 85.0);

        let expected_harvest = Utc::now() + Duration::days(14);
        let delta = (assessment.predictions.harvest_date - expected_harvest).num_minutes();
        assert!(delta.abs() < 5);
    }

    #[tokio::test]
    async fn assessment_parses_next_irrigation_timestamp() {
        let service = AugmentationService::new(Arc::new(CannedGenerator {
            reply: r#"{"health": 80, "nextIrrigation": "2026-08-09T06:30:00Z"}"#,
        }));
        let assessment = service
            .assess_crop(&CanonicalReading::default(), 3)
            .await
            .unwrap();
        assert_eq!(
            assessment.predictions.next_irrigation.to_rfc3339(),
            "2026-08-09T06:30:00+00:00"
        );
    }

    #[test]
    fn augmented_ids_are_unique_enough() {
        let a = augmented_id();
        let b = augmented_id();
        assert!(a.starts_with("aug-"));
        assert_ne!(a, b);
    }

    #[test]
    fn prompt_embeds_reading_values() {
        let reading = CanonicalReading {
            soil_moisture: 15.0,
            temperature: 31.5,
            ..Default::default()
        };
        let prompt = recommendation_prompt(&reading);
        assert!(prompt.contains("15.0%"));
        assert!(prompt.contains("31.5°C"));
        assert!(prompt.contains("up to 3"));
    }
}
