use super::health;
use super::rules::{
    disease::DiseaseRiskRule, energy::EnergyRule, fertilizer::FertilizerRule,
    irrigation::IrrigationRule, weather::WeatherRule, Rule,
};
use crate::augment::{AugmentationService, GeminiClient, TextGenerator};
use crate::config::GeminiConfig;
use crate::models::{CropAnalysis, Recommendation, SensorReading};
use std::sync::Arc;

/// The recommendation engine: five threshold rules plus an optional
/// text-generation augmentation layer, merged into one deduplicated,
/// priority-sorted list. Stateless across calls.
pub struct RecommendationEngine {
    rules: Vec<Box<dyn Rule>>,
    augmentation: Option<AugmentationService>,
}

impl RecommendationEngine {
    /// Rule-based analysis only.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            augmentation: None,
        }
    }

    /// Rule-based analysis augmented by the given text-generation capability.
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            rules: default_rules(),
            augmentation: Some(AugmentationService::new(generator)),
        }
    }

    /// Build from an optional Gemini configuration, augmenting only when the
    /// config is present, enabled, and carries an API key.
    pub fn from_config(config: Option<GeminiConfig>) -> Self {
        match config.filter(|c| c.is_usable()) {
            Some(config) => {
                tracing::info!(model = %config.model, "Gemini augmentation configured");
                Self::with_generator(Arc::new(GeminiClient::new(config)))
            }
            None => {
                tracing::info!("Gemini not configured - recommendations will be rule-based only");
                Self::new()
            }
        }
    }

    /// Analyze one reading and return prioritized recommendations.
    pub async fn generate_recommendations(&self, reading: &SensorReading) -> Vec<Recommendation> {
        let canonical = reading.canonicalize();

        let mut recommendations: Vec<Recommendation> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(&canonical))
            .collect();

        if let Some(ref augmentation) = self.augmentation {
            recommendations.extend(augmentation.recommend(&canonical).await);
        }

        deduplicate_and_sort(recommendations)
    }

    /// Assess crop health over a historical sequence (most recent first).
    /// Uses the external capability for the assessment when configured,
    /// falling back to the local factor-based computation on any failure.
    pub async fn analyze_crop_health(&self, history: &[SensorReading]) -> CropAnalysis {
        let latest = history.first().cloned().unwrap_or_default();

        let mut recommendations = self.generate_recommendations(&latest).await;
        recommendations.truncate(3);

        let canonical = latest.canonicalize();

        if let Some(ref augmentation) = self.augmentation {
            if !history.is_empty() {
                if let Some(assessment) =
                    augmentation.assess_crop(&canonical, history.len()).await
                {
                    return CropAnalysis {
                        health: assessment.health,
                        risk_factors: assessment.risk_factors,
                        recommendations,
                        predictions: assessment.predictions,
                    };
                }
            }
        }

        health::local_crop_analysis(&canonical, recommendations)
    }

    /// Evaluate a single rule by id.
    pub fn evaluate_rule(&self, rule_id: &str, reading: &SensorReading) -> Option<Recommendation> {
        let canonical = reading.canonicalize();
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(&canonical))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(IrrigationRule),
        Box::new(FertilizerRule),
        Box::new(DiseaseRiskRule),
        Box::new(WeatherRule),
        Box::new(EnergyRule),
    ]
}

/// Drop near-duplicates (same category, same priority, title similarity
/// above 0.8 - earlier insertion wins), then stable-sort by priority.
fn deduplicate_and_sort(recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut unique: Vec<Recommendation> = Vec::new();
    for candidate in recommendations {
        let is_duplicate = unique.iter().any(|kept| {
            kept.category == candidate.category
                && kept.priority == candidate.priority
                && title_similarity(&kept.title, &candidate.title) > 0.8
        });
        if !is_duplicate {
            unique.push(candidate);
        }
    }

    unique.sort_by_key(|r| r.priority.ordinal());
    unique
}

/// Token-overlap similarity between two titles: case-insensitively shared
/// whitespace-split tokens over the larger token count. Equal strings
/// short-circuit to 1.0.
fn title_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 1.0;
    }

    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let shared = tokens_a.iter().filter(|t| tokens_b.contains(t)).count();
    shared as f64 / tokens_a.len().max(tokens_b.len()) as f64
}
