use super::Rule;
use crate::models::{CanonicalReading, Category, Priority, Recommendation};

/// Fertilizer and soil chemistry rule
///
/// Nutrient deficiency thresholds (ppm): nitrogen <20, phosphorus <10,
/// potassium <20. Any deficiency produces a fertilizer recommendation,
/// high priority when more than two nutrients are short.
///
/// Only when no nutrient is deficient, soil pH outside 6.0-7.5 produces a
/// pH-correction recommendation (lime below the band, sulfur above it).
pub struct FertilizerRule;

impl Rule for FertilizerRule {
    fn id(&self) -> &'static str {
        "fertilizer"
    }

    fn name(&self) -> &'static str {
        "Fertilizer & Soil Chemistry"
    }

    fn evaluate(&self, reading: &CanonicalReading) -> Option<Recommendation> {
        let mut deficiencies = Vec::new();
        if reading.nitrogen < 20.0 {
            deficiencies.push("Nitrogen");
        }
        if reading.phosphorus < 10.0 {
            deficiencies.push("Phosphorus");
        }
        if reading.potassium < 20.0 {
            deficiencies.push("Potassium");
        }

        if !deficiencies.is_empty() {
            let priority = if deficiencies.len() > 2 {
                Priority::High
            } else {
                Priority::Medium
            };

            return Some(
                Recommendation::new(
                    "fert",
                    Category::Fertilizer,
                    priority,
                    "🌱 Nutrient Deficiency Detected",
                    format!(
                        "Low levels detected: {}. Apply balanced NPK fertilizer (20-20-20) \
                         at 50kg/hectare. Best time: Tomorrow morning before expected rain.",
                        deficiencies.join(", ")
                    ),
                )
                .with_confidence(0.85),
            );
        }

        if reading.ph < 6.0 || reading.ph > 7.5 {
            let correction = if reading.ph < 6.0 {
                "Add lime to increase pH"
            } else {
                "Add sulfur to decrease pH"
            };

            return Some(
                Recommendation::new(
                    "fert",
                    Category::Fertilizer,
                    Priority::Medium,
                    "⚖️ pH Adjustment Needed",
                    format!(
                        "Soil pH is {:.1}. {} for optimal nutrient absorption.",
                        reading.ph, correction
                    ),
                )
                .with_confidence(0.90),
            );
        }

        None
    }
}
