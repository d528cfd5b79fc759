use super::Rule;
use crate::models::{CanonicalReading, Category, Priority, Recommendation};

/// Disease risk assessment rule
///
/// Fungal pathogens thrive in warm, humid canopies. Risk conditions:
/// - Humidity >75% with temperature between 20°C and 30°C → fungal risk,
///   high priority above 85% humidity
/// - Otherwise temperature >30°C → pest activity advisory
///
/// The fungal check takes precedence over the pest check.
pub struct DiseaseRiskRule;

impl Rule for DiseaseRiskRule {
    fn id(&self) -> &'static str {
        "disease_risk"
    }

    fn name(&self) -> &'static str {
        "Disease Risk Assessment"
    }

    fn evaluate(&self, reading: &CanonicalReading) -> Option<Recommendation> {
        let humidity = reading.humidity;
        let temperature = reading.temperature;

        if humidity > 75.0 && temperature > 20.0 && temperature < 30.0 {
            let priority = if humidity > 85.0 {
                Priority::High
            } else {
                Priority::Medium
            };

            return Some(
                Recommendation::new(
                    "disease",
                    Category::Disease,
                    priority,
                    "🦠 High Disease Risk Alert",
                    format!(
                        "Current conditions ({:.0}% humidity, {:.1}°C) are favorable for \
                         fungal diseases. Consider preventive fungicide application within \
                         24 hours.",
                        humidity, temperature
                    ),
                )
                .with_confidence(0.87),
            );
        }

        if temperature > 30.0 {
            return Some(
                Recommendation::new(
                    "disease",
                    Category::Disease,
                    Priority::Medium,
                    "🐛 Pest Activity Alert",
                    format!(
                        "High temperatures ({:.1}°C) may increase pest activity. Monitor \
                         crops closely for signs of infestation.",
                        temperature
                    ),
                )
                .with_confidence(0.75)
                .with_action_required(false),
            );
        }

        None
    }
}
