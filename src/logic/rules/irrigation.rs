use super::Rule;
use crate::models::{CanonicalReading, Category, Priority, Recommendation};

/// Irrigation analysis rule
///
/// Conditions:
/// - Soil moisture <30% triggers an irrigation recommendation: high priority
///   and a 60-minute run below 20%, medium priority and 45 minutes otherwise
/// - Soil moisture >80% triggers a low-priority advisory to cut back
pub struct IrrigationRule;

impl Rule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Irrigation Analysis"
    }

    fn evaluate(&self, reading: &CanonicalReading) -> Option<Recommendation> {
        let moisture = reading.soil_moisture;

        if moisture < 30.0 {
            let priority = if moisture < 20.0 {
                Priority::High
            } else {
                Priority::Medium
            };
            let minutes = if moisture < 20.0 { 60 } else { 45 };

            return Some(
                Recommendation::new(
                    "irr",
                    Category::Irrigation,
                    priority,
                    "💧 Irrigation Required",
                    format!(
                        "Soil moisture is at {:.1}%. Recommend irrigating for {} minutes \
                         tonight at 8 PM when evaporation is minimal.",
                        moisture, minutes
                    ),
                )
                .with_confidence(0.92),
            );
        }

        if moisture > 80.0 {
            return Some(
                Recommendation::new(
                    "irr",
                    Category::Irrigation,
                    Priority::Low,
                    "⚠️ Reduce Irrigation",
                    format!(
                        "Soil moisture is high at {:.1}%. Consider reducing irrigation \
                         to prevent root rot and conserve water.",
                        moisture
                    ),
                )
                .with_confidence(0.88)
                .with_action_required(false),
            );
        }

        None
    }
}
