use super::Rule;
use crate::models::{CanonicalReading, Category, Priority, Recommendation};

/// Flags a solar panel producing under 1W at under 11V for maintenance.
pub struct EnergyRule;

impl Rule for EnergyRule {
    fn id(&self) -> &'static str {
        "energy"
    }

    fn name(&self) -> &'static str {
        "Solar Energy Health"
    }

    fn evaluate(&self, reading: &CanonicalReading) -> Option<Recommendation> {
        if reading.sol_power_w < 1.0 && reading.sol_voltage_v < 11.0 {
            return Some(
                Recommendation::new(
                    "energy",
                    Category::Energy,
                    Priority::Low,
                    "🔋 Solar Panel Maintenance",
                    format!(
                        "Solar power generation is low ({:.2}W). Panels may need cleaning \
                         or there could be shading issues.",
                        reading.sol_power_w
                    ),
                )
                .with_confidence(0.82)
                .with_action_required(false),
            );
        }

        None
    }
}
