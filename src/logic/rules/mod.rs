pub mod disease;
pub mod energy;
pub mod fertilizer;
pub mod irrigation;
pub mod weather;

use crate::models::{CanonicalReading, Recommendation};

/// Trait for threshold-based agronomic rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a recommendation if conditions are met
    fn evaluate(&self, reading: &CanonicalReading) -> Option<Recommendation>;
}
