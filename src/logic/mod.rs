pub mod engine;
pub mod health;
pub mod rules;

pub use engine::RecommendationEngine;
pub use rules::Rule;
