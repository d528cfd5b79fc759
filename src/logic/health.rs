use crate::models::{CanonicalReading, CropAnalysis, Predictions, Recommendation};
use chrono::{Duration, Utc};
use rand::Rng;

/// Optimal bands for the four health factors.
const MOISTURE_BAND: (f64, f64) = (30.0, 70.0);
const TEMPERATURE_BAND: (f64, f64) = (20.0, 30.0);
const PH_BAND: (f64, f64) = (6.0, 7.5);
const NUTRIENT_BAND: (f64, f64) = (20.0, 50.0);

/// Map a reading onto [0,1] against an optimal band: at or below the lower
/// bound scores 0, at or above the upper bound scores 1, linear in between.
/// A non-finite value scores 0.
pub fn normalize_factor(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() || value <= min {
        0.0
    } else if value >= max {
        1.0
    } else {
        (value - min) / (max - min)
    }
}

/// Placeholder yield estimate: a uniform draw from [80,120) percent of
/// optimal, rounded. Stands in for a real yield model.
pub fn placeholder_yield_estimate() -> f64 {
    (80.0 + rand::rng().random_range(0.0_f64..40.0)).round()
}

/// Local crop-health computation used when no external assessment is
/// available. Health is the mean of the four normalized factors scaled to
/// 0-100; any factor under 0.3 contributes its risk label.
pub fn local_crop_analysis(
    latest: &CanonicalReading,
    recommendations: Vec<Recommendation>,
) -> CropAnalysis {
    let nutrients = (latest.nitrogen + latest.phosphorus + latest.potassium) / 3.0;

    let factors = [
        (
            "Low soil moisture",
            normalize_factor(latest.soil_moisture, MOISTURE_BAND.0, MOISTURE_BAND.1),
        ),
        (
            "Temperature stress",
            normalize_factor(latest.temperature, TEMPERATURE_BAND.0, TEMPERATURE_BAND.1),
        ),
        (
            "pH imbalance",
            normalize_factor(latest.ph, PH_BAND.0, PH_BAND.1),
        ),
        (
            "Nutrient deficiency",
            normalize_factor(nutrients, NUTRIENT_BAND.0, NUTRIENT_BAND.1),
        ),
    ];

    let mean = factors.iter().map(|(_, f)| f).sum::<f64>() / factors.len() as f64;
    let health = (mean * 100.0).round().clamp(0.0, 100.0) as u8;

    let risk_factors = factors
        .iter()
        .filter(|(_, f)| *f < 0.3)
        .map(|(label, _)| label.to_string())
        .collect();

    CropAnalysis {
        health,
        risk_factors,
        recommendations,
        predictions: Predictions {
            yield_estimate: placeholder_yield_estimate(),
            harvest_date: Utc::now() + Duration::days(30),
            next_irrigation: Utc::now() + Duration::days(2),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_clamps_at_band_edges() {
        assert_eq!(normalize_factor(10.0, 30.0, 70.0), 0.0);
        assert_eq!(normalize_factor(30.0, 30.0, 70.0), 0.0);
        assert_eq!(normalize_factor(70.0, 30.0, 70.0), 1.0);
        assert_eq!(normalize_factor(95.0, 30.0, 70.0), 1.0);
        assert!((normalize_factor(50.0, 30.0, 70.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn absent_and_non_finite_values_score_zero() {
        assert_eq!(normalize_factor(0.0, 6.0, 7.5), 0.0);
        assert_eq!(normalize_factor(f64::NAN, 6.0, 7.5), 0.0);
    }

    #[test]
    fn empty_reading_scores_zero_health() {
        let analysis = local_crop_analysis(&CanonicalReading::default(), Vec::new());
        assert_eq!(analysis.health, 0);
        assert_eq!(analysis.risk_factors.len(), 4);
    }

    #[test]
    fn ideal_reading_scores_full_health() {
        let reading = CanonicalReading {
            soil_moisture: 75.0,
            temperature: 30.0,
            ph: 7.5,
            nitrogen: 50.0,
            phosphorus: 50.0,
            potassium: 50.0,
            ..Default::default()
        };
        let analysis = local_crop_analysis(&reading, Vec::new());
        assert_eq!(analysis.health, 100);
        assert!(analysis.risk_factors.is_empty());
    }

    #[test]
    fn weak_factors_become_risk_labels() {
        let reading = CanonicalReading {
            soil_moisture: 32.0, // factor 0.05
            temperature: 25.0,   // factor 0.5
            ph: 7.0,             // factor ~0.67
            nitrogen: 45.0,
            phosphorus: 45.0,
            potassium: 45.0, // factor ~0.83
            ..Default::default()
        };
        let analysis = local_crop_analysis(&reading, Vec::new());
        assert_eq!(analysis.risk_factors, vec!["Low soil moisture".to_string()]);
        assert!(analysis.health > 0 && analysis.health < 100);
    }

    #[test]
    fn yield_placeholder_stays_in_range() {
        for _ in 0..100 {
            let estimate = placeholder_yield_estimate();
            assert!((80.0..=120.0).contains(&estimate));
        }
    }

    #[test]
    fn predicted_dates_are_in_the_future() {
        let analysis = local_crop_analysis(&CanonicalReading::default(), Vec::new());
        let now = Utc::now();
        assert!(analysis.predictions.harvest_date > now);
        assert!(analysis.predictions.next_irrigation > now);
        assert!(analysis.predictions.harvest_date > analysis.predictions.next_irrigation);
    }
}
