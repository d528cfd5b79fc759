use super::Rule;
use crate::models::{CanonicalReading, Category, Priority, Recommendation};

/// Weather hazard rule
///
/// Conditions:
/// - Wind >30 km/h → spraying/staking warning, high priority above 50 km/h
/// - Otherwise rain rate >10 mm/h → heavy-rain advisory
pub struct WeatherRule;

impl Rule for WeatherRule {
    fn id(&self) -> &'static str {
        "weather"
    }

    fn name(&self) -> &'static str {
        "Weather Hazards"
    }

    fn evaluate(&self, reading: &CanonicalReading) -> Option<Recommendation> {
        let wind = reading.wind_kmh;
        let rain_rate = reading.rain_rate_mm_h;

        if wind > 30.0 {
            let priority = if wind > 50.0 {
                Priority::High
            } else {
                Priority::Medium
            };

            return Some(
                Recommendation::new(
                    "weather",
                    Category::Weather,
                    priority,
                    "💨 High Wind Warning",
                    format!(
                        "Wind speed at {:.1} km/h. Postpone spraying operations and secure \
                         loose equipment. Consider staking tall crops.",
                        wind
                    ),
                )
                .with_confidence(0.95),
            );
        }

        if rain_rate > 10.0 {
            return Some(
                Recommendation::new(
                    "weather",
                    Category::Weather,
                    Priority::Medium,
                    "🌧️ Heavy Rain Detected",
                    format!(
                        "Rainfall at {:.1} mm/h. Skip irrigation for next 48 hours. Good \
                         time for fertilizer application has passed.",
                        rain_rate
                    ),
                )
                .with_confidence(0.93)
                .with_action_required(false),
            );
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(wind_kmh: f64, rain_rate_mm_h: f64) -> CanonicalReading {
        CanonicalReading {
            wind_kmh,
            rain_rate_mm_h,
            ..Default::default()
        }
    }

    #[test]
    fn gale_is_high_priority() {
        let rec = WeatherRule.evaluate(&reading(60.0, 0.0)).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.confidence, 0.95);
        assert!(rec.description.contains("60.0"));
    }

    #[test]
    fn strong_breeze_is_medium_priority() {
        let rec = WeatherRule.evaluate(&reading(35.0, 0.0)).unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert!(rec.title.contains("Wind"));
    }

    #[test]
    fn wind_takes_precedence_over_rain() {
        let rec = WeatherRule.evaluate(&reading(40.0, 20.0)).unwrap();
        assert!(rec.title.contains("Wind"));
    }

    #[test]
    fn heavy_rain_is_medium_advisory() {
        let rec = WeatherRule.evaluate(&reading(10.0, 15.0)).unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.confidence, 0.93);
        assert!(!rec.action_required);
        assert!(rec.title.contains("Rain"));
    }

    #[test]
    fn calm_weather_is_quiet() {
        assert!(WeatherRule.evaluate(&reading(10.0, 2.0)).is_none());
    }
}
