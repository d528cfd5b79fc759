use regex_lite::Regex;
use serde::Deserialize;

/// One candidate recommendation as emitted by the text-generation
/// capability. Every field is optional; completion happens upstream.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CandidateRecommendation {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub confidence: Option<f64>,
}

/// Crop assessment object as emitted by the capability.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CandidateAssessment {
    pub health: Option<f64>,
    #[serde(rename = "riskFactors")]
    pub risk_factors: Option<Vec<String>>,
    #[serde(rename = "yieldPrediction")]
    pub yield_prediction: Option<f64>,
    #[serde(rename = "harvestDays")]
    pub harvest_days: Option<f64>,
    #[serde(rename = "nextIrrigation")]
    pub next_irrigation: Option<String>,
}

fn extract_span<'a>(text: &'a str, pattern: &str) -> Option<&'a str> {
    let re = Regex::new(pattern).ok()?;
    re.find(text).map(|m| m.as_str())
}

/// Pull the first bracketed array out of free-form model output and parse
/// it. Anything short of a well-formed candidate array yields an empty list.
pub(crate) fn parse_candidates(text: &str) -> Vec<CandidateRecommendation> {
    let Some(span) = extract_span(text, r"(?s)\[.*\]") else {
        tracing::debug!("No JSON array found in generated text");
        return Vec::new();
    };
    match serde_json::from_str(span) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::debug!("Failed to parse candidate array: {}", e);
            Vec::new()
        }
    }
}

/// Pull the first braced object out of free-form model output and parse it
/// as a crop assessment. `None` when no parseable object is present.
pub(crate) fn parse_assessment(text: &str) -> Option<CandidateAssessment> {
    let span = extract_span(text, r"(?s)\{.*\}")?;
    match serde_json::from_str(span) {
        Ok(assessment) => Some(assessment),
        Err(e) => {
            tracing::debug!("Failed to parse assessment object: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_embedded_in_chatter() {
        let text = r#"Sure! Here are my recommendations:
            [
              {"type": "irrigation", "priority": "high", "title": "Water now",
               "description": "Soil is dry.", "confidence": 0.9},
              {"type": "weather", "priority": "low"}
            ]
            Let me know if you need anything else."#;
        let candidates = parse_candidates(text);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].kind.as_deref(), Some("irrigation"));
        assert_eq!(candidates[0].confidence, Some(0.9));
        assert!(candidates[1].title.is_none());
    }

    #[test]
    fn text_without_array_yields_nothing() {
        assert!(parse_candidates("The crops look fine to me.").is_empty());
        assert!(parse_candidates("").is_empty());
    }

    #[test]
    fn malformed_array_yields_nothing() {
        assert!(parse_candidates("[{\"type\": }]").is_empty());
    }

    #[test]
    fn parses_assessment_object() {
        let text = r#"Assessment follows.
            {"health": 82, "riskFactors": ["Low soil moisture"],
             "yieldPrediction": 91, "harvestDays": 21,
             "nextIrrigation": "2026-08-08T06:00:00Z"}"#;
        let assessment = parse_assessment(text).unwrap();
        assert_eq!(assessment.health, Some(82.0));
        assert_eq!(assessment.harvest_days, Some(21.0));
        assert_eq!(
            assessment.risk_factors.as_deref(),
            Some(&["Low soil moisture".to_string()][..])
        );
    }

    #[test]
    fn assessment_without_object_is_none() {
        assert!(parse_assessment("all good").is_none());
        assert!(parse_assessment("{not json}").is_none());
    }
}
