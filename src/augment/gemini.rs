use super::TextGenerator;
use crate::config::GeminiConfig;
use crate::error::{AgriSenseError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text-generation client backed by the Gemini `generateContent` REST API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

// Gemini API request/response structures
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            API_BASE_URL, self.config.model, self.config.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgriSenseError::Generation(format!(
                "Gemini returned {}: {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            AgriSenseError::Generation(format!("Failed to parse Gemini response: {}", e))
        })?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AgriSenseError::Generation(
                "Gemini returned no candidates".into(),
            ));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = GeminiClient::new(GeminiConfig::new("test_key"));
        assert!(client.config.enabled);
    }

    #[test]
    fn response_text_extraction_shape() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello"}, {"text": " world"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn empty_response_deserializes() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
