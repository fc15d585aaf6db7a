//! Gemini on Vertex AI (`:generateContent`).

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use super::generative::{Candidate, GenerateContentResponse, GenerativeClient, Part};
use super::http::{bearer_headers, build_client, status_to_error, transport_error, trim_trailing_slash};
use crate::config::LensConfig;
use crate::error::LensError;

pub struct VertexGenerativeClient {
    http: reqwest::Client,
    model: String,
    endpoint: String,
    access_token: String,
    timeout: Duration,
}

impl VertexGenerativeClient {
    /// Client for `model` in the project and location from `config`.
    pub fn new(config: &LensConfig, model: impl Into<String>) -> Result<Self, LensError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(LensError::Configuration(
                "Model name cannot be empty".to_string(),
            ));
        }
        let endpoint = format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            trim_trailing_slash(&config.vertex_base_url()),
            config.project_id,
            config.location,
            model,
        );
        Ok(Self {
            http: build_client(config.timeout())?,
            model,
            endpoint,
            access_token: config.access_token()?.to_string(),
            timeout: config.timeout(),
        })
    }

    /// Text model handle (`text_model`).
    pub fn text(config: &LensConfig) -> Result<Self, LensError> {
        Self::new(config, config.text_model.clone())
    }

    /// Vision model handle (`vision_model`).
    pub fn vision(config: &LensConfig) -> Result<Self, LensError> {
        Self::new(config, config.vision_model.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request_body(parts: &[Part]) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": build_gemini_parts(parts),
            }]
        })
    }
}

#[async_trait]
impl GenerativeClient for VertexGenerativeClient {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, parts: &[Part]) -> Result<GenerateContentResponse, LensError> {
        if parts.is_empty() {
            return Err(LensError::InvalidArgument(
                "Generation request needs at least one part".to_string(),
            ));
        }
        let body = Self::build_request_body(parts);

        debug!(model = %self.model, parts = parts.len(), "Vertex generateContent");

        let response = self
            .http
            .post(&self.endpoint)
            .headers(bearer_headers(&self.access_token))
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        if status != 200 {
            return Err(status_to_error(status, &text));
        }

        let data: GeminiResponse = serde_json::from_str(&text)?;
        let candidates = data
            .candidates
            .into_iter()
            .map(|candidate| Candidate {
                text: candidate
                    .content
                    .map(|content| {
                        content
                            .parts
                            .into_iter()
                            .filter_map(|part| part.text)
                            .collect::<String>()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        Ok(GenerateContentResponse { candidates })
    }
}

fn build_gemini_parts(parts: &[Part]) -> Vec<serde_json::Value> {
    parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => serde_json::json!({"text": text}),
            Part::InlineData { mime_type, data } => serde_json::json!({
                "inlineData": {
                    "mimeType": mime_type,
                    "data": base64::engine::general_purpose::STANDARD.encode(data),
                }
            }),
        })
        .collect()
}

// Internal Gemini response types

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    // absent when the candidate was blocked
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_inlines_base64_data() {
        let parts = vec![
            Part::Text("describe".to_string()),
            Part::InlineData {
                mime_type: "image/png".to_string(),
                data: vec![0xff, 0x00],
            },
        ];
        let body = VertexGenerativeClient::build_request_body(&parts);
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"text": "describe"},
                        {"inlineData": {"mimeType": "image/png", "data": "/wA="}}
                    ]
                }]
            })
        );
    }

    #[test]
    fn endpoint_uses_project_location_and_model() {
        let config = LensConfig {
            project_id: "demo".to_string(),
            access_token: Some("tok".to_string()),
            ..Default::default()
        };
        let client = VertexGenerativeClient::vision(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/demo/locations/us-central1/publishers/google/models/gemini-pro-vision:generateContent"
        );
        assert_eq!(client.model_id(), "gemini-pro-vision");
    }

    #[test]
    fn missing_token_is_configuration_error() {
        let err = VertexGenerativeClient::text(&LensConfig::default()).err().unwrap();
        assert!(matches!(err, LensError::Configuration(_)));
    }
}
