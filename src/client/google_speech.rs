//! Google Cloud Speech-to-Text client (`speech:recognize`).

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use super::http::{bearer_headers, build_client, status_to_error, transport_error, trim_trailing_slash};
use super::transcription::{RecognitionConfig, SpeechRecognitionResult, TranscriptionClient};
use crate::config::{LensConfig, DEFAULT_SPEECH_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::LensError;

/// Synchronous recognition against `{base_url}/v1/speech:recognize`.
#[derive(Clone)]
pub struct GoogleSpeechClient {
    http: reqwest::Client,
    access_token: String,
    base_url: String,
    timeout: Duration,
}

impl fmt::Debug for GoogleSpeechClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSpeechClient")
            .field("access_token", &"..")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GoogleSpeechClient {
    pub fn new(access_token: impl Into<String>) -> Result<Self, LensError> {
        Self::new_with_base_url(
            access_token,
            DEFAULT_SPEECH_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn new_with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LensError> {
        Ok(Self {
            http: build_client(timeout)?,
            access_token: access_token.into(),
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &LensConfig) -> Result<Self, LensError> {
        Self::new_with_base_url(
            config.access_token()?,
            config.speech_base_url.clone(),
            config.timeout(),
        )
    }

    fn validate_inputs(&self, audio: &[u8], config: &RecognitionConfig) -> Result<(), LensError> {
        if self.access_token.trim().is_empty() {
            return Err(LensError::Authentication(
                "Missing access token for speech recognition".to_string(),
            ));
        }
        if audio.is_empty() {
            return Err(LensError::InvalidArgument(
                "Audio payload cannot be empty".to_string(),
            ));
        }
        if config.language_code.trim().is_empty() {
            return Err(LensError::InvalidArgument(
                "Language code cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TranscriptionClient for GoogleSpeechClient {
    async fn recognize(
        &self,
        audio: &[u8],
        config: &RecognitionConfig,
    ) -> Result<Vec<SpeechRecognitionResult>, LensError> {
        self.validate_inputs(audio, config)?;

        let body = serde_json::json!({
            "config": config,
            "audio": {
                "content": base64::engine::general_purpose::STANDARD.encode(audio),
            },
        });
        let url = format!("{}/v1/speech:recognize", trim_trailing_slash(&self.base_url));

        debug!(
            language_code = %config.language_code,
            audio_bytes = audio.len(),
            "Google speech recognize"
        );

        let response = self
            .http
            .post(url)
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

        let data: RecognizeResponse = serde_json::from_str(&text)?;
        Ok(data.results)
    }
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<SpeechRecognitionResult>,
}
