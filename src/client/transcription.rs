//! Speech-recognition client trait and request/response types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LensError;

/// Sample rate the pipeline always declares for uploaded audio.
pub const DEFAULT_SAMPLE_RATE_HERTZ: u32 = 16_000;

/// Declared encoding of the uploaded audio bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    Linear16,
}

/// Recognition settings sent alongside the audio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    pub encoding: AudioEncoding,
    pub sample_rate_hertz: u32,
    pub language_code: String,
}

impl RecognitionConfig {
    /// LINEAR16 at 16 kHz in the given language.
    pub fn linear16(language_code: impl Into<String>) -> Self {
        Self {
            encoding: AudioEncoding::Linear16,
            sample_rate_hertz: DEFAULT_SAMPLE_RATE_HERTZ,
            language_code: language_code.into(),
        }
    }
}

/// One recognized segment with its ranked alternatives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechAlternative>,
}

impl SpeechRecognitionResult {
    pub fn from_transcript(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![SpeechAlternative {
                transcript: transcript.into(),
                confidence: None,
            }],
        }
    }

    /// Transcript of the highest-ranked alternative.
    pub fn top_transcript(&self) -> Option<&str> {
        self.alternatives.first().map(|alt| alt.transcript.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpeechAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Trait for speech-recognition backends.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    /// Recognize `audio`, returning segments in the order the service
    /// produced them.
    async fn recognize(
        &self,
        audio: &[u8],
        config: &RecognitionConfig,
    ) -> Result<Vec<SpeechRecognitionResult>, LensError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serializes_in_speech_api_shape() {
        let json = serde_json::to_value(RecognitionConfig::linear16("en-US")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "encoding": "LINEAR16",
                "sampleRateHertz": 16000,
                "languageCode": "en-US",
            })
        );
    }

    #[test]
    fn top_transcript_is_first_alternative() {
        let result: SpeechRecognitionResult = serde_json::from_value(serde_json::json!({
            "alternatives": [
                {"transcript": "hello there", "confidence": 0.9},
                {"transcript": "hollow there"}
            ]
        }))
        .unwrap();
        assert_eq!(result.top_transcript(), Some("hello there"));
        assert_eq!(SpeechRecognitionResult::default().top_transcript(), None);
    }
}
