//! Generative-model client trait and request/response types.

use async_trait::async_trait;

use crate::error::LensError;

/// One ordered piece of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    InlineData { mime_type: String, data: Vec<u8> },
}

impl Part {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::InlineData { .. } => None,
        }
    }
}

/// One alternative generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate { text: text.into() }],
        }
    }

    /// Text of the first candidate, if any.
    pub fn into_first_text(self) -> Option<String> {
        self.candidates.into_iter().next().map(|c| c.text)
    }
}

/// Trait for generative-model backends (text-only or vision-capable).
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Deployed model name, for logging and error messages.
    fn model_id(&self) -> &str;

    async fn generate(&self, parts: &[Part]) -> Result<GenerateContentResponse, LensError>;
}
