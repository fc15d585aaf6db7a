//! Error types for lingua-lens.

use strum::Display;
use thiserror::Error;

use crate::validation::ValidationError;

/// Pipeline stage an orchestrator failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Transcription,
    Generation,
}

/// Broad error category for logging and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    Transcription,
    Generation,
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Api,
    Configuration,
    Serialization,
    Io,
    InvalidArgument,
}

/// Primary error type for all lingua-lens operations.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An orchestrator-level failure wrapping the original cause.
    #[error("{message}")]
    Processing {
        stage: Stage,
        message: String,
        #[source]
        source: Box<LensError>,
    },

    #[error("Model {model} returned no candidates")]
    EmptyResponse { model: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

impl LensError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Wrap `source` as a failure of the given pipeline stage.
    pub fn processing(stage: Stage, message: impl Into<String>, source: LensError) -> Self {
        Self::Processing {
            stage,
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping any `Processing` wrappers.
    pub fn root_cause(&self) -> &LensError {
        match self {
            Self::Processing { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Processing { stage, .. } => match stage {
                Stage::Transcription => ErrorCategory::Transcription,
                Stage::Generation => ErrorCategory::Generation,
            },
            Self::EmptyResponse { .. } => ErrorCategory::Generation,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                _ => ErrorCategory::Api,
            },
            Self::Network(_) => ErrorCategory::Network,
            Self::Io(_) => ErrorCategory::Io,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Timeout(_) => ErrorCategory::Timeout,
        }
    }
}

/// Render an error followed by its `source()` chain, joined by `: `.
///
/// A cause whose text the previous message already ends with (`Io`,
/// `Network` and `Serialization` embed their source) is not repeated.
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut previous = rendered.clone();
    let mut current = error.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !previous.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        previous = text;
        current = cause.source();
    }
    rendered
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LensError>;
