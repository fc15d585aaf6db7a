//! Top-level pipeline: validate, then basic analysis, then detailed analysis.
//!
//! Each `process_*` call is fire-and-forget from the caller's point of view:
//! validation failures and remote failures are logged and returned as a
//! [`ProcessOutcome`], never as an `Err`.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::client::{GenerativeClient, GoogleSpeechClient, TranscriptionClient, VertexGenerativeClient};
use crate::config::LensConfig;
use crate::error::{error_chain, LensError};
use crate::translate::{AudioTranslator, ImageTranslator};
use crate::types::{AnalysisResult, MediaKind, MediaRequest};
use crate::validation::{validate, ValidationError};

/// Source language used when an audio request does not carry one.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en-US";

/// What happened to one `process_*` call.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// The file failed validation; no remote call was made.
    Rejected(ValidationError),
    Completed {
        basic: AnalysisResult,
        detailed: AnalysisResult,
    },
    /// A remote step failed. `basic` is kept when only the detailed step
    /// failed.
    Failed {
        basic: Option<AnalysisResult>,
        error: LensError,
    },
}

impl ProcessOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn basic(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Completed { basic, .. } => Some(basic),
            Self::Failed { basic, .. } => basic.as_ref(),
            Self::Rejected(_) => None,
        }
    }

    pub fn detailed(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Completed { detailed, .. } => Some(detailed),
            _ => None,
        }
    }
}

pub struct Runner {
    audio: AudioTranslator,
    image: ImageTranslator,
}

impl Runner {
    pub fn new(audio: AudioTranslator, image: ImageTranslator) -> Self {
        Self { audio, image }
    }

    /// Wire orchestrators from explicit client handles.
    pub fn from_clients(
        transcriber: Arc<dyn TranscriptionClient>,
        text_model: Arc<dyn GenerativeClient>,
        vision_model: Arc<dyn GenerativeClient>,
    ) -> Self {
        Self::new(
            AudioTranslator::new(transcriber, text_model),
            ImageTranslator::new(vision_model),
        )
    }

    /// Build the Google Speech and Vertex AI clients once from `config`.
    pub fn from_config(config: &LensConfig) -> Result<Self, LensError> {
        config.validate()?;
        let transcriber = Arc::new(GoogleSpeechClient::from_config(config)?);
        let text_model = Arc::new(VertexGenerativeClient::text(config)?);
        let vision_model = Arc::new(VertexGenerativeClient::vision(config)?);
        info!(
            project_id = %config.project_id,
            location = %config.location,
            text_model = %config.text_model,
            vision_model = %config.vision_model,
            "Gemini models initialized successfully"
        );
        Ok(Self::from_clients(transcriber, text_model, vision_model))
    }

    /// Dispatch on the request's media kind.
    pub async fn process(&self, request: &MediaRequest) -> ProcessOutcome {
        match request.media_kind() {
            MediaKind::Image => {
                self.process_image(request.file_path(), request.target_language())
                    .await
            }
            MediaKind::Audio => {
                self.process_audio(
                    request.file_path(),
                    request.source_language().unwrap_or(DEFAULT_SOURCE_LANGUAGE),
                    request.target_language(),
                )
                .await
            }
        }
    }

    pub async fn process_image(
        &self,
        image_path: impl AsRef<Path>,
        target_language: &str,
    ) -> ProcessOutcome {
        let image_path = image_path.as_ref();
        if let Err(reason) = validate(image_path, MediaKind::Image) {
            return reject(MediaKind::Image, reason);
        }

        info!(path = %image_path.display(), "Processing image");
        let basic = match self.image.analyze_basic(image_path, target_language).await {
            Ok(text) => {
                info!("Basic image analysis:\n{text}");
                AnalysisResult::new(text)
            }
            Err(err) => return fail(MediaKind::Image, None, err),
        };

        match self.image.analyze_detailed(image_path, target_language).await {
            Ok(text) => {
                info!("Detailed image analysis:\n{text}");
                ProcessOutcome::Completed {
                    basic,
                    detailed: AnalysisResult::new(text),
                }
            }
            Err(err) => fail(MediaKind::Image, Some(basic), err),
        }
    }

    pub async fn process_audio(
        &self,
        audio_path: impl AsRef<Path>,
        source_language: &str,
        target_language: &str,
    ) -> ProcessOutcome {
        let audio_path = audio_path.as_ref();
        if let Err(reason) = validate(audio_path, MediaKind::Audio) {
            return reject(MediaKind::Audio, reason);
        }

        info!(path = %audio_path.display(), source_language, "Processing audio");
        let basic = match self
            .audio
            .translate_basic(audio_path, source_language, target_language)
            .await
        {
            Ok(text) => {
                info!("Basic audio translation:\n{text}");
                AnalysisResult::new(text)
            }
            Err(err) => return fail(MediaKind::Audio, None, err),
        };

        match self
            .audio
            .analyze_detailed(audio_path, source_language, target_language)
            .await
        {
            Ok(text) => {
                info!("Detailed audio analysis:\n{text}");
                ProcessOutcome::Completed {
                    basic,
                    detailed: AnalysisResult::new(text),
                }
            }
            Err(err) => fail(MediaKind::Audio, Some(basic), err),
        }
    }
}

fn reject(kind: MediaKind, reason: ValidationError) -> ProcessOutcome {
    error!(
        %kind,
        path = %reason.path().display(),
        reason = %reason.reason(),
        "{reason}"
    );
    ProcessOutcome::Rejected(reason)
}

fn fail(kind: MediaKind, basic: Option<AnalysisResult>, err: LensError) -> ProcessOutcome {
    error!(
        %kind,
        category = %err.category(),
        cause = %error_chain(&err),
        "Error processing {kind}: {err}"
    );
    ProcessOutcome::Failed { basic, error: err }
}
