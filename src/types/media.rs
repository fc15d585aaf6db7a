//! Media request value types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::LensError;

/// Kind of media a request carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    /// Lowercase file extensions accepted for this kind.
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["jpg", "jpeg", "png", "gif", "bmp"],
            Self::Audio => &["wav", "mp3", "flac", "m4a"],
        }
    }

    /// Detect the kind from a lowercase extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        [Self::Image, Self::Audio]
            .into_iter()
            .find(|kind| kind.allowed_extensions().contains(&extension))
    }
}

/// One invocation's input: which file, what kind, and which languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRequest {
    file_path: PathBuf,
    media_kind: MediaKind,
    source_language: Option<String>,
    target_language: String,
}

impl MediaRequest {
    pub fn image(
        file_path: impl Into<PathBuf>,
        target_language: impl Into<String>,
    ) -> Result<Self, LensError> {
        Self::new(file_path.into(), MediaKind::Image, None, target_language.into())
    }

    pub fn audio(
        file_path: impl Into<PathBuf>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Result<Self, LensError> {
        Self::new(
            file_path.into(),
            MediaKind::Audio,
            Some(source_language.into()),
            target_language.into(),
        )
    }

    fn new(
        file_path: PathBuf,
        media_kind: MediaKind,
        source_language: Option<String>,
        target_language: String,
    ) -> Result<Self, LensError> {
        if file_path.as_os_str().is_empty() {
            return Err(LensError::InvalidArgument(
                "File path cannot be empty".to_string(),
            ));
        }
        if target_language.trim().is_empty() {
            return Err(LensError::InvalidArgument(
                "Target language cannot be empty".to_string(),
            ));
        }
        if let Some(source) = &source_language {
            if source.trim().is_empty() {
                return Err(LensError::InvalidArgument(
                    "Source language cannot be empty".to_string(),
                ));
            }
        }
        Ok(Self {
            file_path,
            media_kind,
            source_language,
            target_language,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn media_kind(&self) -> MediaKind {
        self.media_kind
    }

    /// Speech-recognition language code; only set for audio requests.
    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }
}

/// Text extracted from one generative response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
}

impl AnalysisResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        let err = MediaRequest::image("", "French").unwrap_err();
        assert!(matches!(err, LensError::InvalidArgument(msg) if msg.contains("File path")));
    }

    #[test]
    fn audio_request_keeps_languages() {
        let request = MediaRequest::audio("clip.wav", "en-US", "Chinese").unwrap();
        assert_eq!(request.media_kind(), MediaKind::Audio);
        assert_eq!(request.source_language(), Some("en-US"));
        assert_eq!(request.target_language(), "Chinese");
    }

    #[test]
    fn image_request_has_no_source_language() {
        let request = MediaRequest::image("cat.png", "French").unwrap();
        assert_eq!(request.source_language(), None);
    }

    #[test]
    fn kind_detection_from_extension() {
        assert_eq!(MediaKind::from_extension("jpeg"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_extension("m4a"), Some(MediaKind::Audio));
        assert_eq!(MediaKind::from_extension("txt"), None);
    }

    #[test]
    fn kind_parses_from_lowercase_name() {
        assert_eq!("audio".parse::<MediaKind>().unwrap(), MediaKind::Audio);
        assert_eq!(MediaKind::Image.to_string(), "image");
    }
}
