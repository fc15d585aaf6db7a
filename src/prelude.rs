//! Convenience re-exports for common use.

pub use crate::client::{GenerativeClient, Part, TranscriptionClient};
pub use crate::config::LensConfig;
pub use crate::error::{LensError, Result};
pub use crate::runner::{ProcessOutcome, Runner};
pub use crate::translate::{AudioTranslator, ImageTranslator};
pub use crate::types::{AnalysisResult, MediaKind, MediaRequest};
pub use crate::validation::{validate, ValidationError, ValidationReason};
