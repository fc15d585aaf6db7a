//! Orchestrators turning a media file into basic and detailed analyses.

pub mod audio;
pub mod image;

pub use audio::{join_transcripts, AudioTranslator};
pub use image::{is_valid_image, ImageTranslator};

use crate::client::GenerativeClient;
use crate::error::LensError;
use crate::prompt::Prompt;

/// Send `prompt` and return the first candidate's text.
pub(crate) async fn first_candidate_text(
    generator: &dyn GenerativeClient,
    prompt: Prompt,
) -> Result<String, LensError> {
    let response = generator.generate(&prompt.into_parts()).await?;
    response
        .into_first_text()
        .ok_or_else(|| LensError::EmptyResponse {
            model: generator.model_id().to_string(),
        })
}
