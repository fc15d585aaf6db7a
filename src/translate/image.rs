//! Image: send the picture with a prompt to the vision model.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::first_candidate_text;
use crate::client::GenerativeClient;
use crate::error::{LensError, Stage};
use crate::prompt::{self, MediaBlob, Prompt};

pub struct ImageTranslator {
    generator: Arc<dyn GenerativeClient>,
}

impl ImageTranslator {
    /// `generator` must be vision-capable.
    pub fn new(generator: Arc<dyn GenerativeClient>) -> Self {
        Self { generator }
    }

    /// Describe the image content in `target_language`.
    pub async fn analyze_basic(
        &self,
        image_path: impl AsRef<Path>,
        target_language: &str,
    ) -> Result<String, LensError> {
        let result = self
            .generate_with_image(image_path.as_ref(), target_language, prompt::image_description)
            .await
            .map_err(|e| LensError::processing(Stage::Generation, "Failed to process image", e))?;

        info!(target_language, "Successfully analyzed and translated image content");
        Ok(result)
    }

    /// Structured description (subjects, colors, actions, setting, visible
    /// text, mood) in `target_language`. Reads the file again.
    pub async fn analyze_detailed(
        &self,
        image_path: impl AsRef<Path>,
        target_language: &str,
    ) -> Result<String, LensError> {
        self.generate_with_image(image_path.as_ref(), target_language, prompt::image_analysis)
            .await
            .map_err(|e| {
                LensError::processing(
                    Stage::Generation,
                    "Failed to process image for detailed analysis",
                    e,
                )
            })
    }

    async fn generate_with_image(
        &self,
        image_path: &Path,
        target_language: &str,
        template: fn(&str, MediaBlob) -> Prompt,
    ) -> Result<String, LensError> {
        let image = MediaBlob::read(image_path).await?;
        first_candidate_text(self.generator.as_ref(), template(target_language, image)).await
    }
}

/// Whether the file decodes as a raster image. Informational only; the
/// pipeline gate checks extensions.
pub fn is_valid_image(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let decoded = ::image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(::image::ImageError::IoError)
        .and_then(|reader| reader.decode());

    match decoded {
        Ok(_) => true,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Error validating image");
            false
        }
    }
}
