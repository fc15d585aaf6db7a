//! Prompt value object and the basic/detailed templates.

use std::path::Path;

use crate::client::generative::Part;
use crate::validation::mime_type_for;

/// Raw file bytes attached to a prompt, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlob {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl MediaBlob {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Read the whole file; the MIME type comes from its extension.
    pub async fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(bytes, mime_type_for(path)))
    }
}

/// An instruction plus zero or one attached blob. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub blob: Option<MediaBlob>,
}

impl Prompt {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            blob: None,
        }
    }

    pub fn with_blob(mut self, blob: MediaBlob) -> Self {
        self.blob = Some(blob);
        self
    }

    /// Text part first, then the blob as its own part.
    pub fn into_parts(self) -> Vec<Part> {
        let mut parts = vec![Part::Text(self.text)];
        if let Some(blob) = self.blob {
            parts.push(Part::InlineData {
                mime_type: blob.mime_type,
                data: blob.bytes,
            });
        }
        parts
    }
}

pub fn translation(target_language: &str, transcript: &str) -> Prompt {
    Prompt::text(format!(
        "Translate the following text to {target_language}:\n\n{transcript}"
    ))
}

pub fn audio_analysis(target_language: &str, transcript: &str) -> Prompt {
    Prompt::text(format!(
        "Analyze the following transcribed text and provide a detailed analysis in {target_language}, including:\n\
         1. Main topics or subjects discussed\n\
         2. Speaker's tone and emotion (if detectable)\n\
         3. Key points or messages\n\
         4. Context and setting (if apparent)\n\
         5. Any notable quotes or statements\n\
         \n\
         Transcription:\n\
         {transcript}\n"
    ))
}

pub fn image_description(target_language: &str, image: MediaBlob) -> Prompt {
    Prompt::text(format!(
        "Please analyze this image and describe its content in {target_language}"
    ))
    .with_blob(image)
}

pub fn image_analysis(target_language: &str, image: MediaBlob) -> Prompt {
    Prompt::text(format!(
        "Please analyze this image and provide a detailed description in {target_language}, including:\n\
         1. Main subjects or objects\n\
         2. Colors and visual elements\n\
         3. Actions or activities (if any)\n\
         4. Setting or background\n\
         5. Any text or writing visible in the image\n\
         6. Overall mood or atmosphere\n"
    ))
    .with_blob(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn translation_prompt_keeps_transcript_verbatim() {
        let prompt = translation("German", "Hello  world");
        assert_eq!(
            prompt.text,
            "Translate the following text to German:\n\nHello  world"
        );
        assert!(prompt.blob.is_none());
    }

    #[test]
    fn audio_analysis_lists_five_points_then_transcript() {
        let prompt = audio_analysis("Spanish", "we meet at noon");
        assert!(prompt.text.starts_with(
            "Analyze the following transcribed text and provide a detailed analysis in Spanish, including:\n1. Main topics"
        ));
        assert!(prompt.text.contains("5. Any notable quotes or statements\n\nTranscription:\nwe meet at noon\n"));
    }

    #[test]
    fn image_prompts_attach_blob_as_second_part() {
        let blob = MediaBlob::new(vec![1, 2, 3], "image/png");
        let parts = image_description("French", blob.clone()).into_parts();
        assert_eq!(
            parts,
            vec![
                Part::Text("Please analyze this image and describe its content in French".to_string()),
                Part::InlineData {
                    mime_type: "image/png".to_string(),
                    data: vec![1, 2, 3],
                },
            ]
        );

        let detailed = image_analysis("French", blob);
        assert!(detailed.text.contains("6. Overall mood or atmosphere"));
        assert_eq!(detailed.blob.map(|b| b.bytes), Some(vec![1, 2, 3]));
    }
}
