//! Audio: transcribe with the speech client, then translate or analyze
//! the transcript with the text model.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::first_candidate_text;
use crate::client::{GenerativeClient, RecognitionConfig, SpeechRecognitionResult, TranscriptionClient};
use crate::error::{LensError, Stage};
use crate::prompt;

pub struct AudioTranslator {
    transcriber: Arc<dyn TranscriptionClient>,
    generator: Arc<dyn GenerativeClient>,
}

impl AudioTranslator {
    pub fn new(
        transcriber: Arc<dyn TranscriptionClient>,
        generator: Arc<dyn GenerativeClient>,
    ) -> Self {
        Self {
            transcriber,
            generator,
        }
    }

    /// Transcribe `audio_path` and translate the transcript into
    /// `target_language`.
    pub async fn translate_basic(
        &self,
        audio_path: impl AsRef<Path>,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, LensError> {
        const FAILURE: &str = "Failed to process audio";

        let transcript = self
            .transcribe(audio_path, source_language)
            .await
            .map_err(|e| LensError::processing(Stage::Transcription, FAILURE, e))?;

        let translation = first_candidate_text(
            self.generator.as_ref(),
            prompt::translation(target_language, &transcript),
        )
        .await
        .map_err(|e| LensError::processing(Stage::Generation, FAILURE, e))?;

        info!(target_language, "Successfully translated text");
        Ok(translation)
    }

    /// Transcribe `audio_path` again and ask for a structured analysis
    /// (topics, tone, key points, context, quotes) in `target_language`.
    ///
    /// Runs its own transcription; nothing is shared with
    /// [`translate_basic`](Self::translate_basic).
    pub async fn analyze_detailed(
        &self,
        audio_path: impl AsRef<Path>,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, LensError> {
        const FAILURE: &str = "Failed to process audio for detailed analysis";

        let transcript = self
            .transcribe(audio_path, source_language)
            .await
            .map_err(|e| LensError::processing(Stage::Transcription, FAILURE, e))?;

        first_candidate_text(
            self.generator.as_ref(),
            prompt::audio_analysis(target_language, &transcript),
        )
        .await
        .map_err(|e| LensError::processing(Stage::Generation, FAILURE, e))
    }

    /// Read the file and run one recognition call (LINEAR16, 16 kHz).
    pub async fn transcribe(
        &self,
        audio_path: impl AsRef<Path>,
        language_code: &str,
    ) -> Result<String, LensError> {
        let audio = tokio::fs::read(audio_path.as_ref()).await?;
        let config = RecognitionConfig::linear16(language_code);
        let results = self.transcriber.recognize(&audio, &config).await?;

        let transcript = join_transcripts(&results);
        info!(
            segments = results.len(),
            chars = transcript.len(),
            "Successfully transcribed audio"
        );
        Ok(transcript)
    }
}

/// Concatenate each segment's top alternative in order, with no separator.
/// Segments without alternatives contribute nothing.
pub fn join_transcripts(results: &[SpeechRecognitionResult]) -> String {
    results
        .iter()
        .filter_map(SpeechRecognitionResult::top_transcript)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_join_without_separator() {
        let results = vec![
            SpeechRecognitionResult::from_transcript("Hello "),
            SpeechRecognitionResult::default(),
            SpeechRecognitionResult::from_transcript(" world"),
        ];
        assert_eq!(join_transcripts(&results), "Hello  world");
    }

    #[test]
    fn no_segments_is_empty_transcript() {
        assert_eq!(join_transcripts(&[]), "");
    }
}
