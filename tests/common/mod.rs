//! Shared test helpers and stub clients.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use lingua_lens::client::{
    GenerateContentResponse, GenerativeClient, Part, RecognitionConfig, SpeechRecognitionResult,
    TranscriptionClient,
};
use lingua_lens::error::LensError;

/// A transcription stub returning fixed segments (or a fixed failure).
pub struct StubTranscriber {
    segments: Vec<String>,
    failure: Option<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(Vec<u8>, RecognitionConfig)>>,
}

impl StubTranscriber {
    pub fn with_segments(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
            failure: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::with_segments(&[])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(Vec<u8>, RecognitionConfig)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptionClient for StubTranscriber {
    async fn recognize(
        &self,
        audio: &[u8],
        config: &RecognitionConfig,
    ) -> Result<Vec<SpeechRecognitionResult>, LensError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((audio.to_vec(), config.clone()));

        if let Some(message) = &self.failure {
            return Err(LensError::Io(std::io::Error::other(message.clone())));
        }
        Ok(self
            .segments
            .iter()
            .map(SpeechRecognitionResult::from_transcript)
            .collect())
    }
}

/// How a [`StubGenerator`] answers.
pub enum Reply {
    /// One candidate with this text.
    Text(String),
    /// One candidate echoing the request's text parts.
    Echo,
    /// Zero candidates.
    Empty,
    /// An API error with this message.
    Fail(String),
}

/// A generative stub that records every request.
pub struct StubGenerator {
    model: String,
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<Vec<Part>>>,
}

impl StubGenerator {
    pub fn new(reply: Reply) -> Self {
        Self {
            model: "stub-model".to_string(),
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn echo() -> Self {
        Self::new(Reply::Echo)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Vec<Part>> {
        self.requests.lock().unwrap().clone()
    }

    /// Text of the first part of the nth request.
    pub fn prompt_text(&self, index: usize) -> String {
        self.requests()[index][0]
            .as_text()
            .expect("first part is text")
            .to_string()
    }
}

#[async_trait]
impl GenerativeClient for StubGenerator {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, parts: &[Part]) -> Result<GenerateContentResponse, LensError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(parts.to_vec());

        match &self.reply {
            Reply::Text(text) => Ok(GenerateContentResponse::from_text(text.clone())),
            Reply::Echo => Ok(GenerateContentResponse::from_text(
                parts.iter().filter_map(Part::as_text).collect::<String>(),
            )),
            Reply::Empty => Ok(GenerateContentResponse::default()),
            Reply::Fail(message) => Err(LensError::api(500, message.clone())),
        }
    }
}

/// Write `bytes` to `name` inside `dir`.
pub fn media_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
