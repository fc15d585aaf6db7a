//! External collaborators: speech recognition and generative models.

pub mod generative;
pub mod google_speech;
pub mod http;
pub mod transcription;
pub mod vertex;

pub use generative::{Candidate, GenerateContentResponse, GenerativeClient, Part};
pub use google_speech::GoogleSpeechClient;
pub use transcription::{
    AudioEncoding, RecognitionConfig, SpeechAlternative, SpeechRecognitionResult,
    TranscriptionClient,
};
pub use vertex::VertexGenerativeClient;
