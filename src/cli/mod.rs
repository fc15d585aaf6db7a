//! CLI entry point for lingua-lens.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_TARGET_LANGUAGE: &str = "Chinese";

/// lingua-lens CLI
#[derive(Parser, Debug)]
#[command(
    name = "lingua-lens",
    version,
    about = "Translate and analyze images and audio with Gemini"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe an image in the target language, then analyze it in detail
    Image(ImageArgs),
    /// Transcribe audio, translate it, then analyze it in detail
    Audio(AudioArgs),
    /// Show format, size, and decode checks for a local file
    Inspect(InspectArgs),
}

/// Arguments for `lingua-lens image`.
#[derive(Parser, Debug)]
pub struct ImageArgs {
    /// Image file (jpg, jpeg, png, gif, bmp)
    pub path: PathBuf,

    /// Language to describe the image in
    #[arg(short, long, default_value = DEFAULT_TARGET_LANGUAGE)]
    pub target: String,

    /// Also write results to `<stem>.basic.txt` / `<stem>.detailed.txt` here
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for `lingua-lens audio`.
#[derive(Parser, Debug)]
pub struct AudioArgs {
    /// Audio file (wav, mp3, flac, m4a); sent as 16 kHz LINEAR16
    pub path: PathBuf,

    /// Speech-recognition language code
    #[arg(short, long, default_value = crate::runner::DEFAULT_SOURCE_LANGUAGE)]
    pub source: String,

    /// Language to translate into
    #[arg(short, long, default_value = DEFAULT_TARGET_LANGUAGE)]
    pub target: String,

    /// Also write results to `<stem>.basic.txt` / `<stem>.detailed.txt` here
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for `lingua-lens inspect`.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub path: PathBuf,

    /// Size limit to check against, in MB
    #[arg(long, default_value = "20")]
    pub max_size_mb: f64,
}
