//! lingua-lens: translate and analyze local images and audio.
//!
//! Audio is transcribed with Google Cloud Speech-to-Text and the transcript
//! is translated and analyzed by Gemini on Vertex AI; images go straight to
//! the Gemini vision model. Each file yields a basic and a detailed result.
//!
//! # Quick Start
//!
//! ```no_run
//! use lingua_lens::prelude::*;
//!
//! # async fn example() -> lingua_lens::error::Result<()> {
//! let config = LensConfig::load()?;
//! let runner = Runner::from_config(&config)?;
//! let outcome = runner.process_image("photo.jpg", "French").await;
//! if let Some(basic) = outcome.basic() {
//!     println!("{}", basic.text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod prompt;
pub mod runner;
pub mod translate;
pub mod types;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;
