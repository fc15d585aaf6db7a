//! Configuration (layered: defaults < TOML file < environment).

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::LensError;

pub const DEFAULT_PROJECT_ID: &str = "your-project-id";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-pro";
pub const DEFAULT_VISION_MODEL: &str = "gemini-pro-vision";
pub const DEFAULT_SPEECH_BASE_URL: &str = "https://speech.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "LINGUA_LENS_CONFIG";

/// Which deployed models to talk to, and how to reach them.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LensConfig {
    pub project_id: String,
    pub location: String,
    pub text_model: String,
    pub vision_model: String,
    /// Bearer credential sent as-is to both services.
    pub access_token: Option<String>,
    /// Overrides `https://{location}-aiplatform.googleapis.com`.
    pub vertex_base_url: Option<String>,
    pub speech_base_url: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for LensConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LensConfig")
            .field("project_id", &self.project_id)
            .field("location", &self.location)
            .field("text_model", &self.text_model)
            .field("vision_model", &self.vision_model)
            .field("access_token", &self.access_token.as_ref().map(|_| ".."))
            .field("vertex_base_url", &self.vertex_base_url)
            .field("speech_base_url", &self.speech_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            access_token: None,
            vertex_base_url: None,
            speech_base_url: DEFAULT_SPEECH_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LensConfig {
    /// Defaults, then the config file if one exists, then environment
    /// variables (including `.env`).
    pub fn load() -> Result<Self, LensError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        // An explicitly named file must exist; the default one is optional.
        let path = match std::env::var(CONFIG_PATH_ENV) {
            Ok(explicit) if !explicit.trim().is_empty() => {
                let path = PathBuf::from(explicit);
                if !path.is_file() {
                    return Err(LensError::Configuration(format!(
                        "Config file named by {CONFIG_PATH_ENV} not found: {}",
                        path.display()
                    )));
                }
                Some(path)
            }
            _ => Some(default_config_path()).filter(|path| path.is_file()),
        };

        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Defaults overlaid with environment variables only.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LensError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            LensError::Configuration(format!("Invalid config file {}: {e}", path.display()))
        })
    }

    /// Overlay values from `lookup` (normally the process environment).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("GOOGLE_CLOUD_PROJECT") {
            self.project_id = v;
        }
        if let Some(v) = non_empty("GOOGLE_CLOUD_LOCATION") {
            self.location = v;
        }
        if let Some(v) = non_empty("LINGUA_LENS_TEXT_MODEL") {
            self.text_model = v;
        }
        if let Some(v) = non_empty("LINGUA_LENS_VISION_MODEL") {
            self.vision_model = v;
        }
        if let Some(v) = non_empty("GOOGLE_CLOUD_ACCESS_TOKEN") {
            self.access_token = Some(v);
        }
        if let Some(v) = non_empty("LINGUA_LENS_VERTEX_BASE_URL") {
            self.vertex_base_url = Some(v);
        }
        if let Some(v) = non_empty("LINGUA_LENS_SPEECH_BASE_URL") {
            self.speech_base_url = v;
        }
        if let Some(v) = non_empty("LINGUA_LENS_TIMEOUT_SECS") {
            match v.trim().parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(value = %v, "Ignoring invalid LINGUA_LENS_TIMEOUT_SECS"),
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn vertex_base_url(&self) -> String {
        self.vertex_base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}-aiplatform.googleapis.com", self.location))
    }

    /// The configured bearer token, or a `Configuration` error.
    pub fn access_token(&self) -> Result<&str, LensError> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                LensError::Configuration(
                    "Missing access token; set GOOGLE_CLOUD_ACCESS_TOKEN".to_string(),
                )
            })
    }

    /// Reject settings that cannot produce a working request.
    pub fn validate(&self) -> Result<(), LensError> {
        let required = [
            ("project_id", &self.project_id),
            ("location", &self.location),
            ("text_model", &self.text_model),
            ("vision_model", &self.vision_model),
            ("speech_base_url", &self.speech_base_url),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(LensError::Configuration(format!("{name} cannot be empty")));
            }
        }
        if self.timeout_secs == 0 {
            return Err(LensError::Configuration(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.access_token()?;
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".lingua-lens"))
        .unwrap_or_else(|| PathBuf::from(".lingua-lens"))
        .join("config.toml")
}
