//! File validation: existence, readability, extension allow-lists, size.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use strum::Display;
use thiserror::Error;
use tracing::{debug, info};

use crate::types::MediaKind;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Why a file was rejected before any remote call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("File is not readable: {}", path.display())]
    Unreadable { path: PathBuf },

    #[error("Unsupported {kind} format '{extension}' for file: {}", path.display())]
    UnsupportedFormat {
        path: PathBuf,
        kind: MediaKind,
        extension: String,
    },
}

/// Field-less view of [`ValidationError`], for matching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationReason {
    NotFound,
    Unreadable,
    UnsupportedFormat,
}

impl ValidationError {
    pub fn reason(&self) -> ValidationReason {
        match self {
            Self::NotFound { .. } => ValidationReason::NotFound,
            Self::Unreadable { .. } => ValidationReason::Unreadable,
            Self::UnsupportedFormat { .. } => ValidationReason::UnsupportedFormat,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Unreadable { path } => path,
            Self::UnsupportedFormat { path, .. } => path,
        }
    }
}

/// Outcome of [`validate`].
pub type ValidationResult = Result<(), ValidationError>;

/// Check that `path` is an existing, readable regular file whose extension
/// is allowed for `kind`.
///
/// Existence is checked first, so a missing file is always `NotFound`
/// whatever its extension.
pub fn validate(path: impl AsRef<Path>, kind: MediaKind) -> ValidationResult {
    let path = path.as_ref();

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            debug!(path = %path.display(), error = %err, "metadata lookup denied");
            return Err(ValidationError::Unreadable {
                path: path.to_path_buf(),
            });
        }
        // NotFound, a non-directory parent, an over-long name: nothing
        // resolvable lives at this path.
        Err(err) => {
            debug!(path = %path.display(), error = %err, "metadata lookup failed");
            return Err(ValidationError::NotFound {
                path: path.to_path_buf(),
            });
        }
    };
    if !metadata.is_file() {
        return Err(ValidationError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if let Err(err) = File::open(path) {
        debug!(path = %path.display(), error = %err, "open for read failed");
        return Err(ValidationError::Unreadable {
            path: path.to_path_buf(),
        });
    }

    if !is_supported_format(path, kind) {
        return Err(ValidationError::UnsupportedFormat {
            path: path.to_path_buf(),
            kind,
            extension: file_extension(path),
        });
    }

    Ok(())
}

/// Lowercased text after the last `.` of the file name.
///
/// Empty when the name has no `.` or its only `.` is the first character
/// (`.bashrc`).
pub fn file_extension(path: impl AsRef<Path>) -> String {
    let name: Cow<'_, str> = path
        .as_ref()
        .file_name()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    match name.rfind('.') {
        Some(index) if index > 0 => name[index + 1..].to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Whether the extension alone is acceptable for `kind`. Does not touch
/// the file system.
pub fn is_supported_format(path: impl AsRef<Path>, kind: MediaKind) -> bool {
    kind.allowed_extensions()
        .contains(&file_extension(path).as_str())
}

/// MIME type used to label an attached blob.
pub fn mime_type_for(path: impl AsRef<Path>) -> &'static str {
    match file_extension(path).as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}

/// File size in mebibytes (bytes / 1,048,576).
pub fn file_size_in_megabytes(path: impl AsRef<Path>) -> io::Result<f64> {
    let metadata = fs::metadata(path)?;
    Ok(metadata.len() as f64 / BYTES_PER_MEGABYTE)
}

/// True when the file is at most `max_mb` mebibytes. False if the size
/// cannot be read.
pub fn is_file_size_valid(path: impl AsRef<Path>, max_mb: f64) -> bool {
    file_size_in_megabytes(path)
        .map(|size| size <= max_mb)
        .unwrap_or(false)
}

/// Create `path` and any missing parents.
pub fn ensure_directory(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
        info!(path = %path.display(), "Created directory");
    }
    Ok(())
}
