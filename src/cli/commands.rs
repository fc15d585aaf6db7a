//! CLI command handlers.

use std::path::{Path, PathBuf};

use tracing::info;

use super::{AudioArgs, ImageArgs, InspectArgs};
use crate::config::LensConfig;
use crate::error::LensError;
use crate::runner::{ProcessOutcome, Runner};
use crate::translate::is_valid_image;
use crate::types::{MediaKind, MediaRequest};
use crate::validation::{
    ensure_directory, file_extension, file_size_in_megabytes, is_file_size_valid, validate,
};

/// Handle `lingua-lens image`.
pub async fn handle_image(args: ImageArgs) -> Result<(), LensError> {
    let request = MediaRequest::image(&args.path, args.target)?;
    run(&request, args.output_dir.as_deref()).await
}

/// Handle `lingua-lens audio`.
pub async fn handle_audio(args: AudioArgs) -> Result<(), LensError> {
    let request = MediaRequest::audio(&args.path, args.source, args.target)?;
    run(&request, args.output_dir.as_deref()).await
}

async fn run(request: &MediaRequest, output_dir: Option<&Path>) -> Result<(), LensError> {
    let config = LensConfig::load()?;
    let runner = Runner::from_config(&config)?;

    let outcome = runner.process(request).await;
    if let Some(dir) = output_dir {
        write_outcome(dir, request.file_path(), &outcome).await?;
    }
    Ok(())
}

/// Write whichever results the outcome carries. Returns the files written.
pub async fn write_outcome(
    dir: &Path,
    source: &Path,
    outcome: &ProcessOutcome,
) -> Result<Vec<PathBuf>, LensError> {
    let results = [("basic", outcome.basic()), ("detailed", outcome.detailed())];
    if results.iter().all(|(_, result)| result.is_none()) {
        return Ok(Vec::new());
    }

    ensure_directory(dir)?;
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let mut written = Vec::new();
    for (label, result) in results {
        if let Some(result) = result {
            let path = dir.join(format!("{stem}.{label}.txt"));
            tokio::fs::write(&path, &result.text).await?;
            info!(path = %path.display(), "Wrote {label} result");
            written.push(path);
        }
    }
    Ok(written)
}

/// Handle `lingua-lens inspect`.
pub fn handle_inspect(args: InspectArgs) -> Result<(), LensError> {
    let path = &args.path;
    let extension = file_extension(path);
    let kind = MediaKind::from_extension(&extension);

    println!("File:       {}", path.display());
    println!(
        "Extension:  {}",
        if extension.is_empty() { "(none)" } else { extension.as_str() }
    );
    println!(
        "Kind:       {}",
        kind.map(|k| k.to_string())
            .unwrap_or_else(|| "unsupported".to_string())
    );

    let Some(kind) = kind else {
        return Ok(());
    };
    if let Err(reason) = validate(path, kind) {
        println!("Valid:      no ({})", reason.reason());
        return Ok(());
    }
    println!("Valid:      yes");

    let size = file_size_in_megabytes(path)?;
    println!(
        "Size:       {size:.2} MB (limit {} MB: {})",
        args.max_size_mb,
        if is_file_size_valid(path, args.max_size_mb) { "ok" } else { "too large" }
    );

    if kind == MediaKind::Image {
        println!(
            "Decodes:    {}",
            if is_valid_image(path) { "yes" } else { "no" }
        );
    }
    Ok(())
}
