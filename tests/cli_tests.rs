#![cfg(feature = "cli")]

use std::path::Path;

use clap::Parser;
use lingua_lens::cli::commands::write_outcome;
use lingua_lens::cli::{Cli, Commands, DEFAULT_TARGET_LANGUAGE};
use lingua_lens::error::LensError;
use lingua_lens::runner::ProcessOutcome;
use lingua_lens::types::AnalysisResult;
use lingua_lens::validation::ValidationError;
use tempfile::TempDir;

#[tokio::test]
async fn completed_outcome_writes_both_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results").join("nested");
    let outcome = ProcessOutcome::Completed {
        basic: AnalysisResult::new("short"),
        detailed: AnalysisResult::new("long"),
    };

    let written = write_outcome(&out, Path::new("/media/memo.wav"), &outcome)
        .await
        .unwrap();

    assert_eq!(
        written,
        vec![out.join("memo.basic.txt"), out.join("memo.detailed.txt")]
    );
    assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), "short");
    assert_eq!(std::fs::read_to_string(&written[1]).unwrap(), "long");
}

#[tokio::test]
async fn partial_failure_writes_only_basic() {
    let dir = TempDir::new().unwrap();
    let outcome = ProcessOutcome::Failed {
        basic: Some(AnalysisResult::new("kept")),
        error: LensError::Timeout(1000),
    };

    let written = write_outcome(dir.path(), Path::new("cat.png"), &outcome)
        .await
        .unwrap();

    assert_eq!(written, vec![dir.path().join("cat.basic.txt")]);
}

#[tokio::test]
async fn rejected_outcome_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("never");
    let outcome = ProcessOutcome::Rejected(ValidationError::NotFound {
        path: "gone.png".into(),
    });

    let written = write_outcome(&out, Path::new("gone.png"), &outcome)
        .await
        .unwrap();

    assert!(written.is_empty());
    assert!(!out.exists());
}

#[test]
fn audio_command_defaults_languages() {
    let cli = Cli::try_parse_from(["lingua-lens", "audio", "memo.wav"]).unwrap();
    match cli.command {
        Commands::Audio(args) => {
            assert_eq!(args.source, "en-US");
            assert_eq!(args.target, DEFAULT_TARGET_LANGUAGE);
            assert!(args.output_dir.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn image_command_accepts_target_and_output_dir() {
    let cli = Cli::try_parse_from([
        "lingua-lens",
        "image",
        "cat.png",
        "--target",
        "Japanese",
        "--output-dir",
        "out",
    ])
    .unwrap();
    match cli.command {
        Commands::Image(args) => {
            assert_eq!(args.target, "Japanese");
            assert_eq!(args.output_dir.as_deref(), Some(Path::new("out")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
