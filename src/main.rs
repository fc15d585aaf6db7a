//! lingua-lens CLI binary entry point.

use clap::Parser;
use lingua_lens::cli::commands::{handle_audio, handle_image, handle_inspect};
use lingua_lens::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Image(args) => handle_image(args).await,
        Commands::Audio(args) => handle_audio(args).await,
        Commands::Inspect(args) => handle_inspect(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
