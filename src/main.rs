// src/main.rs - InterviewMate entry point

use clap::Parser;

use interviewmate::auth::SessionStore;
use interviewmate::cli::{dispatch, is_interactive, Cli, Commands};
use interviewmate::infra::config::Config;
use interviewmate::infra::errors::InterviewMateError;
use interviewmate::infra::{logger, paths};
use interviewmate::storage::FileStore;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        // Input mistakes print as-is, everything else gets the prefix
        match e.downcast_ref::<InterviewMateError>() {
            Some(err) if err.is_user_error() => eprintln!("{err}"),
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    paths::ensure_dirs().await?;
    let store = FileStore::open(config.storage_path())?;
    tracing::debug!("Session storage at {}", store.path().display());
    let mut session = SessionStore::new(store);

    let command = cli.command.unwrap_or(Commands::Home);
    dispatch(command, &config, &mut session, is_interactive()).await
}
