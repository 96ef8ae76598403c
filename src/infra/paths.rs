// src/infra/paths.rs - XDG-compliant path management
//
// INTERVIEWMATE_HOME overrides everything: config lives directly under it
// and data under $INTERVIEWMATE_HOME/data. Otherwise config uses
// ~/.interviewmate/ and data uses XDG_DATA_HOME/interviewmate.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

fn interviewmate_home() -> Option<PathBuf> {
    std::env::var_os("INTERVIEWMATE_HOME").map(PathBuf::from)
}

/// Home directory, falling back to the working directory on exotic systems.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $INTERVIEWMATE_HOME/ or ~/.interviewmate/
pub fn config_dir() -> PathBuf {
    if let Some(home) = interviewmate_home() {
        return home;
    }
    dirs_home().join(".interviewmate")
}

/// Data directory: $INTERVIEWMATE_HOME/data/ or ~/.local/share/interviewmate/
pub fn data_dir() -> PathBuf {
    if let Some(home) = interviewmate_home() {
        return home.join("data");
    }
    match ProjectDirs::from("", "", "interviewmate") {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Session storage document
pub fn storage_path() -> PathBuf {
    data_dir().join("storage.json")
}

/// Ensure all required directories exist
pub async fn ensure_dirs() -> anyhow::Result<()> {
    for dir in [config_dir(), data_dir()] {
        tokio::fs::create_dir_all(&dir).await?;
    }
    Ok(())
}
