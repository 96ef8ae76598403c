// src/infra/config.rs - Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infra::errors::{InterviewMateError, Result};
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub interview: InterviewConfig,

    #[serde(default)]
    pub mock: MockConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated round-trip for login/signup.
    pub latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { latency_ms: 1500 }
    }
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    pub total_questions: u32,
    pub response_delay_ms: u64,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            total_questions: 5,
            response_delay_ms: 2000,
        }
    }
}

impl InterviewConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub evaluation_delay_ms: u64,
    pub tick_ms: u64,
    pub warning_threshold_secs: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            evaluation_delay_ms: 2000,
            tick_ms: 1000,
            warning_threshold_secs: 300,
        }
    }
}

impl MockConfig {
    pub fn evaluation_delay(&self) -> Duration {
        Duration::from_millis(self.evaluation_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        // A zero period would make tokio::time::interval panic
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the default `<data_dir>/storage.json`.
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| InterviewMateError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Where the session storage document lives.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(paths::storage_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.auth.latency_ms, 1500);
        assert_eq!(c.interview.total_questions, 5);
        assert_eq!(c.interview.response_delay_ms, 2000);
        assert_eq!(c.mock.evaluation_delay_ms, 2000);
        assert_eq!(c.mock.tick_ms, 1000);
        assert_eq!(c.mock.warning_threshold_secs, 300);
        assert!(c.storage.path.is_none());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.interview.total_questions, 5);
        assert_eq!(config.auth.latency(), Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[auth]
latency_ms = 0

[interview]
total_questions = 3
response_delay_ms = 10

[mock]
evaluation_delay_ms = 5
tick_ms = 250
warning_threshold_secs = 60

[storage]
path = "/tmp/im-storage.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.auth.latency_ms, 0);
        assert_eq!(config.interview.total_questions, 3);
        assert_eq!(config.mock.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.mock.warning_threshold_secs, 60);
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/im-storage.json")
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[mock]\ntick_ms = 10\n").unwrap();
        assert_eq!(config.mock.tick_ms, 10);
        assert_eq!(config.mock.warning_threshold_secs, 300);
        assert_eq!(config.mock.evaluation_delay_ms, 2000);
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let m = MockConfig {
            tick_ms: 0,
            ..MockConfig::default()
        };
        assert_eq!(m.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(InterviewMateError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[interview]\ntotal_questions = \"five\"\n").unwrap();
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(InterviewMateError::Config(_))));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(
            deserialized.interview.total_questions,
            config.interview.total_questions
        );
    }
}
