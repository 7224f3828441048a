use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-level file holding [`RunnerConfig`] defaults
pub const CONFIG_FILE_NAME: &str = ".jvm-runner.json";

/// Environment variable overriding `binary`
pub const BINARY_ENV: &str = "JVM_RUNNER_BINARY";

/// Environment variable overriding `useExecutor`
pub const USE_EXECUTOR_ENV: &str = "JVM_RUNNER_USE_EXECUTOR";

/// Caller preferences that feed [`crate::ExecutorOptions`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    /// Entry point: a `.jar` archive or a script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,

    /// Launcher program forcing the build tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_executor: Option<String>,
}

impl RunnerConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Nearest config file at or above `start_path`
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Config from the nearest file, or the default when there is none
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an environment lookup; blank values count as unset
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Self {
            binary: get(BINARY_ENV),
            use_executor: get(USE_EXECUTOR_ENV),
        }
    }

    /// Overlay `other` on top of `self`; set fields in `other` win
    pub fn merge(self, other: RunnerConfig) -> Self {
        Self {
            binary: other.binary.or(self.binary),
            use_executor: other.use_executor.or(self.use_executor),
        }
    }

    /// File, then environment, then `explicit` (usually command-line flags)
    pub fn layered(start_path: &Path, explicit: RunnerConfig) -> Result<Self> {
        Ok(Self::load(start_path)?
            .merge(Self::from_env())
            .merge(explicit))
    }
}
