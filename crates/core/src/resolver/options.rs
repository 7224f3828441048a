//! Inputs to a single executor resolution

use std::sync::Arc;

use crate::config::RunnerConfig;
use crate::interfaces::ProjectDir;

/// What the caller knows about the program it wants to run.
///
/// Built fresh for every resolution and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    wd: Arc<dyn ProjectDir>,
    binary: Option<String>,
    use_executor: Option<String>,
}

impl ExecutorOptions {
    pub fn new(wd: impl ProjectDir + 'static) -> Self {
        Self::from_dir(Arc::new(wd))
    }

    pub fn from_dir(wd: Arc<dyn ProjectDir>) -> Self {
        Self {
            wd,
            binary: None,
            use_executor: None,
        }
    }

    /// Options for `wd` taking `binary` and `use_executor` from `config`
    pub fn from_config(wd: Arc<dyn ProjectDir>, config: &RunnerConfig) -> Self {
        Self::from_dir(wd)
            .with_binary(config.binary.clone())
            .with_use_executor(config.use_executor.clone())
    }

    /// Explicit entry point: a `.jar` archive or a script file
    pub fn with_binary(mut self, binary: impl Into<Option<String>>) -> Self {
        self.binary = non_empty(binary.into());
        self
    }

    /// Launcher program that overrides detection and executable lookup
    pub fn with_use_executor(mut self, executor: impl Into<Option<String>>) -> Self {
        self.use_executor = non_empty(executor.into());
        self
    }

    pub fn wd(&self) -> &Arc<dyn ProjectDir> {
        &self.wd
    }

    pub fn binary(&self) -> Option<&str> {
        self.binary.as_deref()
    }

    pub fn use_executor(&self) -> Option<&str> {
        self.use_executor.as_deref()
    }

    /// Whether `binary` ends with one of `extensions` (e.g. `".jar"`)
    pub fn binary_has_extension(&self, extensions: &[&str]) -> bool {
        self.binary()
            .is_some_and(|b| extensions.iter().any(|ext| b.ends_with(ext)))
    }

    /// Whether `use_executor` mentions `needle`
    pub fn executor_mentions(&self, needle: &str) -> bool {
        self.use_executor().is_some_and(|e| e.contains(needle))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
