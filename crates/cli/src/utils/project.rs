use anyhow::{Context, Result};
use jvm_runner_core::{ExecutorOptions, OsDir, RunnerConfig};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::cli::ProjectArgs;

/// Canonical project directory from `--cwd` or the process working directory
pub fn project_root(project: &ProjectArgs) -> Result<PathBuf> {
    let root = match &project.cwd {
        Some(cwd) => cwd.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    root.canonicalize()
        .with_context(|| format!("Failed to canonicalize project root {}", root.display()))
}

/// Layer config file, environment and flags into resolver options
pub fn executor_options(project: &ProjectArgs) -> Result<ExecutorOptions> {
    let root = project_root(project)?;
    let config = RunnerConfig::layered(&root, project.to_config())
        .with_context(|| format!("Failed to load configuration for {}", root.display()))?;
    debug!("Effective configuration: {:?}", config);

    Ok(ExecutorOptions::from_config(
        Arc::new(OsDir::new(root)),
        &config,
    ))
}
