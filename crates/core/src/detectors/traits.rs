//! Core trait every build-tool detector implements

use crate::{
    build_system::BuildTool,
    command::JavaCommand,
    error::Result,
    resolver::ExecutorOptions,
};

/// Recognizes one build tool's project convention and produces its commands
pub trait ExecutorDetector: Send + Sync {
    /// The tool this detector stands for
    fn tool(&self) -> BuildTool;

    /// Does the directory in `options` look like a project for this tool?
    ///
    /// Only filesystem probe failures are errors; "not mine" is `Ok(false)`.
    fn detect(&self, options: &ExecutorOptions) -> Result<bool>;

    /// Find the executable and build the argument lists
    fn resolve(&self, options: &ExecutorOptions) -> Result<JavaCommand>;
}
