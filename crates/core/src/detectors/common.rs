//! Helpers shared by the detectors

use std::path::Path;

use crate::{error::Result, interfaces::ProjectDir, resolver::ExecutorOptions};

/// Entry point that prints the program's plugin and package requirements
pub const BOOTSTRAP_MAIN_CLASS: &str = "com.pulumi.bootstrap.internal.Main";

/// The only command the bootstrap entry point accepts. Its JSON lists the
/// packages the program uses, and plugins are derived from that list.
pub const BOOTSTRAP_COMMAND: &str = "packages";

pub(crate) fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The executables to probe: the override alone, or the tool's defaults
pub(crate) fn probe_candidates(options: &ExecutorOptions, defaults: &[&str]) -> Vec<String> {
    match options.use_executor() {
        Some(executor) => vec![executor.to_string()],
        None => args(defaults),
    }
}

/// Whether any of `markers` exists in `dir`
pub(crate) fn any_exists(dir: &dyn ProjectDir, markers: &[&str]) -> Result<bool> {
    for marker in markers {
        if dir.file_exists(Path::new(marker))? {
            tracing::trace!("Found {} in {}", marker, dir.path().display());
            return Ok(true);
        }
    }
    Ok(false)
}
