use anyhow::Result;
use jvm_runner_core::{Error, ExecutorResolver};
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::utils::executor_options;

pub fn detect_command(project: &ProjectArgs) -> Result<()> {
    let options = executor_options(project)?;
    debug!("Detecting build tool in {}", options.wd().path().display());

    let resolver = ExecutorResolver::new();
    match resolver.detect(&options)? {
        Some(tool) => {
            println!("{tool}");
            Ok(())
        }
        None => Err(Error::NoProjectDetected {
            tried: resolver.tools().iter().map(|t| t.name()).collect(),
        }
        .into()),
    }
}
