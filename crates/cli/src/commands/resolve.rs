use anyhow::{Context, Result};
use jvm_runner_core::{Action, ExecutorResolver};
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::display::print_command_breakdown;
use crate::utils::executor_options;

pub fn resolve_command(project: &ProjectArgs, action: Option<Action>, json: bool) -> Result<()> {
    let options = executor_options(project)?;
    debug!("Resolving executor for {}", options.wd().path().display());

    let command = ExecutorResolver::new().resolve(&options).with_context(|| {
        format!(
            "Failed to resolve a Java executor in {}",
            options.wd().path().display()
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&command)?);
        return Ok(());
    }

    match action {
        Some(action) => match command.to_shell_command(action) {
            Some(shell) => println!("{shell}"),
            None => println!("# {} has no {} step", command.tool, action),
        },
        None => {
            println!("🔍 Resolving: {}", options.wd().path().display());
            println!("{}", "=".repeat(80));
            println!("📦 Build tool: {}", command.tool);
            println!("🔧 Executable: {}", command.executable.display());
            if let Some(dir) = &command.working_dir {
                println!("📂 Working directory: {}", dir.display());
            }
            for action in Action::ALL {
                print_command_breakdown(&command, action);
            }
        }
    }

    Ok(())
}
