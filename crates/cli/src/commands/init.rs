use anyhow::{Context, Result};
use jvm_runner_core::config::CONFIG_FILE_NAME;

use crate::cli::ProjectArgs;
use crate::utils::project_root;

pub fn init_command(project: &ProjectArgs, force: bool) -> Result<()> {
    let root = project_root(project)?;
    let config_path = root.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    project
        .to_config()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
