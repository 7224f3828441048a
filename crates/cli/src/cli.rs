use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use jvm_runner_core::{Action, RunnerConfig};
use std::path::PathBuf;

use crate::commands::{detect_command, init_command, resolve_command};

#[derive(Parser, Debug)]
#[command(name = "jvm-runner")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug                 Enable debug logging\n    JVM_RUNNER_BINARY=<path>       Default for --binary\n    JVM_RUNNER_USE_EXECUTOR=<exe>  Default for --use-executor"
)]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the project lives and what the caller already knows about it
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Entry point: a .jar archive or a script file
    #[arg(short, long)]
    pub binary: Option<String>,

    /// Launcher to use instead of detection (e.g. ./gradlew or /opt/maven/bin/mvn)
    #[arg(short = 'e', long)]
    pub use_executor: Option<String>,
}

impl ProjectArgs {
    pub fn to_config(&self) -> RunnerConfig {
        RunnerConfig {
            binary: self.binary.clone(),
            use_executor: self.use_executor.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the build tool that governs a project
    #[command(visible_alias = "d")]
    Detect {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Show the commands that build, run and introspect a project
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        project: ProjectArgs,

        /// Only show the command for this action
        #[arg(short, long, value_enum)]
        action: Option<ActionArg>,

        /// Print the resolved descriptor as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a .jvm-runner.json holding the given defaults
    Init {
        #[command(flatten)]
        project: ProjectArgs,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArg {
    Build,
    Run,
    Plugins,
    Packages,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Build => Action::Build,
            ActionArg::Run => Action::Run,
            ActionArg::Plugins => Action::PluginDiscovery,
            ActionArg::Packages => Action::DependencyAnalysis,
        }
    }
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Detect { project } => detect_command(&project),
            Commands::Resolve {
                project,
                action,
                json,
            } => resolve_command(&project, action.map(Action::from), json),
            Commands::Init { project, force } => init_command(&project, force),
        }
    }
}
