use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::build_system::BuildTool;

/// The lifecycle actions a resolved executor can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Build,
    Run,
    /// Print the packages the program uses, from which the host derives the plugins it needs
    PluginDiscovery,
    /// Print the packages the program declares, as JSON on stdout
    DependencyAnalysis,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Build,
        Action::Run,
        Action::PluginDiscovery,
        Action::DependencyAnalysis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Build => "build",
            Action::Run => "run",
            Action::PluginDiscovery => "plugins",
            Action::DependencyAnalysis => "packages",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved invocation of a JVM build tool.
///
/// `build_args` is `None` when the tool has no separate build step; callers
/// skip the build in that case. An empty `Some` is a build step with no
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaCommand {
    pub tool: BuildTool,
    pub executable: PathBuf,
    /// Directory to invoke from, when it differs from the caller's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
    #[serde(default)]
    pub build_args: Option<Vec<String>>,
    pub run_args: Vec<String>,
    pub plugin_args: Vec<String>,
    pub dependency_args: Vec<String>,
}

impl JavaCommand {
    pub fn new(tool: BuildTool, executable: PathBuf) -> Self {
        Self {
            tool,
            executable,
            working_dir: None,
            build_args: None,
            run_args: Vec::new(),
            plugin_args: Vec::new(),
            dependency_args: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn with_build_args(mut self, args: Vec<String>) -> Self {
        self.build_args = Some(args);
        self
    }

    pub fn with_run_args(mut self, args: Vec<String>) -> Self {
        self.run_args = args;
        self
    }

    pub fn with_plugin_args(mut self, args: Vec<String>) -> Self {
        self.plugin_args = args;
        self
    }

    pub fn with_dependency_args(mut self, args: Vec<String>) -> Self {
        self.dependency_args = args;
        self
    }

    /// Arguments for `action`, or `None` if the tool skips it
    pub fn args_for(&self, action: Action) -> Option<&[String]> {
        match action {
            Action::Build => self.build_args.as_deref(),
            Action::Run => Some(&self.run_args),
            Action::PluginDiscovery => Some(&self.plugin_args),
            Action::DependencyAnalysis => Some(&self.dependency_args),
        }
    }

    pub fn to_shell_command(&self, action: Action) -> Option<String> {
        let args = self.args_for(action)?;
        let mut cmd = quote(&self.executable.to_string_lossy());
        for arg in args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        Some(cmd)
    }
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
