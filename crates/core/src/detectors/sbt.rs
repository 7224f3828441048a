//! SBT projects

use crate::{
    build_system::BuildTool,
    command::JavaCommand,
    error::Result,
    interfaces::find_executable,
    resolver::ExecutorOptions,
};

use super::{
    common::{BOOTSTRAP_COMMAND, BOOTSTRAP_MAIN_CLASS, any_exists, args, probe_candidates},
    traits::ExecutorDetector,
};

const MARKERS: &[&str] = &["build.sbt", "project/build.properties"];
const EXECUTABLES: &[&str] = &["./sbt", "sbt"];

pub struct SbtDetector;

impl SbtDetector {
    fn discovery_args() -> Vec<String> {
        vec![
            "-batch".to_string(),
            // Suppress sbt's own logging below errors
            "-error".to_string(),
            format!("runMain {BOOTSTRAP_MAIN_CLASS} {BOOTSTRAP_COMMAND}"),
        ]
    }
}

impl ExecutorDetector for SbtDetector {
    fn tool(&self) -> BuildTool {
        BuildTool::Sbt
    }

    fn detect(&self, options: &ExecutorOptions) -> Result<bool> {
        if options.executor_mentions("sbt") {
            return Ok(true);
        }
        any_exists(options.wd().as_ref(), MARKERS)
    }

    fn resolve(&self, options: &ExecutorOptions) -> Result<JavaCommand> {
        let candidates = probe_candidates(options, EXECUTABLES);
        let executable = find_executable(options.wd().as_ref(), &candidates)?;

        Ok(JavaCommand::new(BuildTool::Sbt, executable)
            .with_build_args(args(&["-batch", "compile"]))
            .with_run_args(args(&["-batch", "run"]))
            .with_plugin_args(Self::discovery_args())
            .with_dependency_args(Self::discovery_args()))
    }
}
