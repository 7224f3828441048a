//! Maven projects (`pom.xml`)

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

const MARKERS: &[&str] = &["pom.xml"];
const EXECUTABLES: &[&str] = &["./mvnw", "mvn"];

pub struct MavenDetector;

impl MavenDetector {
    fn discovery_args() -> Vec<String> {
        let mut discovery = args(&[
            // Maven logs to stdout; stdout has to carry only the JSON result
            "-Dorg.slf4j.simpleLogger.logFile=System.err",
            "--no-transfer-progress",
            "compile",
            "exec:java",
        ]);
        discovery.push(format!("-DmainClass={BOOTSTRAP_MAIN_CLASS}"));
        discovery.push(format!("-DmainArgs={BOOTSTRAP_COMMAND}"));
        discovery
    }
}

impl ExecutorDetector for MavenDetector {
    fn tool(&self) -> BuildTool {
        BuildTool::Maven
    }

    fn detect(&self, options: &ExecutorOptions) -> Result<bool> {
        if options.executor_mentions("mvn") {
            return Ok(true);
        }
        any_exists(options.wd().as_ref(), MARKERS)
    }

    fn resolve(&self, options: &ExecutorOptions) -> Result<JavaCommand> {
        let candidates = probe_candidates(options, EXECUTABLES);
        let executable = find_executable(options.wd().as_ref(), &candidates)?;

        Ok(JavaCommand::new(BuildTool::Maven, executable)
            .with_build_args(args(&["--no-transfer-progress", "compile"]))
            .with_run_args(args(&["--no-transfer-progress", "compile", "exec:java"]))
            .with_plugin_args(Self::discovery_args())
            .with_dependency_args(Self::discovery_args()))
    }
}
