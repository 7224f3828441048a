//! JBang scripts and catalogs

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

const MARKERS: &[&str] = &["jbang.properties"];
const SCRIPT_EXTENSIONS: &[&str] = &[".java", ".kt", ".groovy"];
const EXECUTABLES: &[&str] = &["./jbang", "jbang"];

pub struct JBangDetector;

impl ExecutorDetector for JBangDetector {
    fn tool(&self) -> BuildTool {
        BuildTool::JBang
    }

    fn detect(&self, options: &ExecutorOptions) -> Result<bool> {
        if options.executor_mentions("jbang") || options.binary_has_extension(SCRIPT_EXTENSIONS) {
            return Ok(true);
        }
        any_exists(options.wd().as_ref(), MARKERS)
    }

    fn resolve(&self, options: &ExecutorOptions) -> Result<JavaCommand> {
        let candidates = probe_candidates(options, EXECUTABLES);
        let executable = find_executable(options.wd().as_ref(), &candidates)?;

        // Without an explicit script jbang picks the entry point of the directory
        let script = options.binary().unwrap_or(".");
        let main = format!("--main={BOOTSTRAP_MAIN_CLASS}");

        Ok(JavaCommand::new(BuildTool::JBang, executable)
            .with_build_args(args(&["--quiet", "build", script]))
            .with_run_args(args(&["--quiet", "run", script]))
            .with_plugin_args(args(&["--quiet", "run", main.as_str(), script, BOOTSTRAP_COMMAND]))
            .with_dependency_args(args(&["--quiet", "run", main.as_str(), script, BOOTSTRAP_COMMAND])))
    }
}
