//! Precompiled archives launched directly with `java`

use crate::{
    build_system::BuildTool,
    command::JavaCommand,
    error::{Error, Result},
    interfaces::find_executable,
    resolver::ExecutorOptions,
};

use super::{
    common::{BOOTSTRAP_COMMAND, BOOTSTRAP_MAIN_CLASS, args, probe_candidates},
    traits::ExecutorDetector,
};

const JAR_EXTENSIONS: &[&str] = &[".jar"];

/// Selected when the binary is a `.jar`; never forced by `use_executor`
pub struct JarDetector;

impl ExecutorDetector for JarDetector {
    fn tool(&self) -> BuildTool {
        BuildTool::Jar
    }

    fn detect(&self, options: &ExecutorOptions) -> Result<bool> {
        Ok(options.binary_has_extension(JAR_EXTENSIONS))
    }

    fn resolve(&self, options: &ExecutorOptions) -> Result<JavaCommand> {
        let jar = options.binary().ok_or_else(|| {
            Error::ConfigError("running an archive requires a binary path".to_string())
        })?;

        let candidates = probe_candidates(options, &["java"]);
        let executable = find_executable(options.wd().as_ref(), &candidates)?;

        // No build step: the archive is already compiled
        Ok(JavaCommand::new(BuildTool::Jar, executable)
            .with_run_args(args(&["-jar", jar]))
            .with_plugin_args(args(&["-cp", jar, BOOTSTRAP_MAIN_CLASS, BOOTSTRAP_COMMAND]))
            .with_dependency_args(args(&["-cp", jar, BOOTSTRAP_MAIN_CLASS, BOOTSTRAP_COMMAND])))
    }
}
