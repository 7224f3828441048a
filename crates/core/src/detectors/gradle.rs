//! Gradle projects, including multi-module builds
//!
//! A Gradle build is governed by the nearest `settings.gradle(.kts)` at or
//! above the working directory. When that root sits higher up, tasks are
//! addressed through the module path, e.g. `:services:app:run`.

use std::path::{Component, Path};
use std::sync::Arc;

use crate::{
    build_system::BuildTool,
    command::JavaCommand,
    error::Result,
    interfaces::{ProjectDir, find_executable},
    resolver::ExecutorOptions,
};

use super::{
    common::{BOOTSTRAP_COMMAND, BOOTSTRAP_MAIN_CLASS, any_exists, args, probe_candidates},
    traits::ExecutorDetector,
};

const SETTINGS_FILES: &[&str] = &["settings.gradle", "settings.gradle.kts"];
const MARKERS: &[&str] = &[
    "settings.gradle",
    "settings.gradle.kts",
    "build.gradle",
    "build.gradle.kts",
];
const EXECUTABLES: &[&str] = &["./gradlew", "gradle"];

pub struct GradleDetector;

impl GradleDetector {
    fn discovery_args(task: &str) -> Vec<String> {
        vec![
            // Gradle only honours -q reliably ahead of the task name
            "-q".to_string(),
            task.to_string(),
            "--console=plain".to_string(),
            format!("-PmainClass={BOOTSTRAP_MAIN_CLASS}"),
            format!("--args={BOOTSTRAP_COMMAND}"),
        ]
    }
}

impl ExecutorDetector for GradleDetector {
    fn tool(&self) -> BuildTool {
        BuildTool::Gradle
    }

    fn detect(&self, options: &ExecutorOptions) -> Result<bool> {
        if options.executor_mentions("gradle") {
            return Ok(true);
        }
        any_exists(options.wd().as_ref(), MARKERS)
    }

    fn resolve(&self, options: &ExecutorOptions) -> Result<JavaCommand> {
        let wd = options.wd();
        let root = match find_build_root(wd)? {
            Some(root) => root,
            None => {
                tracing::debug!(
                    "No Gradle settings file above {}, building it standalone",
                    wd.path().display()
                );
                Arc::clone(wd)
            }
        };

        let prefix = module_task_prefix(root.path(), wd.path());
        let build_task = format!("{prefix}build");
        let run_task = format!("{prefix}run");
        tracing::debug!(
            "Gradle root {} with task prefix {:?}",
            root.path().display(),
            prefix
        );

        let candidates = probe_candidates(options, EXECUTABLES);
        let executable = find_executable(root.as_ref(), &candidates)?;

        Ok(JavaCommand::new(BuildTool::Gradle, executable)
            .with_working_dir(root.path().to_path_buf())
            .with_build_args(vec![build_task, "--console=plain".to_string()])
            .with_run_args(vec![run_task.clone(), "--console=plain".to_string()])
            .with_plugin_args(Self::discovery_args(&run_task))
            .with_dependency_args(Self::discovery_args(&run_task)))
    }
}

/// Walk up from `wd` (inclusive) to the first directory holding a settings file
pub fn find_build_root(wd: &Arc<dyn ProjectDir>) -> Result<Option<Arc<dyn ProjectDir>>> {
    let mut current = Arc::clone(wd);
    loop {
        if any_exists(current.as_ref(), SETTINGS_FILES)? {
            return Ok(Some(current));
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Ok(None),
        }
    }
}

/// Task prefix addressing `wd` inside the build rooted at `root`.
///
/// Empty when they are the same directory, otherwise `:a:b:` for `root/a/b`.
pub fn module_task_prefix(root: &Path, wd: &Path) -> String {
    let Ok(relative) = wd.strip_prefix(root) else {
        return String::new();
    };

    let segments: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        String::new()
    } else {
        format!(":{}:", segments.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Action;
    use crate::services::MemoryDir;
    use std::io;
    use std::path::PathBuf;

    fn multi_module(wd: &str) -> ExecutorOptions {
        let dir = MemoryDir::builder()
            .file("/work/settings.gradle")
            .file("/work/gradlew")
            .file("/work/services/app-cluster/build.gradle")
            .program("gradle", "/usr/bin/gradle")
            .build_at(wd);
        ExecutorOptions::new(dir)
    }

    #[test]
    fn test_module_task_prefix() {
        assert_eq!(
            module_task_prefix(Path::new("/work"), Path::new("/work/services/app-cluster")),
            ":services:app-cluster:"
        );
        assert_eq!(module_task_prefix(Path::new("/work"), Path::new("/work")), "");
        assert_eq!(module_task_prefix(Path::new("/work"), Path::new("/elsewhere")), "");
    }

    #[test]
    fn test_detect_markers() {
        assert!(GradleDetector.detect(&multi_module("/work")).unwrap());
        assert!(GradleDetector
            .detect(&multi_module("/work/services/app-cluster"))
            .unwrap());
        // Intermediate directory without a build file of its own
        assert!(!GradleDetector.detect(&multi_module("/work/services")).unwrap());
    }

    #[test]
    fn test_detect_kotlin_dsl() {
        let dir = MemoryDir::builder().file("/work/build.gradle.kts").build_at("/work");
        assert!(GradleDetector.detect(&ExecutorOptions::new(dir)).unwrap());
    }

    #[test]
    fn test_subproject_uses_module_tasks() {
        let command = GradleDetector
            .resolve(&multi_module("/work/services/app-cluster"))
            .unwrap();

        assert_eq!(command.run_args, vec![":services:app-cluster:run", "--console=plain"]);
        assert_eq!(
            command.build_args,
            Some(vec![
                ":services:app-cluster:build".to_string(),
                "--console=plain".to_string()
            ])
        );
        assert_eq!(command.working_dir, Some(PathBuf::from("/work")));
        assert_eq!(command.executable, PathBuf::from("/work/gradlew"));
    }

    #[test]
    fn test_root_uses_bare_tasks() {
        let command = GradleDetector.resolve(&multi_module("/work")).unwrap();

        assert_eq!(command.run_args, vec!["run", "--console=plain"]);
        insta::assert_snapshot!(
            command.to_shell_command(Action::PluginDiscovery).unwrap(),
            @"/work/gradlew -q run --console=plain -PmainClass=com.pulumi.bootstrap.internal.Main --args=packages"
        );
    }

    #[test]
    fn test_without_settings_wd_is_root() {
        let dir = MemoryDir::builder()
            .file("/work/app/build.gradle")
            .program("gradle", "/usr/bin/gradle")
            .build_at("/work/app");
        let command = GradleDetector.resolve(&ExecutorOptions::new(dir)).unwrap();

        assert_eq!(command.run_args, vec!["run", "--console=plain"]);
        assert_eq!(command.working_dir, Some(PathBuf::from("/work/app")));
        assert_eq!(command.executable, PathBuf::from("/usr/bin/gradle"));
    }

    #[test]
    fn test_settings_kts_root() {
        let dir = MemoryDir::builder()
            .file("/repo/settings.gradle.kts")
            .file("/repo/lib/core/build.gradle.kts")
            .build_at("/repo/lib/core");
        let wd: Arc<dyn ProjectDir> = Arc::new(dir);

        let root = find_build_root(&wd).unwrap().unwrap();
        assert_eq!(root.path(), Path::new("/repo"));
    }

    #[test]
    fn test_root_discovery_propagates_probe_errors() {
        let dir = MemoryDir::builder()
            .file("/work/app/build.gradle")
            .failing("/work/settings.gradle", io::ErrorKind::PermissionDenied)
            .build_at("/work/app");
        let wd: Arc<dyn ProjectDir> = Arc::new(dir);

        assert!(find_build_root(&wd).is_err());
    }

    #[test]
    fn test_forced_executor_is_looked_up_from_root() {
        let dir = MemoryDir::builder()
            .file("/work/settings.gradle")
            .file("/work/tools/gradle")
            .build_at("/work/app");
        let opts = ExecutorOptions::new(dir).with_use_executor("./tools/gradle".to_string());

        assert!(GradleDetector.detect(&opts).unwrap());
        let command = GradleDetector.resolve(&opts).unwrap();
        assert_eq!(command.executable, PathBuf::from("/work/tools/gradle"));
        assert_eq!(command.run_args, vec![":app:run", "--console=plain"]);
    }
}
