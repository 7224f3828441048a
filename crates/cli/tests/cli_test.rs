//! End-to-end tests for the jvm-runner binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn jvm_runner() -> Command {
    let mut cmd = Command::cargo_bin("jvm-runner").unwrap();
    cmd.env_remove("JVM_RUNNER_BINARY")
        .env_remove("JVM_RUNNER_USE_EXECUTOR");
    cmd
}

#[cfg(unix)]
fn write_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_detect_maven_project() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();

    jvm_runner()
        .args(["detect", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("maven\n");
}

#[test]
fn test_detect_without_project_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), "# nothing to build").unwrap();

    jvm_runner()
        .args(["detect", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("jar, maven, gradle, jbang, sbt"));
}

#[test]
fn test_detect_jar_binary_flag() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("build.gradle"), "").unwrap();

    jvm_runner()
        .args(["detect", "--binary", "build/libs/app.jar", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("jar\n");
}

#[cfg(unix)]
#[test]
fn test_resolve_gradle_subproject_json() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    fs::write(root.join("settings.gradle"), "include 'services:app-cluster'").unwrap();
    write_executable(&root.join("gradlew"));
    let module = root.join("services/app-cluster");
    fs::create_dir_all(&module).unwrap();
    fs::write(module.join("build.gradle"), "plugins { id 'application' }").unwrap();

    let output = jvm_runner()
        .args(["resolve", "--json", "--cwd"])
        .arg(&module)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tool"], "gradle");
    assert_eq!(
        json["runArgs"],
        serde_json::json!([":services:app-cluster:run", "--console=plain"])
    );
    assert_eq!(json["workingDir"], root.display().to_string());
    assert_eq!(json["executable"], root.join("gradlew").display().to_string());
}

#[cfg(unix)]
#[test]
fn test_resolve_jar_build_step_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let java = temp_dir.path().join("jdk/bin/java");
    write_executable(&java);

    jvm_runner()
        .args(["resolve", "--binary", "app.jar", "--action", "build", "--use-executor"])
        .arg(&java)
        .arg("--cwd")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# jar has no build step"));
}

#[cfg(unix)]
#[test]
fn test_init_config_is_used_by_resolve() {
    let temp_dir = TempDir::new().unwrap();
    write_executable(&temp_dir.path().join("tools/sbt-launcher"));

    jvm_runner()
        .args(["init", "--use-executor", "./tools/sbt-launcher", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    jvm_runner()
        .args(["resolve", "--action", "run", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sbt-launcher -batch run"));
}

#[test]
fn test_resolve_missing_executable_reports_candidates() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();

    jvm_runner()
        .args(["resolve", "--use-executor", "./no-such-mvn", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("./no-such-mvn"));
}
