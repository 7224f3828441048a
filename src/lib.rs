//! jvm-runner - detect the JVM build tool behind a project and synthesize its commands
//!
//! This package re-exports [`jvm_runner_core`] and hosts the workspace-level
//! integration tests.
pub use jvm_runner_core::*;
