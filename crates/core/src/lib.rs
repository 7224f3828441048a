//! jvm-runner-core - decides how a JVM project is built and run
//!
//! This crate provides functionality to:
//! - Detect which build tool (jar, Maven, Gradle, JBang, SBT) governs a directory
//! - Locate Gradle build roots and address subprojects by module path
//! - Resolve the tool's executable, preferring project-local wrappers
//! - Produce the command lines for build, run, plugin discovery and dependency analysis
//!
//! Nothing here spawns a process; callers run the returned [`JavaCommand`].
pub mod build_system;
pub mod command;
pub mod config;
pub mod detectors;
pub mod error;
pub mod interfaces;
pub mod resolver;
pub mod services;

// Re-export commonly used types and traits
pub use build_system::BuildTool;
pub use command::{Action, JavaCommand};
pub use config::RunnerConfig;
pub use error::{Error, Result};
pub use interfaces::ProjectDir;
pub use resolver::{ExecutorOptions, ExecutorResolver, resolve_executor};
pub use services::{MemoryDir, OsDir};
