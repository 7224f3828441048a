//! Configuration management for jvm-runner

mod settings;

// Re-export main types
pub use settings::{BINARY_ENV, CONFIG_FILE_NAME, RunnerConfig, USE_EXECUTOR_ENV};
