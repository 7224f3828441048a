//! Resolved command descriptors

pub mod java_command;

// Re-export commonly used types
pub use java_command::{Action, JavaCommand};
