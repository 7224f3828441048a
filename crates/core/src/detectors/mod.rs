//! Build-tool detectors, one per supported tool

pub mod common;
pub mod gradle;
pub mod jar;
pub mod jbang;
pub mod maven;
pub mod sbt;
pub mod traits;

// Re-export main types
pub use common::{BOOTSTRAP_COMMAND, BOOTSTRAP_MAIN_CLASS};
pub use gradle::GradleDetector;
pub use jar::JarDetector;
pub use jbang::JBangDetector;
pub use maven::MavenDetector;
pub use sbt::SbtDetector;
pub use traits::ExecutorDetector;
