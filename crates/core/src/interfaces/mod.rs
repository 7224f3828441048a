//! Core interfaces
//!
//! The resolver is written against these traits so that the real
//! filesystem and in-memory trees are interchangeable.

pub mod project_dir;

pub use project_dir::{ProjectDir, find_executable};
