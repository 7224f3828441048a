//! Concrete implementations of the interface traits

pub mod memory_dir;
pub mod os_dir;

pub use memory_dir::{MemoryDir, MemoryDirBuilder};
pub use os_dir::OsDir;
