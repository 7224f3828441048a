//! Executor resolution: options in, command descriptor out

pub mod executor_resolver;
pub mod options;

pub use executor_resolver::{ExecutorResolver, resolve_executor};
pub use options::ExecutorOptions;
