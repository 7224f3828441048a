pub mod project;

pub use project::{executor_options, project_root};
