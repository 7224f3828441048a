pub mod detect;
pub mod init;
pub mod resolve;

pub use detect::detect_command;
pub use init::init_command;
pub use resolve::resolve_command;
