use std::io;
use std::path::PathBuf;

/// Errors that can occur while resolving a JVM executor
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to probe {}: {source}", path.display())]
    ProbeError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not find {} on the $PATH: {source}", candidates.join(", "))]
    ExecutableNotFound {
        candidates: Vec<String>,
        #[source]
        source: io::Error,
    },

    #[error("Did not detect a supported Java project, tried: {}", tried.join(", "))]
    NoProjectDetected { tried: Vec<&'static str> },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for jvm-runner operations
pub type Result<T> = std::result::Result<T, Error>;
