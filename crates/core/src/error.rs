use std::io;
use std::path::PathBuf;

/// Errors that can occur during cmake-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No CMake project found in the directory's ancestry")]
    ProjectNotFound,

    #[error(
        "Build directory mismatch: found a cache file in {} but the configured build directory is {}",
        .discovered.display(),
        .configured.display()
    )]
    InconsistentConfig {
        discovered: PathBuf,
        configured: PathBuf,
    },

    #[error("Source {source_path} and build directory {build_path} are on different hosts")]
    CrossHost {
        source_path: String,
        build_path: String,
    },

    #[error("Malformed cache file: {0}")]
    MalformedCache(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Test list error: {0}")]
    TestList(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for cmake-runner operations
pub type Result<T> = std::result::Result<T, Error>;
