//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error: `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("config file is not a mapping: `{0}`")]
    NotAMapping(PathBuf),

    #[error("config file not found: `{0}`")]
    NotFound(PathBuf),
}
