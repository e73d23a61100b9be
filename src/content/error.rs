//! Item pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while reading and classifying items.
///
/// Every variant carries the path of the offending file; there is no
/// recovery anywhere in the pipeline, so the variants exist to make the
/// terminal report precise, not to branch on.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("error reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid item header: `{0}`")]
    InvalidHeader(PathBuf),

    #[error("error parsing item header: `{0}`")]
    Header(PathBuf, #[source] serde_yaml::Error),

    #[error("item header is not a mapping: `{0}`")]
    HeaderNotAMapping(PathBuf),
}
