use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the index core. Tokenization never fails; everything
/// here comes from the persistence boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a snapshot file failed at the filesystem level.
    #[error("snapshot i/o failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file exists but its contents do not parse as the expected
    /// structure. Distinct from the absent-file case, which loads as an empty
    /// store.
    #[error("snapshot at {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing an in-memory structure for persistence failed.
    #[error("failed to encode snapshot")]
    Encode(#[source] serde_json::Error),
}
