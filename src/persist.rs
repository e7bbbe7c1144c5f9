use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Serialize `value` as a JSON snapshot at `path`, creating parent directories
/// as needed. The bytes go to a temporary sibling first and are renamed into
/// place, so a failure partway through never leaves a truncated snapshot where
/// a good one used to be.
pub fn write_snapshot<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    let bytes = serde_json::to_vec(value).map_err(Error::Encode)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, &bytes).map_err(|e| Error::Io {
        path: tmp.clone(),
        source: e,
    })?;
    fs::rename(&tmp, path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote snapshot");
    Ok(())
}

/// Deserialize a JSON snapshot from `path`. Returns `Ok(None)` when no file
/// exists there; a file that exists but does not parse is [`Error::Corrupt`].
pub fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    let value = serde_json::from_slice(&bytes).map_err(|e| Error::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(value))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
