//! JSON files on disk
//!
//! Reads expense lists and settings. Writes go through a sibling temp file
//! that is renamed over the target, so a failed write leaves the previous
//! contents in place.

use std::ffi::OsString;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{SpendviewError, SpendviewResult};

fn storage_error(action: &str, path: &Path, err: impl Display) -> SpendviewError {
    SpendviewError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a JSON document, or `None` if the file does not exist
pub fn read_json_optional<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> SpendviewResult<Option<T>> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| storage_error("parse", path, e))
}

/// Read an expense document that must exist
pub fn read_json_required<T: DeserializeOwned>(path: impl AsRef<Path>) -> SpendviewResult<T> {
    let path = path.as_ref();
    read_json_optional(path)?
        .ok_or_else(|| SpendviewError::expense_file_not_found(path.display().to_string()))
}

/// Replace `path` with the pretty-printed JSON of `data`
///
/// Missing parent directories are created.
pub fn write_json_atomic<T: Serialize>(path: impl AsRef<Path>, data: &T) -> SpendviewResult<()> {
    let path = path.as_ref();

    let mut contents =
        serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;
    contents.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    if let Err(e) = write_synced(&temp_path, &contents).and_then(|()| fs::rename(&temp_path, path))
    {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", path, e));
    }

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// `<name>.tmp` next to the target; rename is only atomic within a directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
