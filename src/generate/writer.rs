//! Writes generated files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::generate::{GenerateError, GeneratedFile};

/// Write `files` under `dir`, creating directories as needed.
/// Returns the written paths in order.
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, GenerateError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &file.content).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    tracing::info!(directory = %dir.display(), files = written.len(), "Wrote generated files");
    Ok(written)
}
