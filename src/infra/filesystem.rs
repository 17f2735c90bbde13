//! Filesystem operations
//!
//! Handles directory creation and raw byte concatenation.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write `dest` as the ordered concatenation of every input's raw bytes.
///
/// Inputs are streamed through `io::copy`'s fixed-size buffer, so peak
/// memory stays bounded regardless of object sizes. The destination is
/// truncated first; an empty input list produces an empty file.
pub fn concat_files(inputs: &[PathBuf], dest: &Path) -> Result<(), FilesystemError> {
    let mut out = File::create(dest).map_err(|e| FilesystemError::WriteFile {
        path: dest.to_path_buf(),
        error: e.to_string(),
    })?;

    for input in inputs {
        let mut reader = File::open(input).map_err(|e| FilesystemError::ReadFile {
            path: input.clone(),
            error: e.to_string(),
        })?;
        std::io::copy(&mut reader, &mut out).map_err(|e| FilesystemError::WriteFile {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;
    }

    Ok(())
}
