//! Document and artifact I/O.

use std::{
    ffi::OsString,
    fs::{create_dir_all, read, remove_file, rename, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Read a documentation file as UTF-8, replacing invalid sequences.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes =
        read(path).with_context(|| format!("Failed to read document: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A generated artifact on disk.
///
/// Writes go to a sibling temporary file which is renamed over the target once
/// complete, so a failed run never leaves a truncated artifact behind.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary path used while writing.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Replace the artifact with `data`.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.ensure_parent_dir()?;
        let temp = self.temp_path();
        if let Err(e) = write(&temp, data) {
            let _ = remove_file(&temp);
            return Err(e).with_context(|| format!("Failed to write: {}", temp.display()));
        }
        rename(&temp, &self.path).with_context(|| {
            format!("Failed to move {} to {}", temp.display(), self.path.display())
        })
    }

    /// Create parent directory if it doesn't exist.
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}
