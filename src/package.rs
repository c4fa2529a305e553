use crate::result::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A packaged extension archive living in its own temporary folder
///
/// The folder is owned by the handle and stays on disk until
/// [`dispose`](Self::dispose) is called. Dropping the handle does not remove it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedExtension {
    file_path: PathBuf,
}

impl PackagedExtension {
    pub(crate) fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Absolute path of the zip file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Folder holding the zip file, removed on disposal
    pub fn directory(&self) -> Option<&Path> {
        self.file_path.parent()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_path.file_name().and_then(|f| f.to_str())
    }

    /// Remove the package folder and everything in it
    ///
    /// A folder that is already gone counts as success.
    pub fn try_dispose(&self) -> Result<()> {
        let Some(directory) = self.directory() else {
            return Ok(());
        };

        match fs::remove_dir_all(directory) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Best-effort removal of the package folder; failures are ignored
    pub fn dispose(&self) {
        let _ = self.try_dispose();
    }
}
