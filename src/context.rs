use crate::error::Error;
use crate::result::Result;
use std::path::PathBuf;

/// Prefix of the per-package temporary directory
pub const FOLDER_PATTERN: &str = "dynatrace_extension";

/// Context passed to package operations containing the filesystem configuration
#[derive(Debug, Clone)]
pub struct Context {
    /// Enable verbose output (show packaging details)
    pub verbose: bool,

    /// Directory under which package folders are created
    pub temp_root: PathBuf,

    /// Prefix of each package folder name
    pub folder_prefix: String,
}

impl Context {
    pub fn new(temp_root: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            temp_root,
            folder_prefix: FOLDER_PATTERN.to_string(),
        }
    }

    pub fn with_folder_prefix<T: Into<String>>(mut self, prefix: T) -> Self {
        self.folder_prefix = prefix.into();
        self
    }

    /// The folder prefix must keep package folders directly under `temp_root`
    pub fn validate_folder_prefix(prefix: &str) -> Result<()> {
        if prefix.contains(['/', '\\']) || prefix.chars().any(char::is_control) {
            return Err(Error::InvalidConfig(format!(
                "folder-prefix `{prefix}` must not contain path separators or control characters"
            )));
        }
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(std::env::temp_dir(), false)
    }
}
