use crate::context::{Context, FOLDER_PATTERN};
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigToml {
    #[serde(default)]
    pub package: Option<PackageConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PackageConfig {
    #[serde(rename = "temp-root", default)]
    pub temp_root: Option<String>,

    #[serde(rename = "folder-prefix", default)]
    pub folder_prefix: Option<String>,
}

/// Resolved packaging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub temp_root: PathBuf,
    pub folder_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temp_root: std::env::temp_dir(),
            folder_prefix: FOLDER_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Load settings from a TOML file
    ///
    /// A relative `temp-root` is resolved against the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base_dir)
    }

    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let config_toml: ConfigToml = toml::from_str(content)?;
        let package = config_toml.package.unwrap_or_default();
        let defaults = Self::default();

        let temp_root = package
            .temp_root
            .map(|root| base_dir.join(root))
            .unwrap_or(defaults.temp_root);

        let folder_prefix = package.folder_prefix.unwrap_or(defaults.folder_prefix);
        Context::validate_folder_prefix(&folder_prefix)?;

        Ok(Config {
            temp_root,
            folder_prefix,
        })
    }

    pub fn into_context(self, verbose: bool) -> Context {
        Context::new(self.temp_root, verbose).with_folder_prefix(self.folder_prefix)
    }
}
