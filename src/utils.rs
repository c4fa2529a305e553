use extpack::{Config, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Build the packaging context from an optional settings file and CLI overrides
pub fn load_context(config: Option<&Path>, temp_dir: Option<PathBuf>, verbose: bool) -> Result<Context> {
    let mut config = match config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(temp_dir) = temp_dir {
        config.temp_root = temp_dir;
    }

    Ok(config.into_context(verbose))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Final destination for a file: inside `output` if it is a directory, `output` itself otherwise
pub fn resolve_output(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

/// Copy a file, creating the destination's parent directories
pub fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    ensure_parent(destination)?;
    fs::copy(source, destination)?;
    Ok(())
}

/// Write text to a file, creating its parent directories
pub fn write_file(destination: &Path, content: &str) -> Result<()> {
    ensure_parent(destination)?;
    fs::write(destination, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_output_into_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_output(dir.path(), "myext.zip"),
            dir.path().join("myext.zip")
        );
    }

    #[test]
    fn test_resolve_output_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("renamed.zip");
        assert_eq!(resolve_output(&target, "myext.zip"), target);
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.zip");
        fs::write(&source, b"zip").unwrap();
        let destination = dir.path().join("dist/nested/out.zip");

        copy_file(&source, &destination).unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"zip");
    }

    #[test]
    fn test_temp_dir_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("extpack.toml");
        fs::write(
            &config,
            "[package]\ntemp-root = \"/from/config\"\nfolder-prefix = \"cfg\"\n",
        )
        .unwrap();

        let ctx = load_context(Some(&config), Some(PathBuf::from("/from/flag")), false).unwrap();

        assert_eq!(ctx.temp_root, PathBuf::from("/from/flag"));
        assert_eq!(ctx.folder_prefix, "cfg");
    }

    #[test]
    fn test_defaults_without_config() {
        let ctx = load_context(None, None, true).unwrap();
        assert_eq!(ctx.folder_prefix, extpack::FOLDER_PATTERN);
        assert_eq!(ctx.temp_root, std::env::temp_dir());
        assert!(ctx.verbose);
    }
}
