use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid extension archive: {0}")]
    ArchiveFormat(#[source] zip::result::ZipError),

    #[error("Archive does not contain `{name}`")]
    EntryNotFound { name: String },

    #[error("Failed to read archive entry: {0}")]
    Read(#[source] std::io::Error),

    #[error("Invalid extension payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid extension name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised by the zip writer are all filesystem-level failures
/// from the caller's point of view.
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::Io(std::io::Error::other(other)),
        }
    }
}
