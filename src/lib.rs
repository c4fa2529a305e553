//! Extension package archives.
//!
//! An extension package is a zip file holding a single `plugin.json`
//! descriptor. [`create_package`] builds one inside a fresh temporary folder
//! and returns a [`PackagedExtension`] handle that owns the folder until
//! [`PackagedExtension::dispose`] is called; [`read_payload`] extracts the
//! descriptor back out of archive bytes.
//!
//! ```no_run
//! use extpack::{Context, create_package, read_payload};
//!
//! # fn main() -> extpack::Result<()> {
//! let ctx = Context::default();
//! let package = create_package(&ctx, r#"{"name": "myext"}"#)?;
//!
//! let bytes = std::fs::read(package.file_path())?;
//! assert_eq!(read_payload(&bytes)?.payload, r#"{"name": "myext"}"#);
//!
//! package.dispose();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod metadata;
pub mod package;
pub mod reader;
pub mod result;
pub mod writer;

pub use config::Config;
pub use context::{Context, FOLDER_PATTERN};
pub use error::Error;
pub use metadata::{ExtensionMetadata, ExtensionPayload, INNER_FILE_NAME};
pub use package::PackagedExtension;
pub use reader::read_payload;
pub use result::Result;
pub use writer::create_package;
