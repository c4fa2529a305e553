use crate::error::Error;
use crate::metadata::{ExtensionPayload, INNER_FILE_NAME};
use crate::result::Result;
use std::io::{Cursor, Read};
use zip::ZipArchive;
use zip::result::ZipError;

/// Extract the `plugin.json` descriptor from the bytes of an extension archive
pub fn read_payload(zip_package: &[u8]) -> Result<ExtensionPayload> {
    let mut archive = ZipArchive::new(Cursor::new(zip_package)).map_err(Error::ArchiveFormat)?;

    let mut plugin_file = match archive.by_name(INNER_FILE_NAME) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => {
            return Err(Error::EntryNotFound {
                name: INNER_FILE_NAME.to_string(),
            });
        }
        Err(ZipError::Io(e)) => return Err(Error::Read(e)),
        Err(e) => return Err(Error::Read(std::io::Error::other(e))),
    };

    // CRC mismatches and invalid UTF-8 both surface here
    let mut payload = String::new();
    plugin_file.read_to_string(&mut payload).map_err(Error::Read)?;

    Ok(ExtensionPayload { payload })
}
