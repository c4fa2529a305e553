use crate::context::Context;
use crate::metadata::{ExtensionMetadata, INNER_FILE_NAME};
use crate::package::PackagedExtension;
use crate::result::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Package a descriptor payload into `<temp root>/<prefix>XXXXXX/<name>.zip`
///
/// The payload is stored verbatim as the archive's only entry, `plugin.json`.
/// If anything fails once the package folder exists, the folder is removed
/// before the error is returned.
pub fn create_package(ctx: &Context, payload: &str) -> Result<PackagedExtension> {
    let metadata = ExtensionMetadata::parse(payload)?;
    let file_name = metadata.archive_file_name()?;
    Context::validate_folder_prefix(&ctx.folder_prefix)?;

    let temp_root = std::path::absolute(&ctx.temp_root)?;
    let zip_dir = tempfile::Builder::new()
        .prefix(&ctx.folder_prefix)
        .tempdir_in(&temp_root)?;

    // `zip_dir` deletes the folder on drop if this fails
    create_zip_file(&zip_dir.path().join(&file_name), payload)?;

    let zip_dir = zip_dir.keep();
    Ok(PackagedExtension::new(zip_dir.join(file_name)))
}

fn create_zip_file(output_path: &Path, payload: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    zip.start_file(INNER_FILE_NAME, SimpleFileOptions::default())?;
    zip.write_all(payload.as_bytes())?;

    zip.finish()?;
    Ok(())
}
