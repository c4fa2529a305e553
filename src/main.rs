mod args;
mod utils;

use args::{Action, Args};
use extpack::{Context, Result, create_package, read_payload};
use std::fs;
use std::path::Path;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        config,
        temp_dir,
        action,
    } = Args::parse();

    let ctx = utils::load_context(config.as_deref(), temp_dir, verbose)?;

    match action {
        Action::Pack { payload, output } => pack(&ctx, &payload, output.as_deref()),
        Action::Unpack { archive, output } => unpack(&ctx, &archive, output.as_deref()),
    }
}

fn pack(ctx: &Context, payload_path: &Path, output: Option<&Path>) -> Result<()> {
    cliclack::intro("extpack")?;

    let payload = fs::read_to_string(payload_path)?;
    if ctx.verbose {
        cliclack::log::remark(format!(
            "Read {} bytes from {}",
            payload.len(),
            payload_path.display()
        ))?;
    }

    let package = {
        let spinner = cliclack::spinner();
        spinner.start("Packaging extension...");
        match create_package(ctx, &payload) {
            Ok(package) => {
                spinner.stop(format!(
                    "Packaged {}",
                    package.file_name().unwrap_or_default()
                ));
                package
            }
            Err(e) => {
                spinner.error("Failed to package extension");
                return Err(e);
            }
        }
    };

    if ctx.verbose {
        cliclack::log::remark(format!("Package path: {}", package.file_path().display()))?;
    }

    let Some(output) = output else {
        cliclack::outro(format!(
            "Extension archive created: {}",
            package.file_path().display()
        ))?;
        return Ok(());
    };

    let destination = utils::resolve_output(output, package.file_name().unwrap_or_default());
    let copied = utils::copy_file(package.file_path(), &destination);
    package.dispose();
    copied?;

    if ctx.verbose {
        cliclack::log::remark("Removed temporary package folder")?;
    }

    cliclack::outro(format!(
        "Extension archive written to {}",
        destination.display()
    ))?;
    Ok(())
}

fn unpack(ctx: &Context, archive_path: &Path, output: Option<&Path>) -> Result<()> {
    let bytes = fs::read(archive_path)?;
    let extracted = read_payload(&bytes)?;

    match output {
        // stdout carries only the payload
        None => print!("{}", extracted.payload),
        Some(output) => {
            cliclack::intro("extpack")?;
            if ctx.verbose {
                cliclack::log::remark(format!(
                    "Extracted {} bytes from {}",
                    extracted.payload.len(),
                    archive_path.display()
                ))?;
            }
            let destination = utils::resolve_output(output, extpack::INNER_FILE_NAME);
            utils::write_file(&destination, &extracted.payload)?;
            cliclack::outro(format!("Payload written to {}", destination.display()))?;
        }
    }

    Ok(())
}
