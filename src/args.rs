use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Package a `plugin.json` payload file into an extension archive
    Pack {
        payload: PathBuf,
        output: Option<PathBuf>,
    },

    /// Extract the `plugin.json` payload from an extension archive
    Unpack {
        archive: PathBuf,
        output: Option<PathBuf>,
    },
}

/// Command-line arguments for the extpack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to a TOML settings file
    pub config: Option<PathBuf>,

    /// Directory under which package folders are created
    pub temp_dir: Option<PathBuf>,

    pub action: Action,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let action = match matches.subcommand() {
            Some(("pack", sub)) => Action::Pack {
                payload: path_arg(sub, "payload").unwrap_or_default(),
                output: path_arg(sub, "output"),
            },
            Some(("unpack", sub)) => Action::Unpack {
                archive: path_arg(sub, "archive").unwrap_or_default(),
                output: path_arg(sub, "output"),
            },
            _ => unreachable!("subcommand is required"),
        };

        Self {
            verbose: matches.get_flag("verbose"),
            config: path_arg(matches, "config"),
            temp_dir: path_arg(matches, "temp-dir"),
            action,
        }
    }
}

fn path_arg(matches: &ArgMatches, id: &str) -> Option<PathBuf> {
    matches.get_one::<String>(id).map(PathBuf::from)
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("PATH")
        .help(help)
}

fn command() -> Command {
    Command::new("extpack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Package and unpack single-descriptor extension archives")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Path to a TOML settings file"),
        )
        .arg(
            Arg::new("temp-dir")
                .long("temp-dir")
                .value_name("DIR")
                .env("EXTPACK_TEMP_DIR")
                .global(true)
                .help("Directory under which package folders are created"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable verbose output"),
        )
        .subcommand(
            Command::new("pack")
                .about("Package a plugin.json payload into an extension archive")
                .arg(
                    Arg::new("payload")
                        .value_name("PAYLOAD_FILE")
                        .required(true)
                        .help("JSON descriptor to package"),
                )
                .arg(output_arg(
                    "Copy the archive to this file or directory and remove the temporary package",
                )),
        )
        .subcommand(
            Command::new("unpack")
                .about("Print the plugin.json payload of an extension archive")
                .arg(
                    Arg::new("archive")
                        .value_name("ARCHIVE")
                        .required(true)
                        .help("Extension archive (.zip) to read"),
                )
                .arg(output_arg("Write the payload to this file instead of stdout")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::from_matches(&command().try_get_matches_from(argv).unwrap())
    }

    #[test]
    fn test_pack() {
        let args = parse(&["extpack", "pack", "plugin.json", "-o", "dist"]);
        assert_eq!(
            args.action,
            Action::Pack {
                payload: PathBuf::from("plugin.json"),
                output: Some(PathBuf::from("dist")),
            }
        );
        assert!(!args.verbose);
    }

    #[test]
    fn test_unpack_with_global_flags() {
        let args = parse(&[
            "extpack",
            "unpack",
            "myext.zip",
            "--verbose",
            "--temp-dir",
            "/tmp/work",
        ]);
        assert_eq!(
            args.action,
            Action::Unpack {
                archive: PathBuf::from("myext.zip"),
                output: None,
            }
        );
        assert!(args.verbose);
        assert_eq!(args.temp_dir, Some(PathBuf::from("/tmp/work")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(command().try_get_matches_from(["extpack"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        command().debug_assert();
    }
}
