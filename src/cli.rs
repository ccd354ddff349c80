//! Command-line interface implementation for collectkit.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_SEARCH_DEPTH;

/// Command-line arguments structure for collectkit.
#[derive(Parser, Debug)]
#[command(author, version, about = "collectkit: collect data files into a generated template", long_about = None)]
pub struct Args {
    /// Destination path within the build directory. Collected files are
    /// merged into a file in this path and configured extra files are
    /// copied here too.
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Source path to be searched, relative to the source root
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Test paths against this pattern (e.g. *.custom.json)
    #[arg(short, long)]
    pub test: Option<String>,

    /// Take record names from the containing directory instead of the file name
    #[arg(long)]
    pub name_from_dir: bool,

    /// Maximum search depth, 0 for unlimited
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub search_depth: usize,

    /// Do not print info
    #[arg(short = 'q', long)]
    pub silent: bool,

    /// Overwrite existing destination
    #[arg(short, long)]
    pub force: bool,

    /// Configuration file, or directory containing collect.yml
    #[arg(short, long, default_value = ".")]
    pub config: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(e) = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                {
                    eprintln!("{e}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
