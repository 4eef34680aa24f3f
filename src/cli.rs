//! Command-line interface implementation for ggen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::BASE_PATH_ENV;

/// Command-line arguments structure for ggen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ggen: generate files and directories from your own commands",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration root holding the config index and templates [default: ./.gen]
    #[arg(long, value_name = "PATH", env = BASE_PATH_ENV)]
    pub gen_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a starter configuration and template, then refresh
    Init {
        /// Overwrite an existing configuration without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Rebuild the configuration index from the *.config.yaml fragments
    Refresh,

    /// Run a command defined in the configuration, e.g. `ggen module --module_name auth`
    #[command(external_subcommand)]
    Run(Vec<String>),
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no command is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                // Printing help only fails when stdout is gone; exiting is all that is left.
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
