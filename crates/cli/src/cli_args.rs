//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the `xci` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use xc_interactive_cli::cli_args::Args;
///
/// let args = Args::parse_from(["xci", "--config", "/tmp/config.yml"]);
/// assert_eq!(args.config_path.as_deref(), Some("/tmp/config.yml"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the configuration YAML.
    ///
    /// If not provided, defaults to `~/.xc-interactive/config.yml`.
    #[arg(long = "config", short = 'c')]
    pub config_path: Option<String>,

    /// Directory tasks are run in.
    ///
    /// If not provided, defaults to the current directory.
    #[arg(long, short = 'd')]
    pub directory: Option<String>,
}
