use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use xc_interactive_cli::cli_args::Args;
use xc_interactive_cli::controller::{interactive_picker, PickerSettings};
use xc_interactive_core::config;
use xc_interactive_core::error::Result;
use xc_interactive_core::file_handling;
use xc_interactive_core::history::ShellHistory;

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let config = file_handling::get_config(&config_path)?;

    let settings = PickerSettings::from_config(&config)?;
    let directory = match &args.directory {
        Some(directory) => PathBuf::from(directory),
        None => env::current_dir()?,
    };
    let shell = config.shell(env::var("SHELL").ok());
    let history = ShellHistory::new(config.refresh_script());

    interactive_picker(&config.tasks, &directory, &shell, &settings, &history)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
