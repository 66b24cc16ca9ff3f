//! Reading the configuration file from disk.

use std::fs::File;

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads the configuration file.
///
/// Task names are not validated here; that happens when a runner is built
/// from them.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
///
/// # Examples
///
/// ```no_run
/// use xc_interactive_core::file_handling::get_config;
///
/// let config = get_config("/home/me/.xc-interactive/config.yml")?;
/// println!("Loaded {} tasks", config.tasks.len());
/// # Ok::<(), xc_interactive_core::error::Error>(())
/// ```
pub fn get_config(config_path: &str) -> Result<Config> {
    let config_reader = get_reader("config", config_path)?;

    let config: Config = serde_yaml::from_reader(config_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    debug!("Loaded {} tasks from `{}`", config.tasks.len(), config_path);

    Ok(config)
}
