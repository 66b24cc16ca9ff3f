//! Configuration for xc-interactive.
//!
//! This module defines the YAML configuration structure and provides functions
//! for resolving configuration file paths and expanding `~` in paths.

use serde::Deserialize;

use crate::task::Task;

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.xc-interactive/config.yml";
/// Default path for the zsh history refresh script
const DEFAULT_REFRESH_SCRIPT_PATH: &str = "~/.xc-interactive/refresh_history.zsh";

/// Default shell to use for task execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Default template for the command line recorded in shell history
pub const DEFAULT_HISTORY_COMMAND: &str = "xc {task}";

/// What to do when the task ran but its history entry could not be written.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFailurePolicy {
    /// Log a warning and report the run as successful.
    #[default]
    Warn,
    /// Report the history failure as the result of the whole session.
    Fail,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Picker styling. Every field is optional and falls back to the built-in
/// look.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDefinition {
    /// Spaces before the label of a row that is not highlighted
    pub indent: Option<u16>,
    /// Spaces before the `> ` marker of the highlighted row
    pub selected_indent: Option<u16>,
    /// Spaces before the title
    pub title_margin: Option<u16>,
    pub highlight_color: Option<ColorDefinition>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub shell: Option<String>,
    pub history_command: Option<String>,
    pub refresh_script: Option<String>,
    #[serde(default)]
    pub history_failure: HistoryFailurePolicy,
    pub theme: Option<ThemeDefinition>,
}

impl Config {
    /// The shell tasks run with: configured, then `$SHELL`, then [`DEFAULT_SHELL`].
    #[must_use]
    pub fn shell(&self, environment_shell: Option<String>) -> String {
        self.shell
            .clone()
            .or(environment_shell)
            .unwrap_or_else(|| DEFAULT_SHELL.to_string())
    }

    #[must_use]
    pub fn history_command(&self) -> &str {
        self.history_command
            .as_deref()
            .unwrap_or(DEFAULT_HISTORY_COMMAND)
    }

    /// The refresh script path with `~` expanded.
    #[must_use]
    pub fn refresh_script(&self) -> String {
        let path = self
            .refresh_script
            .as_deref()
            .unwrap_or(DEFAULT_REFRESH_SCRIPT_PATH);

        shellexpand::tilde(path).to_string()
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use xc_interactive_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}
