//! Shell history synchronization.
//!
//! After a task picked interactively has run, the equivalent command line is
//! appended to the user's shell history so the next up-arrow replays it.
//! Bash gets plain `command` lines; zsh gets its extended
//! `: <epoch>:0;command` lines followed by a refresh step so an already
//! running session can pick the new entry up.

use std::env;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};

use crate::error::{Error, Result};

/// Shells whose history files we know how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFamily {
    Bash,
    Zsh,
}

impl ShellFamily {
    /// Detects the family from a shell identifier such as the `SHELL`
    /// variable. Matching is a case-sensitive substring match, bash first.
    #[must_use]
    pub fn detect(shell: &str) -> Option<Self> {
        if shell.contains("bash") {
            Some(Self::Bash)
        } else if shell.contains("zsh") {
            Some(Self::Zsh)
        } else {
            None
        }
    }

    #[must_use]
    pub fn history_file_name(self) -> &'static str {
        match self {
            Self::Bash => ".bash_history",
            Self::Zsh => ".zsh_history",
        }
    }
}

/// One history line. Zsh records carry the creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord<'a> {
    pub command: &'a str,
    pub timestamp: Option<u64>,
}

impl<'a> HistoryRecord<'a> {
    #[must_use]
    pub fn new(family: ShellFamily, command: &'a str, timestamp: u64) -> Self {
        let timestamp = match family {
            ShellFamily::Bash => None,
            ShellFamily::Zsh => Some(timestamp),
        };

        Self { command, timestamp }
    }
}

impl Display for HistoryRecord<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.timestamp {
            Some(timestamp) => writeln!(formatter, ": {}:0;{}", timestamp, self.command),
            None => writeln!(formatter, "{}", self.command),
        }
    }
}

/// Makes a freshly appended entry visible to a running shell.
pub trait RefreshStep {
    /// # Errors
    ///
    /// Returns an error if the refresh could not be performed.
    fn refresh(&self) -> Result<()>;
}

/// Refreshes by running an external script with no arguments.
///
/// Blocks until the script exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct RefreshScript {
    path: PathBuf,
}

impl RefreshScript {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RefreshStep for RefreshScript {
    fn refresh(&self) -> Result<()> {
        let script = self.path.display().to_string();
        debug!("Running history refresh script `{}`", script);

        let status = Command::new(&self.path)
            .status()
            .map_err(|original| Error::RefreshStep {
                script: script.clone(),
                original,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::RefreshStepExit(script))
        }
    }
}

/// Somewhere a completed command line can be recorded.
pub trait HistorySink {
    /// # Errors
    ///
    /// Returns an error if the command could not be recorded.
    fn append(&self, command: &str) -> Result<()>;
}

/// Appends `line` to `history_file`, creating it if needed.
///
/// The file is opened in append mode and written once; the handle is closed
/// when this function returns, whether or not the write succeeded.
///
/// # Errors
///
/// Returns [`Error::HistoryOpen`] or [`Error::HistoryWrite`].
pub fn append_to_history_file(history_file: &Path, line: &str) -> Result<()> {
    let path = history_file.display().to_string();

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(history_file)
        .map_err(|original| Error::HistoryOpen {
            path: path.clone(),
            original,
        })?;

    file.write_all(line.as_bytes())
        .map_err(|original| Error::HistoryWrite { path, original })
}

fn unix_timestamp() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .map_err(Error::ClockBeforeEpoch)
}

/// Writes commands to the history file of the detected shell.
#[derive(Debug)]
pub struct HistorySynchronizer<R> {
    home_dir: PathBuf,
    shell: Option<String>,
    refresh: R,
}

impl<R: RefreshStep> HistorySynchronizer<R> {
    pub fn new<P: AsRef<Path>>(home_dir: P, shell: Option<String>, refresh: R) -> Self {
        Self {
            home_dir: home_dir.as_ref().to_path_buf(),
            shell,
            refresh,
        }
    }

    /// Builds a synchronizer for the current user and `SHELL`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirectoryNotFound`] if the home directory cannot
    /// be resolved.
    pub fn from_env(refresh: R) -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
        Ok(Self::new(home_dir, env::var("SHELL").ok(), refresh))
    }

    /// The history file commands go to, if the shell is recognized.
    #[must_use]
    pub fn history_file(&self) -> Option<PathBuf> {
        self.family()
            .map(|family| self.home_dir.join(family.history_file_name()))
    }

    fn family(&self) -> Option<ShellFamily> {
        self.shell.as_deref().and_then(ShellFamily::detect)
    }

    /// Records `command` with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockBeforeEpoch`] if the system clock cannot be
    /// expressed as a Unix timestamp, otherwise see
    /// [`HistorySynchronizer::sync_at`].
    pub fn sync(&self, command: &str) -> Result<()> {
        self.sync_at(command, unix_timestamp()?)
    }

    /// Records `command` as if entered at `timestamp` (seconds since epoch).
    ///
    /// An unrecognized or missing shell is not an error; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultilineCommand`] if `command` contains a line
    /// break, an error if the history file cannot be opened or written, or
    /// if the zsh refresh step fails. The line is already written in the
    /// latter case.
    pub fn sync_at(&self, command: &str, timestamp: u64) -> Result<()> {
        // One entry per line in both formats
        if command.contains(['\n', '\r']) {
            return Err(Error::MultilineCommand(command.to_string()));
        }

        let Some(family) = self.family() else {
            info!(
                "Shell {:?} is neither bash nor zsh, not updating history",
                self.shell
            );
            return Ok(());
        };

        let history_file = self.home_dir.join(family.history_file_name());
        debug!(
            "Appending `{}` to {:?} history at `{}`",
            command,
            family,
            history_file.display()
        );

        let record = HistoryRecord::new(family, command, timestamp);
        append_to_history_file(&history_file, &record.to_string())?;

        match family {
            ShellFamily::Bash => Ok(()),
            ShellFamily::Zsh => self.refresh.refresh(),
        }
    }
}

impl<R: RefreshStep> HistorySink for HistorySynchronizer<R> {
    fn append(&self, command: &str) -> Result<()> {
        self.sync(command)
    }
}

/// History sink for the running process: resolves the home directory and
/// `SHELL` at the time of each append.
#[derive(Debug, Clone)]
pub struct ShellHistory {
    refresh_script: PathBuf,
}

impl ShellHistory {
    pub fn new<P: AsRef<Path>>(refresh_script: P) -> Self {
        Self {
            refresh_script: refresh_script.as_ref().to_path_buf(),
        }
    }
}

impl HistorySink for ShellHistory {
    fn append(&self, command: &str) -> Result<()> {
        HistorySynchronizer::from_env(RefreshScript::new(&self.refresh_script))?.sync(command)
    }
}
