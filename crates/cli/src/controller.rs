//! The picker session from start to finish: choose a task, run it, and record
//! the equivalent command line in shell history.

use std::io::{stderr, stdout, Write};
use std::path::Path;

use log::{info, warn};
use xc_interactive_core::config::{Config, HistoryFailurePolicy};
use xc_interactive_core::error::{Error, Result};
use xc_interactive_core::history::HistorySink;
use xc_interactive_core::interpolation::render_history_command;
use xc_interactive_core::runner::{Runner, ShellRunner};
use xc_interactive_core::task::Task;

use crate::task_selection::{prompt_for_task, Theme};

/// Everything the controller needs besides the tasks themselves.
#[derive(Debug, Clone)]
pub struct PickerSettings {
    pub theme: Theme,
    /// Template of the history entry, `{task}` is replaced by the task name
    pub history_command: String,
    pub history_failure: HistoryFailurePolicy,
}

impl PickerSettings {
    /// # Errors
    ///
    /// Returns an error if the configured theme is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            theme: Theme::from_definition(config.theme.as_ref())?,
            history_command: config.history_command().to_string(),
            history_failure: config.history_failure,
        })
    }
}

/// Lets the user pick one of `tasks`.
///
/// Returns `None` when the user cancels or there is nothing to pick from; an
/// empty list never opens a terminal session.
///
/// # Errors
///
/// Returns an error if the terminal session cannot be established or breaks
/// down while running.
pub fn run_picker<'a>(tasks: &'a [Task], theme: &Theme) -> Result<Option<&'a Task>> {
    if tasks.is_empty() {
        info!("No tasks to choose from");
        return Ok(None);
    }

    prompt_for_task(tasks, theme)
}

/// Runs the chosen task and records it in shell history.
///
/// The runner is only built once there is a task to run. History is only
/// written after the task succeeded; whether a history failure fails the
/// whole call depends on [`PickerSettings::history_failure`].
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the runner cannot be built,
/// [`Error::TaskFailed`] if the task fails, and [`Error::HistorySync`] for a
/// history failure under [`HistoryFailurePolicy::Fail`]. Under
/// [`HistoryFailurePolicy::Warn`] the failure is written to `err` instead.
pub fn run_choice<R, B, H, W, E>(
    chosen: Option<&Task>,
    build_runner: B,
    history: &H,
    settings: &PickerSettings,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    R: Runner,
    B: FnOnce() -> Result<R>,
    H: HistorySink,
    W: Write,
    E: Write,
{
    let Some(task) = chosen else {
        info!("No task chosen");
        return Ok(());
    };

    let runner = build_runner().map_err(Error::catalog)?;

    runner
        .run(&task.name, None)
        .map_err(|e| Error::task_failed(&task.name, e))?;

    writeln!(out, "Task name: {}", task.name)?;

    let recorded = render_history_command(&settings.history_command, &task.name)
        .and_then(|command| history.append(&command));

    match (recorded, settings.history_failure) {
        (Ok(()), _) => Ok(()),
        (Err(e), HistoryFailurePolicy::Warn) => {
            warn!("Task `{}` ran, but shell history was not updated: {}", task.name, e);
            writeln!(err, "xc: warning: shell history was not updated: {e}")?;
            Ok(())
        }
        (Err(e), HistoryFailurePolicy::Fail) => Err(Error::history_sync(e)),
    }
}

/// The whole interactive session against the real terminal, a
/// [`ShellRunner`] in `directory` and the given history sink.
///
/// # Errors
///
/// See [`run_picker`] and [`run_choice`].
pub fn interactive_picker<H: HistorySink>(
    tasks: &[Task],
    directory: &Path,
    shell: &str,
    settings: &PickerSettings,
    history: &H,
) -> Result<()> {
    let chosen = run_picker(tasks, &settings.theme)?;

    run_choice(
        chosen,
        || ShellRunner::new(tasks, directory, shell),
        history,
        settings,
        &mut stdout(),
        &mut stderr(),
    )
}
