//! Task execution.
//!
//! The picker only knows tasks by name; a [`Runner`] turns a name (and optional
//! arguments) into an actual execution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use itertools::Itertools;
use log::{debug, info};

use crate::error::Error::{DuplicateTaskName, EmptyTaskName, TaskNameWithSpace, TaskNotFound};
use crate::error::Result;
use crate::execution::execute_command;
use crate::task::Task;

/// Executes tasks by name.
pub trait Runner {
    /// Runs the task called `task_name`, passing `args` through when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the task is unknown or its execution fails.
    fn run(&self, task_name: &str, args: Option<&[String]>) -> Result<()>;
}

/// Runs task scripts through a shell, one process per task.
#[derive(Debug)]
pub struct ShellRunner {
    tasks: Vec<Task>,
    directory: PathBuf,
    shell: String,
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyTaskName);
    }

    // The name ends up as a single shell word in the history entry
    if name.chars().any(char::is_whitespace) {
        return Err(TaskNameWithSpace(name.to_string()));
    }

    Ok(())
}

fn validate_tasks(tasks: &[Task]) -> Result<()> {
    let mut names = HashSet::new();

    for task in tasks {
        validate_name(&task.name)?;

        if !names.insert(task.name.as_str()) {
            return Err(DuplicateTaskName(task.name.clone()));
        }
    }

    Ok(())
}

impl ShellRunner {
    /// Creates a runner over `tasks`, executed relative to `directory`.
    ///
    /// # Errors
    ///
    /// Returns an error if a task name is empty, contains whitespace or is
    /// not unique.
    pub fn new<P: AsRef<Path>>(tasks: &[Task], directory: P, shell: &str) -> Result<Self> {
        validate_tasks(tasks)?;

        Ok(Self {
            tasks: tasks.to_vec(),
            directory: directory.as_ref().to_path_buf(),
            shell: shell.to_string(),
        })
    }

    fn find(&self, task_name: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|task| task.name == task_name)
            .ok_or_else(|| TaskNotFound(task_name.to_string()))
    }

    fn working_directory(&self, task: &Task) -> PathBuf {
        match &task.directory {
            Some(directory) => self.directory.join(&*shellexpand::tilde(directory)),
            None => self.directory.clone(),
        }
    }
}

impl Runner for ShellRunner {
    fn run(&self, task_name: &str, args: Option<&[String]>) -> Result<()> {
        let task = self.find(task_name)?;

        if task.script.is_empty() {
            info!("Task `{}` has no script, nothing to run", task.name);
            return Ok(());
        }

        let script = task.script.iter().join("\n");
        let working_directory = self.working_directory(task);
        debug!(
            "Running `{}` in `{}` with {}",
            task.name,
            working_directory.display(),
            self.shell
        );

        // `$0` is the task name so scripts can refer to `$@` for the arguments
        let mut command = Command::new(&self.shell);
        command
            .current_dir(working_directory)
            .arg("-c")
            .arg(script)
            .arg(&task.name)
            .args(args.unwrap_or_default());

        execute_command(command, task.environment.as_ref())
    }
}
