use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not establish the terminal session: {}", _0)]
    TerminalSession(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("xc parse error: {}", .source)]
    Catalog { source: Box<Error> },

    #[error("Invalid task name: name may not be empty")]
    EmptyTaskName,

    #[error("Invalid task name `{}`: name may not contain spaces", .0)]
    TaskNameWithSpace(String),

    #[error("Found a non-unique task name: `{}`", .0)]
    DuplicateTaskName(String),

    #[error("Task `{}` was not found", .0)]
    TaskNotFound(String),

    #[error("xc: task `{}` failed: {}", .task, .source)]
    TaskFailed { task: String, source: Box<Error> },

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("The sub process exited with non-success code.")]
    SubProcessExit,

    #[error("Could not resolve the home directory of the current user")]
    HomeDirectoryNotFound,

    #[error("System clock is set before the Unix epoch: {0}")]
    ClockBeforeEpoch(std::time::SystemTimeError),

    #[error("History entry `{0}` spans more than one line")]
    MultilineCommand(String),

    #[error("Error opening history file at `{}`: {}", .path, .original)]
    HistoryOpen {
        path: String,
        original: std::io::Error,
    },

    #[error("Error writing history file at `{}`: {}", .path, .original)]
    HistoryWrite {
        path: String,
        original: std::io::Error,
    },

    #[error("Error running history refresh script `{}`: {}", .script, .original)]
    RefreshStep {
        script: String,
        original: std::io::Error,
    },

    #[error("History refresh script `{}` exited with non-success code.", .0)]
    RefreshStepExit(String),

    #[error("xc: could not update shell history: {}", .source)]
    HistorySync { source: Box<Error> },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("Error parsing placeholder string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error placeholder template string: {}", .0)]
    Render(#[from] RenderError),
}

impl Error {
    pub fn catalog(source: Error) -> Self {
        Self::Catalog {
            source: Box::new(source),
        }
    }

    pub fn task_failed(task: &str, source: Error) -> Self {
        Self::TaskFailed {
            task: task.to_string(),
            source: Box::new(source),
        }
    }

    pub fn history_sync(source: Error) -> Self {
        Self::HistorySync {
            source: Box::new(source),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
