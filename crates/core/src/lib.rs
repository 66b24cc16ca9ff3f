//! xc-interactive Core Library
//!
//! This crate provides the non-interactive half of xc-interactive: the task
//! records the picker chooses from, running a chosen task, and recording the
//! equivalent command line in the user's shell history.
//!
//! # Key Features
//!
//! - **Tasks**: Named units of work with a shell script body
//! - **Runner**: Execute a task by name through a shell
//! - **Shell History**: Append bash or zsh history entries so up-arrow replays a run
//! - **Configuration**: YAML configuration with `~` expansion
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Recording a command in the current user's shell history:
//!
//! ```no_run
//! use xc_interactive_core::history::{HistorySink, ShellHistory};
//!
//! let history = ShellHistory::new("/home/me/.xc-interactive/refresh_history.zsh");
//! history.append("xc build")?;
//! # Ok::<(), xc_interactive_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod history;
pub mod interpolation;
pub mod runner;
pub mod task;
