//! xc-interactive CLI Library
//!
//! This crate provides the interactive half of xc-interactive: pick a task
//! from a filterable list in the terminal, run it, and append the equivalent
//! `xc <task>` command line to the shell history so the next up-arrow replays
//! it without the picker.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`task_selection`]: Selection state machine, row rendering and the terminal session
//! - [`controller`]: Runs a picker session to completion and acts on the outcome
//!
//! # Examples
//!
//! ```bash
//! # Pick from the tasks in ~/.xc-interactive/config.yml
//! xci
//!
//! # Use another configuration and run tasks in another directory
//! xci --config ./tasks.yml --directory ~/src/project
//! ```

pub mod cli_args;
pub mod controller;
pub mod task_selection;
