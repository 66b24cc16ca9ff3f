//! Interactive task selection.
//!
//! This module provides the terminal-based picker: a selection state machine
//! over the task list, the render delegate that draws each row, and the
//! terminal session that feeds key presses into the state machine.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys, Page Up/Down and Home/End to move the highlight
//! - Typing to filter tasks by name (Backspace removes a character)
//! - Enter to run the highlighted task
//! - 'q', Escape or Ctrl+C to quit without running anything

pub mod colors;
pub mod delegate;
pub mod input;
pub mod state;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use delegate::{ItemDelegate, RenderDelegate, Theme};
pub use state::SelectionState;
pub use types::{ListEntry, ListItem, Outcome, Phase, PickerEvent, ViewportState};
pub use ui::{drive, prompt_for_task, EventSource};
