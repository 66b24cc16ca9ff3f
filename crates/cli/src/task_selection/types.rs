//! Type definitions for task selection and UI state.
//!
//! This module defines the list entries shown by the picker, the events it
//! reacts to and the outcome a session resolves to.

use xc_interactive_core::task::Task;

/// Rows of the screen not available to list entries: blank line, title,
/// blank line above the list, blank line below it, filter line, help line.
pub const CHROME_ROWS: u16 = 6;

/// Anything the picker can list.
pub trait ListEntry {
    /// Text rendered for the entry, `None` if there is nothing to show.
    fn label(&self) -> Option<&str>;

    /// Text the filter is matched against.
    fn filter_value(&self) -> &str;
}

/// A task as shown in the picker.
///
/// Borrows the task it represents, so choosing an item hands back the
/// caller's own record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    task: &'a Task,
}

impl<'a> ListItem<'a> {
    #[must_use]
    pub fn new(task: &'a Task) -> Self {
        Self { task }
    }

    #[must_use]
    pub fn task(&self) -> &'a Task {
        self.task
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.task.name
    }
}

impl ListEntry for ListItem<'_> {
    fn label(&self) -> Option<&str> {
        let name = self.name();
        (!name.is_empty()).then_some(name)
    }

    fn filter_value(&self) -> &str {
        self.name()
    }
}

/// How a selection session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Chosen(&'a Task),
    Cancelled,
}

/// Where the selection state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Browsing,
    Filtering,
    Terminated,
}

/// Input the selection state machine reacts to, independent of the terminal
/// library it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Input(char),
    Backspace,
    Enter,
    Cancel,
    /// New terminal size in columns and rows.
    Resize { width: u16, height: u16 },
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the task list when there are more tasks
/// than can fit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub offset: usize,
    /// Number of list rows
    pub height: u16,
    pub width: u16,
}

impl ViewportState {
    /// Viewport for a terminal of the given size. At least one list row is
    /// always kept, so the highlighted task stays on screen.
    #[must_use]
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self {
            offset: 0,
            height: height.saturating_sub(CHROME_ROWS).max(1),
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_borrows_task() {
        let task = Task::new("build", &["cargo build"]);
        let item = ListItem::new(&task);
        assert!(std::ptr::eq(item.task(), &task));
        assert_eq!(item.name(), "build");
        assert_eq!(item.filter_value(), "build");
        assert_eq!(item.label(), Some("build"));
    }

    #[test]
    fn test_list_item_without_name_has_no_label() {
        let task = Task::new("", &[]);
        assert_eq!(ListItem::new(&task).label(), None);
    }

    #[test]
    fn test_viewport_for_terminal() {
        let viewport = ViewportState::for_terminal(80, 24);
        assert_eq!(viewport.offset, 0);
        assert_eq!(viewport.width, 80);
        assert_eq!(viewport.height, 24 - CHROME_ROWS);
    }

    #[test]
    fn test_viewport_for_tiny_terminal() {
        assert_eq!(ViewportState::for_terminal(10, 3).height, 1);
        assert_eq!(ViewportState::for_terminal(10, CHROME_ROWS).height, 1);
        assert_eq!(ViewportState::for_terminal(10, CHROME_ROWS + 1).height, 1);
    }
}
