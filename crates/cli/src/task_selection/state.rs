//! The selection state machine.
//!
//! Holds the list, the highlighted row, the filter text and the outcome of
//! one picker session. It performs no I/O: terminal events are translated to
//! [`PickerEvent`]s elsewhere and fed in through [`SelectionState::handle`].

use xc_interactive_core::task::Task;

use super::types::{ListEntry, ListItem, Outcome, Phase, PickerEvent, ViewportState};

#[derive(Debug, Clone)]
pub struct SelectionState<'a> {
    items: Vec<ListItem<'a>>,
    /// Indexes into `items` that match the filter, in list order
    visible: Vec<usize>,
    /// Position in `visible` of the highlighted row
    selected_index: usize,
    filter_text: String,
    viewport: ViewportState,
    outcome: Option<Outcome<'a>>,
}

impl<'a> SelectionState<'a> {
    #[must_use]
    pub fn new(tasks: &'a [Task], viewport: ViewportState) -> Self {
        Self {
            items: tasks.iter().map(ListItem::new).collect(),
            visible: (0..tasks.len()).collect(),
            selected_index: 0,
            filter_text: String::new(),
            viewport,
            outcome: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            Phase::Terminated
        } else if self.filter_text.is_empty() {
            Phase::Browsing
        } else {
            Phase::Filtering
        }
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome<'a>> {
        self.outcome
    }

    /// The chosen task, if the session ended with one.
    #[must_use]
    pub fn chosen(&self) -> Option<&'a Task> {
        match self.outcome {
            Some(Outcome::Chosen(task)) => Some(task),
            _ => None,
        }
    }

    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &ListItem<'a>> + '_ {
        self.visible.iter().map(|&i| &self.items[i])
    }

    /// Position of the highlighted row within the visible subset, `None` when
    /// nothing is visible.
    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        (self.selected_index < self.visible.len()).then_some(self.selected_index)
    }

    #[must_use]
    pub fn highlighted_item(&self) -> Option<&ListItem<'a>> {
        self.highlighted_index()
            .map(|index| &self.items[self.visible[index]])
    }

    /// The rows inside the viewport, each with whether it is highlighted.
    pub fn rows(&self) -> impl Iterator<Item = (&ListItem<'a>, bool)> + '_ {
        self.visible_items()
            .enumerate()
            .skip(self.viewport.offset)
            .take(self.viewport.height as usize)
            .map(|(i, item)| (item, i == self.selected_index))
    }

    /// Applies one event. Once an outcome is set every further event is
    /// ignored.
    pub fn handle(&mut self, event: PickerEvent) -> Option<Outcome<'a>> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        match event {
            PickerEvent::Up => self.move_up(1),
            PickerEvent::Down => self.move_down(1),
            PickerEvent::PageUp => self.move_up(self.page_size()),
            PickerEvent::PageDown => self.move_down(self.page_size()),
            PickerEvent::Home => self.move_up(self.visible.len()),
            PickerEvent::End => self.move_down(self.visible.len()),
            PickerEvent::Input(c) => {
                self.filter_text.push(c);
                self.apply_filter();
            }
            PickerEvent::Backspace => {
                if self.filter_text.pop().is_some() {
                    self.apply_filter();
                }
            }
            PickerEvent::Enter => {
                if let Some(item) = self.highlighted_item() {
                    self.outcome = Some(Outcome::Chosen(item.task()));
                }
            }
            PickerEvent::Cancel => self.outcome = Some(Outcome::Cancelled),
            PickerEvent::Resize { width, height } => {
                let resized = ViewportState::for_terminal(width, height);
                self.viewport.width = resized.width;
                self.viewport.height = resized.height;
                self.scroll_to_selection();
            }
        }

        self.outcome
    }

    fn page_size(&self) -> usize {
        usize::from(self.viewport.height.max(1))
    }

    fn move_up(&mut self, rows: usize) {
        self.selected_index = self.selected_index.saturating_sub(rows);
        self.scroll_to_selection();
    }

    fn move_down(&mut self, rows: usize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected_index = self.selected_index.saturating_add(rows).min(last);
        self.scroll_to_selection();
    }

    fn apply_filter(&mut self) {
        let filter_text = &self.filter_text;
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.filter_value().contains(filter_text.as_str()))
            .map(|(i, _)| i)
            .collect();

        self.selected_index = 0;
        self.viewport.offset = 0;
    }

    /// Keeps the highlighted row inside the viewport without leaving empty
    /// rows at the bottom.
    fn scroll_to_selection(&mut self) {
        let height = self.page_size();
        let offset = &mut self.viewport.offset;

        if self.selected_index < *offset {
            *offset = self.selected_index;
        } else if self.selected_index >= *offset + height {
            *offset = self.selected_index + 1 - height;
        }

        *offset = (*offset).min(self.visible.len().saturating_sub(height));
    }
}
