use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event;
use crossterm::style::{
    Attribute, Color, Print, PrintStyledContent, SetAttribute, SetForegroundColor, StyledContent,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, terminal, ExecutableCommand};
use log::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use xc_interactive_core::error::{Error, Result};
use xc_interactive_core::task::Task;

use super::delegate::{ItemDelegate, RenderDelegate, Theme};
use super::input::translate_event;
use super::state::SelectionState;
use super::types::{PickerEvent, ViewportState};

const TITLE: &str = "xc: Choose a task";
const HELP: &str = "↑/↓: navigate   type: filter   enter: run   esc/q: quit";

/// First screen row used by list entries: a blank line, the title and
/// another blank line come before it.
const FIRST_LIST_ROW: u16 = 3;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Where the picker's input comes from.
pub trait EventSource {
    /// Blocks for the next event; `None` for input the picker ignores.
    ///
    /// # Errors
    ///
    /// Returns an error if input can no longer be read.
    fn next_event(&mut self) -> Result<Option<PickerEvent>>;
}

/// Reads key and resize events from the terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> Result<Option<PickerEvent>> {
        Ok(translate_event(event::read()?))
    }
}

/// Feeds events into `state` until it terminates, calling `redraw` first and
/// after every event that leaves the session running.
///
/// # Errors
///
/// Returns the first error from `events` or `redraw`.
pub fn drive<E, F>(state: &mut SelectionState<'_>, events: &mut E, mut redraw: F) -> Result<()>
where
    E: EventSource,
    F: FnMut(&SelectionState<'_>) -> Result<()>,
{
    redraw(&*state)?;

    while !state.is_terminated() {
        let Some(picker_event) = events.next_event()? else {
            continue;
        };

        state.handle(picker_event);

        if !state.is_terminated() {
            redraw(&*state)?;
        }
    }

    Ok(())
}

/// Cuts `row` to at most `width` terminal columns. A wide character that
/// would straddle the edge is dropped whole.
fn truncate(row: StyledContent<String>, width: u16) -> StyledContent<String> {
    let width = usize::from(width);
    if row.content().width() <= width {
        return row;
    }

    let mut columns = 0;
    let truncated = row
        .content()
        .chars()
        .take_while(|c| {
            columns += c.width().unwrap_or(0);
            columns <= width
        })
        .collect();
    StyledContent::new(*row.style(), truncated)
}

fn redraw_ui(state: &SelectionState<'_>, delegate: &ItemDelegate, theme: &Theme) -> Result<()> {
    let mut stdout = stdout();
    let viewport = state.viewport();

    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(theme.title_margin, 1),
        SetAttribute(Attribute::Bold),
        Print(TITLE),
        SetAttribute(Attribute::Reset)
    )?;

    let mut row = FIRST_LIST_ROW;
    for (item, highlighted) in state.rows() {
        queue!(stdout, MoveTo(0, row))?;
        if let Some(content) = delegate.render(item, highlighted) {
            queue!(stdout, PrintStyledContent(truncate(content, viewport.width)))?;
        }
        row += 1;
    }

    if state.visible_len() == 0 {
        queue!(
            stdout,
            MoveTo(theme.indent, FIRST_LIST_ROW),
            SetForegroundColor(Color::Red),
            Print("No matching tasks!"),
            SetAttribute(Attribute::Reset)
        )?;
    }

    let footer_row = FIRST_LIST_ROW + viewport.height.max(1) + 1;
    if !state.filter_text().is_empty() {
        queue!(
            stdout,
            MoveTo(theme.indent, footer_row),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", state.filter_text())),
            SetAttribute(Attribute::Reset)
        )?;
    }

    queue!(
        stdout,
        MoveTo(theme.indent, footer_row + 1),
        SetForegroundColor(Color::DarkGrey),
        Print(HELP),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(Color::Reset)
    )?;

    stdout.flush()?;
    Ok(())
}

/// Shows the picker in the alternate screen and returns the chosen task, or
/// `None` if the user cancelled.
///
/// # Errors
///
/// Returns [`Error::TerminalSession`] if the terminal cannot be put into raw
/// mode, or an I/O error if reading input or drawing fails.
pub fn prompt_for_task<'a>(tasks: &'a [Task], theme: &Theme) -> Result<Option<&'a Task>> {
    let mut stdout = stdout();

    stdout
        .execute(EnterAlternateScreen)
        .map_err(Error::TerminalSession)?;
    // Restores the terminal on every exit path from here on, including a
    // failed enable_raw_mode
    let _raw_mode_guard = RawModeGuard;
    enable_raw_mode().map_err(Error::TerminalSession)?;
    stdout.execute(cursor::Hide)?;

    let (width, height) = terminal::size().map_err(Error::TerminalSession)?;
    debug!(
        "Starting picker with {} tasks on a {}x{} terminal",
        tasks.len(),
        width,
        height
    );

    let mut state = SelectionState::new(tasks, ViewportState::for_terminal(width, height));
    let delegate = ItemDelegate::new(theme.clone());

    drive(&mut state, &mut TerminalEvents, |state| {
        redraw_ui(state, &delegate, theme)
    })?;

    Ok(state.chosen())
}
