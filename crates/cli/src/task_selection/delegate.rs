//! Row rendering and picker styling.

use crossterm::style::{style, Color, StyledContent, Stylize};
use xc_interactive_core::config::ThemeDefinition;
use xc_interactive_core::error::Result;

use super::colors::AsTermColor;
use super::types::ListEntry;

/// Styling for the picker, passed in at construction rather than read from
/// global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Spaces before the label of a row that is not highlighted
    pub indent: u16,
    /// Spaces before the `> ` marker of the highlighted row
    pub selected_indent: u16,
    /// Spaces before the title
    pub title_margin: u16,
    /// Foreground color of the highlighted row
    pub highlight_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            indent: 4,
            selected_indent: 2,
            title_margin: 2,
            highlight_color: Color::AnsiValue(170),
        }
    }
}

impl Theme {
    /// Builds a theme from the optional configuration section, keeping the
    /// default for anything left unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the highlight color definition is invalid.
    pub fn from_definition(definition: Option<&ThemeDefinition>) -> Result<Self> {
        let mut theme = Self::default();
        let Some(definition) = definition else {
            return Ok(theme);
        };

        if let Some(indent) = definition.indent {
            theme.indent = indent;
        }
        if let Some(selected_indent) = definition.selected_indent {
            theme.selected_indent = selected_indent;
        }
        if let Some(title_margin) = definition.title_margin {
            theme.title_margin = title_margin;
        }
        if let Some(color) = &definition.highlight_color {
            if let Some(color) = color.as_crossterm_color()? {
                theme.highlight_color = color;
            }
        }

        Ok(theme)
    }
}

/// Turns one list entry into the text drawn for its row.
pub trait RenderDelegate {
    /// `None` means the slot is left blank.
    fn render<E: ListEntry>(&self, entry: &E, highlighted: bool) -> Option<StyledContent<String>>;
}

/// Renders the entry label, marking the highlighted row with `> ` and the
/// theme's highlight color.
#[derive(Debug, Clone)]
pub struct ItemDelegate {
    theme: Theme,
}

impl ItemDelegate {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl RenderDelegate for ItemDelegate {
    fn render<E: ListEntry>(&self, entry: &E, highlighted: bool) -> Option<StyledContent<String>> {
        let label = entry.label()?;

        if highlighted {
            let padding = " ".repeat(usize::from(self.theme.selected_indent));
            Some(format!("{padding}> {label}").with(self.theme.highlight_color))
        } else {
            let padding = " ".repeat(usize::from(self.theme.indent));
            Some(style(format!("{padding}{label}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_selection::types::ListItem;
    use xc_interactive_core::config::ColorDefinition;
    use xc_interactive_core::error::Error;
    use xc_interactive_core::task::Task;

    #[test]
    fn test_render_plain_row() {
        let task = Task::new("build", &[]);
        let delegate = ItemDelegate::new(Theme::default());

        let row = delegate.render(&ListItem::new(&task), false).unwrap();
        assert_eq!(row.content(), "    build");
        assert_eq!(row.style().foreground_color, None);
    }

    #[test]
    fn test_render_highlighted_row() {
        let task = Task::new("build", &[]);
        let delegate = ItemDelegate::new(Theme::default());

        let row = delegate.render(&ListItem::new(&task), true).unwrap();
        assert_eq!(row.content(), "  > build");
        assert_eq!(row.style().foreground_color, Some(Color::AnsiValue(170)));
    }

    #[test]
    fn test_render_entry_without_label() {
        let task = Task::new("", &[]);
        let delegate = ItemDelegate::new(Theme::default());

        assert!(delegate.render(&ListItem::new(&task), true).is_none());
    }

    #[test]
    fn test_render_uses_theme() {
        let task = Task::new("lint", &[]);
        let theme = Theme {
            indent: 1,
            selected_indent: 0,
            title_margin: 0,
            highlight_color: Color::Green,
        };
        let delegate = ItemDelegate::new(theme);

        assert_eq!(
            delegate
                .render(&ListItem::new(&task), false)
                .unwrap()
                .content(),
            " lint"
        );
        let highlighted = delegate.render(&ListItem::new(&task), true).unwrap();
        assert_eq!(highlighted.content(), "> lint");
        assert_eq!(highlighted.style().foreground_color, Some(Color::Green));
    }

    #[test]
    fn test_theme_from_definition() {
        assert_eq!(Theme::from_definition(None).unwrap(), Theme::default());

        let definition = ThemeDefinition {
            indent: Some(6),
            selected_indent: None,
            title_margin: Some(0),
            highlight_color: Some(ColorDefinition {
                rgb: None,
                ansi: None,
                name: Some("cyan".to_string()),
            }),
        };
        let theme = Theme::from_definition(Some(&definition)).unwrap();
        assert_eq!(theme.indent, 6);
        assert_eq!(theme.selected_indent, 2);
        assert_eq!(theme.title_margin, 0);
        assert_eq!(theme.highlight_color, Color::Cyan);
    }

    #[test]
    fn test_theme_from_invalid_color() {
        let definition = ThemeDefinition {
            highlight_color: Some(ColorDefinition {
                rgb: Some((0, 0, 0)),
                ansi: Some(1),
                name: None,
            }),
            ..ThemeDefinition::default()
        };
        assert!(matches!(
            Theme::from_definition(Some(&definition)),
            Err(Error::MultipleColorTypes)
        ));
    }
}
