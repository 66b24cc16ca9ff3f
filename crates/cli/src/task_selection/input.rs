use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::types::PickerEvent;

/// Translates a terminal event into a picker event, `None` for events the
/// picker does not react to.
#[must_use]
pub fn translate_event(event: Event) -> Option<PickerEvent> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            translate_key(key_event)
        }
        Event::Resize(width, height) => Some(PickerEvent::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<PickerEvent> {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PickerEvent::Cancel)
        }
        KeyCode::Esc | KeyCode::Char('q') => Some(PickerEvent::Cancel),
        KeyCode::Enter => Some(PickerEvent::Enter),
        KeyCode::Up => Some(PickerEvent::Up),
        KeyCode::Down => Some(PickerEvent::Down),
        KeyCode::PageUp => Some(PickerEvent::PageUp),
        KeyCode::PageDown => Some(PickerEvent::PageDown),
        KeyCode::Home => Some(PickerEvent::Home),
        KeyCode::End => Some(PickerEvent::End),
        KeyCode::Backspace => Some(PickerEvent::Backspace),
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(PickerEvent::Input(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(translate_event(key(KeyCode::Esc)), Some(PickerEvent::Cancel));
        assert_eq!(
            translate_event(key(KeyCode::Char('q'))),
            Some(PickerEvent::Cancel)
        );
        assert_eq!(
            translate_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(PickerEvent::Cancel)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate_event(key(KeyCode::Up)), Some(PickerEvent::Up));
        assert_eq!(translate_event(key(KeyCode::Down)), Some(PickerEvent::Down));
        assert_eq!(
            translate_event(key(KeyCode::PageDown)),
            Some(PickerEvent::PageDown)
        );
        assert_eq!(translate_event(key(KeyCode::Home)), Some(PickerEvent::Home));
        assert_eq!(translate_event(key(KeyCode::Enter)), Some(PickerEvent::Enter));
    }

    #[test]
    fn test_printable_characters_filter() {
        assert_eq!(
            translate_event(key(KeyCode::Char('b'))),
            Some(PickerEvent::Input('b'))
        );
        assert_eq!(
            translate_event(Event::Key(KeyEvent::new(
                KeyCode::Char('B'),
                KeyModifiers::SHIFT
            ))),
            Some(PickerEvent::Input('B'))
        );
        assert_eq!(
            translate_event(key(KeyCode::Backspace)),
            Some(PickerEvent::Backspace)
        );
    }

    #[test]
    fn test_modified_characters_are_ignored() {
        assert_eq!(
            translate_event(Event::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::ALT
            ))),
            None
        );
    }

    #[test]
    fn test_resize_and_other_events() {
        assert_eq!(
            translate_event(Event::Resize(100, 30)),
            Some(PickerEvent::Resize {
                width: 100,
                height: 30
            })
        );
        assert_eq!(translate_event(Event::FocusGained), None);
        assert_eq!(translate_event(key(KeyCode::Tab)), None);
    }
}
