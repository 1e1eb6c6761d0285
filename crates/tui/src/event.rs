//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Key mapping is mode-aware: while the user is
//! entering text (add, search, edit), printable keys become input instead
//! of actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use taskdeck_protocol::{Message, StatusFilter};

/// Default poll timeout for events.
///
/// Doubles as the animation frame interval: one confetti tick per poll.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// `editing` selects the text-entry key map; see [`key_to_message`] and
/// [`key_to_input_message`].
#[must_use]
pub fn event_to_message(event: &Event, editing: bool) -> Option<Message> {
    match event {
        Event::Key(key) if editing => key_to_input_message(*key),
        Event::Key(key) => key_to_message(*key),
        _ => None,
    }
}

/// Converts a key event to an application message (normal mode).
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (clear search or selection) |
/// | `Up` / `Down` | Navigate the task list |
/// | `Enter` or `Space` | Toggle the selected task |
/// | `a` | Add a task |
/// | `/` | Search |
/// | `e` | Edit the selected task's title |
/// | `d` | Delete the selected task |
/// | `u` | Undo the last delete |
/// | `r` | Refresh from the backend |
/// | `1` / `2` / `3` | Filter: all / pending / completed |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Task actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToggleSelected),
        KeyCode::Char('a') => Some(Message::StartAdd),
        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('e') => Some(Message::EditSelected),
        KeyCode::Char('d') => Some(Message::DeleteSelected),
        KeyCode::Char('u') => Some(Message::Undo),
        KeyCode::Char('r') => Some(Message::Refresh),

        // Filters
        KeyCode::Char('1') => Some(Message::SetFilter(StatusFilter::All)),
        KeyCode::Char('2') => Some(Message::SetFilter(StatusFilter::Pending)),
        KeyCode::Char('3') => Some(Message::SetFilter(StatusFilter::Completed)),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a message while entering text.
///
/// # Key Bindings (Text Entry)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Submit |
/// | `Esc` | Cancel |
/// | `Backspace` | Delete the last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_input_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first (always works)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        // Only Ctrl+C quits
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        // 'q' is not a quit key
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn vim_keys_not_mapped() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('j'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('k'))), None);
    }

    #[test]
    fn toggle_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::ToggleSelected)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::ToggleSelected)
        );
    }

    #[test]
    fn task_action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('a'))),
            Some(Message::StartAdd)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('/'))),
            Some(Message::StartSearch)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('e'))),
            Some(Message::EditSelected)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d'))),
            Some(Message::DeleteSelected)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('u'))),
            Some(Message::Undo)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('r'))),
            Some(Message::Refresh)
        );
    }

    #[test]
    fn filter_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('1'))),
            Some(Message::SetFilter(StatusFilter::All))
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('2'))),
            Some(Message::SetFilter(StatusFilter::Pending))
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('3'))),
            Some(Message::SetFilter(StatusFilter::Completed))
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn text_entry_mode() {
        // Character input, including keys that are actions in normal mode
        assert_eq!(
            key_to_input_message(make_key(KeyCode::Char('d'))),
            Some(Message::Input { ch: 'd' })
        );
        assert_eq!(
            key_to_input_message(make_key(KeyCode::Char(' '))),
            Some(Message::Input { ch: ' ' })
        );

        assert_eq!(
            key_to_input_message(make_key(KeyCode::Backspace)),
            Some(Message::Backspace)
        );
        assert_eq!(
            key_to_input_message(make_key(KeyCode::Enter)),
            Some(Message::Submit)
        );
        assert_eq!(
            key_to_input_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn text_entry_ctrl_c_still_quits() {
        assert_eq!(
            key_to_input_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
    }

    #[test]
    fn event_to_message_is_mode_aware() {
        let key_event = Event::Key(make_key(KeyCode::Char('d')));

        assert_eq!(
            event_to_message(&key_event, false),
            Some(Message::DeleteSelected)
        );
        assert_eq!(
            event_to_message(&key_event, true),
            Some(Message::Input { ch: 'd' })
        );
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        let resize_event = Event::Resize(80, 24);
        assert_eq!(event_to_message(&resize_event, false), None);
    }
}
