//! UI-local state management.
//!
//! This module defines the state that belongs to the presentation layer
//! only: the input mode, the text buffer, the selection within the
//! visible list, and transient notices. Task data itself lives in the
//! [`TaskStore`](taskdeck_store::TaskStore).

use std::time::Duration;

use tokio::time::Instant;

use taskdeck_protocol::TaskId;

/// How long a transient notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// What keyboard input currently means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are actions (navigate, toggle, delete, ...).
    #[default]
    Normal,
    /// Typing a new task title.
    AddingTask,
    /// Typing a search query (applied live).
    Searching,
    /// Retitling an existing task.
    EditingTask {
        /// The task being edited.
        id: TaskId,
    },
}

impl InputMode {
    /// Returns `true` if keys should be captured as text.
    #[must_use]
    pub const fn is_editing(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// A transient status-bar message with an expiry.
#[derive(Debug, Clone)]
pub struct Notice {
    text: String,
    deadline: Instant,
}

/// The presentation layer's own state.
#[derive(Debug, Default)]
pub struct UiState {
    /// Current input mode.
    pub mode: InputMode,
    /// Text buffer for add/search/edit entry.
    pub input: String,
    /// Index of the selected task within the *visible* (filtered) list.
    pub selected: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    notice: Option<Notice>,
}

impl UiState {
    /// Creates a fresh UI state in normal mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the selection up within a visible list of `len` items,
    /// wrapping to the bottom from the top.
    pub fn navigate_up(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            // Wrap to bottom, or select the first item when nothing is
            // selected yet.
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Moves the selection down within a visible list of `len` items,
    /// wrapping to the top from the bottom.
    pub fn navigate_down(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Ensures the selection is valid for a visible list of `len` items.
    pub fn clamp_selection(&mut self, len: usize) {
        match self.selected {
            Some(_) if len == 0 => self.selected = None,
            Some(idx) if idx >= len => self.selected = Some(len - 1),
            _ => {}
        }
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Enters a text-entry mode with the given initial buffer contents.
    pub fn begin_input(&mut self, mode: InputMode, initial: impl Into<String>) {
        self.mode = mode;
        self.input = initial.into();
    }

    /// Leaves text entry, discarding the buffer.
    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
        self.input.clear();
    }

    /// Leaves text entry, returning the buffer contents.
    #[must_use]
    pub fn take_input(&mut self) -> String {
        self.mode = InputMode::Normal;
        std::mem::take(&mut self.input)
    }

    /// Shows a transient notice in the status bar.
    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            deadline: Instant::now() + NOTICE_TTL,
        });
    }

    /// Returns the active notice text, if it has not expired.
    #[must_use]
    pub fn notice_text(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| Instant::now() < n.deadline)
            .map(|n| n.text.as_str())
    }

    /// Drops the notice once its time is up.
    pub fn expire_notice(&mut self) {
        if self.notice_text().is_none() {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = UiState::new();
        assert_eq!(state.mode, InputMode::Normal);
        assert!(state.input.is_empty());
        assert_eq!(state.selected, None);
        assert!(!state.help_visible);
        assert!(state.notice_text().is_none());
    }

    #[test]
    fn navigate_in_empty_list_selects_nothing() {
        let mut state = UiState::new();
        state.navigate_down(0);
        assert_eq!(state.selected, None);
        state.navigate_up(0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn navigate_down_wraps_around() {
        let mut state = UiState::new();

        state.navigate_down(3);
        assert_eq!(state.selected, Some(0));
        state.navigate_down(3);
        assert_eq!(state.selected, Some(1));
        state.navigate_down(3);
        assert_eq!(state.selected, Some(2));
        state.navigate_down(3);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn navigate_up_wraps_to_bottom() {
        let mut state = UiState::new();
        state.navigate_down(3); // select 0
        state.navigate_up(3);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn clamp_selection_handles_shrinking_lists() {
        let mut state = UiState::new();
        state.selected = Some(5);

        state.clamp_selection(3);
        assert_eq!(state.selected, Some(2));

        state.clamp_selection(0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn input_mode_editing_detection() {
        assert!(!InputMode::Normal.is_editing());
        assert!(InputMode::AddingTask.is_editing());
        assert!(InputMode::Searching.is_editing());
        assert!(
            InputMode::EditingTask {
                id: TaskId::new_v4()
            }
            .is_editing()
        );
    }

    #[test]
    fn begin_take_input_roundtrip() {
        let mut state = UiState::new();
        state.begin_input(InputMode::AddingTask, "");
        state.input.push_str("New task");

        let text = state.take_input();
        assert_eq!(text, "New task");
        assert_eq!(state.mode, InputMode::Normal);
        assert!(state.input.is_empty());
    }

    #[test]
    fn cancel_input_discards_buffer() {
        let mut state = UiState::new();
        state.begin_input(InputMode::Searching, "mil");

        state.cancel_input();
        assert_eq!(state.mode, InputMode::Normal);
        assert!(state.input.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn notices_expire() {
        let mut state = UiState::new();
        state.set_notice("Saved");
        assert_eq!(state.notice_text(), Some("Saved"));

        tokio::time::advance(NOTICE_TTL + Duration::from_millis(1)).await;
        assert!(state.notice_text().is_none());

        state.expire_notice();
        assert!(state.notice_text().is_none());
    }
}
