//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application update loop.

use serde::{Deserialize, Serialize};

use crate::filter::StatusFilter;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application update loop.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Message;
///
/// let msg = Message::ToggleSelected;
/// assert!(!msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the selection up within the visible task list.
    NavigateUp,
    /// Move the selection down within the visible task list.
    NavigateDown,
    /// Toggle the selected task between pending and completed.
    ToggleSelected,
    /// Delete the selected task (with an undo window).
    DeleteSelected,
    /// Start editing the selected task's title.
    EditSelected,
    /// Restore the most recently deleted task, if the undo window is open.
    Undo,
    /// Re-fetch the full task list from the backend.
    Refresh,
    /// Start entering a new task title.
    StartAdd,
    /// Start entering a search query.
    StartSearch,
    /// Switch the active status filter.
    SetFilter(StatusFilter),
    /// Toggle the help overlay.
    ToggleHelp,
    /// Escape: cancel input, dismiss help, or clear the selection (contextual).
    Escape,
    /// Quit the application.
    Quit,

    // --- Text input messages (add/search/edit modes) ---
    /// Input a character while entering text.
    Input {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character while entering text.
    Backspace,
    /// Confirm the current text input.
    Submit,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Message;
    ///
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::Refresh.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::NavigateUp | Self::NavigateDown)
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is part of text entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Message;
    ///
    /// assert!(Message::Input { ch: 'a' }.is_text_input());
    /// assert!(Message::Submit.is_text_input());
    /// assert!(!Message::NavigateUp.is_text_input());
    /// ```
    #[must_use]
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Backspace | Self::Submit)
    }

    /// Returns `true` if this message mutates task data.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Message;
    ///
    /// assert!(Message::DeleteSelected.is_mutation());
    /// assert!(!Message::StartSearch.is_mutation());
    /// ```
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::ToggleSelected | Self::DeleteSelected | Self::Undo | Self::Submit
        )
    }
}
