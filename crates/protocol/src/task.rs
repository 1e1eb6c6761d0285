//! Task-related types for the dashboard.
//!
//! This module defines the core task types used throughout the taskdeck
//! application, including task identifiers, statuses, and the task
//! structure itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for a task.
///
/// Uses UUID v4 for collision-resistant identification even under rapid
/// successive creation.
pub type TaskId = uuid::Uuid;

/// The completion status of a task.
///
/// Binary by design; there are no intermediate states.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::TaskStatus;
///
/// let status = TaskStatus::Pending;
/// assert_eq!(status.toggled(), TaskStatus::Completed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is waiting to be done.
    #[default]
    Pending,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns `true` if the task is completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::TaskStatus;
    ///
    /// assert!(!TaskStatus::Pending.is_completed());
    /// assert!(TaskStatus::Completed.is_completed());
    /// ```
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the opposite status.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
    /// assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    /// Returns a human-readable display name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Pending.display_name(), "pending");
    /// assert_eq!(TaskStatus::Completed.display_name(), "completed");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// A partial update to a task.
///
/// Fields set to `None` are left untouched when the patch is applied.
/// Produced by the edit and toggle operations and consumed by the backend's
/// update operation.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{TaskPatch, TaskStatus};
///
/// let patch = TaskPatch::status(TaskStatus::Completed);
/// assert!(patch.title.is_none());
/// assert_eq!(patch.status, Some(TaskStatus::Completed));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title, if the title is being changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New status, if the status is being changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Creates a patch that only changes the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            status: None,
        }
    }

    /// Creates a patch that only changes the status.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            title: None,
            status: Some(status),
        }
    }

    /// Returns `true` if the patch changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::TaskPatch;
    ///
    /// assert!(TaskPatch::default().is_empty());
    /// assert!(!TaskPatch::title("New title").is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }
}

/// A to-do item on the dashboard.
///
/// Each task has a unique identifier, a short human-readable title, a
/// binary completion status, and creation/modification timestamps. The
/// backend's copy of a task is canonical; the state container holds a
/// cache that may transiently diverge during optimistic updates.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{Task, TaskStatus};
///
/// let task = Task::new("Water the plants").unwrap();
/// assert_eq!(task.title, "Water the plants");
/// assert_eq!(task.status, TaskStatus::Pending);
/// assert_eq!(task.created_at, task.updated_at);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short description of what needs to be done. Never empty.
    pub title: String,
    /// Current completion status.
    pub status: TaskStatus,
    /// When this task was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// When this task was last modified. Invariant: `created_at <= updated_at`.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task with the given title.
    ///
    /// The title is trimmed; timestamps are set to the current time and a
    /// fresh v4 id is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidTitle`] if the title is empty or
    /// whitespace-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Task;
    ///
    /// let task = Task::new("  Buy milk  ").unwrap();
    /// assert_eq!(task.title, "Buy milk");
    ///
    /// assert!(Task::new("   ").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let id = TaskId::new_v4();
        Self::with_id(id, title)
    }

    /// Creates a new pending task with a specific id.
    ///
    /// Useful for testing or when recreating tasks from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidTitle`] if the title is empty or
    /// whitespace-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::{Task, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let task = Task::with_id(id, "Test task").unwrap();
    /// assert_eq!(task.id, id);
    /// ```
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ProtocolError::InvalidTitle);
        }
        let now = Utc::now();
        Ok(Self {
            id,
            title: trimmed.to_string(),
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Updates the task's status and refreshes the `updated_at` timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::{Task, TaskStatus};
    ///
    /// let mut task = Task::new("Work item").unwrap();
    /// task.set_status(TaskStatus::Completed);
    /// assert_eq!(task.status, TaskStatus::Completed);
    /// ```
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Flips the task between pending and completed and refreshes the
    /// `updated_at` timestamp.
    pub fn toggle_status(&mut self) {
        self.set_status(self.status.toggled());
    }

    /// Applies a partial update and refreshes the `updated_at` timestamp.
    ///
    /// Fields are merged verbatim; callers performing user-facing edits are
    /// expected to trim and validate titles before building the patch.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::{Task, TaskPatch, TaskStatus};
    ///
    /// let mut task = Task::new("Draft").unwrap();
    /// task.apply_patch(&TaskPatch {
    ///     title: Some("Final".to_string()),
    ///     status: Some(TaskStatus::Completed),
    /// });
    /// assert_eq!(task.title, "Final");
    /// assert_eq!(task.status, TaskStatus::Completed);
    /// ```
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_default_is_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn task_status_toggle_roundtrip() {
        assert_eq!(TaskStatus::Pending.toggled().toggled(), TaskStatus::Pending);
        assert_eq!(
            TaskStatus::Completed.toggled().toggled(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn task_new_trims_title() {
        let task = Task::new("  Water plants \t").expect("valid title");
        assert_eq!(task.title, "Water plants");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn task_new_rejects_empty_title() {
        assert!(matches!(Task::new(""), Err(ProtocolError::InvalidTitle)));
        assert!(matches!(Task::new("   "), Err(ProtocolError::InvalidTitle)));
    }

    #[test]
    fn task_with_id_preserves_id() {
        let id = TaskId::new_v4();
        let task = Task::with_id(id, "Test").expect("valid title");
        assert_eq!(task.id, id);
    }

    #[test]
    fn task_timestamps_start_equal() {
        let task = Task::new("Test").expect("valid title");
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn set_status_refreshes_updated_at() {
        let mut task = Task::new("Test").expect("valid title");
        let original_updated = task.updated_at;

        // Small delay to ensure timestamp changes
        std::thread::sleep(std::time::Duration::from_millis(10));

        task.set_status(TaskStatus::Completed);

        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.updated_at > original_updated);
        assert!(task.created_at <= task.updated_at);
    }

    #[test]
    fn apply_patch_merges_fields() {
        let mut task = Task::new("Draft title").expect("valid title");

        task.apply_patch(&TaskPatch::title("Final title"));
        assert_eq!(task.title, "Final title");
        assert_eq!(task.status, TaskStatus::Pending);

        task.apply_patch(&TaskPatch::status(TaskStatus::Completed));
        assert_eq!(task.title, "Final title");
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn empty_patch_still_refreshes_updated_at() {
        let mut task = Task::new("Test").expect("valid title");
        let original_updated = task.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        task.apply_patch(&TaskPatch::default());

        assert!(task.updated_at > original_updated);
    }

    #[test]
    fn task_status_json_format() {
        let json = serde_json::to_string(&TaskStatus::Pending).expect("serialize");
        assert_eq!(json, r#""pending""#);

        let json = serde_json::to_string(&TaskStatus::Completed).expect("serialize");
        assert_eq!(json, r#""completed""#);
    }

    #[test]
    fn task_serialization_roundtrip() {
        let task = Task::new("Serialize me").expect("valid title");
        let json = serde_json::to_string(&task).expect("serialize");
        let parsed: Task = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(task, parsed);
    }
}
