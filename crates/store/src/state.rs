//! The client-visible task state and its optimistic mutations.
//!
//! [`TasksState`] is the single source of truth for what the dashboard
//! shows: the cached task list, the full-list fetch lifecycle, and the
//! active filter and search query. Every method here is synchronous and
//! infallible; asynchronous confirmation against the backend lives in
//! [`TaskStore`](crate::TaskStore).

use taskdeck_protocol::{RequestStatus, StatusFilter, Task, TaskId, TaskPatch};

use crate::undo::UndoSnapshot;

/// The state container's contents.
///
/// `items` is a cache of the backend's canonical collection in
/// insertion-recency order (newest first); optimistic mutations may make
/// it transiently diverge until a confirmation reconciles it.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Task;
/// use taskdeck_store::TasksState;
///
/// let mut state = TasksState::default();
/// state.add_task_optimistic(Task::new("First").unwrap());
/// state.add_task_optimistic(Task::new("Second").unwrap());
///
/// // Newest first
/// assert_eq!(state.items[0].title, "Second");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TasksState {
    /// Cached task list, newest first.
    pub items: Vec<Task>,
    /// Lifecycle of the most recent full-list fetch.
    pub request: RequestStatus,
    /// Error message from the most recent failed full-list fetch.
    pub last_error: Option<String>,
    /// Active status filter.
    pub filter: StatusFilter,
    /// Active search query, matched case-insensitively against titles.
    pub search_query: String,
}

impl TasksState {
    /// Replaces the active filter.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Replaces the search query verbatim.
    ///
    /// The query is not trimmed; matching is case-insensitive substring
    /// matching, so leading/trailing spaces are significant.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Prepends a fully-formed task.
    ///
    /// The container trusts its callers: identity, timestamps, and title
    /// validation are the responsibility of whoever built the task (the
    /// backend, or [`TaskStore::create_remote`](crate::TaskStore::create_remote)
    /// for optimistic placeholders).
    pub fn add_task_optimistic(&mut self, task: Task) {
        self.items.insert(0, task);
    }

    /// Merges a patch into the task with the given id and refreshes its
    /// `updated_at` timestamp. Silently ignored when the id is absent.
    pub fn update_task_optimistic(&mut self, id: TaskId, patch: &TaskPatch) {
        if let Some(task) = self.items.iter_mut().find(|t| t.id == id) {
            task.apply_patch(patch);
        }
    }

    /// Removes the task with the given id. No-op when absent.
    pub fn delete_task_optimistic(&mut self, id: TaskId) {
        self.items.retain(|t| t.id != id);
    }

    /// Flips the task with the given id between pending and completed and
    /// refreshes its `updated_at` timestamp. No-op when absent.
    pub fn toggle_status_optimistic(&mut self, id: TaskId) {
        if let Some(task) = self.items.iter_mut().find(|t| t.id == id) {
            task.toggle_status();
        }
    }

    /// Reinserts a previously deleted task at its original position.
    ///
    /// The snapshot index is clamped to `[0, len]`, so restoring into a
    /// list that has since shrunk appends at the end instead of panicking.
    pub fn restore_task(&mut self, snapshot: UndoSnapshot) {
        let index = snapshot.index.min(self.items.len());
        self.items.insert(index, snapshot.task);
    }

    /// Replaces the task that currently has `id` with the given record,
    /// preserving its position.
    ///
    /// Returns `false` (and changes nothing) when the id is absent - used
    /// by the confirmation path to drop stale records for tasks deleted
    /// while the request was in flight.
    pub fn replace_task(&mut self, id: TaskId, task: Task) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Wholesale replacement of the task list after a successful fetch.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.items = tasks;
    }

    /// Updates the full-list fetch lifecycle state.
    pub fn set_request_status(&mut self, status: RequestStatus) {
        self.request = status;
    }

    /// Records (or clears) the full-list fetch error message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.last_error = error;
    }
}
