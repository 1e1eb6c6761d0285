//! The task store: serialized state dispatch plus backend confirmation.
//!
//! [`TaskStore`] pairs a [`TasksState`] with a backend handle. Mutating
//! actions apply optimistically and synchronously; each asynchronous
//! confirmation operation wraps exactly one backend call and reconciles
//! its result into the state.
//!
//! The store is cheap to clone (both halves live behind `Arc`s), so
//! several confirmation operations can be in flight at once. The state
//! mutex is the dispatch serializer: it is locked only for synchronous
//! mutations and never held across an `await`. Overlapping requests for
//! the same task are not ordered - last to resolve wins.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use taskdeck_backend::TaskBackend;
use taskdeck_protocol::{RequestStatus, Task, TaskId, TaskPatch, TaskStatus};

use crate::error::{Result, StoreError};
use crate::state::TasksState;
use crate::undo::UndoSnapshot;

/// The client-side task store.
///
/// # Examples
///
/// ```
/// use taskdeck_backend::{BackendOptions, MemoryBackend};
/// use taskdeck_store::TaskStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), taskdeck_store::StoreError> {
/// let backend = MemoryBackend::new(Vec::new(), BackendOptions::instant());
/// let store = TaskStore::new(backend);
///
/// store.create_remote("Plan the sprint").await?;
/// assert_eq!(store.snapshot().items.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TaskStore<B> {
    backend: Arc<B>,
    state: Arc<Mutex<TasksState>>,
}

// Manual impl: `B` itself does not need to be `Clone`.
impl<B> Clone for TaskStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
        }
    }
}

impl<B> TaskStore<B> {
    /// Creates a store over the given backend, starting from the default
    /// (empty, idle) state.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            state: Arc::new(Mutex::new(TasksState::default())),
        }
    }

    /// Returns a reference to the backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns a clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TasksState {
        self.lock().clone()
    }

    /// Reads the state through a closure without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&TasksState) -> R) -> R {
        f(&self.lock())
    }

    /// Applies a synchronous mutation to the state.
    ///
    /// This is the dispatch entry point for the optimistic operations on
    /// [`TasksState`]; calls are serialized by the internal lock.
    pub fn apply<R>(&self, f: impl FnOnce(&mut TasksState) -> R) -> R {
        f(&mut self.lock())
    }

    /// Replaces the active status filter.
    pub fn set_filter(&self, filter: taskdeck_protocol::StatusFilter) {
        self.apply(|s| s.set_filter(filter));
    }

    /// Replaces the search query verbatim.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.apply(|s| s.set_search_query(query));
    }

    /// Reinserts a previously deleted task at its original position.
    ///
    /// This only reinstates the local view; the backend is not asked to
    /// re-create the task.
    pub fn restore_task(&self, snapshot: UndoSnapshot) {
        self.apply(|s| s.restore_task(snapshot));
    }

    fn lock(&self) -> MutexGuard<'_, TasksState> {
        self.state.lock().expect("task state lock poisoned")
    }
}

impl<B: TaskBackend> TaskStore<B> {
    /// Fetches the full task list from the backend.
    ///
    /// Sets the request status to `Loading` for the duration of the call.
    /// On success the cached list is replaced wholesale and the status
    /// becomes `Succeeded`; on failure the list is left untouched, the
    /// status becomes `Failed`, and the error message lands in
    /// `last_error`.
    ///
    /// # Errors
    ///
    /// Returns the backend error, in addition to recording it in the
    /// state.
    pub async fn fetch_all(&self) -> Result<()> {
        self.apply(|s| {
            s.set_request_status(RequestStatus::Loading);
            s.set_error(None);
        });

        match self.backend.list().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "full fetch succeeded");
                self.apply(|s| {
                    s.replace_all(tasks);
                    s.set_request_status(RequestStatus::Succeeded);
                });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "full fetch failed");
                let message = err.to_string();
                self.apply(|s| {
                    s.set_request_status(RequestStatus::Failed);
                    s.set_error(Some(message));
                });
                Err(err.into())
            }
        }
    }

    /// Creates a task, optimistically showing a placeholder immediately.
    ///
    /// The trimmed title must be non-empty; validation happens before any
    /// state change or backend call. A placeholder with a client-generated
    /// id is prepended right away, then replaced by the backend's
    /// authoritative record on success. On failure the placeholder is
    /// removed again and the error is returned - creation is the one
    /// operation that rolls itself back.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyTitle`] for blank titles, or the backend
    /// error if the confirming call fails.
    pub async fn create_remote(&self, title: &str) -> Result<Task> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let placeholder = Task::new(trimmed)?;
        let placeholder_id = placeholder.id;
        self.apply(|s| s.add_task_optimistic(placeholder));

        match self.backend.create(trimmed).await {
            Ok(task) => {
                debug!(id = %task.id, "create confirmed");
                self.apply(|s| {
                    if !s.replace_task(placeholder_id, task.clone()) {
                        // The placeholder vanished (deleted mid-flight);
                        // the record exists on the backend, so show it.
                        s.add_task_optimistic(task.clone());
                    }
                });
                Ok(task)
            }
            Err(err) => {
                warn!(error = %err, "create failed, removing placeholder");
                self.apply(|s| s.delete_task_optimistic(placeholder_id));
                Err(err.into())
            }
        }
    }

    /// Updates a task, applying the patch optimistically first.
    ///
    /// On success the backend's authoritative record replaces the local
    /// copy; if the task was deleted locally while the request was in
    /// flight, the stale confirmation is dropped. On failure the
    /// optimistic change is left in place and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the confirming call fails.
    pub async fn update_remote(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        self.apply(|s| s.update_task_optimistic(id, &patch));

        match self.backend.update(id, patch).await {
            Ok(task) => {
                if !self.apply(|s| s.replace_task(id, task.clone())) {
                    debug!(%id, "dropping confirmation for locally deleted task");
                }
                Ok(task)
            }
            Err(err) => {
                warn!(%id, error = %err, "update failed, optimistic state kept");
                Err(err.into())
            }
        }
    }

    /// Deletes a task, removing it from the local view immediately.
    ///
    /// On failure the task stays deleted locally; the error is returned
    /// to the caller and no restore is attempted.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the confirming call fails.
    pub async fn delete_remote(&self, id: TaskId) -> Result<()> {
        self.apply(|s| s.delete_task_optimistic(id));

        match self.backend.delete(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(%id, error = %err, "delete failed, optimistic state kept");
                Err(err.into())
            }
        }
    }

    /// Toggles a task's status, flipping it locally immediately.
    ///
    /// The target status is computed from `current`, not looked up in the
    /// state, so overlapping toggles race exactly like any other pair of
    /// writes. Reconciliation follows [`update_remote`](Self::update_remote).
    ///
    /// # Errors
    ///
    /// Returns the backend error if the confirming call fails.
    pub async fn toggle_remote(&self, id: TaskId, current: TaskStatus) -> Result<Task> {
        self.apply(|s| s.toggle_status_optimistic(id));

        match self
            .backend
            .update(id, TaskPatch::status(current.toggled()))
            .await
        {
            Ok(task) => {
                if !self.apply(|s| s.replace_task(id, task.clone())) {
                    debug!(%id, "dropping confirmation for locally deleted task");
                }
                Ok(task)
            }
            Err(err) => {
                warn!(%id, error = %err, "toggle failed, optimistic state kept");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use taskdeck_backend::{BackendError, BackendOptions, MemoryBackend, TaskBackend as _};
    use taskdeck_protocol::{StatusFilter, sample_tasks};

    fn instant_store(initial: Vec<Task>) -> TaskStore<MemoryBackend> {
        TaskStore::new(MemoryBackend::new(initial, BackendOptions::instant()))
    }

    #[tokio::test]
    async fn fetch_all_replaces_items_and_succeeds() {
        let store = instant_store(sample_tasks());

        assert_eq!(store.snapshot().request, RequestStatus::Idle);
        store.fetch_all().await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.request, RequestStatus::Succeeded);
        assert_eq!(state.items.len(), 5);
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn fetch_all_failure_keeps_items_and_records_error() {
        let store = instant_store(sample_tasks());
        store.fetch_all().await.unwrap();

        store.backend().failure_switch().set(true);
        let result = store.fetch_all().await;
        assert!(matches!(
            result,
            Err(StoreError::Backend(BackendError::Unavailable))
        ));

        let state = store.snapshot();
        assert_eq!(state.request, RequestStatus::Failed);
        assert_eq!(state.items.len(), 5, "items unchanged on failure");
        assert!(state.last_error.is_some());

        // Failed is re-enterable: the next fetch recovers.
        store.backend().failure_switch().set(false);
        store.fetch_all().await.unwrap();
        assert_eq!(store.snapshot().request, RequestStatus::Succeeded);
    }

    #[tokio::test]
    async fn create_remote_replaces_placeholder_with_authoritative_record() {
        let store = instant_store(Vec::new());

        let task = store.create_remote("  Fresh task ").await.unwrap();
        assert_eq!(task.title, "Fresh task");

        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, task.id, "authoritative id wins");
    }

    #[tokio::test]
    async fn create_remote_rejects_blank_title_without_side_effects() {
        let store = instant_store(Vec::new());

        let result = store.create_remote("   ").await;
        assert!(matches!(result, Err(StoreError::EmptyTitle)));

        assert!(store.snapshot().items.is_empty());
        assert!(store.backend().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_remote_failure_removes_placeholder() {
        let store = instant_store(Vec::new());
        store.backend().failure_switch().set(true);

        let result = store.create_remote("Doomed").await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
        assert!(store.snapshot().items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn create_remote_shows_placeholder_while_in_flight() {
        let backend = MemoryBackend::new(
            Vec::new(),
            BackendOptions::with_latency(Duration::ZERO, Duration::from_millis(300)),
        );
        let store = TaskStore::new(backend);

        let worker = store.clone();
        let handle = tokio::spawn(async move { worker.create_remote("Slow create").await });

        // Let the spawned operation apply its optimistic prepend.
        tokio::time::sleep(Duration::from_millis(10)).await;
        let state = store.snapshot();
        assert_eq!(state.items.len(), 1, "placeholder visible immediately");
        let placeholder_id = state.items[0].id;

        let task = handle.await.unwrap().unwrap();
        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, task.id);
        assert_ne!(state.items[0].id, placeholder_id);
    }

    #[tokio::test]
    async fn update_remote_reconciles_authoritative_record() {
        let store = instant_store(Vec::new());
        let task = store.create_remote("Original").await.unwrap();

        let updated = store
            .update_remote(task.id, TaskPatch::title("Renamed"))
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        let state = store.snapshot();
        assert_eq!(state.items[0].title, "Renamed");
        assert_eq!(state.items[0].updated_at, updated.updated_at);
    }

    #[tokio::test]
    async fn update_remote_failure_keeps_optimistic_state() {
        let store = instant_store(Vec::new());
        let task = store.create_remote("Original").await.unwrap();

        store.backend().failure_switch().set(true);
        let result = store
            .update_remote(task.id, TaskPatch::title("Renamed"))
            .await;
        assert!(matches!(result, Err(StoreError::Backend(_))));

        // Known gap: the optimistic rename survives the failed write.
        assert_eq!(store.snapshot().items[0].title, "Renamed");
    }

    #[tokio::test(start_paused = true)]
    async fn stale_update_confirmation_is_dropped_after_local_delete() {
        let backend = MemoryBackend::new(
            Vec::new(),
            BackendOptions::with_latency(Duration::ZERO, Duration::from_millis(300)),
        );
        let store = TaskStore::new(backend);
        let task = store.create_remote("Ephemeral").await.unwrap();

        let worker = store.clone();
        let id = task.id;
        let handle =
            tokio::spawn(async move { worker.update_remote(id, TaskPatch::title("Late")).await });

        // Delete locally while the update is still in flight.
        tokio::time::sleep(Duration::from_millis(10)).await;
        store.apply(|s| s.delete_task_optimistic(id));

        handle.await.unwrap().unwrap();
        assert!(
            store.snapshot().items.is_empty(),
            "stale confirmation must not resurrect the task"
        );
    }

    #[tokio::test]
    async fn delete_remote_removes_locally_and_remotely() {
        let store = instant_store(Vec::new());
        let task = store.create_remote("Doomed").await.unwrap();

        store.delete_remote(task.id).await.unwrap();

        assert!(store.snapshot().items.is_empty());
        assert!(store.backend().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_remote_not_found_keeps_local_removal() {
        let store = instant_store(Vec::new());
        let task = store.create_remote("Once").await.unwrap();

        // First delete succeeds; the repeat is NotFound but the local
        // view stays deleted.
        store.delete_remote(task.id).await.unwrap();
        let result = store.delete_remote(task.id).await;
        assert!(matches!(
            result,
            Err(StoreError::Backend(BackendError::NotFound(_)))
        ));
        assert!(store.snapshot().items.is_empty());
    }

    #[tokio::test]
    async fn toggle_remote_confirms_inverted_status() {
        let store = instant_store(Vec::new());
        let task = store.create_remote("Flip me").await.unwrap();

        let toggled = store.toggle_remote(task.id, task.status).await.unwrap();
        assert_eq!(toggled.status, TaskStatus::Completed);
        assert_eq!(store.snapshot().items[0].status, TaskStatus::Completed);

        let toggled = store.toggle_remote(task.id, toggled.status).await.unwrap();
        assert_eq!(toggled.status, TaskStatus::Pending);
        assert_eq!(store.snapshot().items[0].status, TaskStatus::Pending);
    }

    #[tokio::test]
    async fn overlapping_updates_last_to_resolve_wins() {
        let store = instant_store(Vec::new());
        let task = store.create_remote("Contested").await.unwrap();

        let (a, b) = tokio::join!(
            store.update_remote(task.id, TaskPatch::title("From A")),
            store.update_remote(task.id, TaskPatch::title("From B")),
        );
        a.unwrap();
        b.unwrap();

        let final_title = store.snapshot().items[0].title.clone();
        assert!(
            final_title == "From A" || final_title == "From B",
            "one of the racing writes must win, got {final_title:?}"
        );
        // The backend agrees with whichever write resolved last.
        let canonical = store.backend().list().await.unwrap();
        assert_eq!(canonical[0].title, final_title);
    }

    #[tokio::test]
    async fn filter_and_search_dispatch_through_the_store() {
        let store = instant_store(sample_tasks());
        store.fetch_all().await.unwrap();

        store.set_filter(StatusFilter::Completed);
        store.set_search_query("environment");

        let state = store.snapshot();
        assert_eq!(state.filter, StatusFilter::Completed);
        assert_eq!(state.search_query, "environment");

        let visible = crate::select::filtered_tasks(&state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Set up the development environment");
    }
}
