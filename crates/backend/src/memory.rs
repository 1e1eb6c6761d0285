//! In-memory task store with simulated network behavior.
//!
//! [`MemoryBackend`] owns the canonical task collection for a running
//! dashboard. Each operation sleeps for the configured latency, then fails
//! wholesale if the failure switch is on, then mutates the collection and
//! (when storage is configured) rewrites the JSON blob on disk.
//!
//! Instances carry their own collection and their own switch; there is no
//! process-wide state, so tests construct isolated backends.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use taskdeck_protocol::{Task, TaskId, TaskPatch};

use crate::backend::{BackendOptions, FailureSwitch, TaskBackend};
use crate::error::{BackendError, Result};
use crate::storage::TaskFile;

/// A simulated remote task store.
///
/// # Examples
///
/// ```
/// use taskdeck_backend::{BackendOptions, MemoryBackend, TaskBackend};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> taskdeck_backend::Result<()> {
/// let backend = MemoryBackend::new(Vec::new(), BackendOptions::instant());
///
/// let task = backend.create("Write documentation").await?;
/// let tasks = backend.list().await?;
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].id, task.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryBackend {
    /// The canonical collection, newest first.
    tasks: Mutex<Vec<Task>>,
    options: BackendOptions,
    storage: Option<TaskFile>,
}

impl MemoryBackend {
    /// Creates a backend over the given initial collection, with no
    /// on-disk persistence.
    #[must_use]
    pub fn new(initial: Vec<Task>, options: BackendOptions) -> Self {
        Self {
            tasks: Mutex::new(initial),
            options,
            storage: None,
        }
    }

    /// Creates a backend persisted to a JSON file.
    ///
    /// If the file exists its contents become the initial collection and
    /// `seed` is ignored; otherwise the backend starts from `seed` and the
    /// file is first written on the next successful mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskdeck_backend::{BackendOptions, MemoryBackend};
    /// use taskdeck_protocol::sample_tasks;
    ///
    /// # fn main() -> taskdeck_backend::Result<()> {
    /// let backend = MemoryBackend::with_storage(
    ///     "tasks.json",
    ///     sample_tasks(),
    ///     BackendOptions::default(),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_storage(
        path: impl Into<std::path::PathBuf>,
        seed: Vec<Task>,
        options: BackendOptions,
    ) -> Result<Self> {
        let file = TaskFile::new(path);
        let initial = match file.load()? {
            Some(tasks) => {
                debug!(count = tasks.len(), path = %file.path().display(), "loaded stored tasks");
                tasks
            }
            None => {
                debug!(count = seed.len(), "no stored tasks, starting from seed");
                seed
            }
        };

        Ok(Self {
            tasks: Mutex::new(initial),
            options,
            storage: Some(file),
        })
    }

    /// Returns a handle to this backend's failure switch.
    ///
    /// Flipping the returned switch makes every subsequent operation fail
    /// with [`BackendError::Unavailable`] until it is flipped back.
    #[must_use]
    pub fn failure_switch(&self) -> FailureSwitch {
        self.options.failure.clone()
    }

    /// Sleeps for the injected latency, if any.
    async fn pause(&self, latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    /// Fails the operation if the failure switch is on.
    fn ensure_available(&self) -> Result<()> {
        if self.options.failure.is_on() {
            return Err(BackendError::Unavailable);
        }
        Ok(())
    }

    /// Rewrites the storage file, if storage is configured.
    fn persist(&self, tasks: &[Task]) -> Result<()> {
        if let Some(file) = &self.storage {
            file.save(tasks)?;
            debug!(count = tasks.len(), path = %file.path().display(), "task store persisted");
        }
        Ok(())
    }
}

#[async_trait]
impl TaskBackend for MemoryBackend {
    async fn list(&self) -> Result<Vec<Task>> {
        self.pause(self.options.fetch_latency).await;
        self.ensure_available()?;

        let tasks = self.tasks.lock().await;
        debug!(count = tasks.len(), "listing tasks");
        Ok(tasks.clone())
    }

    async fn create(&self, title: &str) -> Result<Task> {
        self.pause(self.options.write_latency).await;
        self.ensure_available()?;

        let task = Task::new(title)?;

        let mut tasks = self.tasks.lock().await;
        tasks.insert(0, task.clone());
        self.persist(&tasks)?;

        debug!(id = %task.id, "task created");
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        self.pause(self.options.write_latency).await;
        self.ensure_available()?;

        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BackendError::NotFound(id))?;

        task.apply_patch(&patch);
        let updated = task.clone();
        self.persist(&tasks)?;

        debug!(id = %updated.id, "task updated");
        Ok(updated)
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        self.pause(self.options.write_latency).await;
        self.ensure_available()?;

        let mut tasks = self.tasks.lock().await;
        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(BackendError::NotFound(id))?;

        tasks.remove(pos);
        self.persist(&tasks)?;

        debug!(%id, "task deleted");
        Ok(())
    }
}
