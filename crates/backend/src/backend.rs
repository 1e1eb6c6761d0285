//! The task store backend contract.
//!
//! This module defines the asynchronous interface the state container talks
//! to, plus the knobs (latency, failure switch) used to make the simulated
//! implementation behave like a remote service.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use taskdeck_protocol::{Task, TaskId, TaskPatch};

use crate::error::Result;

/// The asynchronous task store contract.
///
/// The backend owns the canonical task collection; every record returned by
/// a successful call is authoritative. Implementations are expected to be
/// shared behind an `Arc`, so all methods take `&self`.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Returns a snapshot copy of all tasks, newest first.
    async fn list(&self) -> Result<Vec<Task>>;

    /// Creates a new pending task with the given title and prepends it to
    /// the canonical collection.
    ///
    /// The backend assigns the id and both timestamps; the title is
    /// trimmed and must not be empty.
    async fn create(&self, title: &str) -> Result<Task>;

    /// Merges the patch into the task with the given id and refreshes its
    /// `updated_at` timestamp.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task>;

    /// Removes the task with the given id.
    async fn delete(&self, id: TaskId) -> Result<()>;
}

/// A shared toggle that makes every backend operation fail.
///
/// Clones share the same underlying flag, so a test (or the demo
/// configuration) can hold a handle while the backend holds another.
///
/// # Examples
///
/// ```
/// use taskdeck_backend::FailureSwitch;
///
/// let switch = FailureSwitch::new();
/// assert!(!switch.is_on());
///
/// let handle = switch.clone();
/// handle.set(true);
/// assert!(switch.is_on());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FailureSwitch(Arc<AtomicBool>);

impl FailureSwitch {
    /// Creates a new switch in the off position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns failure simulation on or off.
    pub fn set(&self, on: bool) {
        self.0.store(on, Ordering::Relaxed);
    }

    /// Returns `true` if failure simulation is active.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Behavioral knobs for a simulated backend instance.
///
/// Defaults mimic a reasonably slow network: 400 ms for the full-list
/// fetch and 300 ms for item mutations.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taskdeck_backend::BackendOptions;
///
/// let options = BackendOptions::default();
/// assert_eq!(options.fetch_latency, Duration::from_millis(400));
///
/// let instant = BackendOptions::instant();
/// assert!(instant.fetch_latency.is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct BackendOptions {
    /// Injected delay before the full-list fetch resolves.
    pub fetch_latency: Duration,
    /// Injected delay before create/update/delete resolve.
    pub write_latency: Duration,
    /// Shared failure toggle.
    pub failure: FailureSwitch,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            fetch_latency: Duration::from_millis(400),
            write_latency: Duration::from_millis(300),
            failure: FailureSwitch::new(),
        }
    }
}

impl BackendOptions {
    /// Creates options with no injected latency, for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            fetch_latency: Duration::ZERO,
            write_latency: Duration::ZERO,
            failure: FailureSwitch::new(),
        }
    }

    /// Creates options with the given latencies and a fresh switch.
    #[must_use]
    pub fn with_latency(fetch: Duration, write: Duration) -> Self {
        Self {
            fetch_latency: fetch,
            write_latency: write,
            failure: FailureSwitch::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_switch_clones_share_state() {
        let switch = FailureSwitch::new();
        let handle = switch.clone();

        assert!(!switch.is_on());
        handle.set(true);
        assert!(switch.is_on());
        switch.set(false);
        assert!(!handle.is_on());
    }

    #[test]
    fn default_options_have_network_like_latency() {
        let options = BackendOptions::default();
        assert_eq!(options.fetch_latency, Duration::from_millis(400));
        assert_eq!(options.write_latency, Duration::from_millis(300));
        assert!(!options.failure.is_on());
    }

    #[test]
    fn instant_options_have_zero_latency() {
        let options = BackendOptions::instant();
        assert!(options.fetch_latency.is_zero());
        assert!(options.write_latency.is_zero());
    }
}
