//! Undo coordination for task deletion.
//!
//! Deleting a task is reversible within a bounded grace period. The
//! coordinator remembers the most recently deleted task and its original
//! position; only one snapshot is live at a time, so a second delete makes
//! the first permanent. Restoring reinstates the local view only - the
//! backend is not asked to re-create the task.

use std::time::Duration;

use tokio::time::Instant;

use taskdeck_protocol::Task;

/// A deleted task remembered for potential restoration.
#[derive(Debug, Clone)]
pub struct UndoSnapshot {
    /// The task as it was at deletion time.
    pub task: Task,
    /// The task's index in the unfiltered list at deletion time.
    pub index: usize,
}

/// Tracks the most recent deletion and its undo deadline.
///
/// Deadlines use [`tokio::time::Instant`], so tests can drive expiry with
/// a paused clock.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Task;
/// use taskdeck_store::UndoCoordinator;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut undo = UndoCoordinator::new();
/// let task = Task::new("Oops").unwrap();
///
/// undo.arm(task.clone(), 0);
/// let snapshot = undo.take().expect("window still open");
/// assert_eq!(snapshot.task.id, task.id);
///
/// // Consumed: a second take finds nothing.
/// assert!(undo.take().is_none());
/// # }
/// ```
#[derive(Debug)]
pub struct UndoCoordinator {
    slot: Option<Armed>,
    window: Duration,
}

#[derive(Debug)]
struct Armed {
    snapshot: UndoSnapshot,
    deadline: Instant,
}

impl UndoCoordinator {
    /// The default grace period for undoing a deletion.
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(5);

    /// Creates a coordinator with the default 5-second window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    /// Creates a coordinator with a custom undo window.
    #[must_use]
    pub fn with_window(window: Duration) -> Self {
        Self { slot: None, window }
    }

    /// Records a deletion, replacing any previous snapshot.
    ///
    /// Only one undo is live at a time: arming while a snapshot is pending
    /// makes the earlier deletion permanent.
    pub fn arm(&mut self, task: Task, index: usize) {
        self.slot = Some(Armed {
            snapshot: UndoSnapshot { task, index },
            deadline: Instant::now() + self.window,
        });
    }

    /// Consumes the pending snapshot, if its window is still open.
    ///
    /// An expired snapshot is discarded and `None` is returned.
    pub fn take(&mut self) -> Option<UndoSnapshot> {
        let armed = self.slot.take()?;
        if Instant::now() >= armed.deadline {
            return None;
        }
        Some(armed.snapshot)
    }

    /// Discards the pending snapshot, if any.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Returns `true` if a snapshot is pending and its window is open.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|armed| Instant::now() < armed.deadline)
    }

    /// Returns the time left in the undo window, if a snapshot is pending.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let armed = self.slot.as_ref()?;
        let now = Instant::now();
        (now < armed.deadline).then(|| armed.deadline - now)
    }

    /// Drops the snapshot if its window has closed.
    ///
    /// Called periodically by the UI so an expired toast disappears even
    /// when the user never presses undo.
    pub fn expire(&mut self) {
        if !self.is_armed() {
            self.slot = None;
        }
    }
}

impl Default for UndoCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
