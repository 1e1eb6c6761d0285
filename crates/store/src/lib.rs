//! Task state container for taskdeck.
//!
//! This crate is the client's single source of truth for tasks and their
//! request lifecycle. It mediates between optimistic local edits and
//! asynchronous backend confirmation, computes the derived views the
//! dashboard renders, and coordinates the bounded undo window for
//! deletions.
//!
//! # Overview
//!
//! - [`state`]: [`TasksState`] and its synchronous optimistic mutations
//! - [`store`]: [`TaskStore`], the clonable dispatch handle with the
//!   asynchronous confirmation operations
//! - [`select`]: pure derived views (filtered list, counts)
//! - [`undo`]: the delete/restore coordinator
//! - [`error`]: error types for container operations
//!
//! # Data flow
//!
//! A user action applies an optimistic mutation immediately, then issues
//! one backend call; the confirmation either reconciles the authoritative
//! record into the state or surfaces an error. The full-list fetch is the
//! only operation tracked in [`TasksState::request`]; per-item failures
//! are reported to the caller.
//!
//! # Examples
//!
//! ```
//! use taskdeck_backend::{BackendOptions, MemoryBackend};
//! use taskdeck_protocol::StatusFilter;
//! use taskdeck_store::{TaskStore, counts, filtered_tasks};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), taskdeck_store::StoreError> {
//! let store = TaskStore::new(MemoryBackend::new(Vec::new(), BackendOptions::instant()));
//!
//! let task = store.create_remote("Buy milk").await?;
//! store.toggle_remote(task.id, task.status).await?;
//!
//! let state = store.snapshot();
//! assert_eq!(counts(&state).completed, 1);
//!
//! store.set_filter(StatusFilter::Pending);
//! assert!(filtered_tasks(&store.snapshot()).is_empty());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod select;
pub mod state;
pub mod store;
pub mod undo;

// Re-export primary types at crate root for convenience
pub use error::{Result, StoreError};
pub use select::{TaskCounts, counts, filtered_tasks};
pub use state::TasksState;
pub use store::TaskStore;
pub use undo::{UndoCoordinator, UndoSnapshot};
