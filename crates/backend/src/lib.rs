//! Simulated task store backend for taskdeck.
//!
//! This crate owns the canonical task collection and exposes it through
//! the asynchronous [`TaskBackend`] contract: list, create, update, and
//! delete. The bundled [`MemoryBackend`] behaves like a slow, flaky remote
//! service on demand - every operation carries injected latency and can be
//! made to fail wholesale through a shared [`FailureSwitch`] - while
//! optionally persisting the collection to a single JSON file.
//!
//! # Overview
//!
//! - [`backend`]: the `TaskBackend` trait, `BackendOptions`, and the
//!   failure switch
//! - [`memory`]: the in-memory implementation
//! - [`storage`]: whole-file JSON persistence
//! - [`error`]: error types for backend operations
//!
//! # Examples
//!
//! ```
//! use taskdeck_backend::{BackendOptions, MemoryBackend, TaskBackend};
//! use taskdeck_protocol::TaskPatch;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> taskdeck_backend::Result<()> {
//! let backend = MemoryBackend::new(Vec::new(), BackendOptions::instant());
//!
//! let task = backend.create("Ship the release").await?;
//! backend.update(task.id, TaskPatch::title("Ship v1.0")).await?;
//! backend.delete(task.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod memory;
pub mod storage;

// Re-export primary types at crate root for convenience
pub use backend::{BackendOptions, FailureSwitch, TaskBackend};
pub use error::{BackendError, Result};
pub use memory::MemoryBackend;
pub use storage::TaskFile;
