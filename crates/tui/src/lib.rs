//! Terminal UI for the taskdeck application.
//!
//! This crate provides a Ratatui-based dashboard for managing tasks:
//! add, toggle, edit, delete with undo, filter, and search - with the
//! completion gauge and a confetti burst on completions.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: UI-local state (input modes, selection, notices)
//! - [`event`]: Event polling and mode-aware key mappings
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`layout`]: Shared layout constants
//! - [`widgets`]: Rendering functions for each dashboard section
//!
//! # Example
//!
//! ```no_run
//! use taskdeck_backend::{BackendOptions, MemoryBackend};
//! use taskdeck_store::TaskStore;
//! use taskdeck_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let store = TaskStore::new(MemoryBackend::new(Vec::new(), BackendOptions::default()));
//!     let mut app = App::new(store, std::time::Duration::from_secs(5));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{InputMode, UiState};
