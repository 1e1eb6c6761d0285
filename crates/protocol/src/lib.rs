//! Shared protocol types for the taskdeck application.
//!
//! This crate defines the core types used across all taskdeck components,
//! including tasks, view filters, request lifecycle states, TUI messages,
//! and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, statuses, patches, and the `Task` struct
//! - [`filter`]: Status filters and the full-list fetch lifecycle
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//! - [`seed`]: Sample tasks for demonstration and first-run seeding
//!
//! # Examples
//!
//! Creating and mutating tasks:
//!
//! ```
//! use taskdeck_protocol::{StatusFilter, Task, TaskStatus};
//!
//! let mut task = Task::new("Write the release notes").unwrap();
//! assert_eq!(task.status, TaskStatus::Pending);
//!
//! task.toggle_status();
//! assert!(task.status.is_completed());
//! assert!(StatusFilter::Completed.matches(task.status));
//! ```

pub mod error;
pub mod filter;
pub mod message;
pub mod seed;
pub mod task;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use filter::{RequestStatus, StatusFilter};
pub use message::Message;
pub use seed::sample_tasks;
pub use task::{Task, TaskId, TaskPatch, TaskStatus};

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn arb_title()(title in "[a-zA-Z][a-zA-Z0-9 ]{0,50}") -> String {
            title
        }
    }

    proptest! {
        /// Any non-empty title survives construction trimmed, pending, and
        /// with equal timestamps.
        #[test]
        fn task_new_normalizes(title in arb_title()) {
            let task = Task::new(title.clone()).expect("generated titles are non-empty");
            prop_assert_eq!(task.title.as_str(), title.trim());
            prop_assert_eq!(task.status, TaskStatus::Pending);
            prop_assert_eq!(task.created_at, task.updated_at);
        }

        /// A task passes exactly one of the two specific filters, and
        /// always passes `All`.
        #[test]
        fn filters_partition_statuses(completed in any::<bool>()) {
            let status = if completed { TaskStatus::Completed } else { TaskStatus::Pending };
            prop_assert!(StatusFilter::All.matches(status));
            prop_assert_ne!(
                StatusFilter::Pending.matches(status),
                StatusFilter::Completed.matches(status)
            );
        }
    }
}
