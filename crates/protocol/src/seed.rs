//! Sample data for demonstration and first-run seeding.
//!
//! This module provides a small set of realistic tasks used to populate
//! the backend when no stored data exists yet.

use chrono::{Duration, Utc};

use crate::task::{Task, TaskId, TaskStatus};

/// Generates a small sample task list.
///
/// Returns five tasks in insertion-recency order (newest first): three
/// pending and two completed, with creation times staggered over the last
/// half hour.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{TaskStatus, sample_tasks};
///
/// let tasks = sample_tasks();
/// assert_eq!(tasks.len(), 5);
/// assert!(tasks.iter().any(|t| t.status == TaskStatus::Completed));
/// ```
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    let now = Utc::now();

    // (title, completed, minutes since creation)
    let entries: [(&str, bool, i64); 5] = [
        ("Build the task list view", false, 5),
        ("Wire up the in-memory backend", false, 10),
        ("Sketch the dashboard layout", false, 15),
        ("Set up the development environment", true, 25),
        ("Review project requirements", true, 30),
    ];

    entries
        .into_iter()
        .map(|(title, completed, age_minutes)| {
            let created_at = now - Duration::minutes(age_minutes);
            // Completed tasks were ticked off a few minutes after creation.
            let updated_at = if completed {
                created_at + Duration::minutes(2)
            } else {
                created_at
            };
            Task {
                id: TaskId::new_v4(),
                title: title.to_string(),
                status: if completed {
                    TaskStatus::Completed
                } else {
                    TaskStatus::Pending
                },
                created_at,
                updated_at,
            }
        })
        .collect()
}
