//! Derived views over the task state.
//!
//! Pure functions recomputed on every call; the input sizes are small
//! enough that memoization would buy nothing.

use taskdeck_protocol::{Task, TaskStatus};

use crate::state::TasksState;

/// Aggregate counts over the full (unfiltered) task list.
///
/// Invariant: `pending + completed == all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    /// Total number of tasks.
    pub all: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskCounts {
    /// Returns the completion percentage, rounded to the nearest integer.
    ///
    /// An empty list counts as 0% complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_store::TaskCounts;
    ///
    /// let counts = TaskCounts { all: 3, pending: 2, completed: 1 };
    /// assert_eq!(counts.completion_percent(), 33);
    ///
    /// assert_eq!(TaskCounts::default().completion_percent(), 0);
    /// ```
    #[must_use]
    pub fn completion_percent(&self) -> u16 {
        if self.all == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let percent = (self.completed as f64 / self.all as f64 * 100.0).round() as u16;
        percent
    }
}

/// Returns the tasks visible under the current filter and search query.
///
/// The result is an order-preserving subsequence of `state.items`: a task
/// is included when its status passes the filter AND its title contains
/// the search query case-insensitively (vacuously true for an empty
/// query).
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{StatusFilter, Task};
/// use taskdeck_store::{TasksState, filtered_tasks};
///
/// let mut state = TasksState::default();
/// state.add_task_optimistic(Task::new("Walk dog").unwrap());
/// state.add_task_optimistic(Task::new("Buy Milk").unwrap());
///
/// state.set_search_query("milk");
/// let visible = filtered_tasks(&state);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].title, "Buy Milk");
/// ```
#[must_use]
pub fn filtered_tasks(state: &TasksState) -> Vec<&Task> {
    let query = state.search_query.to_lowercase();
    state
        .items
        .iter()
        .filter(|task| state.filter.matches(task.status))
        .filter(|task| query.is_empty() || task.title.to_lowercase().contains(&query))
        .collect()
}

/// Returns aggregate counts over the full task list.
///
/// Counts ignore the active filter and search query: the filter bar shows
/// totals for the whole collection.
#[must_use]
pub fn counts(state: &TasksState) -> TaskCounts {
    let pending = state
        .items
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .count();
    TaskCounts {
        all: state.items.len(),
        pending,
        completed: state.items.len() - pending,
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;
    use taskdeck_protocol::StatusFilter;

    prop_compose! {
        fn arb_state()(statuses in proptest::collection::vec(any::<bool>(), 0..40)) -> TasksState {
            let mut state = TasksState::default();
            for (i, completed) in statuses.into_iter().enumerate() {
                let mut task = Task::new(format!("Task {i}")).expect("valid title");
                if completed {
                    task.set_status(TaskStatus::Completed);
                }
                state.add_task_optimistic(task);
            }
            state
        }
    }

    proptest! {
        /// `pending + completed == all` for any collection.
        #[test]
        fn counts_partition_the_collection(state in arb_state()) {
            let counts = counts(&state);
            prop_assert_eq!(counts.pending + counts.completed, counts.all);
            prop_assert_eq!(counts.all, state.items.len());
        }

        /// The filtered view is always an order-preserving subsequence.
        #[test]
        fn filtered_view_preserves_order(mut state in arb_state()) {
            state.set_filter(StatusFilter::Pending);
            let visible = filtered_tasks(&state);

            let mut cursor = 0;
            for task in visible {
                let pos = state.items[cursor..]
                    .iter()
                    .position(|t| t.id == task.id)
                    .expect("filtered task must come from items, in order");
                cursor += pos + 1;
            }
        }

        /// Completion percent stays within 0..=100.
        #[test]
        fn completion_percent_is_bounded(state in arb_state()) {
            prop_assert!(counts(&state).completion_percent() <= 100);
        }
    }
}
