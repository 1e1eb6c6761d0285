//! View filtering and request lifecycle types.
//!
//! This module defines the status filter applied to the visible task list
//! and the lifecycle states of the full-list fetch.

use serde::{Deserialize, Serialize};

use crate::task::TaskStatus;

/// Which tasks the dashboard shows.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{StatusFilter, TaskStatus};
///
/// assert!(StatusFilter::All.matches(TaskStatus::Pending));
/// assert!(!StatusFilter::Completed.matches(TaskStatus::Pending));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Show every task.
    #[default]
    All,
    /// Show only pending tasks.
    Pending,
    /// Show only completed tasks.
    Completed,
}

impl StatusFilter {
    /// Returns all filters in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::StatusFilter;
    ///
    /// let filters = StatusFilter::all();
    /// assert_eq!(filters.len(), 3);
    /// assert_eq!(filters[0], StatusFilter::All);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::All, Self::Pending, Self::Completed]
    }

    /// Returns `true` if a task with the given status passes this filter.
    #[must_use]
    pub const fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => matches!(status, TaskStatus::Pending),
            Self::Completed => matches!(status, TaskStatus::Completed),
        }
    }

    /// Returns a human-readable display name for the filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::StatusFilter;
    ///
    /// assert_eq!(StatusFilter::All.display_name(), "All");
    /// assert_eq!(StatusFilter::Pending.display_name(), "Pending");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// The lifecycle of the most recent full-list fetch.
///
/// This tracks the fetch of the whole collection only; individual item
/// mutations are not centrally tracked. Every state is re-enterable: a new
/// fetch moves any state back to `Loading`.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::RequestStatus;
///
/// let status = RequestStatus::Idle;
/// assert!(!status.is_loading());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The most recent fetch completed successfully.
    Succeeded,
    /// The most recent fetch failed.
    Failed,
}

impl RequestStatus {
    /// Returns `true` if a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if the most recent fetch failed.
    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Returns `true` if the most recent fetch completed successfully.
    #[must_use]
    pub const fn is_succeeded(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_all_matches_everything() {
        assert!(StatusFilter::All.matches(TaskStatus::Pending));
        assert!(StatusFilter::All.matches(TaskStatus::Completed));
    }

    #[test]
    fn filter_pending_matches_pending_only() {
        assert!(StatusFilter::Pending.matches(TaskStatus::Pending));
        assert!(!StatusFilter::Pending.matches(TaskStatus::Completed));
    }

    #[test]
    fn filter_completed_matches_completed_only() {
        assert!(!StatusFilter::Completed.matches(TaskStatus::Pending));
        assert!(StatusFilter::Completed.matches(TaskStatus::Completed));
    }

    #[test]
    fn filter_default_is_all() {
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }

    #[test]
    fn request_status_default_is_idle() {
        assert_eq!(RequestStatus::default(), RequestStatus::Idle);
    }

    #[test]
    fn request_status_predicates() {
        assert!(RequestStatus::Loading.is_loading());
        assert!(RequestStatus::Failed.is_failed());
        assert!(RequestStatus::Succeeded.is_succeeded());
        assert!(!RequestStatus::Idle.is_loading());
        assert!(!RequestStatus::Idle.is_failed());
        assert!(!RequestStatus::Idle.is_succeeded());
    }

    #[test]
    fn filter_json_format() {
        let json = serde_json::to_string(&StatusFilter::Pending).expect("serialize");
        assert_eq!(json, r#""pending""#);

        let json = serde_json::to_string(&RequestStatus::Succeeded).expect("serialize");
        assert_eq!(json, r#""succeeded""#);
    }
}
