//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Height of the header section in rows.
///
/// The header displays the application title, a tagline, and the
/// completion gauge inside a bordered block.
pub const HEADER_HEIGHT: u16 = 5;

/// Height of the filter tab bar in rows (bordered single line).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the input line in rows (bordered single line).
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the footer status bar in rows (bordered single line).
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering without the header.
///
/// Filter bar, input line, status bar, and at least three rows of task
/// list.
pub const MIN_HEIGHT: u16 = FILTER_BAR_HEIGHT + INPUT_HEIGHT + STATUS_BAR_HEIGHT + 3;

/// Minimum terminal height for rendering with the header.
///
/// When terminal height is between `MIN_HEIGHT` and
/// `MIN_HEIGHT_WITH_HEADER`, the header is hidden to reclaim rows for the
/// task list.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;
