//! Status bar rendering widget.
//!
//! The footer shows, in priority order: the undo toast with its
//! countdown, a transient notice (usually an operation failure), or the
//! standard keybinding hints.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the footer status bar with keybinding hints.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------+
/// | a Add  / Search  Enter Toggle  d Delete  ? Help    |
/// +----------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 70, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(area, &mut buf);
/// ```
pub fn render_status_bar(area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints = Line::from(vec![
        Span::styled("a", key_style),
        Span::styled(" Add  ", text_style),
        Span::styled("/", key_style),
        Span::styled(" Search  ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(" Toggle  ", text_style),
        Span::styled("d", key_style),
        Span::styled(" Delete  ", text_style),
        Span::styled("?", key_style),
        Span::styled(" Help", text_style),
    ]);

    Paragraph::new(hints)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

/// Renders the status bar with the undo toast and countdown.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_tui::widgets::render_undo_toast;
///
/// let area = Rect::new(0, 0, 70, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_undo_toast(Duration::from_secs(4), area, &mut buf);
/// ```
pub fn render_undo_toast(remaining: Duration, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    // Ceiling, so the toast never shows "0s" while undo still works.
    let seconds = remaining.as_millis().div_ceil(1000);

    let line = Line::from(vec![
        Span::styled("Task deleted", Style::default().fg(Color::Cyan)),
        Span::styled("  |  ", text_style),
        Span::styled("u", key_style),
        Span::styled(format!(" Undo ({seconds}s)"), text_style),
    ]);

    Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

/// Renders the status bar with a transient notice message.
pub fn render_notice(message: &str, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        Span::styled("  |  ", Style::default().fg(Color::White)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" Help", Style::default().fg(Color::White)),
    ]);

    Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn status_bar_shows_key_hints() {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        render_status_bar(area, &mut buf);

        let output = buffer_to_string(&buf);
        assert!(output.contains("Add"));
        assert!(output.contains("Search"));
        assert!(output.contains("Toggle"));
        assert!(output.contains("Delete"));
        assert!(output.contains("Help"));
    }

    #[test]
    fn undo_toast_shows_countdown() {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        render_undo_toast(Duration::from_millis(3200), area, &mut buf);

        let output = buffer_to_string(&buf);
        assert!(output.contains("Task deleted"));
        assert!(output.contains("Undo (4s)"));
    }

    #[test]
    fn notice_shows_message() {
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        render_notice("Failed to delete task: the task service is unavailable", area, &mut buf);

        let output = buffer_to_string(&buf);
        assert!(output.contains("Failed to delete task"));
    }
}
