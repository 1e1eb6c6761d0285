//! Header rendering widget.
//!
//! The header shows the application title, a tagline, and the completion
//! gauge driven by the task counts.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use taskdeck_store::TaskCounts;

/// Renders the dashboard header with the completion gauge.
///
/// # Layout
///
/// ```text
/// +-- taskdeck ----------------------------------------+
/// | Task Dashboard                                     |
/// | Manage your daily tasks efficiently                |
/// | ██████████░░░░░░░░░░░░░░░░░░ 33% complete          |
/// +----------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_store::TaskCounts;
/// use taskdeck_tui::widgets::render_header;
///
/// let area = Rect::new(0, 0, 60, 5);
/// let mut buf = Buffer::empty(area);
/// let counts = TaskCounts { all: 3, pending: 2, completed: 1 };
///
/// render_header(&counts, area, &mut buf);
/// ```
pub fn render_header(counts: &TaskCounts, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            " taskdeck ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    block.render(area, buf);

    let [title_area, tagline_area, gauge_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(Line::from(Span::styled(
        "Task Dashboard",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .render(title_area, buf);

    Paragraph::new(Line::from(Span::styled(
        "Manage your daily tasks efficiently",
        Style::default().fg(Color::DarkGray),
    )))
    .render(tagline_area, buf);

    let percent = counts.completion_percent();
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .percent(percent)
        .label(format!("{percent}% complete"))
        .render(gauge_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(counts: &TaskCounts) -> String {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        render_header(counts, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn header_shows_title_and_tagline() {
        let output = render(&TaskCounts::default());
        assert!(output.contains("taskdeck"));
        assert!(output.contains("Task Dashboard"));
        assert!(output.contains("Manage your daily tasks efficiently"));
    }

    #[test]
    fn header_shows_completion_percent() {
        let counts = TaskCounts {
            all: 4,
            pending: 1,
            completed: 3,
        };
        let output = render(&counts);
        assert!(output.contains("75% complete"));
    }

    #[test]
    fn empty_list_counts_as_zero_percent() {
        let output = render(&TaskCounts::default());
        assert!(output.contains("0% complete"));
    }
}
