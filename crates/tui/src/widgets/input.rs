//! Input line rendering widget.
//!
//! A single bordered row that doubles as the add/search/edit entry field.
//! In normal mode it shows the active search query (if any) or a hint.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::InputMode;

/// Renders the input line for the current mode.
///
/// While entering text, a block cursor is appended to the buffer contents
/// so the user can see where typing lands.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_tui::state::InputMode;
/// use taskdeck_tui::widgets::render_input_line;
///
/// let area = Rect::new(0, 0, 60, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_input_line(InputMode::AddingTask, "Buy mil", "", area, &mut buf);
/// ```
pub fn render_input_line(
    mode: InputMode,
    input: &str,
    search_query: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    let (title, line) = match mode {
        InputMode::AddingTask => (
            " New task ",
            Line::from(vec![
                Span::raw(input.to_string()),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ]),
        ),
        InputMode::Searching => (
            " Search ",
            Line::from(vec![
                Span::raw(input.to_string()),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ]),
        ),
        InputMode::EditingTask { .. } => (
            " Edit task ",
            Line::from(vec![
                Span::raw(input.to_string()),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ]),
        ),
        InputMode::Normal if !search_query.is_empty() => (
            " Search ",
            Line::from(vec![
                Span::raw(search_query.to_string()),
                Span::styled(
                    "  (/ to edit, Esc to clear)",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ),
        InputMode::Normal => (
            " New task ",
            Line::from(Span::styled(
                "What needs to be done? (press a)",
                Style::default().fg(Color::DarkGray),
            )),
        ),
    };

    Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(title))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use taskdeck_protocol::TaskId;

    fn render(mode: InputMode, input: &str, query: &str) -> String {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        render_input_line(mode, input, query, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn normal_mode_shows_placeholder_hint() {
        let output = render(InputMode::Normal, "", "");
        assert!(output.contains("What needs to be done?"));
    }

    #[test]
    fn normal_mode_shows_active_query() {
        let output = render(InputMode::Normal, "", "milk");
        assert!(output.contains("Search"));
        assert!(output.contains("milk"));
    }

    #[test]
    fn adding_mode_echoes_the_buffer() {
        let output = render(InputMode::AddingTask, "Buy mil", "");
        assert!(output.contains("New task"));
        assert!(output.contains("Buy mil"));
    }

    #[test]
    fn editing_mode_uses_edit_title() {
        let mode = InputMode::EditingTask {
            id: TaskId::new_v4(),
        };
        let output = render(mode, "Renamed", "");
        assert!(output.contains("Edit task"));
        assert!(output.contains("Renamed"));
    }
}
