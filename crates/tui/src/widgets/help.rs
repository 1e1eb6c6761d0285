//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available
//! keybindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 38;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 20;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content; the area
/// behind it is cleared first.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    // Clear the area behind the popup for a clean look
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the help content lines.
fn build_help_lines() -> Vec<Line<'static>> {
    let section_style = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let entry = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::default(),
        Line::from(Span::styled("  Navigation", section_style)),
        entry("↑ / ↓", "Select task"),
        entry("1 / 2 / 3", "Filter all/pending/done"),
        Line::default(),
        Line::from(Span::styled("  Tasks", section_style)),
        entry("a", "Add task"),
        entry("Enter", "Toggle complete"),
        entry("e", "Edit title"),
        entry("d", "Delete"),
        entry("u", "Undo delete"),
        entry("/", "Search"),
        entry("r", "Refresh"),
        Line::default(),
        Line::from(Span::styled("  General", section_style)),
        entry("Esc", "Cancel / clear"),
        entry("Ctrl+C", "Quit"),
        Line::default(),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Computes a centered rectangle of at most the given size within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
