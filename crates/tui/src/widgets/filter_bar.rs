//! Filter tab bar rendering widget.
//!
//! Shows the three status filters with live counts from the full
//! (unfiltered) collection, highlighting the active one.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use taskdeck_protocol::StatusFilter;
use taskdeck_store::TaskCounts;

/// Returns the count shown on a filter's tab.
fn count_for(filter: StatusFilter, counts: &TaskCounts) -> usize {
    match filter {
        StatusFilter::All => counts.all,
        StatusFilter::Pending => counts.pending,
        StatusFilter::Completed => counts.completed,
    }
}

/// Renders the filter tab bar.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------+
/// | [1] All (5)   [2] Pending (3)   [3] Completed (2)  |
/// +----------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_protocol::StatusFilter;
/// use taskdeck_store::TaskCounts;
/// use taskdeck_tui::widgets::render_filter_bar;
///
/// let area = Rect::new(0, 0, 60, 3);
/// let mut buf = Buffer::empty(area);
/// let counts = TaskCounts { all: 5, pending: 3, completed: 2 };
///
/// render_filter_bar(StatusFilter::All, &counts, area, &mut buf);
/// ```
pub fn render_filter_bar(
    active: StatusFilter,
    counts: &TaskCounts,
    area: Rect,
    buf: &mut Buffer,
) {
    let mut spans: Vec<Span> = Vec::new();

    for (i, filter) in StatusFilter::all().into_iter().enumerate() {
        let label = format!(
            "[{}] {} ({})",
            i + 1,
            filter.display_name(),
            count_for(filter, counts)
        );
        let style = if filter == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("   "));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
