//! Task list rendering widget.
//!
//! Renders the filtered task list, one row per task, along with the
//! loading, error, and empty states of the full-list fetch.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use taskdeck_protocol::{RequestStatus, Task, TaskStatus};

/// Renders the task list area.
///
/// The fetch lifecycle takes precedence over task rows: a loading message
/// while the first fetch is in flight, the error plus a retry hint after
/// a failed fetch, and an empty-state hint when no tasks match the
/// current view.
///
/// When the list is longer than the area, the visible window follows the
/// selection.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_protocol::{RequestStatus, Task};
/// use taskdeck_tui::widgets::render_task_list;
///
/// let task = Task::new("Example").unwrap();
/// let tasks = vec![&task];
///
/// let area = Rect::new(0, 0, 60, 10);
/// let mut buf = Buffer::empty(area);
///
/// render_task_list(&tasks, Some(0), RequestStatus::Succeeded, None, area, &mut buf);
/// ```
pub fn render_task_list(
    tasks: &[&Task],
    selected: Option<usize>,
    request: RequestStatus,
    last_error: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default().borders(Borders::ALL).title(" Tasks ");
    let inner = block.inner(area);
    block.render(area, buf);

    match request {
        RequestStatus::Loading if tasks.is_empty() => {
            render_centered_hint("Loading tasks...", inner, buf);
            return;
        }
        RequestStatus::Failed => {
            let message = last_error.unwrap_or("something went wrong");
            let lines = vec![
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    "press r to retry",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }
        _ => {}
    }

    if tasks.is_empty() {
        render_centered_hint("No tasks here - press a to add one", inner, buf);
        return;
    }

    // Keep the selection inside the visible window.
    let visible_rows = inner.height as usize;
    let offset = match selected {
        Some(idx) if visible_rows > 0 && idx >= visible_rows => idx + 1 - visible_rows,
        _ => 0,
    };

    for (row, (idx, task)) in tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .enumerate()
    {
        let y = inner.y + row as u16;
        let line_area = Rect::new(inner.x, y, inner.width, 1);
        render_task_row(task, selected == Some(idx), line_area, buf);
    }
}

/// Renders a single task row.
fn render_task_row(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let (dot_color, badge) = match task.status {
        TaskStatus::Pending => (Color::Yellow, "[pending]"),
        TaskStatus::Completed => (Color::Green, "[completed]"),
    };

    let mut title_style = Style::default();
    if task.status == TaskStatus::Completed {
        title_style = title_style
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let mut spans = vec![
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::styled(task.title.clone(), title_style),
        Span::raw(" "),
        Span::styled(badge, Style::default().fg(Color::DarkGray)),
    ];

    if is_selected {
        spans.insert(0, Span::raw("> "));
        let line = Line::from(spans).style(Style::default().add_modifier(Modifier::BOLD));
        Paragraph::new(line).render(area, buf);
    } else {
        spans.insert(0, Span::raw("  "));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Renders a dimmed, centered one-line hint.
fn render_centered_hint(text: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn sample() -> Vec<Task> {
        let mut done = Task::new("Walk Dog").unwrap();
        done.set_status(TaskStatus::Completed);
        vec![Task::new("Buy Milk").unwrap(), done]
    }

    fn render(
        tasks: &[&Task],
        selected: Option<usize>,
        request: RequestStatus,
        error: Option<&str>,
    ) -> String {
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        render_task_list(tasks, selected, request, error, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn list_shows_titles_and_badges() {
        let tasks = sample();
        let refs: Vec<&Task> = tasks.iter().collect();
        let output = render(&refs, None, RequestStatus::Succeeded, None);

        assert!(output.contains("Buy Milk"));
        assert!(output.contains("[pending]"));
        assert!(output.contains("Walk Dog"));
        assert!(output.contains("[completed]"));
    }

    #[test]
    fn selected_row_is_marked() {
        let tasks = sample();
        let refs: Vec<&Task> = tasks.iter().collect();
        let output = render(&refs, Some(0), RequestStatus::Succeeded, None);

        assert!(output.contains("> ● Buy Milk"));
    }

    #[test]
    fn loading_state_shows_hint_when_empty() {
        let output = render(&[], None, RequestStatus::Loading, None);
        assert!(output.contains("Loading tasks..."));
    }

    #[test]
    fn failed_state_shows_error_and_retry_hint() {
        let output = render(
            &[],
            None,
            RequestStatus::Failed,
            Some("the task service is unavailable"),
        );
        assert!(output.contains("the task service is unavailable"));
        assert!(output.contains("press r to retry"));
    }

    #[test]
    fn empty_state_shows_add_hint() {
        let output = render(&[], None, RequestStatus::Succeeded, None);
        assert!(output.contains("press a to add one"));
    }

    #[test]
    fn window_follows_selection_in_long_lists() {
        let tasks: Vec<Task> = (0..20)
            .map(|i| Task::new(format!("Task number {i}")).unwrap())
            .collect();
        let refs: Vec<&Task> = tasks.iter().collect();

        let output = render(&refs, Some(19), RequestStatus::Succeeded, None);
        assert!(output.contains("Task number 19"));
        assert!(!output.contains("Task number 0\n"));
    }
}
