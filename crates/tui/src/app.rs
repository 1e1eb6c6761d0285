//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: event handling, state updates, spawned backend
//! confirmations, and rendering.
//!
//! Mutating actions never block the event loop on the simulated network.
//! The optimistic half of every operation applies synchronously inside
//! the store; the confirmation future is spawned onto the runtime and its
//! outcome (only failures are interesting) comes back over a channel for
//! display in the status bar.

use std::future::Future;
use std::time::Duration;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use taskdeck_backend::TaskBackend;
use taskdeck_protocol::{Message, Task, TaskId, TaskPatch, TaskStatus};
use taskdeck_store::{TaskStore, TasksState, UndoCoordinator, counts, filtered_tasks};

use crate::{
    event::{event_to_message, poll_event},
    layout::{
        FILTER_BAR_HEIGHT, HEADER_HEIGHT, INPUT_HEIGHT, MIN_HEIGHT_WITH_HEADER, STATUS_BAR_HEIGHT,
    },
    state::{InputMode, UiState},
    terminal::AppTerminal,
    widgets::{
        ConfettiSystem, render_confetti, render_filter_bar, render_header, render_help_overlay,
        render_input_line, render_notice, render_status_bar, render_task_list, render_undo_toast,
    },
};

/// Result of a spawned confirmation operation, reported back to the loop.
#[derive(Debug)]
struct OpOutcome {
    /// What the operation was doing, for the failure notice.
    action: &'static str,
    /// The error message, if the confirmation failed.
    error: Option<String>,
}

/// The main application struct.
///
/// Manages UI state, the task store, the undo coordinator, and the main
/// event loop.
///
/// # Examples
///
/// ```
/// use taskdeck_backend::{BackendOptions, MemoryBackend};
/// use taskdeck_store::TaskStore;
/// use taskdeck_tui::App;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = TaskStore::new(MemoryBackend::new(Vec::new(), BackendOptions::instant()));
/// let app = App::new(store, std::time::Duration::from_secs(5));
/// # }
/// ```
#[derive(Debug)]
pub struct App<B> {
    store: TaskStore<B>,
    undo: UndoCoordinator,
    ui: UiState,
    confetti: ConfettiSystem,
    should_quit: bool,
    /// Last rendered task-list area, used to position confetti bursts.
    list_area: Rect,
    ops_tx: UnboundedSender<OpOutcome>,
    ops_rx: UnboundedReceiver<OpOutcome>,
}

impl<B> App<B> {
    /// Creates a new application over the given store.
    ///
    /// `undo_window` is the grace period during which a deletion can be
    /// reversed.
    #[must_use]
    pub fn new(store: TaskStore<B>, undo_window: Duration) -> Self {
        let (ops_tx, ops_rx) = mpsc::unbounded_channel();
        Self {
            store,
            undo: UndoCoordinator::with_window(undo_window),
            ui: UiState::new(),
            confetti: ConfettiSystem::new(),
            should_quit: false,
            list_area: Rect::default(),
            ops_tx,
            ops_rx,
        }
    }

    /// Returns a reference to the UI state.
    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Returns a reference to the task store.
    #[must_use]
    pub fn store(&self) -> &TaskStore<B> {
        &self.store
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn visible_len(&self) -> usize {
        self.store.with_state(|s| filtered_tasks(s).len())
    }

    /// Returns a clone of the task currently selected in the visible list.
    fn selected_task(&self) -> Option<Task> {
        let idx = self.ui.selected?;
        self.store
            .with_state(|s| filtered_tasks(s).get(idx).map(|t| (*t).clone()))
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.ui.clamp_selection(len);
    }
}

impl<B: TaskBackend + 'static> App<B> {
    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing or event polling fails.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        // Initial load, like the dashboard fetching on mount.
        self.spawn_fetch();

        while !self.should_quit {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;

            while let Ok(outcome) = self.ops_rx.try_recv() {
                self.apply_outcome(outcome);
            }

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.ui.mode.is_editing())
            {
                self.update(msg);
            }
        }

        Ok(())
    }

    /// Advances time-based state by one frame.
    fn tick(&mut self) {
        self.confetti.tick();
        self.undo.expire();
        self.ui.expire_notice();
        self.clamp_selection();
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages dismiss it instead
    /// of performing their normal action. While entering text, messages
    /// come from the text-entry key map.
    pub fn update(&mut self, msg: Message) {
        if self.ui.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                // Any other key dismisses help
                _ => self.ui.help_visible = false,
            }
            return;
        }

        if self.ui.mode.is_editing() {
            self.update_text_entry(msg);
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::NavigateUp => {
                let len = self.visible_len();
                self.ui.navigate_up(len);
            }
            Message::NavigateDown => {
                let len = self.visible_len();
                self.ui.navigate_down(len);
            }
            Message::ToggleSelected => self.toggle_selected(),
            Message::DeleteSelected => self.delete_selected(),
            Message::EditSelected => {
                if let Some(task) = self.selected_task() {
                    let id = task.id;
                    self.ui.begin_input(InputMode::EditingTask { id }, task.title);
                }
            }
            Message::Undo => {
                if let Some(snapshot) = self.undo.take() {
                    self.store.restore_task(snapshot);
                }
            }
            Message::Refresh => self.spawn_fetch(),
            Message::StartAdd => self.ui.begin_input(InputMode::AddingTask, ""),
            Message::StartSearch => {
                let query = self.store.with_state(|s| s.search_query.clone());
                self.ui.begin_input(InputMode::Searching, query);
            }
            Message::SetFilter(filter) => {
                self.store.set_filter(filter);
                self.clamp_selection();
            }
            Message::ToggleHelp => self.ui.help_visible = true,
            Message::Escape => {
                // Contextual escape: clear the search first, then the
                // selection.
                let has_query = self.store.with_state(|s| !s.search_query.is_empty());
                if has_query {
                    self.store.set_search_query("");
                } else {
                    self.ui.clear_selection();
                }
            }
            // Text-entry messages are handled above when entering text
            _ => {}
        }
    }

    /// Handles messages while the user is typing (add, search, edit).
    fn update_text_entry(&mut self, msg: Message) {
        match msg {
            Message::Quit => self.should_quit = true,
            Message::Input { ch } => {
                self.ui.input.push(ch);
                self.refresh_live_search();
            }
            Message::Backspace => {
                self.ui.input.pop();
                self.refresh_live_search();
            }
            Message::Submit => match self.ui.mode {
                InputMode::AddingTask => {
                    let title = self.ui.input.trim().to_string();
                    // An empty title cannot be submitted; keep typing.
                    if !title.is_empty() {
                        let _ = self.ui.take_input();
                        self.spawn_create(title);
                    }
                }
                InputMode::EditingTask { id } => {
                    let title = self.ui.input.trim().to_string();
                    if !title.is_empty() {
                        let _ = self.ui.take_input();
                        self.spawn_rename(id, title);
                    }
                }
                InputMode::Searching => {
                    // The query is already live in the store.
                    let _ = self.ui.take_input();
                }
                InputMode::Normal => {}
            },
            Message::Escape => {
                if matches!(self.ui.mode, InputMode::Searching) {
                    self.store.set_search_query("");
                }
                self.ui.cancel_input();
            }
            _ => {}
        }
    }

    /// Pushes the search buffer into the store while searching.
    fn refresh_live_search(&mut self) {
        if matches!(self.ui.mode, InputMode::Searching) {
            self.store.set_search_query(self.ui.input.clone());
            self.clamp_selection();
        }
    }

    fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };

        // Celebrate completions at the selected row.
        if task.status == TaskStatus::Pending
            && let Some(idx) = self.ui.selected
        {
            let x = f32::from(self.list_area.x) + f32::from(self.list_area.width) / 2.0;
            let row = (self.list_area.y + 1).saturating_add(idx.min(usize::from(u16::MAX)) as u16);
            self.confetti.burst(x, f32::from(row));
        }

        self.spawn_toggle(task.id, task.status);
    }

    fn delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };

        // The undo snapshot remembers the position in the unfiltered list.
        let index = self
            .store
            .with_state(|s| s.items.iter().position(|t| t.id == task.id))
            .unwrap_or(0);
        self.undo.arm(task.clone(), index);

        self.spawn_delete(task.id);
    }

    /// Spawns a confirmation future and reports its outcome back to the
    /// event loop.
    fn spawn_op<F>(&self, action: &'static str, fut: F)
    where
        F: Future<Output = taskdeck_store::Result<()>> + Send + 'static,
    {
        let tx = self.ops_tx.clone();
        tokio::spawn(async move {
            let error = fut.await.err().map(|e| e.to_string());
            let _ = tx.send(OpOutcome { action, error });
        });
    }

    fn spawn_fetch(&self) {
        let store = self.store.clone();
        self.spawn_op("load tasks", async move { store.fetch_all().await });
    }

    fn spawn_create(&self, title: String) {
        let store = self.store.clone();
        self.spawn_op("add task", async move {
            store.create_remote(&title).await.map(|_| ())
        });
    }

    fn spawn_rename(&self, id: TaskId, title: String) {
        let store = self.store.clone();
        self.spawn_op("update task", async move {
            store
                .update_remote(id, TaskPatch::title(title))
                .await
                .map(|_| ())
        });
    }

    fn spawn_toggle(&self, id: TaskId, current: TaskStatus) {
        let store = self.store.clone();
        self.spawn_op("toggle task", async move {
            store.toggle_remote(id, current).await.map(|_| ())
        });
    }

    fn spawn_delete(&self, id: TaskId) {
        let store = self.store.clone();
        self.spawn_op("delete task", async move { store.delete_remote(id).await });
    }

    /// Applies a spawned operation's outcome to the UI.
    fn apply_outcome(&mut self, outcome: OpOutcome) {
        if let Some(error) = outcome.error {
            warn!(action = outcome.action, %error, "operation failed");
            self.ui.set_notice(format!("Failed to {}: {error}", outcome.action));
        }
    }

    /// Renders the whole dashboard.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let state = self.store.snapshot();
        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        let buf = frame.buffer_mut();

        if show_header {
            let [header_area, filter_area, input_area, list_area, status_area] =
                Layout::vertical([
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Length(FILTER_BAR_HEIGHT),
                    Constraint::Length(INPUT_HEIGHT),
                    Constraint::Min(3),
                    Constraint::Length(STATUS_BAR_HEIGHT),
                ])
                .areas(area);
            render_header(&counts(&state), header_area, buf);
            self.render_main(&state, filter_area, input_area, list_area, status_area, buf);
        } else {
            let [filter_area, input_area, list_area, status_area] = Layout::vertical([
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);
            self.render_main(&state, filter_area, input_area, list_area, status_area, buf);
        }

        if self.ui.help_visible {
            render_help_overlay(area, buf);
        }
        render_confetti(&self.confetti, area, buf);
    }

    fn render_main(
        &mut self,
        state: &TasksState,
        filter_area: Rect,
        input_area: Rect,
        list_area: Rect,
        status_area: Rect,
        buf: &mut Buffer,
    ) {
        self.list_area = list_area;

        render_filter_bar(state.filter, &counts(state), filter_area, buf);
        render_input_line(
            self.ui.mode,
            &self.ui.input,
            &state.search_query,
            input_area,
            buf,
        );

        let visible = filtered_tasks(state);
        render_task_list(
            &visible,
            self.ui.selected,
            state.request,
            state.last_error.as_deref(),
            list_area,
            buf,
        );

        if let Some(text) = self.ui.notice_text() {
            render_notice(text, status_area, buf);
        } else if let Some(remaining) = self.undo.remaining() {
            render_undo_toast(remaining, status_area, buf);
        } else {
            render_status_bar(status_area, buf);
        }
    }
}
