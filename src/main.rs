//! taskdeck - a terminal task dashboard.
//!
//! This is the main binary that wires configuration, the simulated
//! backend, and the task store together, then launches the TUI.

use anyhow::Context;

use taskdeck_backend::{BackendOptions, MemoryBackend};
use taskdeck_config::Config;
use taskdeck_protocol::sample_tasks;
use taskdeck_store::TaskStore;
use taskdeck_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::load().context("failed to load configuration")?;

    let options = BackendOptions::with_latency(config.fetch_latency(), config.write_latency());
    options.failure.set(config.simulate_errors);

    let seed = if config.seed_demo_data {
        sample_tasks()
    } else {
        Vec::new()
    };
    let backend = match config.storage_path()? {
        Some(path) => MemoryBackend::with_storage(path, seed, options)
            .context("failed to open task storage")?,
        None => MemoryBackend::new(seed, options),
    };

    let store = TaskStore::new(backend);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(store, config.undo_window());

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Initializes file-based logging when `TASKDECK_LOG` is set.
///
/// The TUI owns the screen, so log lines go to the named file instead of
/// stderr. Filtering follows `RUST_LOG` (default `info`).
fn init_logging() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("TASKDECK_LOG") else {
        return Ok(());
    };

    let file = std::fs::File::create(&path)
        .with_context(|| format!("failed to create log file at {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
