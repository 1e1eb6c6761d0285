//! Configuration management for the taskdeck application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files with sensible defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from the first file found (highest to lowest):
//!
//! 1. Local config (`./taskdeck.json5` or `./taskdeck.json`)
//! 2. User config (`~/.config/taskdeck/config.json5` or
//!    `~/.config/taskdeck/config.json`)
//! 3. Built-in defaults
//!
//! # Sample Config
//!
//! ```json5
//! {
//!   // Simulated network latency
//!   latency: { fetch_ms: 400, write_ms: 300 },
//!   // Start with the failure mode on, to demo the retry flow
//!   simulate_errors: false,
//!   storage: { enabled: true },
//!   undo_window_secs: 5,
//!   seed_demo_data: true,
//! }
//! ```
//!
//! # Examples
//!
//! Loading configuration:
//!
//! ```no_run
//! use taskdeck_config::Config;
//!
//! # fn main() -> taskdeck_config::Result<()> {
//! let config = Config::load()?;
//! println!("undo window: {:?}", config.undo_window());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, LatencyConfig, StorageConfig};
pub use error::{ConfigError, Result};
