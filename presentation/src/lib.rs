//! Presentation layer for PolyIntern
//!
//! This crate contains the CLI definition, the configuration loader, and the
//! ratatui terminal interface (state, key handling, widgets, event loop).

pub mod cli;
pub mod config;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::loader::{AppConfig, ConfigLoader, TimingConfig, UiConfig};
pub use tui::TuiApp;
