//! Configuration types and loader

pub mod loader;

pub use loader::{AppConfig, ConfigLoader, TimingConfig, UiConfig};
