//! Terminal interface for PolyIntern
//!
//! Built on ratatui + crossterm. The event loop owns a single
//! [`TuiState`] (which in turn owns the [`AppSession`]); widgets render
//! from immutable borrows, and key events are mapped to semantic actions
//! per context before being applied.
//!
//! [`AppSession`]: polyintern_application::AppSession

mod app;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use keys::{KeyAction, KeyContext, KeyHandler};
pub use state::TuiState;
pub use widgets::MainLayout;
