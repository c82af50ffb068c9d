//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Body (flex, one widget per view) ──────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘
//!
//! The chat and help overlays are rendered on top via
//! [`MainLayout::centered_overlay`].

pub mod chat;
pub mod domain_detail;
pub mod header;
pub mod home;
pub mod registration;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout regions for one frame
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            body: vertical[1],
            status_bar: vertical[2],
        }
    }

    /// Centered overlay rectangle for the chat and help dialogs
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}
