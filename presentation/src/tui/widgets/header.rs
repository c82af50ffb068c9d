//! Header widget — brand, current view, and selected domain

use crate::tui::state::TuiState;
use polyintern_domain::navigation::View;
use polyintern_domain::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.state.app.view();

        let mut spans = vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                "PolyIntern",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(view.title(), Style::default().fg(Color::White)),
        ];

        if let View::DomainDetail(id) | View::Registration(id) = view {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                Catalog::find(id).title,
                Style::default().fg(Color::Yellow),
            ));
        }

        if self.state.app.chat_open() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Assistant", Style::default().fg(Color::Magenta)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
