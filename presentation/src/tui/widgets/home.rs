//! Home view — program highlights and the domain card list

use crate::tui::state::TuiState;
use polyintern_domain::{Catalog, PROGRAM_HIGHLIGHTS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct HomeWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HomeWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HomeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Fill(1)])
            .split(area);

        // Program highlights banner
        let highlight_lines: Vec<Line> = PROGRAM_HIGHLIGHTS
            .iter()
            .map(|h| {
                Line::from(vec![
                    Span::styled("★ ", Style::default().fg(Color::Yellow)),
                    Span::raw(*h),
                ])
            })
            .collect();

        Paragraph::new(highlight_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Why PolyIntern "),
            )
            .wrap(Wrap { trim: true })
            .render(vertical[0], buf);

        // Domain cards
        let mut card_lines: Vec<Line> = Vec::new();
        for (i, descriptor) in Catalog::all().iter().enumerate() {
            let selected = i == self.state.home_index;
            let marker = if selected { "▸ " } else { "  " };
            let title_style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            card_lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(descriptor.title, title_style),
            ]));
            card_lines.push(Line::from(Span::styled(
                format!("    {}", descriptor.short_description),
                Style::default().fg(Color::DarkGray),
            )));
            card_lines.push(Line::from(""));
        }

        Paragraph::new(card_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Internship Domains "),
            )
            .wrap(Wrap { trim: false })
            .render(vertical[1], buf);
    }
}
