//! Chat overlay — transcript plus the numbered menu for the current state

use crate::tui::state::TuiState;
use polyintern_domain::chat::{ChatState, Sender, CONTACT_CHANNELS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct ChatWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ChatWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn transcript_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for entry in self.state.app.chat().session().transcript() {
            let (label_color, text_color) = match entry.sender {
                Sender::User => (Color::Cyan, Color::White),
                Sender::Bot => (Color::Green, Color::Gray),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", entry.at.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}: ", entry.sender.label()),
                    Style::default()
                        .fg(label_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(entry.text.clone(), Style::default().fg(text_color)),
            ]));
        }

        if self.state.app.chat().has_pending_reply() {
            lines.push(Line::from(Span::styled(
                "Assistant is typing...",
                Style::default().fg(Color::DarkGray),
            )));
        }

        // The contact leaf shows the fixed channels under the prompt
        if self.state.app.chat().state() == ChatState::Contact {
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "  WhatsApp: {}",
                CONTACT_CHANNELS.whatsapp
            )));
            lines.push(Line::from(format!(
                "  Website:  {}",
                CONTACT_CHANNELS.website
            )));
            lines.push(Line::from(format!(
                "  Address:  {}",
                CONTACT_CHANNELS.address
            )));
        }

        lines
    }

    fn menu_lines(&self) -> Vec<Line<'a>> {
        self.state
            .app
            .chat()
            .choices()
            .into_iter()
            .enumerate()
            .map(|(i, choice)| {
                let selected = i == self.state.chat_index;
                let style = if selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(if selected { "▸ " } else { "  " }, style),
                    Span::styled(format!("{}. {}", i + 1, choice.label), style),
                ])
            })
            .collect()
    }
}

impl<'a> Widget for ChatWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" PolyIntern Assistant ")
            .style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        block.render(area, buf);

        let menu = self.menu_lines();
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(menu.len() as u16 + 1),
            ])
            .split(inner);

        Paragraph::new(self.transcript_lines())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White))
            .render(vertical[0], buf);

        let mut menu_with_hint = menu;
        menu_with_hint.push(Line::from(Span::styled(
            "1-9/Enter: choose    Esc: close",
            Style::default().fg(Color::DarkGray),
        )));
        Paragraph::new(menu_with_hint)
            .style(Style::default().fg(Color::White))
            .render(vertical[1], buf);
    }
}
