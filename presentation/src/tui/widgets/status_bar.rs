//! Status bar widget — view indicator + key hints + flash messages

use crate::tui::state::TuiState;
use polyintern_domain::navigation::View;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn indicator(&self) -> (&'static str, Color) {
        if self.state.app.chat_open() {
            return ("CHAT", Color::Magenta);
        }
        match self.state.app.view() {
            View::Home => ("HOME", Color::Blue),
            View::DomainDetail(_) => ("DETAILS", Color::Cyan),
            View::Registration(_) => {
                if self.state.app.form().is_submitted() {
                    ("SUBMITTED", Color::Green)
                } else {
                    ("REGISTER", Color::Yellow)
                }
            }
        }
    }

    fn hints(&self) -> &'static str {
        if self.state.app.chat_open() {
            return "1-9/Enter:choose  j/k:move  Esc:close  Ctrl+C:quit";
        }
        match self.state.app.view() {
            View::Home => "j/k:move  Enter:open  c:chat  ?:help  q:quit",
            View::DomainDetail(_) => "r/Enter:register  Esc:back  c:chat  q:quit",
            View::Registration(_) => {
                if self.state.app.form().is_submitted() {
                    "Enter:home  Esc:back"
                } else {
                    "Enter:submit  Tab:next field  Esc:back"
                }
            }
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (text, color) = self.indicator();
        let indicator_span = Span::styled(
            format!(" {} ", text),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );
        let indicator_width = text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(vec![indicator_span]), indicator_width);

        // Flash message wins over key hints on the right
        let right_text = if let Some((flash, _)) = &self.state.flash_message {
            flash.clone()
        } else if self.state.show_key_hints {
            self.hints().to_string()
        } else {
            String::new()
        };

        if right_text.is_empty() {
            return;
        }

        let right_width = right_text.len() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(right_text, bg_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
