//! Registration form view
//!
//! Renders the eight fields with the focused one highlighted, inline
//! validation errors under their fields, and the timed confirmation
//! display once a submission is accepted.

use crate::tui::state::TuiState;
use polyintern_domain::registration::Field;
use polyintern_domain::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct RegistrationWidget<'a> {
    state: &'a TuiState,
}

impl<'a> RegistrationWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn render_submitted(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Registration Successful!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Thank you for registering. Our team will reach out to you shortly."),
            Line::from(""),
            Line::from(Span::styled(
                "Returning to the home screen...",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Registration "))
            .wrap(Wrap { trim: true })
            .centered()
            .render(area, buf);
    }

    /// One line per field: label, then the value with the cursor marked
    /// when focused. Selection fields render as `< value >` pickers.
    fn field_line(&self, field: Field, focused: bool) -> Line<'a> {
        let form = self.state.app.form();
        let value = form.value(field);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(if focused { "▸ " } else { "  " }, label_style),
            Span::styled(format!("{:<10}", field.label()), label_style),
            Span::raw(" "),
        ];

        if field.is_selection() {
            let shown = if value.is_empty() {
                field.placeholder()
            } else {
                value
            };
            let value_style = if value.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            if focused {
                spans.push(Span::styled("< ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(shown.to_string(), value_style));
                spans.push(Span::styled(" >", Style::default().fg(Color::Cyan)));
            } else {
                spans.push(Span::styled(shown.to_string(), value_style));
            }
        } else if value.is_empty() && !focused {
            spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else if focused {
            // Split at the cursor and render the char under it reversed
            let cursor = self.state.field_cursor.min(value.len());
            let before = &value[..cursor];
            let mut rest = value[cursor..].chars();
            spans.push(Span::raw(before.to_string()));
            match rest.next() {
                Some(c) => {
                    spans.push(Span::styled(
                        c.to_string(),
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                    spans.push(Span::raw(rest.collect::<String>()));
                }
                None => {
                    spans.push(Span::styled(
                        " ",
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                }
            }
        } else {
            spans.push(Span::raw(value.to_string()));
        }

        Line::from(spans)
    }
}

impl<'a> Widget for RegistrationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.app.form().is_submitted() {
            self.render_submitted(area, buf);
            return;
        }

        let title = match self.state.app.selected_domain() {
            Some(id) => format!(" Register for {} ", Catalog::find(id).title),
            None => " Registration ".to_string(),
        };

        let mut lines = Vec::new();
        for (i, field) in Field::ALL.iter().enumerate() {
            let focused = i == self.state.form_focus;
            lines.push(self.field_line(*field, focused));
            if let Some(message) = self.state.app.form().error(*field) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", message),
                    Style::default().fg(Color::Red),
                )));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Enter: submit    Tab/↑↓: move    Esc: back",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
