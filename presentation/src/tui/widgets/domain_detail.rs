//! Domain detail view — full description, skills, and opportunities

use crate::tui::state::TuiState;
use polyintern_domain::{Catalog, PROGRAM_HIGHLIGHTS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct DomainDetailWidget<'a> {
    state: &'a TuiState,
}

impl<'a> DomainDetailWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for DomainDetailWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(id) = self.state.app.selected_domain() else {
            return;
        };
        let descriptor = Catalog::find(id);

        let mut lines = vec![
            Line::from(Span::styled(
                descriptor.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(descriptor.long_description),
            Line::from(""),
            Line::from(Span::styled(
                "Skills you will learn",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        for skill in descriptor.skills {
            lines.push(Line::from(format!("  • {}", skill)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Career opportunities",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for opportunity in descriptor.opportunities {
            lines.push(Line::from(format!("  • {}", opportunity)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Program highlights",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for highlight in PROGRAM_HIGHLIGHTS {
            lines.push(Line::from(vec![
                Span::styled("  ★ ", Style::default().fg(Color::Yellow)),
                Span::raw(highlight),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press r or Enter to register for this internship",
            Style::default().fg(Color::Green),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Course Details ");

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
