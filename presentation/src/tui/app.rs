//! TUI application — main event loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── key events → KeyHandler → apply_action
//!   └─ tick_interval ─────────── flash expiry, submit auto-return,
//!                                delayed chat replies
//! ```
//!
//! The session is synchronous; the two timed behaviors (auto-return after
//! a successful submission, paced bot replies) are deadlines stored on
//! [`TuiState`] and checked on every tick. Manual navigation clears the
//! auto-return deadline, so the screen never changes underneath the user.

use super::keys::{KeyAction, KeyContext, KeyHandler};
use super::state::TuiState;
use super::widgets::{
    chat::ChatWidget, domain_detail::DomainDetailWidget, header::HeaderWidget, home::HomeWidget,
    registration::RegistrationWidget, status_bar::StatusBarWidget, MainLayout,
};
use crate::config::AppConfig;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::stream::StreamExt;
use polyintern_application::SubmitOutcome;
use polyintern_domain::chat::ChatAction;
use polyintern_domain::navigation::View;
use polyintern_domain::DomainId;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Main TUI application
pub struct TuiApp {
    config: AppConfig,
}

impl TuiApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        state.show_key_hints = self.config.ui.show_key_hints;
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(100));

        loop {
            terminal.draw(|frame| {
                self.render(frame, &state);
            })?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                _ = tick.tick() => {
                    self.on_tick(&mut state);
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets for one frame
    fn render(&self, frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);

        match state.app.view() {
            View::Home => frame.render_widget(HomeWidget::new(state), layout.body),
            View::DomainDetail(_) => {
                frame.render_widget(DomainDetailWidget::new(state), layout.body)
            }
            View::Registration(_) => {
                frame.render_widget(RegistrationWidget::new(state), layout.body)
            }
        }

        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.app.chat_open() {
            let chat_area = MainLayout::centered_overlay(70, 80, frame.area());
            frame.render_widget(ChatWidget::new(state), chat_area);
        }

        if state.show_help {
            let help_area = MainLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            self.render_help(frame, help_area);
        }
    }

    fn render_help(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Home:"),
            Line::from("  j/k or ↑/↓  Select a domain"),
            Line::from("  Enter       Open the selected domain"),
            Line::from(""),
            Line::from("Course details:"),
            Line::from("  r or Enter  Start registration"),
            Line::from("  Esc         Back to home"),
            Line::from(""),
            Line::from("Registration:"),
            Line::from("  Tab or ↑/↓  Move between fields"),
            Line::from("  ←/→         Pick Gender and State options"),
            Line::from("  Enter       Submit"),
            Line::from("  Esc         Back to course details"),
            Line::from(""),
            Line::from("Assistant:"),
            Line::from("  c           Open the assistant"),
            Line::from("  1-9/Enter   Choose a menu entry"),
            Line::from("  Esc         Close the assistant"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    /// The context that currently owns the keyboard
    fn context(&self, state: &TuiState) -> KeyContext {
        if state.show_help {
            return KeyContext::Help;
        }
        if state.app.chat_open() {
            return KeyContext::Chat;
        }
        match state.app.view() {
            View::Home => KeyContext::Home,
            View::DomainDetail(_) => KeyContext::DomainDetail,
            View::Registration(_) => {
                if state.app.form().is_submitted() {
                    KeyContext::RegistrationSubmitted
                } else {
                    KeyContext::RegistrationEditing {
                        selection_field: state.focused_field().is_selection(),
                    }
                }
            }
        }
    }

    fn handle_terminal_event(&self, state: &mut TuiState, event: crossterm::event::Event) {
        match event {
            crossterm::event::Event::Key(key)
                if key.kind == crossterm::event::KeyEventKind::Press =>
            {
                let action = KeyHandler::handle(self.context(state), key);
                self.apply_action(state, action);
            }
            crossterm::event::Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Apply a semantic key action to the state
    fn apply_action(&self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => state.should_quit = true,
            KeyAction::ToggleHelp => state.show_help = !state.show_help,
            KeyAction::CloseHelp => state.show_help = false,

            // -- Chat overlay --
            KeyAction::OpenChat => {
                state.app.open_chat();
                state.chat_index = 0;
            }
            KeyAction::CloseChat => {
                state.app.close_chat();
                state.cancel_chat_reply();
            }
            KeyAction::ChatUp => state.chat_up(),
            KeyAction::ChatDown => state.chat_down(),
            KeyAction::ChatSelect => {
                let index = state.chat_index;
                self.chat_select(state, index);
            }
            KeyAction::ChatChoose(index) => self.chat_select(state, index),
            KeyAction::ChatBack => {
                let back = state
                    .app
                    .chat()
                    .choices()
                    .iter()
                    .position(|c| c.action == ChatAction::Back);
                if let Some(index) = back {
                    self.chat_select(state, index);
                }
            }

            // -- View navigation --
            KeyAction::MoveUp => state.home_up(),
            KeyAction::MoveDown => state.home_down(),
            KeyAction::OpenSelected => {
                state.app.open_domain(DomainId::ALL[state.home_index]);
            }
            KeyAction::Back => {
                state.cancel_submit_reset();
                state.app.go_back();
            }
            KeyAction::GoHome => {
                state.cancel_submit_reset();
                state.app.go_home();
            }
            KeyAction::StartRegistration => {
                state.app.start_registration();
                state.reset_form_focus();
            }

            // -- Registration form --
            KeyAction::NextField => state.focus_next_field(),
            KeyAction::PrevField => state.focus_prev_field(),
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::DeleteChar => state.delete_char(),
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),
            KeyAction::PrevOption => state.cycle_option(-1),
            KeyAction::NextOption => state.cycle_option(1),
            KeyAction::SubmitForm => match state.app.submit_form() {
                SubmitOutcome::Accepted => {
                    debug!("registration accepted, arming auto-return");
                    state.arm_submit_reset(self.config.timing.submit_reset());
                }
                SubmitOutcome::Rejected => {
                    state.set_flash("Please fix the highlighted fields");
                }
            },
        }
    }

    /// Apply a chat menu selection and arm the reply pacing timer
    fn chat_select(&self, state: &mut TuiState, index: usize) {
        if let Some(request) = state.app.chat_select(index) {
            state.set_flash(format!("Downloading {}", request.file_name));
        }
        state.chat_index = 0;
        if state.app.chat_open() {
            if state.app.chat().has_pending_reply() {
                state.arm_chat_reply(self.config.timing.chat_reply());
            }
        } else {
            // The selection navigated away and closed the overlay
            state.cancel_chat_reply();
            if matches!(state.app.view(), View::Registration(_)) {
                state.reset_form_focus();
            }
        }
    }

    /// Periodic housekeeping: flash expiry and timer deadlines
    fn on_tick(&self, state: &mut TuiState) {
        state.expire_flash(self.config.timing.flash());

        if let Some(deadline) = state.reset_deadline
            && Instant::now() >= deadline
        {
            state.reset_deadline = None;
            state.app.finish_submission();
        }

        if let Some(deadline) = state.reply_deadline
            && Instant::now() >= deadline
        {
            state.reply_deadline = None;
            state.app.chat_mut().deliver_pending_reply();
        }
    }
}
