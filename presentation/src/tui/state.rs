//! TUI state
//!
//! Single source of truth for everything the TUI renders: the
//! [`AppSession`] plus the purely presentational bits (cursors, focus,
//! overlays, timer deadlines). Updated by the event loop, rendered by
//! widgets from immutable borrows.

use polyintern_application::AppSession;
use polyintern_domain::registration::Field;
use polyintern_domain::Catalog;
use std::time::{Duration, Instant};

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Debug)]
pub struct TuiState {
    // -- Application session --
    pub app: AppSession,

    // -- Home view --
    pub home_index: usize,

    // -- Registration view (index into Field::ALL + byte cursor) --
    pub form_focus: usize,
    pub field_cursor: usize,

    // -- Chat overlay --
    pub chat_index: usize,

    // -- Overlays --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Timer deadlines, checked on tick --
    pub reset_deadline: Option<Instant>,
    pub reply_deadline: Option<Instant>,

    // -- Config-derived display flags --
    pub show_key_hints: bool,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            app: AppSession::new(),
            home_index: 0,
            form_focus: 0,
            field_cursor: 0,
            chat_index: 0,
            show_help: false,
            flash_message: None,
            reset_deadline: None,
            reply_deadline: None,
            show_key_hints: true,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Home selection --

    pub fn home_up(&mut self) {
        self.home_index = self.home_index.saturating_sub(1);
    }

    pub fn home_down(&mut self) {
        if self.home_index + 1 < Catalog::all().len() {
            self.home_index += 1;
        }
    }

    // -- Registration field focus --

    pub fn focused_field(&self) -> Field {
        Field::ALL[self.form_focus]
    }

    pub fn focus_next_field(&mut self) {
        self.form_focus = (self.form_focus + 1) % Field::ALL.len();
        self.field_cursor = self.app.form().value(self.focused_field()).len();
    }

    pub fn focus_prev_field(&mut self) {
        self.form_focus = (self.form_focus + Field::ALL.len() - 1) % Field::ALL.len();
        self.field_cursor = self.app.form().value(self.focused_field()).len();
    }

    /// Reset focus and cursor, called whenever a registration view opens
    pub fn reset_form_focus(&mut self) {
        self.form_focus = 0;
        self.field_cursor = 0;
    }

    // -- Text editing on the focused field --

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused_field();
        if field.is_selection() {
            return;
        }
        let mut value = self.app.form().value(field).to_string();
        value.insert(self.field_cursor, c);
        self.field_cursor += c.len_utf8();
        self.app.update_field(field, value);
    }

    pub fn delete_char(&mut self) {
        let field = self.focused_field();
        if field.is_selection() || self.field_cursor == 0 {
            return;
        }
        let mut value = self.app.form().value(field).to_string();
        let prev_char_len = value[..self.field_cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        value.remove(self.field_cursor - prev_char_len);
        self.field_cursor -= prev_char_len;
        self.app.update_field(field, value);
    }

    pub fn cursor_left(&mut self) {
        let value = self.app.form().value(self.focused_field());
        if self.field_cursor > 0 {
            let prev_char_len = value[..self.field_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.field_cursor -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let value = self.app.form().value(self.focused_field());
        if self.field_cursor < value.len() {
            let next_char_len = value[self.field_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.field_cursor += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.field_cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.field_cursor = self.app.form().value(self.focused_field()).len();
    }

    /// Step a selection field (Gender, State) through its option list,
    /// wrapping at both ends. No-op on free-text fields.
    pub fn cycle_option(&mut self, step: isize) {
        let field = self.focused_field();
        let options = field.options();
        if options.is_empty() {
            return;
        }
        let current = self.app.form().value(field);
        let next = match options.iter().position(|o| *o == current) {
            Some(i) => {
                let len = options.len() as isize;
                ((i as isize + step).rem_euclid(len)) as usize
            }
            // Unset field: Right picks the first option, Left the last
            None if step > 0 => 0,
            None => options.len() - 1,
        };
        self.app.update_field(field, options[next]);
    }

    // -- Chat menu selection --

    pub fn chat_up(&mut self) {
        self.chat_index = self.chat_index.saturating_sub(1);
    }

    pub fn chat_down(&mut self) {
        let len = self.app.chat().choices().len();
        if self.chat_index + 1 < len {
            self.chat_index += 1;
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    // -- Timer deadlines --

    pub fn arm_submit_reset(&mut self, delay: Duration) {
        self.reset_deadline = Some(Instant::now() + delay);
    }

    /// Manual navigation cancels the pending auto-return so the session
    /// never jumps home underneath the user.
    pub fn cancel_submit_reset(&mut self) {
        self.reset_deadline = None;
    }

    pub fn arm_chat_reply(&mut self, delay: Duration) {
        self.reply_deadline = Some(Instant::now() + delay);
    }

    pub fn cancel_chat_reply(&mut self) {
        self.reply_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyintern_domain::registration::GENDER_OPTIONS;

    #[test]
    fn test_home_selection_clamps() {
        let mut state = TuiState::new();
        state.home_up();
        assert_eq!(state.home_index, 0);

        for _ in 0..10 {
            state.home_down();
        }
        assert_eq!(state.home_index, Catalog::all().len() - 1);
    }

    #[test]
    fn test_text_editing_on_focused_field() {
        let mut state = TuiState::new();
        assert_eq!(state.focused_field(), Field::Name);

        state.insert_char('J');
        state.insert_char('o');
        assert_eq!(state.app.form().value(Field::Name), "Jo");
        assert_eq!(state.field_cursor, 2);

        state.delete_char();
        assert_eq!(state.app.form().value(Field::Name), "J");
        assert_eq!(state.field_cursor, 1);
    }

    #[test]
    fn test_cursor_movement_mid_value() {
        let mut state = TuiState::new();
        for c in "abc".chars() {
            state.insert_char(c);
        }

        state.cursor_left();
        assert_eq!(state.field_cursor, 2);
        state.insert_char('X');
        assert_eq!(state.app.form().value(Field::Name), "abXc");

        state.cursor_home();
        assert_eq!(state.field_cursor, 0);
        state.cursor_end();
        assert_eq!(state.field_cursor, 4);
        state.cursor_right();
        assert_eq!(state.field_cursor, 4);
    }

    #[test]
    fn test_focus_wraps_and_resets_cursor() {
        let mut state = TuiState::new();
        state.insert_char('a');

        state.focus_prev_field();
        assert_eq!(state.focused_field(), Field::Phone);
        assert_eq!(state.field_cursor, 0);

        state.focus_next_field();
        assert_eq!(state.focused_field(), Field::Name);
        assert_eq!(state.field_cursor, 1); // end of "a"
    }

    #[test]
    fn test_selection_field_ignores_typed_chars() {
        let mut state = TuiState::new();
        while state.focused_field() != Field::Gender {
            state.focus_next_field();
        }

        state.insert_char('x');
        assert_eq!(state.app.form().value(Field::Gender), "");

        state.delete_char();
        assert_eq!(state.app.form().value(Field::Gender), "");
    }

    #[test]
    fn test_cycle_option_wraps() {
        let mut state = TuiState::new();
        while state.focused_field() != Field::Gender {
            state.focus_next_field();
        }

        state.cycle_option(1);
        assert_eq!(state.app.form().value(Field::Gender), GENDER_OPTIONS[0]);

        state.cycle_option(-1);
        assert_eq!(
            state.app.form().value(Field::Gender),
            GENDER_OPTIONS[GENDER_OPTIONS.len() - 1]
        );

        state.cycle_option(1);
        assert_eq!(state.app.form().value(Field::Gender), GENDER_OPTIONS[0]);
    }

    #[test]
    fn test_cycle_option_noop_on_text_field() {
        let mut state = TuiState::new();
        assert_eq!(state.focused_field(), Field::Name);
        state.cycle_option(1);
        assert_eq!(state.app.form().value(Field::Name), "");
    }

    #[test]
    fn test_chat_selection_clamps_to_menu() {
        let mut state = TuiState::new();
        state.app.open_chat();

        state.chat_up();
        assert_eq!(state.chat_index, 0);

        // Welcome menu has four entries
        for _ in 0..10 {
            state.chat_down();
        }
        assert_eq!(state.chat_index, 3);
    }

    #[test]
    fn test_flash_message_expiry() {
        let mut state = TuiState::new();
        state.set_flash("saved");
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_deadline_arming_and_cancel() {
        let mut state = TuiState::new();
        state.arm_submit_reset(Duration::from_millis(2500));
        assert!(state.reset_deadline.is_some());
        state.cancel_submit_reset();
        assert!(state.reset_deadline.is_none());

        state.arm_chat_reply(Duration::from_millis(600));
        assert!(state.reply_deadline.is_some());
        state.cancel_chat_reply();
        assert!(state.reply_deadline.is_none());
    }
}
