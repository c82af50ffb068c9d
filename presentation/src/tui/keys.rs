//! Key handling
//!
//! Maps raw crossterm key events to semantic actions based on the current
//! context. Contexts mirror what is on screen: the help overlay and the
//! chat overlay capture input when visible, otherwise the active view
//! decides.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What currently has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Help overlay is visible
    Help,
    /// Chat overlay is visible
    Chat,
    /// Home view (domain cards)
    Home,
    /// Domain detail view
    DomainDetail,
    /// Registration form, editing. `selection_field` is true when the
    /// focused field picks from a fixed option list instead of free text.
    RegistrationEditing { selection_field: bool },
    /// Registration form, submitted confirmation display
    RegistrationSubmitted,
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // -- Application --
    Quit,
    ToggleHelp,
    CloseHelp,

    // -- Chat overlay --
    OpenChat,
    CloseChat,
    ChatUp,
    ChatDown,
    /// Confirm the highlighted chat menu entry
    ChatSelect,
    /// Pick a chat menu entry directly by number (0-based)
    ChatChoose(usize),
    /// Return the chat to its welcome state
    ChatBack,

    // -- View navigation --
    MoveUp,
    MoveDown,
    OpenSelected,
    Back,
    GoHome,
    StartRegistration,

    // -- Registration form --
    NextField,
    PrevField,
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    PrevOption,
    NextOption,
    SubmitForm,

    None,
}

/// Key event handler, maps key events to actions for a context
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(context: KeyContext, key: KeyEvent) -> KeyAction {
        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }

        match context {
            KeyContext::Help => Self::handle_help(key),
            KeyContext::Chat => Self::handle_chat(key),
            KeyContext::Home => Self::handle_home(key),
            KeyContext::DomainDetail => Self::handle_detail(key),
            KeyContext::RegistrationEditing { selection_field } => {
                Self::handle_registration(key, selection_field)
            }
            KeyContext::RegistrationSubmitted => Self::handle_submitted(key),
        }
    }

    fn handle_help(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => KeyAction::CloseHelp,
            _ => KeyAction::None,
        }
    }

    fn handle_chat(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::CloseChat,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::ChatUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::ChatDown,
            KeyCode::Enter => KeyAction::ChatSelect,
            KeyCode::Char(c @ '1'..='9') => {
                KeyAction::ChatChoose(c as usize - '1' as usize)
            }
            KeyCode::Char('b') | KeyCode::Left => KeyAction::ChatBack,
            _ => KeyAction::None,
        }
    }

    fn handle_home(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            KeyCode::Char('c') => KeyAction::OpenChat,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
            KeyCode::Enter => KeyAction::OpenSelected,
            _ => KeyAction::None,
        }
    }

    fn handle_detail(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            KeyCode::Char('c') => KeyAction::OpenChat,
            KeyCode::Char('r') | KeyCode::Enter => KeyAction::StartRegistration,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => KeyAction::Back,
            KeyCode::Char('h') => KeyAction::GoHome,
            _ => KeyAction::None,
        }
    }

    fn handle_registration(key: KeyEvent, selection_field: bool) -> KeyAction {
        // Shared between free-text and selection fields
        match key.code {
            KeyCode::Esc => return KeyAction::Back,
            KeyCode::Enter => return KeyAction::SubmitForm,
            KeyCode::Tab | KeyCode::Down => return KeyAction::NextField,
            KeyCode::BackTab | KeyCode::Up => return KeyAction::PrevField,
            _ => {}
        }

        if selection_field {
            match key.code {
                KeyCode::Left => KeyAction::PrevOption,
                KeyCode::Right | KeyCode::Char(' ') => KeyAction::NextOption,
                _ => KeyAction::None,
            }
        } else {
            match key.code {
                KeyCode::Char(c) => KeyAction::InsertChar(c),
                KeyCode::Backspace => KeyAction::DeleteChar,
                KeyCode::Left => KeyAction::CursorLeft,
                KeyCode::Right => KeyAction::CursorRight,
                KeyCode::Home => KeyAction::CursorHome,
                KeyCode::End => KeyAction::CursorEnd,
                _ => KeyAction::None,
            }
        }
    }

    fn handle_submitted(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
            KeyCode::Enter | KeyCode::Char('h') => KeyAction::GoHome,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_from_every_context() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for context in [
            KeyContext::Help,
            KeyContext::Chat,
            KeyContext::Home,
            KeyContext::DomainDetail,
            KeyContext::RegistrationEditing {
                selection_field: false,
            },
            KeyContext::RegistrationSubmitted,
        ] {
            assert_eq!(KeyHandler::handle(context, ctrl_c), KeyAction::Quit);
        }
    }

    #[test]
    fn test_home_key_handling() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Home, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Home, key(KeyCode::Up)),
            KeyAction::MoveUp
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Home, key(KeyCode::Char('j'))),
            KeyAction::MoveDown
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Home, key(KeyCode::Enter)),
            KeyAction::OpenSelected
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Home, key(KeyCode::Char('c'))),
            KeyAction::OpenChat
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Home, key(KeyCode::Char('?'))),
            KeyAction::ToggleHelp
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Home, key(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_detail_key_handling() {
        assert_eq!(
            KeyHandler::handle(KeyContext::DomainDetail, key(KeyCode::Char('r'))),
            KeyAction::StartRegistration
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::DomainDetail, key(KeyCode::Enter)),
            KeyAction::StartRegistration
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::DomainDetail, key(KeyCode::Esc)),
            KeyAction::Back
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::DomainDetail, key(KeyCode::Char('h'))),
            KeyAction::GoHome
        );
    }

    #[test]
    fn test_registration_text_field_keys() {
        let context = KeyContext::RegistrationEditing {
            selection_field: false,
        };
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Char('a'))),
            KeyAction::InsertChar('a')
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Backspace)),
            KeyAction::DeleteChar
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Left)),
            KeyAction::CursorLeft
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Tab)),
            KeyAction::NextField
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::BackTab)),
            KeyAction::PrevField
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Enter)),
            KeyAction::SubmitForm
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Esc)),
            KeyAction::Back
        );
    }

    #[test]
    fn test_registration_selection_field_keys() {
        let context = KeyContext::RegistrationEditing {
            selection_field: true,
        };
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Left)),
            KeyAction::PrevOption
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Right)),
            KeyAction::NextOption
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Char(' '))),
            KeyAction::NextOption
        );
        // Typed characters never reach a selection field
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Char('a'))),
            KeyAction::None
        );
        assert_eq!(
            KeyHandler::handle(context, key(KeyCode::Down)),
            KeyAction::NextField
        );
    }

    #[test]
    fn test_submitted_display_keys() {
        assert_eq!(
            KeyHandler::handle(KeyContext::RegistrationSubmitted, key(KeyCode::Esc)),
            KeyAction::Back
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::RegistrationSubmitted, key(KeyCode::Enter)),
            KeyAction::GoHome
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::RegistrationSubmitted, key(KeyCode::Char('a'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_chat_key_handling() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Chat, key(KeyCode::Esc)),
            KeyAction::CloseChat
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Chat, key(KeyCode::Char('k'))),
            KeyAction::ChatUp
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Chat, key(KeyCode::Enter)),
            KeyAction::ChatSelect
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Chat, key(KeyCode::Char('1'))),
            KeyAction::ChatChoose(0)
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Chat, key(KeyCode::Char('4'))),
            KeyAction::ChatChoose(3)
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Chat, key(KeyCode::Char('b'))),
            KeyAction::ChatBack
        );
        // 'q' types nothing in chat but should not quit either
        assert_eq!(
            KeyHandler::handle(KeyContext::Chat, key(KeyCode::Char('q'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_help_overlay_captures_input() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Help, key(KeyCode::Esc)),
            KeyAction::CloseHelp
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Help, key(KeyCode::Char('?'))),
            KeyAction::CloseHelp
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Help, key(KeyCode::Enter)),
            KeyAction::None
        );
    }
}
