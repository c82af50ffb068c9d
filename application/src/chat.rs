//! Chat controller — drives the scripted assistant's decision tree
//!
//! Menu selections append to the transcript immediately; the bot's scripted
//! reply is parked as a pending entry and delivered later by the presentation
//! tick, giving the short conversational pause. Closing the overlay resets
//! the session and drops any pending reply.

use polyintern_domain::catalog::{Catalog, DownloadRequest};
use polyintern_domain::chat::{ChatAction, ChatSession, ChatState, MenuChoice};
use tracing::{debug, warn};

/// Side effect requested by a menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    /// Selection handled entirely inside the chat
    None,
    /// Open the detail view for a domain and close the overlay
    OpenDomain(polyintern_domain::DomainId),
    /// Open registration for a domain and close the overlay
    OpenRegistration(polyintern_domain::DomainId),
    /// A simulated download was requested; the overlay stays open
    Download(DownloadRequest),
}

/// Controller for the chat overlay
#[derive(Debug, Clone, Default)]
pub struct ChatController {
    session: ChatSession,
    pending_reply: Option<String>,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the overlay opens: greet immediately if the transcript
    /// is empty (it always is, since closing resets the session).
    pub fn open(&mut self) {
        if self.session.transcript().is_empty() {
            self.session.push_bot(ChatState::Welcome.prompt());
        }
    }

    pub fn state(&self) -> ChatState {
        self.session.state()
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Menu choices for the current state
    pub fn choices(&self) -> Vec<MenuChoice> {
        self.session.state().menu()
    }

    /// Apply the menu selection at `index`. Out-of-range selections are
    /// no-ops.
    pub fn select(&mut self, index: usize) -> ChatEffect {
        let choices = self.choices();
        let Some(choice) = choices.get(index) else {
            warn!(index, state = ?self.session.state(), "chat selection out of range");
            return ChatEffect::None;
        };

        self.session.push_user(choice.label.clone());

        match choice.action {
            ChatAction::GoTo(state) => {
                self.session.set_state(state);
                self.pending_reply = Some(state.prompt().to_string());
                ChatEffect::None
            }
            ChatAction::Back => {
                self.session.set_state(ChatState::Welcome);
                self.pending_reply = Some(ChatState::Welcome.prompt().to_string());
                ChatEffect::None
            }
            ChatAction::OpenDomain(id) => ChatEffect::OpenDomain(id),
            ChatAction::OpenRegistration(id) => ChatEffect::OpenRegistration(id),
            ChatAction::Download(id) => {
                let descriptor = Catalog::find(id);
                let request = DownloadRequest::for_domain(descriptor);
                debug!(file = %request.file_name, "simulated download requested");
                self.pending_reply =
                    Some(format!("{} course PDF download started!", descriptor.title));
                ChatEffect::Download(request)
            }
        }
    }

    pub fn has_pending_reply(&self) -> bool {
        self.pending_reply.is_some()
    }

    /// Append the parked bot reply to the transcript. Called by the
    /// presentation tick once the pacing delay has elapsed.
    pub fn deliver_pending_reply(&mut self) {
        if let Some(text) = self.pending_reply.take() {
            self.session.push_bot(text);
        }
    }

    /// Called when the overlay closes: reset to welcome, drop any pending
    /// reply.
    pub fn close(&mut self) {
        self.session.reset();
        self.pending_reply = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyintern_domain::chat::Sender;
    use polyintern_domain::DomainId;

    #[test]
    fn test_open_greets_once() {
        let mut chat = ChatController::new();
        chat.open();
        assert_eq!(chat.session().transcript().len(), 1);
        assert_eq!(chat.session().transcript()[0].sender, Sender::Bot);

        chat.open();
        assert_eq!(chat.session().transcript().len(), 1);
    }

    #[test]
    fn test_goto_download_parks_reply() {
        let mut chat = ChatController::new();
        chat.open();
        // Welcome menu: [browse, registration, download, contact]
        let effect = chat.select(2);
        assert_eq!(effect, ChatEffect::None);
        assert_eq!(chat.state(), ChatState::Download);
        assert!(chat.has_pending_reply());

        // User entry recorded immediately, bot reply only after delivery
        let transcript = chat.session().transcript();
        assert_eq!(transcript.last().unwrap().sender, Sender::User);
        assert_eq!(transcript.last().unwrap().text, "Download Course Content");

        chat.deliver_pending_reply();
        assert!(!chat.has_pending_reply());
        assert_eq!(
            chat.session().transcript().last().unwrap().text,
            ChatState::Download.prompt()
        );
    }

    #[test]
    fn test_download_selection_yields_request_and_stays_in_chat() {
        let mut chat = ChatController::new();
        chat.open();
        chat.select(2);
        let effect = chat.select(0); // AI/ML
        match effect {
            ChatEffect::Download(request) => {
                assert_eq!(request.file_name, "AI/ML_Course_Content.pdf");
                assert_eq!(request.domain, DomainId::AiMl);
            }
            other => panic!("expected download effect, got {other:?}"),
        }
        assert_eq!(chat.state(), ChatState::Download);

        chat.deliver_pending_reply();
        assert_eq!(
            chat.session().transcript().last().unwrap().text,
            "AI/ML course PDF download started!"
        );
    }

    #[test]
    fn test_browse_selection_requests_navigation() {
        let mut chat = ChatController::new();
        chat.open();
        chat.select(0); // Browse Courses & Details
        let effect = chat.select(1); // Cybersecurity
        assert_eq!(effect, ChatEffect::OpenDomain(DomainId::Cybersecurity));
    }

    #[test]
    fn test_registration_selection_requests_registration() {
        let mut chat = ChatController::new();
        chat.open();
        chat.select(1); // Registration
        assert_eq!(chat.state(), ChatState::RegistrationDomains);
        let effect = chat.select(3); // Full Stack Development
        assert_eq!(effect, ChatEffect::OpenRegistration(DomainId::FullStack));
    }

    #[test]
    fn test_back_returns_to_welcome() {
        let mut chat = ChatController::new();
        chat.open();
        chat.select(3); // Contact
        assert_eq!(chat.state(), ChatState::Contact);
        let effect = chat.select(0); // Back
        assert_eq!(effect, ChatEffect::None);
        assert_eq!(chat.state(), ChatState::Welcome);
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let mut chat = ChatController::new();
        chat.open();
        let before = chat.session().transcript().len();
        assert_eq!(chat.select(99), ChatEffect::None);
        assert_eq!(chat.state(), ChatState::Welcome);
        assert_eq!(chat.session().transcript().len(), before);
    }

    #[test]
    fn test_close_resets_and_drops_pending_reply() {
        let mut chat = ChatController::new();
        chat.open();
        chat.select(2);
        assert!(chat.has_pending_reply());

        chat.close();
        assert_eq!(chat.state(), ChatState::Welcome);
        assert!(chat.session().transcript().is_empty());
        assert!(!chat.has_pending_reply());
    }
}
