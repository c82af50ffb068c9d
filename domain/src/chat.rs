//! Scripted chat assistant — menu states, transcript, and decision tree
//!
//! The assistant is a fixed decision tree over five states. Every transition
//! is a discrete menu selection; there is no free-text input. Selecting a
//! domain in `browse-courses` or `registration-domains` requests the
//! corresponding view navigation and closes the overlay; `download` produces
//! a simulated [`DownloadRequest`](crate::catalog::DownloadRequest) without
//! touching the navigation state.

use crate::catalog::{Catalog, DomainId};
use chrono::{DateTime, Local};

/// Menu state of the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Welcome,
    BrowseCourses,
    RegistrationDomains,
    Download,
    Contact,
}

impl ChatState {
    /// The bot's scripted prompt for this state
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Welcome => "Hello! Welcome to PolyIntern. How can I assist you today?",
            Self::BrowseCourses => "Please select the course you're interested in:",
            Self::RegistrationDomains => "Which domain would you like to register for?",
            Self::Download => {
                "Select the domain for which you want to download the course PDF:"
            }
            Self::Contact => "You can reach us through the following channels:",
        }
    }

    /// Menu choices offered in this state, in display order
    pub fn menu(&self) -> Vec<MenuChoice> {
        match self {
            Self::Welcome => vec![
                MenuChoice::new("Browse Courses & Details", ChatAction::GoTo(Self::BrowseCourses)),
                MenuChoice::new("Registration", ChatAction::GoTo(Self::RegistrationDomains)),
                MenuChoice::new("Download Course Content", ChatAction::GoTo(Self::Download)),
                MenuChoice::new("Contact", ChatAction::GoTo(Self::Contact)),
            ],
            Self::BrowseCourses => {
                let mut choices: Vec<MenuChoice> = Catalog::all()
                    .iter()
                    .map(|d| MenuChoice::new(d.title, ChatAction::OpenDomain(d.id)))
                    .collect();
                choices.push(MenuChoice::back());
                choices
            }
            Self::RegistrationDomains => {
                let mut choices: Vec<MenuChoice> = Catalog::all()
                    .iter()
                    .map(|d| MenuChoice::new(d.title, ChatAction::OpenRegistration(d.id)))
                    .collect();
                choices.push(MenuChoice::back());
                choices
            }
            Self::Download => {
                let mut choices: Vec<MenuChoice> = Catalog::all()
                    .iter()
                    .map(|d| {
                        MenuChoice::new(
                            format!("{} (Download PDF)", d.title),
                            ChatAction::Download(d.id),
                        )
                    })
                    .collect();
                choices.push(MenuChoice::back());
                choices
            }
            Self::Contact => vec![MenuChoice::back()],
        }
    }
}

/// What a menu selection does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    /// Move to another chat state
    GoTo(ChatState),
    /// Open the detail view for a domain and close the overlay
    OpenDomain(DomainId),
    /// Open registration for a domain and close the overlay
    OpenRegistration(DomainId),
    /// Trigger a simulated course-content download; stays in chat
    Download(DomainId),
    /// Return to the welcome state
    Back,
}

/// One selectable menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChoice {
    pub label: String,
    pub action: ChatAction,
}

impl MenuChoice {
    pub fn new(label: impl Into<String>, action: ChatAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    pub fn back() -> Self {
        Self::new("Back", ChatAction::Back)
    }
}

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Assistant",
        }
    }
}

/// One exchanged message in the chat overlay
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Local>,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            at: Local::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            at: Local::now(),
        }
    }
}

/// Transient state of the assistant overlay
#[derive(Debug, Clone)]
pub struct ChatSession {
    state: ChatState,
    transcript: Vec<TranscriptEntry>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            state: ChatState::Welcome,
            transcript: Vec::new(),
        }
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn set_state(&mut self, state: ChatState) {
        self.state = state;
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::user(text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::bot(text));
    }

    /// Back to the welcome state with an empty transcript. Invoked whenever
    /// the overlay closes.
    pub fn reset(&mut self) {
        self.state = ChatState::Welcome;
        self.transcript.clear();
    }
}

/// The three fixed contact channels shown in the `contact` leaf.
/// Static display data only; nothing here is ever called programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannels {
    pub whatsapp: &'static str,
    pub website: &'static str,
    pub address: &'static str,
}

pub const CONTACT_CHANNELS: ContactChannels = ContactChannels {
    whatsapp: "+91 97317 55053",
    website: "www.polyintern.in",
    address: "05, Abba Bhavani Temple, Back Side Ms Palaya, Dodda Vidyaranyapura, \
        Bengaluru, Karnataka 560097",
};
