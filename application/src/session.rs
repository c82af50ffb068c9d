//! Top-level session — single owner of all transient state
//!
//! The presentation layer holds one `AppSession` and drives it with method
//! calls; widgets render from immutable borrows. Unknown domain keys are
//! treated as no-ops and logged, never surfaced as failures.

use crate::chat::{ChatController, ChatEffect};
use crate::registration::{RegistrationForm, SubmitOutcome};
use polyintern_domain::catalog::DownloadRequest;
use polyintern_domain::navigation::{Navigator, View};
use polyintern_domain::registration::Field;
use polyintern_domain::DomainId;
use tracing::warn;

/// All state for one run of the application
#[derive(Debug, Clone, Default)]
pub struct AppSession {
    nav: Navigator,
    form: RegistrationForm,
    chat: ChatController,
    chat_open: bool,
    downloads: Vec<DownloadRequest>,
}

impl AppSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Navigation --

    pub fn view(&self) -> View {
        self.nav.view()
    }

    pub fn selected_domain(&self) -> Option<DomainId> {
        self.nav.selected_domain()
    }

    /// Open the detail view for a domain
    pub fn open_domain(&mut self, id: DomainId) {
        self.nav.open_domain(id);
    }

    /// Open the detail view from an untyped key. Unknown keys are no-ops.
    pub fn open_domain_key(&mut self, key: &str) {
        match key.parse::<DomainId>() {
            Ok(id) => self.nav.open_domain(id),
            Err(err) => warn!(%err, "ignoring navigation request"),
        }
    }

    /// Move from the detail view into registration with a fresh draft
    pub fn start_registration(&mut self) {
        if matches!(self.nav.view(), View::DomainDetail(_)) {
            self.form.reset();
            self.nav.start_registration();
        }
    }

    /// Back navigation. Leaving the registration view discards the draft.
    pub fn go_back(&mut self) {
        if matches!(self.nav.view(), View::Registration(_)) {
            self.form.reset();
        }
        self.nav.back();
    }

    /// Jump home, discarding any draft and selection
    pub fn go_home(&mut self) {
        self.form.reset();
        self.nav.go_home();
    }

    // -- Registration form --

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn submit_form(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    /// Complete a successful submission: discard the draft and return home.
    /// Called when the timed confirmation display elapses; manual navigation
    /// beforehand cancels the caller's timer and this is never invoked.
    pub fn finish_submission(&mut self) {
        if self.form.is_submitted() {
            self.form.reset();
            self.nav.go_home();
        }
    }

    // -- Chat overlay --

    pub fn chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn chat(&self) -> &ChatController {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatController {
        &mut self.chat
    }

    pub fn open_chat(&mut self) {
        self.chat_open = true;
        self.chat.open();
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
        self.chat.close();
    }

    /// Apply a chat menu selection. Navigation effects close the overlay;
    /// a download effect records the request and returns it for display.
    pub fn chat_select(&mut self, index: usize) -> Option<DownloadRequest> {
        match self.chat.select(index) {
            ChatEffect::None => None,
            ChatEffect::OpenDomain(id) => {
                self.close_chat();
                self.nav.open_domain(id);
                None
            }
            ChatEffect::OpenRegistration(id) => {
                self.close_chat();
                self.form.reset();
                self.nav.open_registration(id);
                None
            }
            ChatEffect::Download(request) => {
                self.downloads.push(request.clone());
                Some(request)
            }
        }
    }

    /// Downloads requested so far this session
    pub fn downloads(&self) -> &[DownloadRequest] {
        &self.downloads
    }
}
