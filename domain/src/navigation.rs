//! View navigation state machine
//!
//! Three states: home, domain detail, registration. The registration view
//! always carries the domain it was entered for, so back navigation can
//! return to the right detail view. Initial state is home; there is no
//! terminal state.

use crate::catalog::DomainId;

/// The top-level view currently rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    DomainDetail(DomainId),
    Registration(DomainId),
}

impl View {
    /// Title shown in the header bar
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Internship Domains",
            Self::DomainDetail(_) => "Domain Details",
            Self::Registration(_) => "Registration Form",
        }
    }
}

/// Owner of the current view state
#[derive(Debug, Clone)]
pub struct Navigator {
    view: View,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { view: View::Home }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The domain carried by the current view, if any
    pub fn selected_domain(&self) -> Option<DomainId> {
        match self.view {
            View::Home => None,
            View::DomainDetail(id) | View::Registration(id) => Some(id),
        }
    }

    /// Open the detail view for a domain (from any view)
    pub fn open_domain(&mut self, id: DomainId) {
        self.view = View::DomainDetail(id);
    }

    /// Move from the detail view to registration. No-op elsewhere.
    pub fn start_registration(&mut self) {
        if let View::DomainDetail(id) = self.view {
            self.view = View::Registration(id);
        }
    }

    /// Open registration directly for a domain (chat path)
    pub fn open_registration(&mut self, id: DomainId) {
        self.view = View::Registration(id);
    }

    /// Back navigation: registration returns to the detail view with the
    /// selection retained; detail returns home; home stays home.
    pub fn back(&mut self) {
        self.view = match self.view {
            View::Home => View::Home,
            View::DomainDetail(_) => View::Home,
            View::Registration(id) => View::DomainDetail(id),
        };
    }

    /// Jump straight home, clearing the selection
    pub fn go_home(&mut self) {
        self.view = View::Home;
    }
}
