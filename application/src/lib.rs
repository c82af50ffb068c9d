//! Application layer for PolyIntern
//!
//! Controllers that compose the domain state machines into one session:
//!
//! - [`AppSession`] — single owner of all transient state (current view,
//!   registration form, chat overlay, recorded downloads). The presentation
//!   layer holds exactly one of these and renders immutable snapshots of it.
//! - [`RegistrationForm`] — draft + validation errors + submitted phase.
//! - [`ChatController`] — chat session plus the pending scripted reply.
//!
//! Nothing here performs I/O; timed behavior (submit auto-reset, reply
//! pacing) is driven by the presentation layer's tick and expressed here as
//! plain method calls (`finish_submission`, `deliver_pending_reply`).

pub mod chat;
pub mod registration;
pub mod session;

pub use chat::{ChatController, ChatEffect};
pub use registration::{RegistrationForm, SubmitOutcome};
pub use session::AppSession;
