//! Domain layer for PolyIntern
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on presentation concerns: no terminal types, no
//! async, no I/O.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! Four fixed internship domains (AI/ML, Cybersecurity, Cloud Computing,
//! Full Stack Development). Defined at compile time, never mutated.
//!
//! ## Registration
//!
//! A mutable draft of eight fields plus synchronous validation. Submission
//! is all-or-nothing: either every field passes and the form moves to its
//! submitted display, or the full error set is returned and nothing changes.
//!
//! ## Navigation / Chat
//!
//! Two small state machines: the view navigator (home / domain detail /
//! registration) and the scripted chat assistant (five menu states with a
//! message transcript). The chat re-exposes the navigator's transitions as
//! conversational menu choices.

pub mod catalog;
pub mod chat;
pub mod core;
pub mod navigation;
pub mod registration;

// Re-export commonly used types
pub use catalog::{Catalog, DomainDescriptor, DomainId, DownloadRequest, PROGRAM_HIGHLIGHTS};
pub use chat::{
    ChatAction, ChatSession, ChatState, ContactChannels, MenuChoice, Sender, TranscriptEntry,
    CONTACT_CHANNELS,
};
pub use core::error::DomainError;
pub use navigation::{Navigator, View};
pub use registration::{
    validate, Field, RegistrationDraft, ValidationErrorSet, GENDER_OPTIONS, INDIAN_STATES,
};
