//! Registration form controller
//!
//! Owns the draft, the current error set, and the submitted phase. Submission
//! is all-or-nothing: either every field validates and the form enters its
//! submitted display, or the full error set is stored and nothing else
//! changes.

use polyintern_domain::registration::{validate, Field, RegistrationDraft, ValidationErrorSet};
use tracing::debug;

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; the form is now in its submitted display
    Accepted,
    /// At least one field failed; errors are available via [`RegistrationForm::errors`]
    Rejected,
}

/// Stateful form controller
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    draft: RegistrationDraft,
    errors: ValidationErrorSet,
    submitted: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field. If that field currently carries a validation
    /// error, clear it without re-validating anything else.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear_field(field);
    }

    /// Run full validation. On success the form enters the submitted display;
    /// a later [`reset`](Self::reset) returns it to an empty editing state.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitted {
            return SubmitOutcome::Accepted;
        }
        let errors = validate(&self.draft);
        if errors.is_empty() {
            self.errors.clear();
            self.submitted = true;
            SubmitOutcome::Accepted
        } else {
            let failed: Vec<&str> = errors.iter().map(|(field, _)| field.label()).collect();
            debug!(?failed, "registration rejected");
            self.errors = errors;
            SubmitOutcome::Rejected
        }
    }

    /// Discard the draft, errors, and submitted phase
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(form: &mut RegistrationForm) {
        form.update_field(Field::Name, "Priya Sharma");
        form.update_field(Field::Age, "21");
        form.update_field(Field::Gender, "Female");
        form.update_field(Field::College, "RV College of Engineering");
        form.update_field(Field::City, "Bengaluru");
        form.update_field(Field::State, "Karnataka");
        form.update_field(Field::Email, "priya@example.com");
        form.update_field(Field::Phone, "987-654-3210");
    }

    #[test]
    fn test_submit_valid_form_is_accepted() {
        let mut form = RegistrationForm::new();
        fill_valid(&mut form);
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.is_submitted());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_invalid_form_is_rejected_with_full_error_set() {
        let mut form = RegistrationForm::new();
        fill_valid(&mut form);
        form.update_field(Field::Age, "40");
        form.update_field(Field::Phone, "123");

        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert!(!form.is_submitted());
        assert_eq!(form.errors().len(), 2);
        assert!(form.error(Field::Age).is_some());
        assert!(form.error(Field::Phone).is_some());
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        let total = form.errors().len();

        form.update_field(Field::Email, "a@b.co");
        assert!(form.error(Field::Email).is_none());
        // Other fields keep their stale errors until the next submit
        assert_eq!(form.errors().len(), total - 1);
    }

    #[test]
    fn test_update_field_is_idempotent() {
        let mut once = RegistrationForm::new();
        once.update_field(Field::City, "Mysuru");

        let mut twice = RegistrationForm::new();
        twice.update_field(Field::City, "Mysuru");
        twice.update_field(Field::City, "Mysuru");

        assert_eq!(once.draft(), twice.draft());
    }

    #[test]
    fn test_submit_after_submitted_is_noop() {
        let mut form = RegistrationForm::new();
        fill_valid(&mut form);
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.is_submitted());
    }

    #[test]
    fn test_reset_returns_to_empty_editing_state() {
        let mut form = RegistrationForm::new();
        fill_valid(&mut form);
        form.submit();
        form.reset();
        assert!(!form.is_submitted());
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
    }
}
