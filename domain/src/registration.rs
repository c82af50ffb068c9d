//! Registration form model — draft, fields, and validation rules
//!
//! Validation runs the full rule set on every submission attempt; rules are
//! evaluated independently and all failures are collected, never
//! short-circuited. Per-field errors are cleared optimistically the moment
//! that field is edited again (see the application-layer form controller).

use std::collections::BTreeMap;
use std::fmt;

/// Inclusive age range accepted by the program
pub const AGE_RANGE: (i64, i64) = (16, 35);

/// Options for the gender selection field
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Options for the state selection field
pub const INDIAN_STATES: [&str; 30] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Puducherry",
];

/// One field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Age,
    Gender,
    College,
    City,
    State,
    Email,
    Phone,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Age,
        Field::Gender,
        Field::College,
        Field::City,
        Field::State,
        Field::Email,
        Field::Phone,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::College => "College",
            Self::City => "City",
            Self::State => "State",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Age => "Enter your age",
            Self::Gender => "Select gender",
            Self::College => "Enter your college name",
            Self::City => "Enter your city",
            Self::State => "Select state",
            Self::Email => "Enter your email address",
            Self::Phone => "Enter your 10-digit phone number",
        }
    }

    /// Selection fields are cycled through fixed options rather than typed
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Gender | Self::State)
    }

    /// Options for selection fields (empty for free-text fields)
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Gender => &GENDER_OPTIONS,
            Self::State => &INDIAN_STATES,
            _ => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-progress, not-yet-submitted registration data.
///
/// Created empty when the form view opens; mutated field-by-field; reset to
/// empty after a successful submission or when the user navigates away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub college: String,
    pub city: String,
    pub state: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::College => &self.college,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::College => &mut self.college,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Per-field validation messages from one submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Optimistic clearing: drop this field's error without re-validating
    /// any other field.
    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }
}

/// Run the full rule set over a draft. All failures are collected.
pub fn validate(draft: &RegistrationDraft) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if draft.age.trim().is_empty() {
        errors.insert(Field::Age, "Age is required");
    } else {
        match draft.age.trim().parse::<i64>() {
            Ok(age) if (AGE_RANGE.0..=AGE_RANGE.1).contains(&age) => {}
            _ => errors.insert(Field::Age, "Age must be between 16-35"),
        }
    }

    if draft.gender.is_empty() {
        errors.insert(Field::Gender, "Gender is required");
    }

    if draft.college.trim().is_empty() {
        errors.insert(Field::College, "College name is required");
    }

    if draft.city.trim().is_empty() {
        errors.insert(Field::City, "City is required");
    }

    if draft.state.trim().is_empty() {
        errors.insert(Field::State, "State is required");
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !email_has_valid_shape(draft.email.trim()) {
        errors.insert(Field::Email, "Email format is invalid");
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    } else {
        let digits = draft.phone.chars().filter(char::is_ascii_digit).count();
        if digits != 10 {
            errors.insert(Field::Phone, "Phone number must be 10 digits");
        }
    }

    errors
}

/// Basic `local@domain.tld` shape check: non-empty local part, a domain with
/// a dot, non-empty labels around the final dot, no whitespace anywhere.
fn email_has_valid_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
