//! Submit-time validation of the contact form

use crate::form::{ContactForm, FormField};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email pattern"));

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number (digits only)";
pub const REQUIRED_MESSAGE: &str = "Please fill in this field";

/// Fields with a format validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidatedField {
    Email,
    ContactNumber,
}

impl ValidatedField {
    pub fn message(&self) -> &'static str {
        match self {
            ValidatedField::Email => INVALID_EMAIL_MESSAGE,
            ValidatedField::ContactNumber => INVALID_PHONE_MESSAGE,
        }
    }

    /// The validated field behind a free-text field, if it has one
    pub fn for_field(field: FormField) -> Option<Self> {
        match field {
            FormField::Email => Some(ValidatedField::Email),
            FormField::ContactNumber => Some(ValidatedField::ContactNumber),
            FormField::Name | FormField::Surname => None,
        }
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatedField::Email => write!(f, "email"),
            ValidatedField::ContactNumber => write!(f, "contactNumber"),
        }
    }
}

/// `<local>@<domain>.<tld>` with every part non-empty and free of whitespace
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Non-empty and ASCII decimal digits only: no spaces, symbols or leading `+`
pub fn validate_phone_number(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

/// Per-field error messages, present only for fields currently failing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<ValidatedField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ValidatedField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: ValidatedField) {
        self.errors.insert(field, field.message().to_string());
    }

    pub fn clear(&mut self, field: ValidatedField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn contains(&self, field: ValidatedField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Fields that must be non-blank before the validators run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    Name,
    Surname,
    Email,
    Country,
    ContactNumber,
}

impl RequiredField {
    /// Form order, which is also the order blanks are reported in
    pub const ALL: [RequiredField; 5] = [
        RequiredField::Name,
        RequiredField::Surname,
        RequiredField::Email,
        RequiredField::Country,
        RequiredField::ContactNumber,
    ];

    pub fn message(&self) -> &'static str {
        REQUIRED_MESSAGE
    }

    fn value<'a>(&self, form: &'a ContactForm) -> &'a str {
        match self {
            RequiredField::Name => &form.name,
            RequiredField::Surname => &form.surname,
            RequiredField::Email => &form.email,
            RequiredField::Country => &form.country,
            RequiredField::ContactNumber => &form.contact_number,
        }
    }
}

impl From<FormField> for RequiredField {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Name => RequiredField::Name,
            FormField::Surname => RequiredField::Surname,
            FormField::Email => RequiredField::Email,
            FormField::ContactNumber => RequiredField::ContactNumber,
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredField::Name => "name",
            RequiredField::Surname => "surname",
            RequiredField::Email => "email",
            RequiredField::Country => "country",
            RequiredField::ContactNumber => "contactNumber",
        };
        write!(f, "{}", name)
    }
}

/// First required field left blank, in form order
pub fn missing_required(form: &ContactForm) -> Option<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .find(|field| field.value(form).trim().is_empty())
}

/// Run the format validators, email first. Stops at the first failure.
pub fn validate_form(form: &ContactForm) -> Result<(), ValidatedField> {
    if !validate_email(&form.email) {
        return Err(ValidatedField::Email);
    }
    if !validate_phone_number(&form.contact_number) {
        return Err(ValidatedField::ContactNumber);
    }
    Ok(())
}
