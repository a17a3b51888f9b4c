//! Contact form payload and its field types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Free-text fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Surname,
    Email,
    ContactNumber,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Surname,
        FormField::Email,
        FormField::ContactNumber,
    ];

    /// Input name used in the rendered form and the JSON payload
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Surname => "surname",
            FormField::Email => "email",
            FormField::ContactNumber => "contactNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Surname => "Surname",
            FormField::Email => "Email",
            FormField::ContactNumber => "Mobile No.",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// Services a lead can express interest in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    Fitness,
    Psychological,
    #[serde(rename = "Life Coaching")]
    LifeCoaching,
    Manifestation,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Fitness,
        Service::Psychological,
        Service::LifeCoaching,
        Service::Manifestation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::Fitness => "Fitness",
            Service::Psychological => "Psychological",
            Service::LifeCoaching => "Life Coaching",
            Service::Manifestation => "Manifestation",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.label() == s)
            .ok_or_else(|| format!("Unknown service: {}", s))
    }
}

/// The persisted part of the form, exactly what is posted to the sheets endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub country: String,
    pub dial_code: String,
    pub contact_number: String,
    pub services_interested: Vec<Service>,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Surname => &self.surname,
            FormField::Email => &self.email,
            FormField::ContactNumber => &self.contact_number,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Surname => &mut self.surname,
            FormField::Email => &mut self.email,
            FormField::ContactNumber => &mut self.contact_number,
        }
    }

    pub fn is_interested_in(&self, service: Service) -> bool {
        self.services_interested.contains(&service)
    }

    /// Add `service` if absent, remove it if present
    pub fn toggle_service(&mut self, service: Service) {
        if let Some(pos) = self.services_interested.iter().position(|s| *s == service) {
            self.services_interested.remove(pos);
        } else {
            self.services_interested.push(service);
        }
    }

    /// True when every field still holds its initial value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
