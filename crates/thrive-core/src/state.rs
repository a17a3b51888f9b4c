//! Form state behind the contact dialog
//!
//! `FormState` is one structured value holding every field plus the
//! transient UI state (errors, submission flag, country search). Both the
//! native controller and the web dialog drive it through the same methods,
//! and resetting is a single assignment.

use crate::countries::{Country, CountryCatalog};
use crate::form::{ContactForm, FormField, Service};
use crate::validation::{self, RequiredField, ValidatedField, ValidationErrors};

/// A validated lead waiting to be sent, tagged so a late answer can be
/// matched to the attempt that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    id: u64,
    form: ContactForm,
}

impl PendingSubmission {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn into_form(self) -> ContactForm {
        self.form
    }
}

/// Why a submit attempt did not get as far as the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AlreadySubmitting,
    MissingField(RequiredField),
    Invalid(ValidatedField),
}

#[derive(Debug, Clone)]
pub struct FormState {
    catalog: CountryCatalog,
    form: ContactForm,
    validation_errors: ValidationErrors,
    missing_field: Option<RequiredField>,
    in_flight: Option<u64>,
    next_submission: u64,
    submit_error: Option<String>,
    search_query: String,
    filtered_countries: Vec<Country>,
}

impl FormState {
    pub fn new(catalog: CountryCatalog) -> Self {
        let filtered_countries = catalog.all().to_vec();
        Self {
            catalog,
            form: ContactForm::default(),
            validation_errors: ValidationErrors::new(),
            missing_field: None,
            in_flight: None,
            next_submission: 0,
            submit_error: None,
            search_query: String::new(),
            filtered_countries,
        }
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    pub fn error_for(&self, field: ValidatedField) -> Option<&str> {
        self.validation_errors.get(field)
    }

    /// Required field that blocked the last submit attempt
    pub fn missing_field(&self) -> Option<RequiredField> {
        self.missing_field
    }

    pub fn required_error_for(&self, field: RequiredField) -> Option<&'static str> {
        (self.missing_field == Some(field)).then(|| field.message())
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Message from the last failed submission, shown as a banner
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filtered_countries(&self) -> &[Country] {
        &self.filtered_countries
    }

    /// Set a free-text field. A changed value drops the field's required or
    /// validation error; it is only checked again on the next submit.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = self.form.field_mut(field);
        if *slot == value {
            return;
        }
        *slot = value;

        if let Some(validated) = ValidatedField::for_field(field) {
            self.validation_errors.clear(validated);
        }
        self.clear_missing(RequiredField::from(field));
        self.submit_error = None;
    }

    /// Pick a country by exact display name, copying its dial code.
    /// Unknown names leave the state untouched and return false.
    pub fn select_country(&mut self, name: &str) -> bool {
        let Some(country) = self.catalog.find_by_name(name) else {
            return false;
        };

        self.form.country = country.name.clone();
        self.form.dial_code = country.dial_code.clone();
        self.clear_missing(RequiredField::Country);
        true
    }

    /// Dial code is editable on its own and may drift from the country
    pub fn select_dial_code(&mut self, dial_code: impl Into<String>) {
        self.form.dial_code = dial_code.into();
    }

    pub fn toggle_service(&mut self, service: Service) {
        self.form.toggle_service(service);
    }

    /// Record the search box text. Text containing digits is refused, the
    /// same way the search box swallows number keys.
    pub fn set_search_query(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        self.search_query = text;
        true
    }

    /// Recompute the filtered list from the current query
    pub fn apply_filter(&mut self) {
        self.filtered_countries = self.catalog.filter(&self.search_query);
    }

    /// Back to the empty form, keeping the catalog. Any in-flight
    /// submission is forgotten, so its answer will be ignored.
    pub fn reset(&mut self) {
        let next_submission = self.next_submission;
        *self = FormState::new(self.catalog.clone());
        self.next_submission = next_submission;
    }

    /// Guard, required-field check and validators, in that order.
    ///
    /// On success the form is marked as submitting and a copy of the payload
    /// is returned. Any failure is recorded against the field.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, Rejection> {
        if self.is_submitting() {
            return Err(Rejection::AlreadySubmitting);
        }

        if let Some(field) = validation::missing_required(&self.form) {
            self.missing_field = Some(field);
            return Err(Rejection::MissingField(field));
        }
        self.missing_field = None;

        if let Err(field) = validation::validate_form(&self.form) {
            self.validation_errors.set(field);
            return Err(Rejection::Invalid(field));
        }

        self.validation_errors = ValidationErrors::new();
        self.submit_error = None;
        self.next_submission += 1;
        self.in_flight = Some(self.next_submission);
        Ok(PendingSubmission {
            id: self.next_submission,
            form: self.form.clone(),
        })
    }

    /// Settle submission `id`. Success resets the form; failure keeps the
    /// values and shows the message as a banner. Returns false, changing
    /// nothing, when `id` is not the submission in flight.
    pub fn finish_submit(&mut self, id: u64, result: Result<(), String>) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }

        match result {
            Ok(()) => self.reset(),
            Err(message) => {
                self.submit_error = Some(message);
                self.in_flight = None;
            }
        }
        true
    }

    fn clear_missing(&mut self, field: RequiredField) {
        if self.missing_field == Some(field) {
            self.missing_field = None;
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(CountryCatalog::builtin())
    }
}
