//! Contact form controller
//!
//! Mediates between raw user input and a validated lead: owns the form
//! state and dialog visibility, debounces the country search, and sends the
//! lead through a [`LeadSink`].
//!
//! Submission is split into [`ContactFormController::begin_submit`], the
//! network call and [`ContactFormController::finish_submit`] so an
//! event-driven UI can keep Submit and Clear disabled while the request is
//! in flight. [`ContactFormController::submit`] runs all three.

use crate::countries::{Country, CountryCatalog};
use crate::debounce::Debouncer;
use crate::form::{ContactForm, FormField, Service};
use crate::sheets::{LeadSink, SheetsClient};
use crate::state::{FormState, PendingSubmission, Rejection};
use crate::validation::{RequiredField, ValidatedField, ValidationErrors};
use crate::{ContactConfig, CoreError, CoreResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Banner text shown when the lead could not be delivered
pub const SUBMIT_FAILED_MESSAGE: &str =
    "We couldn't send your details. Please check your connection and try again.";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Required field {0} is empty")]
    MissingField(RequiredField),

    #[error("Field {0} failed validation")]
    Invalid(ValidatedField),

    #[error("Submission failed: {0}")]
    Transport(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the lead
    Submitted(serde_json::Value),
    /// A submission was already in flight; nothing was sent
    Ignored,
}

/// Which dialogs are on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    pub contact_open: bool,
    pub success_open: bool,
}

pub struct ContactFormController<S: LeadSink> {
    state: Arc<Mutex<FormState>>,
    debouncer: Debouncer,
    dialog: DialogState,
    sink: S,
}

impl ContactFormController<SheetsClient> {
    /// Controller posting to the configured sheets endpoint, using the
    /// built-in country list
    pub fn from_config(config: &ContactConfig) -> CoreResult<Self> {
        let sink = SheetsClient::new(config)?;
        debug!("Leads will be posted to {}", sink.url());
        Ok(Self::new(sink, CountryCatalog::builtin(), config.debounce()))
    }
}

impl<S: LeadSink> ContactFormController<S> {
    pub fn new(sink: S, catalog: CountryCatalog, debounce: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new(catalog))),
            debouncer: Debouncer::new(debounce),
            dialog: DialogState::default(),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    /// Snapshot of the full form state
    pub fn state(&self) -> FormState {
        self.lock().clone()
    }

    pub fn form(&self) -> ContactForm {
        self.lock().form().clone()
    }

    pub fn validation_errors(&self) -> ValidationErrors {
        self.lock().validation_errors().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().is_submitting()
    }

    pub fn submit_error(&self) -> Option<String> {
        self.lock().submit_error().map(str::to_string)
    }

    pub fn search_query(&self) -> String {
        self.lock().search_query().to_string()
    }

    pub fn filtered_countries(&self) -> Vec<Country> {
        self.lock().filtered_countries().to_vec()
    }

    /// Show the contact dialog with a fresh, empty form
    pub fn open(&mut self) {
        self.discard();
        self.dialog.contact_open = true;
        self.dialog.success_open = false;
        debug!("Contact dialog opened");
    }

    /// Close the contact dialog, throwing away whatever was entered
    pub fn cancel(&mut self) {
        self.discard();
        self.dialog.contact_open = false;
        debug!("Contact dialog cancelled");
    }

    pub fn dismiss_success(&mut self) {
        self.dialog.success_open = false;
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.lock().update_field(field, value);
    }

    pub fn select_country(&mut self, name: &str) -> bool {
        let selected = self.lock().select_country(name);
        if !selected {
            debug!("Ignoring selection of unknown country {:?}", name);
        }
        selected
    }

    pub fn select_dial_code(&mut self, dial_code: impl Into<String>) {
        self.lock().select_dial_code(dial_code);
    }

    pub fn toggle_service(&mut self, service: Service) {
        self.lock().toggle_service(service);
    }

    /// Update the country search text. The filtered list follows once the
    /// debounce window passes without another update.
    pub fn update_search_query(&mut self, text: impl Into<String>) -> bool {
        if !self.lock().set_search_query(text) {
            return false;
        }

        let state = Arc::clone(&self.state);
        self.debouncer.schedule(move || {
            lock_state(&state).apply_filter();
        });
        true
    }

    /// Reset every field, error and the search. Ignored while submitting.
    pub fn clear_form(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.debouncer.cancel();
        self.lock().reset();
        true
    }

    /// Guard and validate. `Ok(None)` means a submission is already in
    /// flight and this trigger is ignored.
    pub fn begin_submit(&mut self) -> Result<Option<PendingSubmission>, SubmitError> {
        let pending = match self.lock().begin_submit() {
            Ok(pending) => pending,
            Err(Rejection::AlreadySubmitting) => {
                debug!("Submit ignored, a submission is already in flight");
                return Ok(None);
            }
            Err(Rejection::MissingField(field)) => {
                debug!("Submit blocked: {} is required", field);
                return Err(SubmitError::MissingField(field));
            }
            Err(Rejection::Invalid(field)) => {
                debug!("Submit blocked: {} failed validation", field);
                return Err(SubmitError::Invalid(field));
            }
        };

        Ok(Some(pending))
    }

    /// Apply the endpoint's answer to a submission started by `begin_submit`
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        result: CoreResult<serde_json::Value>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let settled = match &result {
            Ok(_) => Ok(()),
            Err(_) => Err(SUBMIT_FAILED_MESSAGE.to_string()),
        };
        if !self.lock().finish_submit(pending.id(), settled) {
            // The dialog was cancelled or reopened while the request ran
            warn!("Dropping result of abandoned submission #{}", pending.id());
            return result.map(SubmitOutcome::Submitted).map_err(SubmitError::from);
        }

        match result {
            Ok(ack) => {
                info!("Form submitted successfully: {}", ack);
                self.debouncer.cancel();
                self.dialog.contact_open = false;
                self.dialog.success_open = true;
                Ok(SubmitOutcome::Submitted(ack))
            }
            Err(e) => {
                error!("Error submitting form: {}", e);
                Err(SubmitError::Transport(e))
            }
        }
    }

    /// Validate, send and settle in one go
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let Some(pending) = self.begin_submit()? else {
            return Ok(SubmitOutcome::Ignored);
        };

        let result = self.sink.submit(pending.form()).await;
        self.finish_submit(pending, result)
    }

    fn discard(&mut self) {
        self.debouncer.cancel();
        self.lock().reset();
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    /// Sink that records every lead and answers with a fixed status
    #[derive(Clone)]
    struct RecordingSink {
        status: u16,
        received: Arc<Mutex<Vec<ContactForm>>>,
    }

    impl RecordingSink {
        fn answering(status: u16) -> Self {
            Self {
                status,
                received: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> usize {
            self.received.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        async fn submit(&self, form: &ContactForm) -> CoreResult<serde_json::Value> {
            self.received.lock().unwrap().push(form.clone());
            if (200..300).contains(&self.status) {
                Ok(json!({ "success": true }))
            } else {
                Err(CoreError::Status(self.status))
            }
        }
    }

    fn catalog() -> CountryCatalog {
        CountryCatalog::new(vec![
            Country::new("Argentina", "+54", "AR", "🇦🇷"),
            Country::new("Armenia", "+374", "AM", "🇦🇲"),
            Country::new("Austria", "+43", "AT", "🇦🇹"),
            Country::new("South Africa", "+27", "ZA", "🇿🇦"),
        ])
        .unwrap()
    }

    fn controller(status: u16) -> ContactFormController<RecordingSink> {
        let mut controller = ContactFormController::new(
            RecordingSink::answering(status),
            catalog(),
            Duration::from_millis(300),
        );
        controller.open();
        controller
    }

    fn fill(controller: &mut ContactFormController<RecordingSink>) {
        controller.update_field(FormField::Name, "Thandi");
        controller.update_field(FormField::Surname, "Nkosi");
        controller.update_field(FormField::Email, "thandi@example.com");
        controller.update_field(FormField::ContactNumber, "821234567");
        controller.select_country("South Africa");
        controller.toggle_service(Service::Fitness);
    }

    #[tokio::test]
    async fn test_bad_email_blocks_submission() {
        let mut controller = controller(200);
        fill(&mut controller);
        controller.update_field(FormField::Email, "bad-email");

        let result = controller.submit().await;
        assert!(matches!(result, Err(SubmitError::Invalid(ValidatedField::Email))));
        assert_eq!(controller.sink().calls(), 0);
        assert!(controller.validation_errors().contains(ValidatedField::Email));
        assert!(controller.dialog().contact_open);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_phone_with_symbols_blocks_submission() {
        let mut controller = controller(200);
        fill(&mut controller);
        controller.update_field(FormField::ContactNumber, "+27 821234567");

        let result = controller.submit().await;
        assert!(matches!(result, Err(SubmitError::Invalid(ValidatedField::ContactNumber))));
        assert_eq!(controller.sink().calls(), 0);
        assert!(controller.validation_errors().contains(ValidatedField::ContactNumber));
    }

    #[tokio::test]
    async fn test_both_failures_reported_across_attempts() {
        let mut controller = controller(200);
        fill(&mut controller);
        controller.update_field(FormField::Email, "bad-email");
        controller.update_field(FormField::ContactNumber, "082 123");

        assert!(matches!(controller.submit().await, Err(SubmitError::Invalid(ValidatedField::Email))));
        assert!(!controller.validation_errors().contains(ValidatedField::ContactNumber));

        controller.update_field(FormField::Email, "thandi@example.com");
        assert!(matches!(
            controller.submit().await,
            Err(SubmitError::Invalid(ValidatedField::ContactNumber))
        ));
        assert_eq!(controller.sink().calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        let mut controller = controller(200);
        fill(&mut controller);
        controller.update_field(FormField::Surname, "");

        let result = controller.submit().await;
        assert!(matches!(result, Err(SubmitError::MissingField(RequiredField::Surname))));
        assert_eq!(controller.sink().calls(), 0);
        assert_eq!(controller.state().missing_field(), Some(RequiredField::Surname));
    }

    #[tokio::test]
    async fn test_success_resets_and_shows_acknowledgment() {
        let mut controller = controller(200);
        fill(&mut controller);

        let outcome = controller.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted(json!({ "success": true })));

        let sent = controller.sink().received.lock().unwrap()[0].clone();
        assert_eq!(sent.country, "South Africa");
        assert_eq!(sent.dial_code, "+27");
        assert_eq!(sent.services_interested, vec![Service::Fitness]);

        assert!(controller.form().is_empty());
        assert!(!controller.is_submitting());
        assert_eq!(
            controller.dialog(),
            DialogState {
                contact_open: false,
                success_open: true
            }
        );

        controller.dismiss_success();
        assert!(!controller.dialog().success_open);
    }

    #[tokio::test]
    async fn test_server_error_keeps_values() {
        let mut controller = controller(500);
        fill(&mut controller);

        let result = controller.submit().await;
        assert!(matches!(result, Err(SubmitError::Transport(CoreError::Status(500)))));
        assert_eq!(controller.sink().calls(), 1);

        assert_eq!(controller.form().name, "Thandi");
        assert_eq!(controller.form().contact_number, "821234567");
        assert!(!controller.is_submitting());
        assert!(controller.dialog().contact_open);
        assert!(!controller.dialog().success_open);
        assert_eq!(controller.submit_error().as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_ignored_while_in_flight() {
        let mut controller = controller(200);
        fill(&mut controller);

        let pending = controller.begin_submit().unwrap().unwrap();
        assert!(controller.is_submitting());
        assert!(controller.begin_submit().unwrap().is_none());
        assert_eq!(controller.submit().await.unwrap(), SubmitOutcome::Ignored);

        // Clear is disabled as well
        assert!(!controller.clear_form());
        assert_eq!(controller.form().name, "Thandi");

        let result = controller.sink().submit(pending.form()).await;
        controller.finish_submit(pending, result).unwrap();
        assert_eq!(controller.sink().calls(), 1);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_cancelled_submission_result_is_dropped() {
        let mut controller = controller(200);
        fill(&mut controller);

        let pending = controller.begin_submit().unwrap().unwrap();
        controller.cancel();
        assert!(!controller.dialog().contact_open);
        assert!(controller.form().is_empty());

        let result = controller.sink().submit(pending.form()).await;
        assert!(controller.finish_submit(pending, result).is_ok());
        assert!(!controller.dialog().success_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_filters_after_debounce_window() {
        let mut controller = controller(200);
        assert!(controller.update_search_query("Ar"));
        assert_eq!(controller.search_query(), "Ar");

        // Nothing recomputed yet
        assert_eq!(controller.filtered_countries().len(), 4);

        tokio::time::sleep(Duration::from_millis(350)).await;
        let names: Vec<_> = controller
            .filtered_countries()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Argentina", "Armenia"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_typing_recomputes_once_with_latest_query() {
        let mut controller = controller(200);
        controller.update_search_query("A");
        tokio::time::sleep(Duration::from_millis(200)).await;
        controller.update_search_query("Au");
        tokio::time::sleep(Duration::from_millis(200)).await;

        // 400ms after the first keystroke, 200ms after the last
        assert_eq!(controller.filtered_countries().len(), 4);

        tokio::time::sleep(Duration::from_millis(150)).await;
        let names: Vec<_> = controller
            .filtered_countries()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Austria"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_form_cancels_pending_search() {
        let mut controller = controller(200);
        fill(&mut controller);
        controller.update_search_query("Ar");
        controller.update_field(FormField::Email, "bad");
        let _ = controller.submit().await;

        assert!(controller.clear_form());
        tokio::time::sleep(Duration::from_secs(1)).await;

        let state = controller.state();
        assert!(state.form().is_empty());
        assert!(state.validation_errors().is_empty());
        assert_eq!(state.search_query(), "");
        assert_eq!(state.filtered_countries(), catalog().all());
    }

    #[tokio::test]
    async fn test_reopen_starts_fresh() {
        let mut controller = controller(500);
        fill(&mut controller);
        let _ = controller.submit().await;

        controller.open();
        assert!(controller.form().is_empty());
        assert!(controller.submit_error().is_none());
        assert!(controller.dialog().contact_open);
    }

    #[tokio::test]
    async fn test_end_to_end_against_http_endpoint() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/sheets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "updatedRows": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ContactConfig {
            api_base_url: server.uri(),
            debounce_ms: 300,
            request_timeout_secs: 5,
        };
        let mut controller = ContactFormController::from_config(&config).unwrap();
        controller.open();
        controller.update_field(FormField::Name, "Thandi");
        controller.update_field(FormField::Surname, "Nkosi");
        controller.update_field(FormField::Email, "thandi@example.com");
        controller.update_field(FormField::ContactNumber, "821234567");
        assert!(controller.select_country("South Africa"));

        let outcome = controller.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted(json!({ "updatedRows": 1 })));
        assert!(controller.dialog().success_open);
    }
}
