//! Thrive contact form core
//!
//! This crate owns everything behind the site's contact dialog: the form
//! state, the country reference list, field validation, the debounced
//! country search, and submission of leads to the sheets endpoint.

pub mod controller;
pub mod countries;
pub mod debounce;
pub mod form;
pub mod sheets;
pub mod state;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use controller::{ContactFormController, DialogState, SubmitError, SubmitOutcome};
pub use countries::{Country, CountryCatalog};
pub use debounce::Debouncer;
pub use form::{ContactForm, FormField, Service};
pub use sheets::{LeadSink, SheetsClient, SHEETS_PATH};
pub use state::{FormState, PendingSubmission, Rejection};
pub use validation::{
    validate_email, validate_phone_number, RequiredField, ValidatedField, ValidationErrors, REQUIRED_MESSAGE,
};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Country catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Origin the sheets endpoint path is appended to
    pub api_base_url: String,
    /// Quiet period before the country filter recomputes (milliseconds)
    pub debounce_ms: u64,
    /// Lead submission timeout (seconds)
    pub request_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            api_base_url: std::env::var("THRIVE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            debounce_ms: env_u64("THRIVE_DEBOUNCE_MS").unwrap_or(DEFAULT_DEBOUNCE_MS),
            request_timeout_secs: env_u64("THRIVE_REQUEST_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ContactConfig {
    /// Full URL of the sheets endpoint
    pub fn sheets_url(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), SHEETS_PATH)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject settings the controller cannot work with
    pub fn validate(&self) -> CoreResult<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "api_base_url must be an http(s) origin, got {:?}",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config("request_timeout_secs must be non-zero".to_string()));
        }
        Ok(())
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not an unsigned integer", key, raw);
            None
        }
    }
}
