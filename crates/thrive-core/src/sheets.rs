//! Lead submission to the spreadsheet-backed endpoint

use crate::form::ContactForm;
use crate::{ContactConfig, CoreError, CoreResult};
use async_trait::async_trait;

/// Path of the endpoint that appends a lead to the sheet
pub const SHEETS_PATH: &str = "/api/sheets";

/// Destination for validated leads
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Store one lead. Returns the endpoint's JSON acknowledgment.
    async fn submit(&self, form: &ContactForm) -> CoreResult<serde_json::Value>;
}

/// HTTP client for `POST /api/sheets`
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    url: String,
}

impl SheetsClient {
    pub fn new(config: &ContactConfig) -> CoreResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.sheets_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LeadSink for SheetsClient {
    async fn submit(&self, form: &ContactForm) -> CoreResult<serde_json::Value> {
        tracing::debug!("Posting lead for {} {} to {}", form.name, form.surname, self.url);

        // `.json()` sets Content-Type: application/json
        let response = self.client.post(&self.url).json(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Service;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lead() -> ContactForm {
        ContactForm {
            name: "Thandi".to_string(),
            surname: "Nkosi".to_string(),
            email: "thandi@example.com".to_string(),
            country: "South Africa".to_string(),
            dial_code: "+27".to_string(),
            contact_number: "821234567".to_string(),
            services_interested: vec![Service::Fitness, Service::Manifestation],
        }
    }

    fn client_for(server: &MockServer) -> SheetsClient {
        let config = ContactConfig {
            api_base_url: server.uri(),
            debounce_ms: 300,
            request_timeout_secs: 5,
        };
        SheetsClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/sheets"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "name": "Thandi",
                "surname": "Nkosi",
                "email": "thandi@example.com",
                "country": "South Africa",
                "dialCode": "+27",
                "contactNumber": "821234567",
                "servicesInterested": ["Fitness", "Manifestation"],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.url(), format!("{}/api/sheets", server.uri()));

        let ack = client.submit(&lead()).await.unwrap();
        assert_eq!(ack, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "row": 12 })))
            .mount(&server)
            .await;

        assert!(client_for(&server).submit(&lead()).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/sheets"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).submit(&lead()).await.unwrap_err();
        assert!(matches!(err, CoreError::Status(500)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let err = client_for(&server).submit(&lead()).await.unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let config = ContactConfig {
            api_base_url: "ftp://example.com".to_string(),
            debounce_ms: 300,
            request_timeout_secs: 5,
        };
        assert!(matches!(SheetsClient::new(&config), Err(CoreError::Config(_))));
    }
}
