//! HTTP submission backend
//!
//! Posts the trimmed submission as a JSON object to a configured endpoint.
//! Any non-2xx status is a failure.

use crate::form::{Submission, SubmissionReceipt, Submitter};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

/// Submits forms to a JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Create a backend for `endpoint`; it must be an absolute http(s) URL
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| Error::Configuration {
            message: format!("Invalid submission endpoint '{}': {}", endpoint, e),
            source: Some(anyhow::Error::new(e)),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "Submission endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// Use a preconfigured client (proxies, default headers, TLS settings)
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpBackend {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Submission response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                message: format!("Endpoint responded with {}: {}", status, body.trim()),
                status_code: Some(status.as_u16()),
                source: None,
            });
        }

        // The body is optional; a JSON object with an "id" becomes the reference
        let reference = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| match body.get("id") {
                Some(Value::String(id)) => Some(id.clone()),
                Some(Value::Number(id)) => Some(id.to_string()),
                _ => None,
            });

        let receipt = SubmissionReceipt::now();
        Ok(match reference {
            Some(id) => receipt.with_reference(id),
            None => receipt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormData;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submission() -> Submission {
        FormData::new()
            .with_field("firstName", " Ada ")
            .with_field("email", "ada@example.com")
            .to_submission()
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(Error::Configuration { .. })
        ));
        assert!(HttpBackend::new("ftp://example.com/signup").is_err());
        assert!(HttpBackend::new("https://example.com/signup").is_ok());
    }

    #[tokio::test]
    async fn test_posts_trimmed_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/waitlist"))
            .and(body_json(serde_json::json!({
                "firstName": "Ada",
                "email": "ada@example.com"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "w-42"})))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&format!("{}/waitlist", server.uri())).unwrap();
        let receipt = backend.submit(&submission()).await.unwrap();
        assert_eq!(receipt.reference.as_deref(), Some("w-42"));
    }

    #[tokio::test]
    async fn test_empty_body_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri()).unwrap();
        let receipt = backend.submit(&submission()).await.unwrap();
        assert!(receipt.reference.is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri()).unwrap();
        let err = backend.submit(&submission()).await.unwrap_err();
        match err {
            Error::Http {
                status_code,
                message,
                ..
            } => {
                assert_eq!(status_code, Some(503));
                assert!(message.contains("down for maintenance"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
