//! Authenticated request execution
//!
//! One authenticated HTTP call per invocation: obtain the current bearer
//! token, attach the JSON headers, send on a short-lived client, and
//! classify the response into the typed error taxonomy. Nothing here
//! retries; a failed call propagates to the domain operation unchanged.

use crate::auth::TokenManager;
use crate::config::ConnectorConfig;
use crate::error::{ConnectorError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde_json::Value;

/// Issues authenticated HTTP calls against the remote service
#[derive(Debug)]
pub struct RequestExecutor {
    config: ConnectorConfig,
    tokens: TokenManager,
}

impl RequestExecutor {
    /// Create an executor, wiring up its own token manager
    #[must_use]
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            tokens: TokenManager::new(config.clone()),
            config,
        }
    }

    /// Token manager backing this executor
    #[must_use]
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Short-lived client for one call; connection reuse across calls is
    /// not part of the contract
    fn request_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.config.request_timeout)
            .build()
            .map_err(ConnectorError::from)
    }

    /// Perform an authenticated call carrying a JSON body and parse the
    /// response as JSON.
    ///
    /// The body is serialized verbatim; the response must be a JSON
    /// document.
    ///
    /// # Errors
    ///
    /// Returns the typed error for any non-success status, or
    /// [`ConnectorError::Json`] when either body fails to (de)serialize.
    pub async fn execute_json(&self, method: Method, path: &str, body: &Value) -> Result<Value> {
        let response = self.send(method, path, Some(body)).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Perform an authenticated call without a body and return the raw
    /// response text.
    ///
    /// # Errors
    ///
    /// Returns the typed error for any non-success status.
    pub async fn execute(&self, method: Method, path: &str) -> Result<String> {
        let response = self.send(method, path, None).await?;
        Ok(response.text().await?)
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        let token = self.tokens.get_token().await?;
        let endpoint = self.config.endpoint(path);
        tracing::debug!("Executing {method} {endpoint}");

        let mut request = self
            .request_client()?
            .request(method, &endpoint)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.body(serde_json::to_string(body)?);
        }

        Self::check_status(request.send().await?).await
    }

    /// Map a non-success response to a typed error. The body read is best
    /// effort: its own failure is logged and never masks the status error.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason().unwrap_or("unknown");
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("Cannot read error response body: {err}");
                String::new()
            }
        };

        Err(ConnectorError::from_status(status.as_u16(), reason, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CSRF_COOKIE;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn executor_for(server: &MockServer) -> RequestExecutor {
        Mock::given(method("GET"))
            .and(path("/server/api/authn/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Set-Cookie", format!("{CSRF_COOKIE}=csrf-1; Path=/").as_str()),
            )
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/server/api/authn/login"))
            .respond_with(
                ResponseTemplate::new(200).insert_header("Authorization", "Bearer abc123"),
            )
            .mount(server)
            .await;

        let config = ConnectorConfig::builder()
            .service_address(server.uri())
            .username("admin@example.org")
            .password(String::from("s3cret"))
            .build();
        RequestExecutor::new(config)
    }

    #[tokio::test]
    async fn test_request_carries_bearer_and_json_headers() {
        let server = MockServer::start().await;
        let executor = executor_for(&server).await;

        Mock::given(method("GET"))
            .and(path("/server/api/eperson/epersons"))
            .and(header("Authorization", "Bearer abc123"))
            .and(header("Content-Type", "application/json"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let body = executor
            .execute(Method::GET, "/server/api/eperson/epersons")
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_json_body_transmitted_verbatim() {
        let server = MockServer::start().await;
        let executor = executor_for(&server).await;

        let payload = json!({
            "username": "jdoe",
            "email": "jdoe@example.org",
            "eperson.firstname": "John",
            "selfRegistered": false
        });

        Mock::given(method("POST"))
            .and(path("/server/api/eperson/epersons"))
            .and(body_json(&payload))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({
                    "uuid": "0001-0002",
                    "email": "jdoe@example.org"
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = executor
            .execute_json(Method::POST, "/server/api/eperson/epersons", &payload)
            .await
            .unwrap();
        assert_eq!(response["uuid"], "0001-0002");
        assert_eq!(response["email"], "jdoe@example.org");
    }

    #[tokio::test]
    async fn test_status_codes_map_to_typed_errors() {
        let cases = [
            (400, "bad-request"),
            (401, "permission-denied"),
            (403, "permission-denied"),
            (404, "not-found"),
            (409, "conflict"),
            (500, "remote-service"),
        ];

        for (status, expected) in cases {
            let server = MockServer::start().await;
            let executor = executor_for(&server).await;

            Mock::given(method("GET"))
                .and(path("/server/api/eperson/epersons"))
                .respond_with(ResponseTemplate::new(status).set_body_string("detail"))
                .mount(&server)
                .await;

            let err = executor
                .execute(Method::GET, "/server/api/eperson/epersons")
                .await
                .unwrap_err();

            let kind = match err {
                ConnectorError::BadRequest(_) => "bad-request",
                ConnectorError::PermissionDenied(_) => "permission-denied",
                ConnectorError::NotFound(_) => "not-found",
                ConnectorError::Conflict(_) => "conflict",
                ConnectorError::RemoteService { .. } => "remote-service",
                other => panic!("unexpected error for status {status}: {other}"),
            };
            assert_eq!(kind, expected, "status {status}");
        }
    }

    #[tokio::test]
    async fn test_not_found_carries_remote_detail() {
        let server = MockServer::start().await;
        let executor = executor_for(&server).await;

        Mock::given(method("GET"))
            .and(path("/server/api/eperson/epersons/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})),
            )
            .mount(&server)
            .await;

        let err = executor
            .execute(Method::GET, "/server/api/eperson/epersons/missing")
            .await
            .unwrap_err();

        match err {
            ConnectorError::NotFound(message) => assert!(message.contains("not found")),
            other => panic!("expected NotFound, got {other}"),
        }
    }
}
