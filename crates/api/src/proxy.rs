//! Thin forwarding to external REST systems with credential injection.
//!
//! The portal never hands upstream credentials to the browser; they are
//! injected here from server configuration. Responses are relayed as-is —
//! upstream status code and body pass through unchanged.

use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::config::{Credentials, UpstreamConfig};
use crate::error::AppError;

/// Client for one proxied upstream system.
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward `method` + `path` (+ optional raw query and JSON body)
    /// upstream and relay the answer.
    ///
    /// Returns the upstream status and its body: parsed JSON when possible,
    /// the raw text otherwise, `null` for an empty body. Unreachable
    /// upstreams surface as [`AppError::Upstream`].
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<&Value>,
    ) -> Result<(StatusCode, Value), AppError> {
        let url = build_url(&self.base_url, path, query);

        let mut request = self.http.request(method, &url);
        request = match &self.credentials {
            Credentials::Bearer(token) => request.bearer_auth(token),
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::None => request,
        };
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Reading response from {url} failed: {e}")))?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(_) if text.is_empty() => Value::Null,
            Err(_) => Value::String(text),
        };

        Ok((status, body))
    }
}

/// Join base URL, path suffix, and raw query into the upstream URL.
fn build_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base_url, path.trim_start_matches('/'));
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        assert_eq!(
            build_url("http://api:8081", "simulations/42", None),
            "http://api:8081/simulations/42"
        );
    }

    #[test]
    fn tolerates_leading_slash_in_path() {
        assert_eq!(
            build_url("http://api:8081", "/simulations", None),
            "http://api:8081/simulations"
        );
    }

    #[test]
    fn appends_raw_query() {
        assert_eq!(
            build_url("http://api:8081", "contracts", Some("cpf=123&limit=5")),
            "http://api:8081/contracts?cpf=123&limit=5"
        );
    }

    #[test]
    fn client_strips_trailing_slash_from_base_url() {
        let client = UpstreamClient::new(&UpstreamConfig {
            base_url: "http://api:8081/".to_string(),
            credentials: Credentials::None,
        });
        assert_eq!(client.base_url(), "http://api:8081");
    }
}
