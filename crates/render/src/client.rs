//! HTTP client for the renderer service.

/// Configuration handle for the renderer service.
///
/// Holds the base URL and optional bearer token injected into every
/// request. Cheap to clone the `Arc` it usually lives behind.
pub struct RendererClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Errors from talking to the renderer.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    /// The renderer could not be reached at all.
    #[error("Renderer unreachable: {0}")]
    Unreachable(String),

    /// The renderer answered with a non-success status.
    #[error("Renderer rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl RendererClient {
    /// Create a client for the renderer at `base_url`.
    ///
    /// A trailing slash on the URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render `html` to PDF bytes via `POST {base_url}/render`.
    pub async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, RendererError> {
        let url = format!("{}/render", self.base_url);

        let mut request = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "html": html }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RendererError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Renderer rejected request");
            return Err(RendererError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RendererError::Unreachable(e.to_string()))?;

        tracing::debug!(byte_size = bytes.len(), "Rendered PDF");

        Ok(bytes.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = RendererClient::new("http://renderer:9222/", None);
        assert_eq!(client.base_url(), "http://renderer:9222");
    }

    #[test]
    fn bare_url_is_kept() {
        let client = RendererClient::new("http://renderer:9222", None);
        assert_eq!(client.base_url(), "http://renderer:9222");
    }
}
