use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenRouterError,
};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Minimal HTTP client for OpenRouter's *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Performs no retries; a failed call is simply an `Err`.
/// * Shares a single `reqwest::Client`, so cloning `OpenRouterClient` is cheap.
#[derive(Clone)]
pub struct OpenRouterClient {
    api_key: String,
    referer: Option<String>,
    app_title: Option<String>,
    http: HttpClient,
    base: String,
}

impl OpenRouterClient {
    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, a different timeout, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            referer: None,
            app_title: None,
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Attribution headers; empty values are dropped.
    pub fn with_attribution(mut self, referer: Option<String>, app_title: Option<String>) -> Self {
        self.referer = referer.filter(|v| !v.is_empty());
        self.app_title = app_title.filter(|v| !v.is_empty());
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base.trim_end_matches('/'))
    }

    /// Headers sent with every request. `HTTP-Referer` and `X-Title` are
    /// OpenRouter's app attribution headers.
    pub fn headers(&self) -> Result<HeaderMap, OpenRouterError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(referer) = &self.referer {
            headers.insert(
                HeaderName::from_static("http-referer"),
                HeaderValue::from_str(referer)?,
            );
        }
        if let Some(title) = &self.app_title {
            headers.insert(
                HeaderName::from_static("x-title"),
                HeaderValue::from_str(title)?,
            );
        }
        Ok(headers)
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenRouterError> {
        let headers = self.headers()?;
        let body = serde_json::to_vec(request)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(model = %request.model, bytes = body.len(), "sending chat completion");

        let resp = self
            .http
            .post(self.endpoint())
            .headers(headers)
            .body(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::debug!(model = %request.model, %status, %body, "chat completion rejected");

            return Err(OpenRouterError::Api { status, body });
        }

        let text = resp.text().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(model = %request.model, bytes = text.len(), "received chat completion");

        ChatCompletionResponse::from_body(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenRouterClient {
        OpenRouterClient::with_http("sk-or-test", HttpClient::new(), None)
    }

    #[test]
    fn default_endpoint() {
        assert_eq!(
            client().endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn custom_base_url_tolerates_trailing_slash() {
        let client = OpenRouterClient::with_http(
            "k",
            HttpClient::new(),
            Some("http://127.0.0.1:8080/v1/".into()),
        );
        assert_eq!(client.endpoint(), "http://127.0.0.1:8080/v1/chat/completions");
    }

    #[test]
    fn required_headers_only_by_default() {
        let headers = client().headers().unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-or-test");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(!headers.contains_key("http-referer"));
        assert!(!headers.contains_key("x-title"));
    }

    #[test]
    fn attribution_headers_when_configured() {
        let headers = client()
            .with_attribution(Some("https://example.com".into()), Some("Copy Bot".into()))
            .headers()
            .unwrap();

        assert_eq!(headers.len(), 4);
        assert_eq!(headers["HTTP-Referer"], "https://example.com");
        assert_eq!(headers["X-Title"], "Copy Bot");
    }

    #[test]
    fn empty_attribution_values_are_dropped() {
        let headers = client()
            .with_attribution(Some(String::new()), Some(String::new()))
            .headers()
            .unwrap();

        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn unprintable_header_value_is_an_error() {
        let err = client()
            .with_attribution(None, Some("line\nbreak".into()))
            .headers()
            .unwrap_err();

        assert!(matches!(err, OpenRouterError::InvalidHeader(_)));
    }
}
