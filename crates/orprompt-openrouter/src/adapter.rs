use std::{env, sync::Arc, time::Duration};

use orprompt_core::error::{OrPromptError, Result};
use reqwest::Client as HttpClient;

use crate::client::{DEFAULT_TIMEOUT, OpenRouterClient};
use crate::error::OpenRouterError;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const REFERER_ENV: &str = "OPENROUTER_REFERER";
pub const APP_TITLE_ENV: &str = "OPENROUTER_APP_TITLE";

/// Thin wrapper that wires the HTTP client [`OpenRouterClient`] into a value
/// that implements [`orprompt_core::provider::ChatCompletionProvider`].
pub struct OpenRouterAdapter {
    pub(crate) client: Arc<OpenRouterClient>,
}

impl OpenRouterAdapter {
    pub fn client(&self) -> &OpenRouterClient {
        &self.client
    }
}

/// Builder for [`OpenRouterAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use orprompt_openrouter::OpenRouterAdapterBuilder;
///
/// let backend = OpenRouterAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENROUTER_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct OpenRouterAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) referer: Option<String>,
    pub(crate) app_title: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenRouterAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `OPENROUTER_API_KEY`, `OPENROUTER_REFERER` and
    /// `OPENROUTER_APP_TITLE` from the environment.
    ///
    /// Never fails; a missing key only surfaces during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: non_empty_var(API_KEY_ENV),
            referer: non_empty_var(REFERER_ENV),
            app_title: non_empty_var(APP_TITLE_ENV),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn with_app_title(mut self, app_title: impl Into<String>) -> Self {
        self.app_title = Some(app_title.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`OrPromptError::MissingApiKey`] – if the API key is missing or empty.
    /// * [`OrPromptError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenRouterAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or(OrPromptError::MissingApiKey { var: API_KEY_ENV })?;

        let http = HttpClient::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(OpenRouterError::from)?;

        let client = OpenRouterClient::with_http(api_key, http, self.base_url)
            .with_attribution(self.referer, self.app_title);

        Ok(OpenRouterAdapter {
            client: Arc::new(client),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
