use crate::client::core::{ClientConfig, WitClient};
use crate::client::{DEFAULT_BASE_URL, DEFAULT_MAX_CONVERSE_TURNS, DEFAULT_VERSION};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use reqwest::header::HeaderValue;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Builder for [`WitClient`].
///
/// Keep this surface area small and predictable. Settings left unset fall
/// back to the environment, then to defaults:
///
/// | Setting | Environment | Default |
/// |---------|-------------|---------|
/// | token | `WIT_ACCESS_TOKEN` | required |
/// | version | `WIT_API_VERSION` | [`DEFAULT_VERSION`] |
/// | base URL | `WIT_BASE_URL` | [`DEFAULT_BASE_URL`] |
pub struct WitClientBuilder {
    token: Option<String>,
    version: Option<String>,
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    timeout: Option<Duration>,
    max_converse_turns: usize,
    cancel: Option<CancellationToken>,
}

impl WitClientBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            version: None,
            base_url: None,
            transport: None,
            timeout: None,
            max_converse_turns: DEFAULT_MAX_CONVERSE_TURNS,
            cancel: None,
        }
    }

    /// Server access token of the Wit app.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// API version, e.g. `20160330`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Override the service host.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a custom transport instead of the reqwest-based default.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Request timeout of the default transport. Ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Maximum number of turns one converse loop may collect.
    pub fn max_converse_turns(mut self, n: usize) -> Self {
        self.max_converse_turns = n.max(1);
        self
    }

    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn build(self) -> Result<WitClient> {
        let token = self
            .token
            .or_else(|| std::env::var("WIT_ACCESS_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "access token required",
                    ErrorContext::new()
                        .with_field_path("WIT_ACCESS_TOKEN")
                        .with_source("client_builder"),
                )
            })?;

        let version = self
            .version
            .or_else(|| std::env::var("WIT_API_VERSION").ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        let raw_base = self
            .base_url
            .or_else(|| std::env::var("WIT_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_base.clone()),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "base URL cannot carry a path",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw_base),
            ));
        }

        let mut authorization = header_value("token", format!("Bearer {}", token))?;
        authorization.set_sensitive(true);
        let accept = header_value(
            "version",
            format!("application/vnd.wit.{}+json", version),
        )?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => match self.timeout {
                Some(timeout) => Arc::new(HttpTransport::with_timeout(timeout)?),
                None => Arc::new(HttpTransport::new()?),
            },
        };

        Ok(WitClient {
            config: Arc::new(ClientConfig {
                version,
                base_url,
                max_converse_turns: self.max_converse_turns,
                authorization,
                accept,
            }),
            transport,
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}

fn header_value(field: &str, value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|_| {
        Error::configuration_with_context(
            "value not allowed in an HTTP header",
            ErrorContext::new()
                .with_field_path(field)
                .with_source("client_builder"),
        )
    })
}

impl Default for WitClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
