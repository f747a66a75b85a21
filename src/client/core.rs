use crate::request::{self, AudioFormat, QueryParams};
use crate::transport::{Transport, TransportRequest};
use crate::types::response::ItemList;
use crate::types::HasResponseError;
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Settings fixed at build time and shared by every clone of a client.
#[derive(Debug)]
pub(crate) struct ClientConfig {
    pub(crate) version: String,
    pub(crate) base_url: Url,
    pub(crate) max_converse_turns: usize,
    pub(crate) authorization: HeaderValue,
    pub(crate) accept: HeaderValue,
}

/// Wit.ai API client.
///
/// Cloning is cheap: configuration and transport are shared, nothing is
/// mutated after construction, so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct WitClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) cancel: CancellationToken,
}

/// Request body of a single call.
pub(crate) enum Payload {
    Empty,
    Json(Bytes),
    Upload {
        data: Bytes,
        content_type: &'static str,
    },
}

impl WitClient {
    /// Client for the default API version, using the default HTTP transport.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    pub fn with_version(token: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).version(version).build()
    }

    pub fn builder() -> crate::client::builder::WitClientBuilder {
        crate::client::builder::WitClientBuilder::new()
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub fn max_converse_turns(&self) -> usize {
        self.config.max_converse_turns
    }

    /// A clone whose calls abort once `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            cancel: token,
        }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub(crate) fn url(&self, segments: &[&str], params: &QueryParams) -> Url {
        request::build_url(&request::endpoint(&self.config.base_url, segments), params)
    }

    pub(crate) fn json_payload<T: Serialize + ?Sized>(
        operation: &'static str,
        fields: &T,
    ) -> Result<Payload> {
        request::build_body(fields)
            .map(Payload::Json)
            .map_err(|source| Error::Encode { operation, source })
    }

    /// Reads the file before anything is sent.
    pub(crate) async fn upload_payload(
        operation: &'static str,
        path: &Path,
        format: AudioFormat,
    ) -> Result<Payload> {
        let data = request::read_upload(path)
            .await
            .map_err(|source| Error::Io {
                operation,
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Payload::Upload {
            data,
            content_type: format.mime_type(),
        })
    }

    /// Send, decode, and check the response for a remote failure.
    pub(crate) async fn call<T>(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        payload: Payload,
    ) -> Result<T>
    where
        T: DeserializeOwned + HasResponseError,
    {
        self.exchange(operation, method, url, payload)
            .await
            .map(|(_, decoded)| decoded)
    }

    /// Like [`call`](Self::call) for endpoints answering with a list of items.
    pub(crate) async fn call_list<L>(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        payload: Payload,
    ) -> Result<Vec<L::Item>>
    where
        L: DeserializeOwned + ItemList,
    {
        let (status, decoded) = self.exchange::<L>(operation, method, url, payload).await?;
        decoded
            .into_items()
            .ok_or_else(|| shape_error(operation, status, "expected a list"))
    }

    async fn exchange<T>(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        payload: Payload,
    ) -> Result<(u16, T)>
    where
        T: DeserializeOwned + HasResponseError,
    {
        let (body, content_type) = match payload {
            Payload::Empty => (Bytes::new(), JSON_CONTENT_TYPE),
            Payload::Json(body) => (body, JSON_CONTENT_TYPE),
            Payload::Upload { data, content_type } => (data, content_type),
        };

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.config.authorization.clone());
        headers.insert(ACCEPT, self.config.accept.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

        debug!(operation, %method, %url, bytes = body.len(), "sending request");

        let response = self
            .transport
            .send(
                TransportRequest {
                    method,
                    url,
                    headers,
                    body,
                },
                &self.cancel,
            )
            .await
            .map_err(|source| Error::request(operation, source))?;

        let status = response.status;
        let success = response.is_success();
        let decoded: T = serde_json::from_slice(&response.body).map_err(|source| Error::Parse {
            operation,
            status,
            source,
        })?;

        if decoded.has_error() {
            let message = decoded.error_message();
            let code = decoded.error_code().map(str::to_owned);
            warn!(operation, status, ?code, %message, "remote service reported an error");
            return Err(Error::Response {
                operation,
                message,
                code,
            });
        }

        if let Some(expected) = decoded.unexpected_shape() {
            warn!(operation, status, expected, "response carried neither a result nor an error");
            return Err(shape_error(operation, status, expected));
        }

        if !success {
            warn!(operation, status, "non-success status without an error payload");
        }

        Ok((status, decoded))
    }
}

fn shape_error(operation: &'static str, status: u16, expected: &'static str) -> Error {
    Error::Parse {
        operation,
        status,
        source: serde::de::Error::custom(expected),
    }
}

impl std::fmt::Debug for WitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WitClient")
            .field("version", &self.config.version)
            .field("base_url", &self.config.base_url.as_str())
            .field("max_converse_turns", &self.config.max_converse_turns)
            .finish_non_exhaustive()
    }
}
