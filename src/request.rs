//! URL, query-string and body construction.
//!
//! Parameters the caller did not supply never reach the wire: `QueryParams`
//! only holds what was inserted, and request bodies are serialized from
//! records whose absent fields are skipped.

use bytes::Bytes;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use url::Url;

/// Query-string parameters, emitted in lexical key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// No-op for `None`.
    pub fn insert_opt<V: fmt::Display>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// JSON-encode a structured value (e.g. a context) into a single parameter.
    pub fn insert_json<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: Option<&T>,
    ) -> serde_json::Result<&mut Self> {
        if let Some(value) = value {
            let encoded = serde_json::to_string(value)?;
            self.params.insert(key.into(), encoded);
        }
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Append percent-encoded path segments to `base`.
///
/// Segments are encoded individually, so ids containing `/` or spaces stay
/// one segment.
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Attach `params` as the query string; the URL is left untouched when
/// there are none.
pub fn build_url(base: &Url, params: &QueryParams) -> Url {
    let mut url = base.clone();
    if !params.is_empty() {
        url.query_pairs_mut().clear().extend_pairs(params.iter());
    }
    url
}

/// Serialize a request body. Absent optional fields produce no key.
pub fn build_body<T: Serialize + ?Sized>(fields: &T) -> serde_json::Result<Bytes> {
    serde_json::to_vec(fields).map(Bytes::from)
}

/// Read an upload file into memory.
pub async fn read_upload(path: &Path) -> std::io::Result<Bytes> {
    tokio::fs::read(path).await.map(Bytes::from)
}

/// Audio encodings accepted by `/speech`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
    Ulaw,
    Raw,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg3",
            Self::Wav => "audio/wav",
            Self::Ulaw => "audio/ulaw",
            Self::Raw => "audio/raw",
        }
    }

    /// Guess from a file extension; unknown extensions fall back to MP3.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "wav" | "wave" => Self::Wav,
            "ulaw" | "ul" => Self::Ulaw,
            "raw" | "pcm" => Self::Raw,
            _ => Self::Mp3,
        }
    }
}
