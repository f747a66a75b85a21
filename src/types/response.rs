//! Error fields shared by every response, and the one place that decides
//! whether a decoded response is a failure.
//!
//! The service reports failures in three shapes depending on endpoint and
//! API version:
//!
//! | Shape | Example |
//! |-------|---------|
//! | single message | `{"error": "Bad auth", "code": "no-auth"}` |
//! | per-item list | `{"errors": ["intent already exists"]}` |
//! | raw body | `{"body": "Bad request", "code": 400}` |

use super::display::FieldList;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Error fields embedded (flattened) in every top-level response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ResponseError {
    pub fn has_error(&self) -> bool {
        self.error.is_some() || !self.errors.is_empty() || self.body.is_some()
    }

    /// Per-item errors, then the single message, then the raw body, joined with `,`.
    pub fn error_message(&self) -> String {
        let mut parts: Vec<String> = self.errors.iter().map(value_text).collect();
        if let Some(error) = &self.error {
            parts.push(error.clone());
        }
        if let Some(body) = &self.body {
            parts.push(value_text(body));
        }
        parts.join(",")
    }

    /// Writes the present error fields into a display list.
    pub(crate) fn describe(&self, fields: &mut FieldList) {
        let errors: Vec<String> = self.errors.iter().map(value_text).collect();
        fields
            .opt("Error", self.error.as_ref())
            .opt("Code", self.code.as_ref())
            .list("Errors", &errors)
            .opt("Body", self.body.as_ref());
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = FieldList::new();
        self.describe(&mut fields);
        fields.finish(f)
    }
}

/// Strings are shown without quotes; anything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accepts `"no-auth"` as well as `400` for the same field.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Failure detection for any decoded response.
pub trait HasResponseError {
    fn response_error(&self) -> Option<&ResponseError>;

    fn has_error(&self) -> bool {
        self.response_error().map_or(false, ResponseError::has_error)
    }

    fn error_message(&self) -> String {
        self.response_error()
            .map(ResponseError::error_message)
            .unwrap_or_default()
    }

    fn error_code(&self) -> Option<&str> {
        self.response_error().and_then(|e| e.code.as_deref())
    }

    /// What was expected, when the value decoded as neither a result nor a
    /// reported failure. Checked after [`has_error`](Self::has_error).
    fn unexpected_shape(&self) -> Option<&'static str> {
        None
    }
}

impl HasResponseError for ResponseError {
    fn response_error(&self) -> Option<&ResponseError> {
        Some(self)
    }
}

macro_rules! impl_has_response_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::HasResponseError for $ty {
                fn response_error(&self) -> Option<&$crate::types::ResponseError> {
                    Some(&self.response)
                }
            }
        )+
    };
}
pub(crate) use impl_has_response_error;

/// Decoded answers that carry a list of items on success.
pub(crate) trait ItemList: HasResponseError {
    type Item;

    /// `None` when the answer holds no items (a failure shape).
    fn into_items(self) -> Option<Vec<Self::Item>>;
}

/// A list endpoint answer: a JSON array on success, an error object otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Items(Vec<T>),
    Failure(ResponseError),
}

impl<T> HasResponseError for Listing<T> {
    fn response_error(&self) -> Option<&ResponseError> {
        match self {
            Listing::Items(_) => None,
            Listing::Failure(e) => Some(e),
        }
    }

    fn unexpected_shape(&self) -> Option<&'static str> {
        match self {
            Listing::Items(_) => None,
            Listing::Failure(_) => Some("expected a JSON array"),
        }
    }
}

impl<T> ItemList for Listing<T> {
    type Item = T;

    fn into_items(self) -> Option<Vec<T>> {
        match self {
            Listing::Items(items) => Some(items),
            Listing::Failure(_) => None,
        }
    }
}

/// Acknowledgement returned by DELETE endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deleted {
    #[serde(flatten)]
    pub response: ResponseError,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl_has_response_error!(Deleted);

impl fmt::Display for Deleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = FieldList::new();
        self.response.describe(&mut fields);
        fields
            .opt("Deleted", self.deleted.as_ref())
            .opt("Success", self.success.as_ref())
            .finish(f)
    }
}
