use crate::transport::TransportError;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error context for configuration problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Builder setting or environment variable that caused the error (e.g., "base_url", "WIT_ACCESS_TOKEN")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for every client operation.
///
/// The first three variants are the phases of a single call: the request
/// never got an answer, the answer was not the expected JSON, or the remote
/// service answered with a failure payload. Each one carries the name of the
/// operation so logs read as `create intent parse error: ...`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation} request error: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("{operation} parse error: {source} (HTTP {status})")]
    Parse {
        operation: &'static str,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} response error: {message}")]
    Response {
        operation: &'static str,
        message: String,
        code: Option<String>,
    },

    #[error("{operation} file error: {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{operation} encode error: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("converse session {session_id} did not stop after {} turns", .turns.len())]
    ConverseLimit {
        session_id: String,
        turns: Vec<crate::types::Converse>,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Name of the operation that failed, when the error came from a call.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Request { operation, .. }
            | Error::Parse { operation, .. }
            | Error::Response { operation, .. }
            | Error::Io { operation, .. }
            | Error::Encode { operation, .. } => Some(operation),
            Error::ConverseLimit { .. } => Some("converse"),
            Error::Configuration { .. } => None,
        }
    }

    /// The request did not produce a response (network failure, timeout, cancellation).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Request { .. })
    }

    /// The remote service answered and reported a failure.
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Response { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Error::Request {
                source: TransportError::Cancelled,
                ..
            }
        )
    }

    /// Error code reported by the remote service, if any.
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            Error::Response { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn request(operation: &'static str, source: TransportError) -> Self {
        Error::Request { operation, source }
    }
}
