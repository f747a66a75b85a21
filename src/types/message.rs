//! Text and speech query results.

use super::display::{FieldList, Fixed6};
use super::response::impl_has_response_error;
use super::{Context, EntityMap, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of `/message`, `/speech` and `/messages/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    pub response: ResponseError,
    #[serde(rename = "msg_id", default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "_text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Candidate interpretations, best first. Empty when nothing matched.
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

impl_has_response_error!(Message);

impl Message {
    /// The outcome with the highest confidence.
    pub fn best_outcome(&self) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = FieldList::new();
        self.response.describe(&mut fields);
        fields
            .opt("MessageId", self.message_id.as_ref())
            .opt("Text", self.text.as_ref())
            .list("Outcomes", &self.outcomes)
            .finish(f)
    }
}

/// One candidate interpretation of the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(rename = "_text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntityMap>,
    /// In `[0.0, 1.0]`.
    #[serde(default)]
    pub confidence: f64,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new()
            .opt("Text", self.text.as_ref())
            .opt("Intent", self.intent.as_ref())
            .opt("Entities", self.entities.as_ref())
            .field("Confidence", Fixed6(self.confidence))
            .finish(f)
    }
}

/// Optional parameters for `message` and `speech`.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub context: Option<Context>,
    pub message_id: Option<String>,
    pub thread_id: Option<String>,
    /// Number of outcomes to return; values below 1 are sent as 1.
    pub n: Option<u32>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    pub fn thread_id(mut self, id: impl Into<String>) -> Self {
        self.thread_id = Some(id.into());
        self
    }

    pub fn n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }
}
