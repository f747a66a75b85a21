use super::display::FieldList;
use super::response::{impl_has_response_error, ItemList};
use super::{HasResponseError, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A user-goal category (`/intents/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(flatten)]
    pub response: ResponseError,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<IntentExpression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Value>>,
}

impl_has_response_error!(Intent);

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn expression(mut self, body: impl Into<String>) -> Self {
        self.expressions.push(IntentExpression::new(body));
        self
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = FieldList::new();
        self.response.describe(&mut fields);
        fields
            .opt("Id", self.id.as_ref())
            .opt("Name", self.name.as_ref())
            .opt("Doc", self.doc.as_ref())
            .opt("Metadata", self.metadata.as_ref())
            .list("Expressions", &self.expressions)
            .opt("Meta", self.meta.as_ref())
            .list("Entities", self.entities.as_deref().unwrap_or_default())
            .finish(f)
    }
}

/// A training phrase of an intent.
///
/// Carries no error fields: `body` is the phrase itself, which would collide
/// with the raw-body error shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentExpression {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Set on the echo returned after creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
}

impl IntentExpression {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    pub fn many<I, S>(bodies: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        bodies.into_iter().map(Self::new).collect()
    }
}

impl fmt::Display for IntentExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new()
            .opt("Id", self.id.as_ref())
            .opt("IntentId", self.intent_id.as_ref())
            .opt("Body", self.body.as_ref())
            .finish(f)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ExpressionEcho {
    intent_id: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

/// Answer of `POST /intents/{id}/expressions`: the created expressions as a
/// list, a single created-record echo, or an error object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpressionsAdded {
    Many(Vec<IntentExpression>),
    Echo(#[serde(deserialize_with = "deserialize_echo")] IntentExpression),
    Failure(ResponseError),
}

fn deserialize_echo<'de, D>(deserializer: D) -> Result<IntentExpression, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let echo = ExpressionEcho::deserialize(deserializer)?;
    Ok(IntentExpression {
        id: echo.id,
        body: echo.body,
        intent_id: Some(echo.intent_id),
    })
}

impl HasResponseError for ExpressionsAdded {
    fn response_error(&self) -> Option<&ResponseError> {
        match self {
            ExpressionsAdded::Failure(e) => Some(e),
            _ => None,
        }
    }

    fn unexpected_shape(&self) -> Option<&'static str> {
        match self {
            ExpressionsAdded::Failure(_) => {
                Some("expected a list of expressions or a created expression")
            }
            _ => None,
        }
    }
}

impl ItemList for ExpressionsAdded {
    type Item = IntentExpression;

    fn into_items(self) -> Option<Vec<IntentExpression>> {
        match self {
            ExpressionsAdded::Many(items) => Some(items),
            ExpressionsAdded::Echo(item) => Some(vec![item]),
            ExpressionsAdded::Failure(_) => None,
        }
    }
}

/// `{"intents": [...]}` wrapper some API versions answer a batch create with.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentBatch {
    #[serde(flatten)]
    pub response: ResponseError,
    pub intents: Vec<Intent>,
}

/// Answer of a batch `POST /intents`: a bare array, the `intents` wrapper,
/// or an error object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntentsCreated {
    Many(Vec<Intent>),
    Wrapped(IntentBatch),
    Failure(ResponseError),
}

impl HasResponseError for IntentsCreated {
    fn response_error(&self) -> Option<&ResponseError> {
        match self {
            IntentsCreated::Many(_) => None,
            IntentsCreated::Wrapped(batch) => Some(&batch.response),
            IntentsCreated::Failure(e) => Some(e),
        }
    }

    fn unexpected_shape(&self) -> Option<&'static str> {
        match self {
            IntentsCreated::Failure(_) => Some("expected a JSON array or an `intents` list"),
            _ => None,
        }
    }
}

impl ItemList for IntentsCreated {
    type Item = Intent;

    fn into_items(self) -> Option<Vec<Intent>> {
        match self {
            IntentsCreated::Many(items) => Some(items),
            IntentsCreated::Wrapped(batch) => Some(batch.intents),
            IntentsCreated::Failure(_) => None,
        }
    }
}
