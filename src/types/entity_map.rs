//! Free-form entity maps returned with outcomes and converse turns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Entity name to extracted values, kept as raw JSON so fields the service
/// adds later survive decoding.
///
/// The usual shape is `{"datetime": [{"value": "...", "confidence": 0.9}]}`,
/// but nothing here relies on it except the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap(pub Map<String, Value>);

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every extracted occurrence of `name`; a single object counts as one.
    pub fn occurrences(&self, name: &str) -> Vec<&Value> {
        match self.0.get(name) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![other],
        }
    }

    /// `value` of the first occurrence of `name`.
    pub fn first_value(&self, name: &str) -> Option<&Value> {
        self.occurrences(name)
            .into_iter()
            .find_map(|occ| occ.get("value"))
    }

    /// `value` of the first occurrence of `name`, when it is a string.
    pub fn first_str(&self, name: &str) -> Option<&str> {
        self.first_value(name).and_then(Value::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }
}

impl From<Map<String, Value>> for EntityMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for EntityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
