use super::display::FieldList;
use super::response::impl_has_response_error;
use super::ResponseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A slot type the service extracts from input (`/entities/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(flatten)]
    pub response: ResponseError,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Extraction strategies, e.g. `free-text` or `keywords`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lookups: Vec<String>,
    /// Only the listed values can be extracted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exotic: Option<bool>,
    /// Owned by the service; `wit$...` entities report `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EntityValue>,
}

impl_has_response_error!(Entity);

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn lookup(mut self, lookup: impl Into<String>) -> Self {
        self.lookups.push(lookup.into());
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = Some(closed);
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or(false)
    }

    pub fn is_exotic(&self) -> bool {
        self.exotic.unwrap_or(false)
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin.unwrap_or(false)
    }

    pub fn value(mut self, value: EntityValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn find_value(&self, value: &str) -> Option<&EntityValue> {
        self.values
            .iter()
            .find(|v| v.value.as_deref() == Some(value))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = FieldList::new();
        self.response.describe(&mut fields);
        fields
            .opt("Id", self.id.as_ref())
            .opt("Name", self.name.as_ref())
            .opt("Doc", self.doc.as_ref())
            .opt("Lang", self.lang.as_ref())
            .list("Lookups", &self.lookups)
            .field("Closed", self.is_closed())
            .field("Exotic", self.is_exotic())
            .field("Builtin", self.is_builtin())
            .list("Values", &self.values)
            .finish(f)
    }
}

/// A canonical value of an entity and the phrases that trigger it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl EntityValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expressions.push(expression.into());
        self
    }

    pub fn with_expressions<I, S>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expressions
            .extend(expressions.into_iter().map(Into::into));
        self
    }

    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

impl fmt::Display for EntityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new()
            .opt("Value", self.value.as_ref())
            .list("Expressions", &self.expressions)
            .opt("Metadata", self.metadata.as_ref())
            .finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HasResponseError;
    use serde_json::json;

    #[test]
    fn entity_survives_encode_decode() {
        let entity = Entity::new("favorite_city")
            .value(EntityValue::new("a").with_expressions(["x", "y"]));
        let bytes = serde_json::to_vec(&entity).unwrap();
        let decoded: Entity = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, entity);
        assert_eq!(decoded.values[0].expressions, vec!["x", "y"]);
    }

    #[test]
    fn missing_flags_default_to_false() {
        let e: Entity = serde_json::from_value(json!({
            "id": "571f1a3c-8b3a-4ed2-9e6d-0b7d1cb9a2f8",
            "name": "wit$datetime",
            "builtin": true
        }))
        .unwrap();
        assert!(e.is_builtin());
        assert!(!e.is_closed());
        assert!(!e.is_exotic());
        assert!(e.closed.is_none());
        assert!(!e.has_error());
    }

    #[test]
    fn display_always_shows_flags() {
        let e = Entity::new("color").value(EntityValue::new("red").expression("crimson"));
        assert_eq!(
            e.to_string(),
            "{Id: color, Closed: false, Exotic: false, Builtin: false, \
             Values: [{Value: red, Expressions: [crimson]}]}"
        );
    }

    #[test]
    fn explicit_empty_doc_is_sent() {
        let mut e = Entity::new("color");
        e.doc = Some(String::new());
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["doc"], json!(""));
        assert!(v.get("values").is_none());
        assert!(v.get("lang").is_none());
    }

    #[test]
    fn unset_flags_stay_off_the_wire() {
        let v = serde_json::to_value(Entity::default().doc("colors")).unwrap();
        assert_eq!(v, json!({"doc": "colors"}));

        let v = serde_json::to_value(Entity::new("color").closed(false)).unwrap();
        assert_eq!(v, json!({"id": "color", "closed": false}));
    }
}
