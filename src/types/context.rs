use super::display::{FieldList, Fixed6};
use super::EntityValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Conversational state sent along with a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Opaque to the client; echoed back to the bot as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    /// ISO-8601 local time used to resolve relative dates ("tomorrow").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_time: Option<String>,
    #[serde(rename = "timezone", default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<ContextEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_reference_time(mut self, time: impl Into<String>) -> Self {
        self.reference_time = Some(time.into());
        self
    }

    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    pub fn with_entity(mut self, entity: ContextEntity) -> Self {
        self.entities.get_or_insert_with(Vec::new).push(entity);
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(Location::new(latitude, longitude));
        self
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new()
            .opt("State", self.state.as_ref())
            .opt("ReferenceTime", self.reference_time.as_ref())
            .opt("TimeZone", self.time_zone.as_ref())
            .list("Entities", self.entities.as_deref().unwrap_or_default())
            .opt("Location", self.location.as_ref())
            .finish(f)
    }
}

/// Entity values the caller wants the service to consider for this query only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextEntity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EntityValue>,
}

impl ContextEntity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: EntityValue) -> Self {
        self.values.push(value);
        self
    }
}

impl fmt::Display for ContextEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new()
            .field("Id", &self.id)
            .opt("Doc", self.doc.as_ref())
            .list("Values", &self.values)
            .finish(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldList::new()
            .field("Latitude", Fixed6(self.latitude))
            .field("Longitude", Fixed6(self.longitude))
            .finish(f)
    }
}
