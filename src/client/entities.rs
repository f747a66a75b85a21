//! Entity management (`/entities`).

use crate::client::core::{Payload, WitClient};
use crate::request::QueryParams;
use crate::types::{Deleted, Entity, EntityValue, Listing};
use crate::Result;
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct NewExpression<'a> {
    expression: &'a str,
}

impl WitClient {
    /// Ids of every entity of the app, including built-ins.
    pub async fn list_entities(&self) -> Result<Vec<String>> {
        const OP: &str = "list entities";
        let url = self.url(&["entities"], &QueryParams::new());
        self.call_list::<Listing<String>>(OP, Method::GET, url, Payload::Empty)
            .await
    }

    pub async fn create_entity(&self, entity: &Entity) -> Result<Entity> {
        const OP: &str = "create entity";
        let url = self.url(&["entities"], &QueryParams::new());
        let payload = Self::json_payload(OP, entity)?;
        self.call(OP, Method::POST, url, payload).await
    }

    pub async fn get_entity(&self, entity_id: &str) -> Result<Entity> {
        const OP: &str = "get entity";
        let url = self.url(&["entities", entity_id], &QueryParams::new());
        self.call(OP, Method::GET, url, Payload::Empty).await
    }

    pub async fn update_entity(&self, entity_id: &str, entity: &Entity) -> Result<Entity> {
        const OP: &str = "update entity";
        let url = self.url(&["entities", entity_id], &QueryParams::new());
        let payload = Self::json_payload(OP, entity)?;
        self.call(OP, Method::PUT, url, payload).await
    }

    pub async fn delete_entity(&self, entity_id: &str) -> Result<Deleted> {
        const OP: &str = "delete entity";
        let url = self.url(&["entities", entity_id], &QueryParams::new());
        self.call(OP, Method::DELETE, url, Payload::Empty).await
    }

    /// Add a value (with its expressions) to an entity; returns the updated entity.
    pub async fn add_entity_value(&self, entity_id: &str, value: &EntityValue) -> Result<Entity> {
        const OP: &str = "add entity value";
        let url = self.url(&["entities", entity_id, "values"], &QueryParams::new());
        let payload = Self::json_payload(OP, value)?;
        self.call(OP, Method::POST, url, payload).await
    }

    pub async fn delete_entity_value(&self, entity_id: &str, value: &str) -> Result<Deleted> {
        const OP: &str = "delete entity value";
        let url = self.url(&["entities", entity_id, "values", value], &QueryParams::new());
        self.call(OP, Method::DELETE, url, Payload::Empty).await
    }

    /// Add a trigger expression to an entity value; returns the updated entity.
    pub async fn add_value_expression(
        &self,
        entity_id: &str,
        value: &str,
        expression: &str,
    ) -> Result<Entity> {
        const OP: &str = "add value expression";
        let url = self.url(
            &["entities", entity_id, "values", value, "expressions"],
            &QueryParams::new(),
        );
        let payload = Self::json_payload(OP, &NewExpression { expression })?;
        self.call(OP, Method::POST, url, payload).await
    }

    pub async fn delete_value_expression(
        &self,
        entity_id: &str,
        value: &str,
        expression: &str,
    ) -> Result<Deleted> {
        const OP: &str = "delete value expression";
        let url = self.url(
            &["entities", entity_id, "values", value, "expressions", expression],
            &QueryParams::new(),
        );
        self.call(OP, Method::DELETE, url, Payload::Empty).await
    }
}
