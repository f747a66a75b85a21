//! Intent management (`/intents`).

use crate::client::core::{Payload, WitClient};
use crate::request::QueryParams;
use crate::types::{
    Deleted, ExpressionsAdded, Intent, IntentExpression, IntentsCreated, Listing,
};
use crate::Result;
use reqwest::Method;

impl WitClient {
    /// All intents of the app, in the order the service returns them.
    pub async fn list_intents(&self) -> Result<Vec<Intent>> {
        const OP: &str = "list intents";
        let url = self.url(&["intents"], &QueryParams::new());
        self.call_list::<Listing<Intent>>(OP, Method::GET, url, Payload::Empty)
            .await
    }

    pub async fn create_intent(&self, intent: &Intent) -> Result<Intent> {
        const OP: &str = "create intent";
        let url = self.url(&["intents"], &QueryParams::new());
        let payload = Self::json_payload(OP, intent)?;
        self.call(OP, Method::POST, url, payload).await
    }

    /// Create several intents in one request.
    ///
    /// Accepts a bare array as well as an `{"intents": [...]}` wrapper.
    /// Per-intent failures come back as an `errors` list and fail the whole call.
    pub async fn create_intents(&self, intents: &[Intent]) -> Result<Vec<Intent>> {
        const OP: &str = "create intents";
        let url = self.url(&["intents"], &QueryParams::new());
        let payload = Self::json_payload(OP, intents)?;
        self.call_list::<IntentsCreated>(OP, Method::POST, url, payload)
            .await
    }

    pub async fn get_intent(&self, intent_id: &str) -> Result<Intent> {
        const OP: &str = "get intent";
        let url = self.url(&["intents", intent_id], &QueryParams::new());
        self.call(OP, Method::GET, url, Payload::Empty).await
    }

    /// Update the fields set on `intent`; unset fields are left as they are.
    pub async fn update_intent(&self, intent_id: &str, intent: &Intent) -> Result<Intent> {
        const OP: &str = "update intent";
        let url = self.url(&["intents", intent_id], &QueryParams::new());
        let payload = Self::json_payload(OP, intent)?;
        self.call(OP, Method::PUT, url, payload).await
    }

    pub async fn delete_intent(&self, intent_id: &str) -> Result<Deleted> {
        const OP: &str = "delete intent";
        let url = self.url(&["intents", intent_id], &QueryParams::new());
        self.call(OP, Method::DELETE, url, Payload::Empty).await
    }

    pub async fn add_intent_expressions(
        &self,
        intent_id: &str,
        expressions: &[IntentExpression],
    ) -> Result<Vec<IntentExpression>> {
        const OP: &str = "add intent expressions";
        let url = self.url(&["intents", intent_id, "expressions"], &QueryParams::new());
        let payload = Self::json_payload(OP, expressions)?;
        self.call_list::<ExpressionsAdded>(OP, Method::POST, url, payload)
            .await
    }

    pub async fn delete_intent_expression(
        &self,
        intent_id: &str,
        expression_id: &str,
    ) -> Result<Deleted> {
        const OP: &str = "delete intent expression";
        let url = self.url(
            &["intents", intent_id, "expressions", expression_id],
            &QueryParams::new(),
        );
        self.call(OP, Method::DELETE, url, Payload::Empty).await
    }
}
