//! `/intents` management against a scripted transport.

mod integration;

use integration::scripted::{json_body, ScriptedTransport};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wit_lib_rust::{Error, Intent, IntentExpression};

#[tokio::test]
async fn list_intents_keeps_service_order() {
    let transport = ScriptedTransport::with_replies([json!([
        {"id": "52bab833", "name": "weather", "doc": "ask for the weather"},
        {"id": "52bab834", "name": "greeting"}
    ])]);

    let intents = transport.client().list_intents().await.unwrap();

    let names: Vec<_> = intents.iter().filter_map(|i| i.name.as_deref()).collect();
    assert_eq!(names, ["weather", "greeting"]);
    assert_eq!(intents[0].doc.as_deref(), Some("ask for the weather"));
    assert_eq!(transport.last_request().url.path(), "/intents");
}

#[tokio::test]
async fn list_intents_reports_error_object() {
    let transport = ScriptedTransport::new();
    transport.reply(401, json!({"error": "Bad auth", "code": "no-auth"}));

    let err = transport.client().list_intents().await.unwrap_err();
    assert_eq!(err.to_string(), "list intents response error: Bad auth");
}

#[tokio::test]
async fn create_intent_sends_only_set_fields() {
    let transport = ScriptedTransport::with_replies([json!({
        "id": "52bab833",
        "name": "weather",
        "expressions": [{"id": "e1", "body": "is it raining?"}]
    })]);
    let intent = Intent::new("weather").expression("is it raining?");

    let created = transport.client().create_intent(&intent).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("52bab833"));
    assert_eq!(created.expressions[0].id.as_deref(), Some("e1"));
    let request = transport.last_request();
    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(
        json_body(&request),
        json!({"name": "weather", "expressions": [{"body": "is it raining?"}]})
    );
}

#[tokio::test]
async fn create_intents_fails_on_per_item_errors() {
    let transport = ScriptedTransport::new();
    transport.reply(
        400,
        json!({"errors": ["intent weather already exists", "intent greeting already exists"]}),
    );

    let err = transport
        .client()
        .create_intents(&[Intent::new("weather"), Intent::new("greeting")])
        .await
        .unwrap_err();

    match err {
        Error::Response { operation, message, .. } => {
            assert_eq!(operation, "create intents");
            assert_eq!(
                message,
                "intent weather already exists,intent greeting already exists"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        json_body(&transport.last_request()),
        json!([{"name": "weather"}, {"name": "greeting"}])
    );
}

#[tokio::test]
async fn get_update_and_delete_address_the_intent() {
    let transport = ScriptedTransport::with_replies([
        json!({"id": "52bab833", "name": "weather"}),
        json!({"id": "52bab833", "name": "weather", "doc": "forecasts"}),
        json!({"deleted": "weather"}),
    ]);
    let client = transport.client();

    let fetched = assert_ok!(client.get_intent("weather").await);
    assert_eq!(fetched.name.as_deref(), Some("weather"));

    let updated = assert_ok!(
        client
            .update_intent("weather", &Intent::default().doc("forecasts"))
            .await
    );
    assert_eq!(updated.doc.as_deref(), Some("forecasts"));

    let deleted = assert_ok!(client.delete_intent("weather").await);
    assert_eq!(deleted.deleted.as_deref(), Some("weather"));

    let requests = transport.requests();
    assert_eq!(requests[0].method, reqwest::Method::GET);
    assert_eq!(requests[1].method, reqwest::Method::PUT);
    assert_eq!(json_body(&requests[1]), json!({"doc": "forecasts"}));
    assert_eq!(requests[2].method, reqwest::Method::DELETE);
    for request in &requests {
        assert_eq!(request.url.path(), "/intents/weather");
    }
}

#[tokio::test]
async fn add_expressions_accepts_list_or_echo() {
    let transport = ScriptedTransport::with_replies([
        json!([{"id": "e1", "body": "sunny?"}, {"id": "e2", "body": "rain?"}]),
        json!({"intent_id": "52bab833", "body": "snow?"}),
    ]);
    let client = transport.client();

    let added = client
        .add_intent_expressions("weather", &IntentExpression::many(["sunny?", "rain?"]))
        .await
        .unwrap();
    assert_eq!(added.len(), 2);
    assert_eq!(
        json_body(&transport.last_request()),
        json!([{"body": "sunny?"}, {"body": "rain?"}])
    );

    let echoed = client
        .add_intent_expressions("weather", &[IntentExpression::new("snow?")])
        .await
        .unwrap();
    assert_eq!(echoed.len(), 1);
    assert_eq!(echoed[0].intent_id.as_deref(), Some("52bab833"));
    assert_eq!(echoed[0].body.as_deref(), Some("snow?"));
    assert_eq!(
        transport.last_request().url.path(),
        "/intents/weather/expressions"
    );
}

#[tokio::test]
async fn add_expressions_reports_body_error() {
    let transport = ScriptedTransport::new();
    transport.reply(400, json!({"body": "Bad request", "code": 400}));

    let err = assert_err!(
        transport
            .client()
            .add_intent_expressions("weather", &[IntentExpression::new("")])
            .await
    );
    assert_eq!(err.remote_code(), Some("400"));
    assert_eq!(
        err.to_string(),
        "add intent expressions response error: Bad request"
    );
}

#[tokio::test]
async fn delete_expression_escapes_the_id() {
    let transport = ScriptedTransport::with_replies([json!({"deleted": "e/1"})]);

    let deleted = transport
        .client()
        .delete_intent_expression("weather", "e/1")
        .await
        .unwrap();

    assert_eq!(deleted.deleted.as_deref(), Some("e/1"));
    assert_eq!(
        transport.last_request().url.path(),
        "/intents/weather/expressions/e%2F1"
    );
}

#[tokio::test]
async fn create_intents_accepts_intents_wrapper() {
    let transport = ScriptedTransport::with_replies([json!({
        "intents": [{"id": "i1", "name": "weather"}, {"id": "i2", "name": "greeting"}]
    })]);

    let created = transport
        .client()
        .create_intents(&[Intent::new("weather"), Intent::new("greeting")])
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].name.as_deref(), Some("weather"));
    assert_eq!(created[1].id.as_deref(), Some("i2"));
}

#[tokio::test]
async fn create_intents_accepts_bare_array() {
    let transport = ScriptedTransport::with_replies([json!([{"id": "i1", "name": "weather"}])]);

    let created = transport
        .client()
        .create_intents(&[Intent::new("weather")])
        .await
        .unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id.as_deref(), Some("i1"));
}

#[tokio::test]
async fn create_intents_rejects_unrecognized_object() {
    let transport = ScriptedTransport::with_replies([json!({"created": 2})]);

    let err = transport
        .client()
        .create_intents(&[Intent::new("weather"), Intent::new("greeting")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Parse { operation: "create intents", status: 200, .. }));
}

#[tokio::test]
async fn list_intents_rejects_unexpected_object() {
    let transport = ScriptedTransport::with_replies([json!({"unexpected": true})]);

    let err = transport.client().list_intents().await.unwrap_err();

    assert!(matches!(err, Error::Parse { status: 200, .. }));
    assert!(err.to_string().contains("expected a JSON array"));
}

#[tokio::test]
async fn add_expressions_with_bare_code_is_not_a_success() {
    let transport = ScriptedTransport::with_replies([json!({"code": "warn"})]);

    let err = transport
        .client()
        .add_intent_expressions("weather", &IntentExpression::many(["sunny?"]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Parse {
            operation: "add intent expressions",
            ..
        }
    ));
}
