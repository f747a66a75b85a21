//! In-memory transport that replays canned responses and records requests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wit_lib_rust::transport::{TransportRequest, TransportResponse};
use wit_lib_rust::{CancellationToken, Transport, TransportError, WitClient};

enum Step {
    Reply(TransportResponse),
    Fail(String),
    /// Never answers; only cancellation ends the call.
    Hang,
}

#[derive(Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Transport answering each call with the next JSON value, status 200.
    pub fn with_replies(replies: impl IntoIterator<Item = Value>) -> Arc<Self> {
        let transport = Self::new();
        for reply in replies {
            transport.reply(200, reply);
        }
        transport
    }

    pub fn reply(&self, status: u16, body: Value) -> &Self {
        self.reply_raw(status, body.to_string())
    }

    pub fn reply_raw(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push(Step::Reply(TransportResponse::new(status, body.into())))
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.push(Step::Fail(reason.to_string()))
    }

    pub fn hang(&self) -> &Self {
        self.push(Step::Hang)
    }

    fn push(&self, step: Step) -> &Self {
        self.steps.lock().unwrap().push_back(step);
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn client(self: &Arc<Self>) -> WitClient {
        WitClient::builder()
            .token(super::TEST_TOKEN)
            .transport(self.clone())
            .build()
            .expect("client should build")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(response)) => Ok(response),
            Some(Step::Fail(reason)) => Err(TransportError::Other(reason)),
            Some(Step::Hang) => {
                cancel.cancelled().await;
                Err(TransportError::Cancelled)
            }
            None => Err(TransportError::Other("script exhausted".to_string())),
        }
    }
}

/// Decoded JSON body of a recorded request.
pub fn json_body(request: &TransportRequest) -> Value {
    serde_json::from_slice(&request.body).expect("request body should be JSON")
}

/// Query pairs of a recorded request, decoded.
pub fn query(request: &TransportRequest) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn query_value(request: &TransportRequest, key: &str) -> Option<String> {
    query(request)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}
