//! Meaning extraction from text and audio.

use crate::client::core::{Payload, WitClient};
use crate::request::{AudioFormat, QueryParams};
use crate::types::{Message, MessageOptions};
use crate::{Error, Result};
use reqwest::Method;
use std::path::Path;

impl WitClient {
    /// Extract the meaning of a sentence (`GET /message`).
    pub async fn message(&self, query: &str, options: &MessageOptions) -> Result<Message> {
        const OP: &str = "message";
        let mut params = message_params(OP, options)?;
        params.insert("q", query);
        let url = self.url(&["message"], &params);
        self.call(OP, Method::GET, url, Payload::Empty).await
    }

    /// Fetch a previously processed message (`GET /messages/{id}`).
    pub async fn message_by_id(&self, message_id: &str) -> Result<Message> {
        const OP: &str = "get message";
        let url = self.url(&["messages", message_id], &QueryParams::new());
        self.call(OP, Method::GET, url, Payload::Empty).await
    }

    /// Extract the meaning of an audio file (`POST /speech`).
    ///
    /// The file is read before anything is sent; an unreadable path fails
    /// with [`Error::Io`] and no request is made.
    pub async fn speech(
        &self,
        path: impl AsRef<Path>,
        format: AudioFormat,
        options: &MessageOptions,
    ) -> Result<Message> {
        const OP: &str = "speech";
        let payload = Self::upload_payload(OP, path.as_ref(), format).await?;
        let params = message_params(OP, options)?;
        let url = self.url(&["speech"], &params);
        self.call(OP, Method::POST, url, payload).await
    }

    /// [`speech`](Self::speech) for MP3 recordings.
    pub async fn speech_mp3(
        &self,
        path: impl AsRef<Path>,
        options: &MessageOptions,
    ) -> Result<Message> {
        self.speech(path, AudioFormat::Mp3, options).await
    }
}

fn message_params(operation: &'static str, options: &MessageOptions) -> Result<QueryParams> {
    let mut params = QueryParams::new();
    params
        .insert_json("context", options.context.as_ref())
        .map_err(|source| Error::Encode { operation, source })?;
    params
        .insert_opt("msg_id", options.message_id.as_deref())
        .insert_opt("thread_id", options.thread_id.as_deref())
        .insert_opt("n", options.n.map(|n| n.max(1)));
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Context;

    #[test]
    fn unset_options_add_nothing() {
        let params = message_params("message", &MessageOptions::new()).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn options_are_mapped_to_wire_names() {
        let options = MessageOptions::new()
            .context(Context::new().with_reference_time("2016-04-01T09:00:00+09:00"))
            .message_id("m-1")
            .thread_id("t-1")
            .n(0);
        let params = message_params("message", &options).unwrap();
        assert_eq!(params.get("msg_id"), Some("m-1"));
        assert_eq!(params.get("thread_id"), Some("t-1"));
        assert_eq!(params.get("n"), Some("1"));
        assert_eq!(
            params.get("context"),
            Some(r#"{"reference_time":"2016-04-01T09:00:00+09:00"}"#)
        );
    }
}
