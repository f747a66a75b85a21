//! Stateful dialogue over `/converse`.
//!
//! A session is a small state machine driven by the caller: the first call
//! carries the user's text, every following call advances the same session
//! without text, and the session rests once a turn of type `stop` arrives.

use crate::client::core::{Payload, WitClient};
use crate::request::QueryParams;
use crate::types::{Context, Converse};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::Method;
use tracing::{debug, info};

impl WitClient {
    /// One converse step (`POST /converse`).
    ///
    /// Pass `Some(query)` to start or continue a session with user text;
    /// `None` (or an empty query) asks for the next step only.
    pub async fn converse(
        &self,
        session_id: &str,
        query: Option<&str>,
        context: Option<&Context>,
    ) -> Result<Converse> {
        const OP: &str = "converse";
        let mut params = QueryParams::new();
        params
            .insert("session_id", session_id)
            .insert_opt("q", query.filter(|q| !q.is_empty()));
        let url = self.url(&["converse"], &params);
        let payload = match context {
            Some(ctx) => Self::json_payload(OP, ctx)?,
            None => Payload::Json(Bytes::from_static(b"{}")),
        };
        self.call(OP, Method::POST, url, payload).await
    }

    /// Advance a session without new user text, e.g. after running an action.
    pub async fn converse_next(
        &self,
        session_id: &str,
        context: Option<&Context>,
    ) -> Result<Converse> {
        self.converse(session_id, None, context).await
    }

    /// Send `query`, then follow the session until it stops.
    ///
    /// Returns every turn in order; the last one has type `stop`.
    pub async fn converse_all(
        &self,
        session_id: &str,
        query: &str,
        context: Option<Context>,
    ) -> Result<Vec<Converse>> {
        self.converse_loop(session_id, query, context, |_, _| {})
            .await
    }

    /// Like [`converse_all`](Self::converse_all), calling `on_turn` after each
    /// turn so the caller can run actions and update the context sent with
    /// the next step.
    ///
    /// Fails with [`Error::ConverseLimit`] after the configured number of
    /// turns without a `stop`.
    pub async fn converse_loop<F>(
        &self,
        session_id: &str,
        query: &str,
        mut context: Option<Context>,
        mut on_turn: F,
    ) -> Result<Vec<Converse>>
    where
        F: FnMut(&Converse, &mut Option<Context>) + Send,
    {
        let max_turns = self.config.max_converse_turns;
        let mut turns = Vec::new();
        let mut turn = self
            .converse(session_id, Some(query), context.as_ref())
            .await?;

        loop {
            debug!(session_id, kind = ?turn.kind, index = turns.len(), "converse turn");
            on_turn(&turn, &mut context);
            let stop = turn.is_stop();
            turns.push(turn);

            if stop {
                info!(session_id, turns = turns.len(), "converse session stopped");
                return Ok(turns);
            }
            if turns.len() >= max_turns {
                return Err(Error::ConverseLimit {
                    session_id: session_id.to_string(),
                    turns,
                });
            }

            turn = self.converse_next(session_id, context.as_ref()).await?;
        }
    }
}
