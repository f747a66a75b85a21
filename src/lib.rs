//! # wit-lib-rust
//!
//! Typed async client for the Wit.ai natural-language-understanding HTTP API.
//!
//! ## Overview
//!
//! Submit text or audio and get back intents, entities and confidence scores
//! as typed values; manage the intents and entities of an app; drive
//! `/converse` dialogue sessions. The crate owns the marshaling between Rust
//! types and the service's JSON, including its inconsistent error shapes.
//!
//! ## Core Philosophy
//!
//! - **Absent is not empty**: optional fields are `Option`, and `None` never reaches the wire
//! - **One failure check**: every response goes through [`types::HasResponseError`]
//! - **Labeled failures**: every error names the operation and the phase that failed
//! - **Pluggable transport**: [`transport::Transport`] is a trait; reqwest is the default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wit_lib_rust::{MessageOptions, WitClient};
//!
//! #[tokio::main]
//! async fn main() -> wit_lib_rust::Result<()> {
//!     let client = WitClient::new("your-server-token")?;
//!
//!     let message = client
//!         .message("how's the weather today?", &MessageOptions::new())
//!         .await?;
//!     if let Some(best) = message.best_outcome() {
//!         println!("{}", best);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`WitClient`], its builder, and one method per endpoint |
//! | [`types`] | Request and response records, error normalization, display |
//! | [`request`] | Query-string, URL and body construction |
//! | [`transport`] | Transport trait and the reqwest implementation |
//! | [`error`] | Error type shared by all operations |

pub mod client;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

pub use client::{WitClient, WitClientBuilder, DEFAULT_BASE_URL, DEFAULT_VERSION};
pub use error::{Error, ErrorContext};
pub use request::AudioFormat;
pub use transport::{HttpTransport, Transport, TransportError};
pub use types::{
    Context, Converse, ConverseType, Deleted, Entity, EntityValue, HasResponseError, Intent,
    IntentExpression, Location, Message, MessageOptions, Outcome, ResponseError,
};

/// Re-exported so callers can cancel in-flight calls without a direct dependency.
pub use tokio_util::sync::CancellationToken;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
