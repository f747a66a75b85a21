//! Client for the Wit.ai HTTP API.
//!
//! Developer-friendly goal: one cheap-to-clone [`WitClient`] with one async
//! method per remote capability. Implementation details are split into
//! submodules under `src/client/`.

pub mod builder;
pub mod core;
mod converse;
mod entities;
mod intents;
mod message;

pub use builder::WitClientBuilder;
pub use self::core::WitClient;

/// API version sent in the `Accept` header unless configured otherwise.
pub const DEFAULT_VERSION: &str = "20160330";

/// Service host; every resource path is relative to it.
pub const DEFAULT_BASE_URL: &str = "https://api.wit.ai";

/// Upper bound on turns collected by one converse loop.
pub const DEFAULT_MAX_CONVERSE_TURNS: usize = 16;
