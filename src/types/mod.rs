//! Typed records for every resource the API sends or receives.
//!
//! ## Field model
//!
//! Every field the service may omit is an `Option`. A missing key decodes to
//! `None`; a present key decodes to `Some`, even when empty (`"doc": ""` is
//! `Some("")`). On the way out, `None` fields and empty lists are not
//! serialized at all.
//!
//! ## Errors in responses
//!
//! Top-level responses flatten a [`ResponseError`] into themselves, and
//! [`HasResponseError`] decides whether a decoded value is a failure.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] / [`Outcome`] | Result of a text or speech query |
//! | [`Converse`] | One dialogue turn |
//! | [`Context`] | Caller state sent with queries |
//! | [`Intent`] / [`IntentExpression`] | Intent resource and training phrases |
//! | [`Entity`] / [`EntityValue`] | Entity resource and its values |
//! | [`Deleted`] | DELETE acknowledgement |
//!
//! Every type implements `Display` as `{Field: value, ...}` with absent fields
//! left out.
//!
//! ```rust
//! use wit_lib_rust::types::Location;
//!
//! let here = Location::new(37.5, 127.0);
//! assert_eq!(here.to_string(), "{Latitude: 37.500000, Longitude: 127.000000}");
//! ```

mod context;
mod converse;
pub(crate) mod display;
mod entity;
mod entity_map;
mod intent;
mod message;
pub(crate) mod response;

pub use context::{Context, ContextEntity, Location};
pub use converse::{Converse, ConverseType};
pub use entity::{Entity, EntityValue};
pub use entity_map::EntityMap;
pub use intent::{ExpressionsAdded, Intent, IntentBatch, IntentExpression, IntentsCreated};
pub use message::{Message, MessageOptions, Outcome};
pub use response::{Deleted, HasResponseError, Listing, ResponseError};
