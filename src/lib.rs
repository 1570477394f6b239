//! A receiver for GitHub webhooks.
//!
//! [`Server`] validates, authenticates and decodes incoming deliveries and
//! hands every accepted [`Event`] to a bounded queue, in the order the
//! deliveries finished validation. A full queue holds back the HTTP response
//! until the consumer catches up.

pub mod config;
pub mod event;
pub mod github;
pub mod hooks;
pub mod http;
pub mod queue;
pub mod reference;
pub mod server;
pub mod signature;

pub use crate::{
    config::Config,
    event::{Event, EventType, UnknownEvent},
    reference::Reference,
    server::Server,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value of the `Server` header on accepted deliveries.
pub const SERVER_HEADER: &str = concat!("hookserve/", env!("CARGO_PKG_VERSION"));
