//! Lifecycle events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to lifecycle events emitted by task groups.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: [`Ordered`](crate::Ordered) and [`Parallel`](crate::Parallel)
//!   groups with an attached bus.
//! - **Consumers**: [`SubscriberSet::listen`](crate::SubscriberSet::listen)
//!   workers, or any `bus.subscribe()` receiver.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
