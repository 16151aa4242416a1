//! Tipjar event bus and notification infrastructure.
//!
//! This crate provides the building blocks for the app-wide event
//! system (PRD-25):
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`] — the canonical domain event envelope.
//! - [`unlock`] — adapter publishing achievement unlock events from the
//!   evaluation engine onto the bus.
//!
//! Delivery to external channels (push, toast, email digests) is owned
//! by collaborator services subscribed to the bus.

pub mod bus;
pub mod unlock;

pub use bus::{DomainEvent, EventBus, EVENT_ACHIEVEMENT_UNLOCKED};
pub use unlock::{publish_unlocks, unlock_event};
