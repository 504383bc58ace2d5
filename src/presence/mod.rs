//! # Presence-condition resolution
//!
//! Converts a class's free-text constraints (or an attribute's plain
//! optionality) into normalized [`PresenceCondition`] values, matching
//! constraint names against the model's presence-condition literals with
//! deterministic tie-breaks.

pub mod condition;
pub mod resolver;

pub use condition::PresenceCondition;
pub use resolver::{PresenceConditionResolver, PresenceIndex};
