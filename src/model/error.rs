//! Error types for object-graph construction.
//!
//! Only contract violations surface as errors: they indicate a broken
//! ingestion step, not a data-quality issue. Data-quality anomalies are
//! logged and resolved to fallback values instead.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by [`crate::model::ModelBuilder`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An entity name was empty or all-whitespace.
    #[error("Empty name for {kind}")]
    EmptyName { kind: &'static str },

    /// An id did not refer to an entity of this graph.
    #[error("Unknown {kind} id {index}")]
    UnknownId { kind: &'static str, index: u32 },

    /// A class was made its own superclass.
    #[error("Class '{name}' cannot specialize itself")]
    SelfGeneralization { name: String },

    /// A one-shot field was set a second time.
    #[error("{field} already set on {entity}")]
    AlreadySet { entity: String, field: &'static str },

    /// Two distinct entities claimed the same UUID.
    #[error("UUID {uuid} already bound to a different entity kind")]
    UuidKindMismatch { uuid: Uuid },
}

impl ModelError {
    pub fn empty_name(kind: &'static str) -> Self {
        Self::EmptyName { kind }
    }

    pub fn unknown(kind: &'static str, index: u32) -> Self {
        Self::UnknownId { kind, index }
    }
}
