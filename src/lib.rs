//! # model-kind
//!
//! Core library for deriving semantic metadata from CIM and IEC 61850 UML
//! models: kind classification, presence conditions, name decomposition, and
//! namespace dependencies.
//!
//! The library consumes a graph of modeling entities that an external
//! ingestion step has already extracted from the modeling tool. It never
//! parses, renders, or mutates that model; it derives per-entity metadata
//! that documentation writers and validators consume instead of re-inspecting
//! raw stereotypes and inheritance chains.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! presence   → presence-condition resolution (per attribute)
//! decompose  → abbreviated-term segmentation of identifiers
//! namespace  → per-package namespace identity and dependency closure
//!   ↓
//! classify   → Kind classification for classes and attributes
//!   ↓
//! model      → frozen object graph (packages, classes, attributes, ...)
//!   ↓
//! base       → primitives (arena ids, Nature, Multiplicity)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → classify → leaf components)
// ============================================================================

/// Foundation types: arena ids, dialect natures, multiplicities
pub mod base;

/// The frozen object graph and its builder
pub mod model;

/// Kind classification for classes and attributes
pub mod classify;

/// Presence-condition resolution
pub mod presence;

/// Abbreviated-term name decomposition
pub mod decompose;

/// Namespace identity and dependency closure per package
pub mod namespace;

// Re-export foundation types
pub use base::{AssociationId, AttributeId, ClassId, Multiplicity, Nature, PackageId};
pub use classify::{AttributeKind, ClassKind, KindMeta};
pub use model::{ModelBuilder, ModelError, ModelGraph};
pub use presence::{PresenceCondition, PresenceConditionResolver, PresenceIndex};

pub use decompose::{DecomposedTerm, NameDecomposer, NameDecomposition};
pub use namespace::{NamespaceGraph, NamespaceId, NamespaceInfo};
