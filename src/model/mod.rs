//! # The object graph
//!
//! Entities (packages, classes, attributes, associations, constraints) and
//! their structural edges, built once by the external ingestion step through
//! [`ModelBuilder`] and frozen as a [`ModelGraph`]. Kind classification runs
//! inside the freeze; every other derived computation reads the frozen graph.

pub mod association;
pub mod attribute;
pub mod class;
pub mod constraint;
pub mod error;
pub mod graph;
pub mod package;
pub mod stereotype;
pub mod tokens;

pub use association::{Aggregation, Association, AssociationEnd, AssociationKind};
pub use attribute::Attribute;
pub use class::Class;
pub use constraint::{ClassConstraint, ValueBounds};
pub use error::ModelError;
pub use graph::{ClassFlags, GraphStats, ModelBuilder, ModelEntity, ModelGraph};
pub use package::{Package, PackageKind, VersionData};
pub use stereotype::Stereotypes;
