//! Foundation types shared by every layer of the crate.
//!
//! - [`PackageId`], [`ClassId`], [`AttributeId`], [`AssociationId`],
//!   [`NamespaceId`] - compact arena identifiers
//! - [`Nature`] - the model dialect an entity belongs to
//! - [`Multiplicity`] - lower/upper bounds for attributes and ends
//!
//! This module has NO dependencies on other modelkind modules.

pub mod ids;
pub mod multiplicity;
pub mod nature;

pub use ids::{AssociationId, AttributeId, ClassId, NamespaceId, PackageId};
pub use multiplicity::Multiplicity;
pub use nature::Nature;
