//! Classes and their classification-relevant structure.

use smol_str::SmolStr;
use uuid::Uuid;

use crate::base::{AttributeId, ClassId, Nature, PackageId};
use crate::classify::ClassKind;

use super::constraint::ClassConstraint;
use super::stereotype::Stereotypes;
use super::tokens;

/// A class of the frozen object graph.
///
/// Superclass/subclass edges are symmetric and set exactly once while the
/// graph is built; the flattened superclass chain and the [`ClassKind`] are
/// computed when the builder freezes the graph and never change afterwards.
#[derive(Debug, Clone)]
pub struct Class {
    pub(super) uuid: Uuid,
    pub(super) name: SmolStr,
    pub(super) owner: PackageId,
    pub(super) nature: Nature,
    pub(super) stereotypes: Stereotypes,
    pub(super) is_abstract: bool,
    /// Tool-native interface flag (EA and friends mark interfaces outside
    /// the stereotype list)
    pub(super) is_interface: bool,
    /// Tool-native enumeration flag
    pub(super) is_enumeration: bool,
    pub(super) superclasses: Vec<ClassId>,
    pub(super) subclasses: Vec<ClassId>,
    pub(super) attributes: Vec<AttributeId>,
    pub(super) constraints: Vec<ClassConstraint>,
    /// All ancestors reachable over superclass edges, depth-first,
    /// first-parent-first; computed once at freeze
    pub(super) flat_superclasses: Vec<ClassId>,
    /// Own name followed by the names of `flat_superclasses`
    pub(super) chain_names: Vec<SmolStr>,
    /// Assigned once when the builder freezes the graph
    pub(super) kind: ClassKind,
}

impl Class {
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> PackageId {
        self.owner
    }

    pub fn nature(&self) -> Nature {
        self.nature
    }

    pub fn stereotypes(&self) -> &Stereotypes {
        &self.stereotypes
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn is_enumeration_flagged(&self) -> bool {
        self.is_enumeration
    }

    pub fn is_informative(&self) -> bool {
        self.stereotypes.contains(tokens::INFORMATIVE)
    }

    pub fn is_deprecated(&self) -> bool {
        self.stereotypes.contains(tokens::DEPRECATED)
    }

    /// Direct superclasses, in insertion order.
    pub fn superclasses(&self) -> &[ClassId] {
        &self.superclasses
    }

    /// Direct subclasses, in insertion order.
    pub fn subclasses(&self) -> &[ClassId] {
        &self.subclasses
    }

    pub fn attributes(&self) -> &[AttributeId] {
        &self.attributes
    }

    pub fn constraints(&self) -> &[ClassConstraint] {
        &self.constraints
    }

    /// All ancestors reachable over superclass edges (the flattened
    /// superclass chain), excluding the class itself.
    pub fn flat_superclasses(&self) -> &[ClassId] {
        &self.flat_superclasses
    }

    /// The class's own name followed by every name in the flattened
    /// superclass chain. Inheritance-driven classification predicates run on
    /// these display names.
    pub fn chain_names(&self) -> &[SmolStr] {
        &self.chain_names
    }

    /// The structural classification tag assigned at freeze.
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// True for the version/namespace bookkeeping classes that are exempt
    /// from classification diagnostics.
    pub fn is_version_marker(&self) -> bool {
        self.name.ends_with(tokens::VERSION_CLASS_SUFFIX)
    }
}
