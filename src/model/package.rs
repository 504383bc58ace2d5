//! Packages: the hierarchical containers of the model.

use smol_str::SmolStr;
use uuid::Uuid;

use crate::base::{ClassId, Nature, PackageId};

use super::stereotype::Stereotypes;

/// Structural role of a package in the containment tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// A root model package (one per nature, usually)
    Model,
    /// A direct child of a model package
    Top,
    /// Any deeper package
    Package,
    /// Synthetic container for entities with no recorded owner
    NullModel,
}

/// Raw namespace version bookkeeping attached to a package by the ingestion
/// step, typically harvested from a version class inside the package.
///
/// This is input data; the derived, dependency-closed descriptor is
/// [`crate::namespace::NamespaceInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionData {
    /// Namespace URI
    pub uri: SmolStr,
    /// Namespace prefix
    pub prefix: SmolStr,
    pub version: SmolStr,
    pub revision: SmolStr,
    pub date: SmolStr,
    /// Version of the UML model the namespace originates from
    pub uml_version: SmolStr,
    /// Identifiers of fixes (tissues) applied to this namespace
    pub fixes: Vec<SmolStr>,
}

/// A package of the frozen object graph.
#[derive(Debug, Clone)]
pub struct Package {
    pub(super) uuid: Uuid,
    pub(super) name: SmolStr,
    pub(super) kind: PackageKind,
    pub(super) nature: Nature,
    pub(super) owner: Option<PackageId>,
    pub(super) stereotypes: Stereotypes,
    pub(super) informative: bool,
    pub(super) child_packages: Vec<PackageId>,
    pub(super) classes: Vec<ClassId>,
    /// Packages this one explicitly depends on (UML dependency edges)
    pub(super) dependencies: Vec<PackageId>,
    pub(super) version_data: Option<VersionData>,
}

impl Package {
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PackageKind {
        self.kind
    }

    pub fn nature(&self) -> Nature {
        self.nature
    }

    pub fn owner(&self) -> Option<PackageId> {
        self.owner
    }

    pub fn stereotypes(&self) -> &Stereotypes {
        &self.stereotypes
    }

    /// True for packages documented as informative rather than normative.
    /// Derived at insertion from the name prefix, the `informative`
    /// stereotype, or an informative ancestor.
    pub fn is_informative(&self) -> bool {
        self.informative
    }

    pub fn child_packages(&self) -> &[PackageId] {
        &self.child_packages
    }

    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }

    /// Explicit dependency targets of this package.
    pub fn dependencies(&self) -> &[PackageId] {
        &self.dependencies
    }

    /// Raw namespace bookkeeping, when the package declares one.
    pub fn version_data(&self) -> Option<&VersionData> {
        self.version_data.as_ref()
    }
}
