//! Namespace identity descriptors.

use smol_str::SmolStr;

use crate::base::{NamespaceId, PackageId};
use crate::model::VersionData;

/// Derived namespace descriptor of a package: (uri, prefix) identity,
/// version metadata, and the dependency set computed by
/// [`crate::namespace::NamespaceGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceInfo {
    pub(super) package: PackageId,
    pub(super) uri: SmolStr,
    pub(super) prefix: SmolStr,
    pub(super) version: SmolStr,
    pub(super) revision: SmolStr,
    pub(super) date: SmolStr,
    /// Version of the UML model the namespace originates from
    pub(super) uml_version: SmolStr,
    /// Identifiers of fixes (tissues) applied to this namespace
    pub(super) fixes: Vec<SmolStr>,
    /// Namespaces this one depends on; no self-loops, no direct 2-cycles
    pub(super) dependencies: Vec<NamespaceId>,
}

impl NamespaceInfo {
    pub(super) fn from_version_data(package: PackageId, data: &VersionData) -> Self {
        Self {
            package,
            uri: data.uri.clone(),
            prefix: data.prefix.clone(),
            version: data.version.clone(),
            revision: data.revision.clone(),
            date: data.date.clone(),
            uml_version: data.uml_version.clone(),
            fixes: data.fixes.clone(),
            dependencies: Vec::new(),
        }
    }

    /// The package this namespace describes.
    pub fn package(&self) -> PackageId {
        self.package
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn uml_version(&self) -> &str {
        &self.uml_version
    }

    pub fn fixes(&self) -> &[SmolStr] {
        &self.fixes
    }

    /// Direct dependencies, in discovery order.
    pub fn dependencies(&self) -> &[NamespaceId] {
        &self.dependencies
    }
}
