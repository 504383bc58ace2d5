//! Lazy, memoized namespace resolution over the frozen object graph.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};

use crate::base::{NamespaceId, PackageId};
use crate::model::ModelGraph;

use super::info::NamespaceInfo;

/// Computes and owns the [`NamespaceInfo`] of every package that declares
/// one.
///
/// Each package resolves at most once: the first query computes the
/// descriptor and its dependency set; later queries return the memoized
/// result. Single-threaded by contract, like every derived computation of
/// this crate.
#[derive(Debug)]
pub struct NamespaceGraph<'g> {
    graph: &'g ModelGraph,
    arena: Vec<NamespaceInfo>,
    /// Memo: `None` means "computed, package declares no namespace"
    by_package: FxHashMap<PackageId, Option<NamespaceId>>,
    /// Packages currently being resolved; breaks mutual recursion
    in_progress: FxHashSet<PackageId>,
}

impl<'g> NamespaceGraph<'g> {
    pub fn new(graph: &'g ModelGraph) -> Self {
        Self {
            graph,
            arena: Vec::new(),
            by_package: FxHashMap::default(),
            in_progress: FxHashSet::default(),
        }
    }

    /// The namespace of a package, resolving it on first access. `None` for
    /// packages without version data.
    pub fn info_for(&mut self, package: PackageId) -> Option<NamespaceId> {
        if let Some(&memoized) = self.by_package.get(&package) {
            return memoized;
        }
        if self.in_progress.contains(&package) {
            trace!(
                "[NS_GRAPH] '{}' is already being resolved - breaking recursion",
                self.graph.package(package).name()
            );
            return None;
        }
        self.in_progress.insert(package);
        let resolved = self.resolve(package);
        self.in_progress.remove(&package);
        self.by_package.insert(package, resolved);
        resolved
    }

    /// Access a resolved descriptor.
    pub fn info(&self, id: NamespaceId) -> &NamespaceInfo {
        &self.arena[id.index()]
    }

    /// Number of descriptors resolved so far.
    pub fn resolved_count(&self) -> usize {
        self.arena.len()
    }

    fn resolve(&mut self, package: PackageId) -> Option<NamespaceId> {
        let pkg = self.graph.package(package);
        let data = pkg.version_data()?;

        let id = NamespaceId::new(self.arena.len());
        self.arena.push(NamespaceInfo::from_version_data(package, data));
        debug!("[NS_GRAPH] resolved namespace '{}' for package '{}'", data.uri, pkg.name());

        // every dependency target of the package or a structural ancestor
        // that itself resolves a namespace becomes a dependency
        for target in self.dependency_targets(package) {
            if let Some(dep) = self.info_for(target) {
                self.add_dependency(id, dep);
            }
        }
        Some(id)
    }

    /// Explicit dependency targets of the package and all its structural
    /// ancestors, in discovery order. The visited set short-circuits
    /// self-referential containment, so the walk always terminates.
    fn dependency_targets(&self, package: PackageId) -> Vec<PackageId> {
        let mut visited: FxHashSet<PackageId> = FxHashSet::default();
        let mut targets = Vec::new();
        for ancestor in self.graph.ancestors(package) {
            if !visited.insert(ancestor) {
                break;
            }
            for &target in self.graph.package(ancestor).dependencies() {
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
        }
        targets
    }

    /// Record `b` as a dependency of `a`. Returns false without mutating
    /// anything when the edge would form a self-loop or a direct 2-cycle;
    /// longer cycles are not locally detectable and are not checked here.
    pub fn add_dependency(&mut self, a: NamespaceId, b: NamespaceId) -> bool {
        if a == b {
            warn!(
                "[NS_GRAPH] namespace '{}' cannot depend on itself",
                self.arena[a.index()].uri
            );
            return false;
        }
        if self.arena[b.index()].dependencies.contains(&a) {
            warn!(
                "[NS_GRAPH] refusing dependency '{}' -> '{}': the reverse edge already exists",
                self.arena[a.index()].uri,
                self.arena[b.index()].uri
            );
            return false;
        }
        let deps = &mut self.arena[a.index()].dependencies;
        if !deps.contains(&b) {
            deps.push(b);
        }
        true
    }
}
