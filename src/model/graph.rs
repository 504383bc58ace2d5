//! The object graph: arena storage, build operations, and the freeze pass.
//!
//! [`ModelBuilder`] is the write side used by the external ingestion step.
//! [`ModelGraph`] is the read side everything else consumes; it is frozen the
//! moment [`ModelBuilder::build`] returns and offers no mutation whatsoever.
//! The freeze pass computes the flattened superclass chains and assigns every
//! class and attribute its Kind.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::base::{AssociationId, AttributeId, ClassId, Multiplicity, Nature, PackageId};
use crate::classify::{self, AttributeFacts, ClassFacts};

use super::association::{Association, AssociationEnd};
use super::attribute::Attribute;
use super::class::Class;
use super::constraint::{ClassConstraint, ValueBounds};
use super::error::ModelError;
use super::package::{Package, PackageKind, VersionData};
use super::stereotype::Stereotypes;
use super::tokens;

/// Reference to any entity of the graph, as found by UUID lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelEntity {
    Package(PackageId),
    Class(ClassId),
    Attribute(AttributeId),
    Association(AssociationId),
}

/// Tool-native flags of a class, beyond its stereotype tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassFlags {
    pub is_abstract: bool,
    pub is_interface: bool,
    pub is_enumeration: bool,
}

/// Entity counts of a frozen graph, logged once at freeze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub packages: usize,
    pub classes: usize,
    pub attributes: usize,
    pub associations: usize,
}

// ============================================================================
// BUILDER (write side, single external build pass)
// ============================================================================

/// Accumulates the object graph during the single external build pass.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    packages: Vec<Package>,
    classes: Vec<Class>,
    attributes: Vec<Attribute>,
    associations: Vec<Association>,
    /// Tool-side identity index; duplicate insertion resolves to the
    /// existing entity
    by_uuid: FxHashMap<Uuid, ModelEntity>,
    null_models: FxHashMap<Nature, PackageId>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Packages
    // ============================================================

    /// Insert a root model package for a nature.
    pub fn add_model(
        &mut self,
        uuid: Uuid,
        name: &str,
        nature: Nature,
    ) -> Result<PackageId, ModelError> {
        self.insert_package(uuid, name, PackageKind::Model, nature, None, Stereotypes::new())
    }

    /// The synthetic container for entities with no recorded owner; created
    /// on first use, one per nature.
    pub fn null_model(&mut self, nature: Nature) -> PackageId {
        if let Some(&id) = self.null_models.get(&nature) {
            return id;
        }
        let id = PackageId::new(self.packages.len());
        self.packages.push(Package {
            uuid: Uuid::new_v4(),
            name: SmolStr::new("NullModel"),
            kind: PackageKind::NullModel,
            nature,
            owner: None,
            stereotypes: Stereotypes::new(),
            informative: false,
            child_packages: Vec::new(),
            classes: Vec::new(),
            dependencies: Vec::new(),
            version_data: None,
        });
        self.null_models.insert(nature, id);
        id
    }

    /// Insert a package under an existing one. Children of a model package
    /// become top packages; deeper ones are plain packages.
    pub fn add_package(
        &mut self,
        uuid: Uuid,
        name: &str,
        owner: PackageId,
        stereotypes: Stereotypes,
    ) -> Result<PackageId, ModelError> {
        let parent = self.package_checked(owner)?;
        let kind = match parent.kind {
            PackageKind::Model => PackageKind::Top,
            _ => PackageKind::Package,
        };
        let nature = parent.nature;
        self.insert_package(uuid, name, kind, nature, Some(owner), stereotypes)
    }

    fn insert_package(
        &mut self,
        uuid: Uuid,
        name: &str,
        kind: PackageKind,
        nature: Nature,
        owner: Option<PackageId>,
        stereotypes: Stereotypes,
    ) -> Result<PackageId, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::empty_name("package"));
        }
        if let Some(existing) = self.known_uuid(uuid, "package")? {
            match existing {
                ModelEntity::Package(id) => return Ok(id),
                _ => return Err(ModelError::UuidKindMismatch { uuid }),
            }
        }

        let informative = name.starts_with(tokens::INFORMATIVE_PREFIX)
            || stereotypes.contains(tokens::INFORMATIVE)
            || owner.is_some_and(|o| self.packages[o.index()].informative);

        let id = PackageId::new(self.packages.len());
        self.packages.push(Package {
            uuid,
            name: SmolStr::new(name),
            kind,
            nature,
            owner,
            stereotypes,
            informative,
            child_packages: Vec::new(),
            classes: Vec::new(),
            dependencies: Vec::new(),
            version_data: None,
        });
        if let Some(owner) = owner {
            self.packages[owner.index()].child_packages.push(id);
        }
        self.by_uuid.insert(uuid, ModelEntity::Package(id));
        Ok(id)
    }

    /// Record an explicit dependency edge between two packages. Self-edges
    /// and duplicates are graph-integrity anomalies: logged and dropped.
    pub fn add_package_dependency(
        &mut self,
        from: PackageId,
        to: PackageId,
    ) -> Result<(), ModelError> {
        self.package_checked(from)?;
        self.package_checked(to)?;
        if from == to {
            warn!(
                "[MODEL] package '{}' cannot depend on itself - edge dropped",
                self.packages[from.index()].name
            );
            return Ok(());
        }
        if self.packages[from.index()].dependencies.contains(&to) {
            debug!(
                "[MODEL] duplicate dependency {} -> {} ignored",
                self.packages[from.index()].name,
                self.packages[to.index()].name
            );
            return Ok(());
        }
        self.packages[from.index()].dependencies.push(to);
        Ok(())
    }

    /// Attach raw namespace bookkeeping to a package. One-shot: a second call
    /// for the same package is a contract violation.
    pub fn set_version_data(
        &mut self,
        package: PackageId,
        data: VersionData,
    ) -> Result<(), ModelError> {
        self.package_checked(package)?;
        let pkg = &mut self.packages[package.index()];
        if pkg.version_data.is_some() {
            return Err(ModelError::AlreadySet {
                entity: pkg.name.to_string(),
                field: "version data",
            });
        }
        pkg.version_data = Some(data);
        Ok(())
    }

    // ============================================================
    // Classes
    // ============================================================

    pub fn add_class(
        &mut self,
        uuid: Uuid,
        owner: PackageId,
        name: &str,
        stereotypes: Stereotypes,
        flags: ClassFlags,
    ) -> Result<ClassId, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::empty_name("class"));
        }
        let nature = self.package_checked(owner)?.nature;
        if let Some(existing) = self.known_uuid(uuid, "class")? {
            match existing {
                ModelEntity::Class(id) => return Ok(id),
                _ => return Err(ModelError::UuidKindMismatch { uuid }),
            }
        }

        let id = ClassId::new(self.classes.len());
        self.classes.push(Class {
            uuid,
            name: SmolStr::new(name),
            owner,
            nature,
            stereotypes,
            is_abstract: flags.is_abstract,
            is_interface: flags.is_interface,
            is_enumeration: flags.is_enumeration,
            superclasses: Vec::new(),
            subclasses: Vec::new(),
            attributes: Vec::new(),
            constraints: Vec::new(),
            flat_superclasses: Vec::new(),
            chain_names: Vec::new(),
            kind: crate::classify::ClassKind::Other,
        });
        self.packages[owner.index()].classes.push(id);
        self.by_uuid.insert(uuid, ModelEntity::Class(id));
        Ok(id)
    }

    /// Record a generalization: `sub` specializes `sup`. Sets both edge
    /// directions at once; repeating an existing edge is a logged no-op.
    pub fn add_generalization(&mut self, sub: ClassId, sup: ClassId) -> Result<(), ModelError> {
        self.class_checked(sub)?;
        self.class_checked(sup)?;
        if sub == sup {
            return Err(ModelError::SelfGeneralization {
                name: self.classes[sub.index()].name.to_string(),
            });
        }
        if self.classes[sub.index()].superclasses.contains(&sup) {
            debug!(
                "[MODEL] duplicate generalization {} -> {} ignored",
                self.classes[sub.index()].name,
                self.classes[sup.index()].name
            );
            return Ok(());
        }
        self.classes[sub.index()].superclasses.push(sup);
        self.classes[sup.index()].subclasses.push(sub);
        Ok(())
    }

    /// Attach a raw class constraint (presence-condition input).
    pub fn add_class_constraint(
        &mut self,
        class: ClassId,
        constraint: ClassConstraint,
    ) -> Result<(), ModelError> {
        self.class_checked(class)?;
        self.classes[class.index()].constraints.push(constraint);
        Ok(())
    }

    // ============================================================
    // Attributes
    // ============================================================

    pub fn add_attribute(
        &mut self,
        uuid: Uuid,
        owner: ClassId,
        name: &str,
        type_class: Option<ClassId>,
        multiplicity: Multiplicity,
        initial_value: Option<&str>,
        stereotypes: Stereotypes,
    ) -> Result<AttributeId, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::empty_name("attribute"));
        }
        self.class_checked(owner)?;
        if let Some(type_class) = type_class {
            self.class_checked(type_class)?;
        }
        if let Some(existing) = self.known_uuid(uuid, "attribute")? {
            match existing {
                ModelEntity::Attribute(id) => return Ok(id),
                _ => return Err(ModelError::UuidKindMismatch { uuid }),
            }
        }

        let id = AttributeId::new(self.attributes.len());
        self.attributes.push(Attribute {
            uuid,
            name: SmolStr::new(name),
            owner,
            type_class,
            multiplicity,
            initial_value: initial_value.map(SmolStr::new),
            stereotypes,
            bounds: None,
            kind: crate::classify::AttributeKind::Other,
        });
        self.classes[owner.index()].attributes.push(id);
        self.by_uuid.insert(uuid, ModelEntity::Attribute(id));
        Ok(id)
    }

    /// Insert an enumeration literal: an attribute without type.
    pub fn add_literal(
        &mut self,
        uuid: Uuid,
        owner: ClassId,
        name: &str,
        stereotypes: Stereotypes,
    ) -> Result<AttributeId, ModelError> {
        self.add_attribute(uuid, owner, name, None, Multiplicity::ONE, None, stereotypes)
    }

    /// Fold a raw attribute constraint (`minValue`/`maxValue`) into the
    /// attribute's numeric bounds.
    pub fn add_attribute_constraint(
        &mut self,
        attribute: AttributeId,
        name: &str,
        text: &str,
    ) -> Result<(), ModelError> {
        self.attribute_checked(attribute)?;
        let attr = &mut self.attributes[attribute.index()];
        let owner_name = attr.name.clone();
        attr.bounds
            .get_or_insert_with(ValueBounds::default)
            .apply(&owner_name, name, text);
        Ok(())
    }

    // ============================================================
    // Associations
    // ============================================================

    pub fn add_association(
        &mut self,
        uuid: Uuid,
        ends: [AssociationEnd; 2],
    ) -> Result<AssociationId, ModelError> {
        self.class_checked(ends[0].class)?;
        self.class_checked(ends[1].class)?;
        if let Some(existing) = self.known_uuid(uuid, "association")? {
            match existing {
                ModelEntity::Association(id) => return Ok(id),
                _ => return Err(ModelError::UuidKindMismatch { uuid }),
            }
        }

        let id = AssociationId::new(self.associations.len());
        self.associations.push(Association { uuid, ends });
        self.by_uuid.insert(uuid, ModelEntity::Association(id));
        Ok(id)
    }

    // ============================================================
    // Freeze
    // ============================================================

    /// Freeze the graph: compute flattened superclass chains, classify every
    /// class and attribute, and hand out the read-only graph.
    pub fn build(mut self) -> ModelGraph {
        self.compute_chains();
        self.classify_classes();
        self.classify_attributes();

        let graph = ModelGraph {
            packages: self.packages,
            classes: self.classes,
            attributes: self.attributes,
            associations: self.associations,
            by_uuid: self.by_uuid,
        };
        let stats = graph.stats();
        info!(
            "[MODEL] frozen: {} packages, {} classes, {} attributes, {} associations",
            stats.packages, stats.classes, stats.attributes, stats.associations
        );
        graph
    }

    /// Flatten every class's superclass chain: DFS over ALL superclass
    /// edges, first-parent-first, with a visited set guarding against cycles
    /// in malformed input.
    fn compute_chains(&mut self) {
        for index in 0..self.classes.len() {
            let mut visited: FxHashSet<ClassId> = FxHashSet::default();
            let own = ClassId::new(index);
            visited.insert(own);
            let mut flat = Vec::new();
            self.flatten_into(own, &mut visited, &mut flat);

            let mut chain_names = Vec::with_capacity(flat.len() + 1);
            chain_names.push(self.classes[index].name.clone());
            chain_names.extend(flat.iter().map(|id| self.classes[id.index()].name.clone()));

            let class = &mut self.classes[index];
            class.flat_superclasses = flat;
            class.chain_names = chain_names;
        }
    }

    fn flatten_into(&self, class: ClassId, visited: &mut FxHashSet<ClassId>, out: &mut Vec<ClassId>) {
        for &sup in &self.classes[class.index()].superclasses {
            if visited.insert(sup) {
                out.push(sup);
                self.flatten_into(sup, visited, out);
            }
        }
    }

    fn classify_classes(&mut self) {
        let kinds: Vec<_> = self
            .classes
            .iter()
            .map(|class| {
                let path = self.package_path(class.owner);
                classify::classify_class(&ClassFacts {
                    nature: class.nature,
                    name: &class.name,
                    stereotypes: &class.stereotypes,
                    is_interface: class.is_interface,
                    is_enumeration: class.is_enumeration,
                    chain_names: &class.chain_names,
                    package_path: &path,
                })
            })
            .collect();
        for (class, kind) in self.classes.iter_mut().zip(kinds) {
            class.kind = kind;
        }
    }

    fn classify_attributes(&mut self) {
        let kinds: Vec<_> = self
            .attributes
            .iter()
            .map(|attr| {
                let container = &self.classes[attr.owner.index()];
                classify::classify_attribute(&AttributeFacts {
                    nature: container.nature,
                    name: &attr.name,
                    container_name: &container.name,
                    container_kind: container.kind,
                    type_kind: attr.type_class.map(|t| self.classes[t.index()].kind),
                })
            })
            .collect();
        for (attr, kind) in self.attributes.iter_mut().zip(kinds) {
            attr.kind = kind;
        }
    }

    fn package_path(&self, package: PackageId) -> Vec<SmolStr> {
        let mut path = Vec::new();
        let mut current = Some(package);
        while let Some(id) = current {
            let pkg = &self.packages[id.index()];
            path.push(pkg.name.clone());
            current = pkg.owner;
        }
        path.reverse();
        path
    }

    // ============================================================
    // Validation helpers
    // ============================================================

    fn package_checked(&self, id: PackageId) -> Result<&Package, ModelError> {
        self.packages
            .get(id.index())
            .ok_or(ModelError::unknown("package", id.0))
    }

    fn class_checked(&self, id: ClassId) -> Result<&Class, ModelError> {
        self.classes
            .get(id.index())
            .ok_or(ModelError::unknown("class", id.0))
    }

    fn attribute_checked(&self, id: AttributeId) -> Result<&Attribute, ModelError> {
        self.attributes
            .get(id.index())
            .ok_or(ModelError::unknown("attribute", id.0))
    }

    /// Duplicate-UUID policy: re-inserting a known entity is a logged no-op
    /// resolved by the caller to the existing id; a UUID reused for a
    /// different entity kind is a contract violation.
    fn known_uuid(
        &self,
        uuid: Uuid,
        kind: &'static str,
    ) -> Result<Option<ModelEntity>, ModelError> {
        match self.by_uuid.get(&uuid) {
            Some(&existing) => {
                warn!("[MODEL] duplicate {} insertion for UUID {} - keeping existing", kind, uuid);
                Ok(Some(existing))
            }
            None => Ok(None),
        }
    }
}

// ============================================================================
// FROZEN GRAPH (read side)
// ============================================================================

/// The frozen-after-construction set of entities and their structural edges.
///
/// Arena storage is the single source of truth; ids index into it. There is
/// no mutation API: derived metadata (presence conditions, decompositions,
/// namespace descriptors) lives in the components consuming this graph, never
/// in the graph itself.
#[derive(Debug)]
pub struct ModelGraph {
    packages: Vec<Package>,
    classes: Vec<Class>,
    attributes: Vec<Attribute>,
    associations: Vec<Association>,
    by_uuid: FxHashMap<Uuid, ModelEntity>,
}

impl ModelGraph {
    /// Get a package by id. Ids of a different graph are a contract
    /// violation and fail fast.
    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.index()]
    }

    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    pub fn attribute(&self, id: AttributeId) -> &Attribute {
        &self.attributes[id.index()]
    }

    pub fn association(&self, id: AssociationId) -> &Association {
        &self.associations[id.index()]
    }

    pub fn packages(&self) -> impl Iterator<Item = (PackageId, &Package)> {
        self.packages.iter().enumerate().map(|(i, p)| (PackageId::new(i), p))
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &Class)> {
        self.classes.iter().enumerate().map(|(i, c)| (ClassId::new(i), c))
    }

    pub fn attributes(&self) -> impl Iterator<Item = (AttributeId, &Attribute)> {
        self.attributes.iter().enumerate().map(|(i, a)| (AttributeId::new(i), a))
    }

    pub fn associations(&self) -> impl Iterator<Item = (AssociationId, &Association)> {
        self.associations.iter().enumerate().map(|(i, a)| (AssociationId::new(i), a))
    }

    /// Find any entity by its tool-side UUID.
    pub fn find_by_uuid(&self, uuid: Uuid) -> Option<ModelEntity> {
        self.by_uuid.get(&uuid).copied()
    }

    /// Package names from the model root down to the given package.
    pub fn package_path(&self, package: PackageId) -> Vec<SmolStr> {
        let mut path = Vec::new();
        let mut current = Some(package);
        while let Some(id) = current {
            let pkg = &self.packages[id.index()];
            path.push(pkg.name.clone());
            current = pkg.owner;
        }
        path.reverse();
        path
    }

    /// Walk owners from `package` to the root, including `package` itself.
    pub fn ancestors(&self, package: PackageId) -> impl Iterator<Item = PackageId> + '_ {
        std::iter::successors(Some(package), |id| self.packages[id.index()].owner)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            packages: self.packages.len(),
            classes: self.classes.len(),
            attributes: self.attributes.len(),
            associations: self.associations.len(),
        }
    }
}

#[cfg(test)]
mod tests;
