//! Associations between classes.

use smol_str::SmolStr;
use uuid::Uuid;

use crate::base::{ClassId, Multiplicity};

/// Aggregation marker on one association end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Aggregation {
    #[default]
    None,
    Shared,
    Composite,
}

/// Composite kind of an association, derived from its two ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    Association,
    Aggregation,
    Composition,
}

/// One end of an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationEnd {
    pub class: ClassId,
    pub role: SmolStr,
    pub multiplicity: Multiplicity,
    pub aggregation: Aggregation,
}

impl AssociationEnd {
    pub fn new(
        class: ClassId,
        role: impl AsRef<str>,
        multiplicity: Multiplicity,
        aggregation: Aggregation,
    ) -> Self {
        Self {
            class,
            role: SmolStr::new(role.as_ref()),
            multiplicity,
            aggregation,
        }
    }
}

/// An association of the frozen object graph: exactly two ends.
#[derive(Debug, Clone)]
pub struct Association {
    pub(super) uuid: Uuid,
    pub(super) ends: [AssociationEnd; 2],
}

impl Association {
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn source(&self) -> &AssociationEnd {
        &self.ends[0]
    }

    pub fn target(&self) -> &AssociationEnd {
        &self.ends[1]
    }

    pub fn ends(&self) -> &[AssociationEnd; 2] {
        &self.ends
    }

    /// The end opposite to the one typed by `class`, when exactly one end
    /// matches.
    pub fn other_end(&self, class: ClassId) -> Option<&AssociationEnd> {
        match (self.ends[0].class == class, self.ends[1].class == class) {
            (true, false) => Some(&self.ends[1]),
            (false, true) => Some(&self.ends[0]),
            _ => None,
        }
    }

    /// Composite kind: composition beats aggregation beats plain association.
    pub fn kind(&self) -> AssociationKind {
        let aggs = [self.ends[0].aggregation, self.ends[1].aggregation];
        if aggs.contains(&Aggregation::Composite) {
            AssociationKind::Composition
        } else if aggs.contains(&Aggregation::Shared) {
            AssociationKind::Aggregation
        } else {
            AssociationKind::Association
        }
    }
}
