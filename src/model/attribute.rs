//! Attributes and enumeration literals.

use smol_str::SmolStr;
use uuid::Uuid;

use crate::base::{ClassId, Multiplicity};
use crate::classify::AttributeKind;

use super::constraint::ValueBounds;
use super::stereotype::Stereotypes;
use super::tokens;

/// An attribute of a class, or an enumeration literal (an attribute without
/// a type).
#[derive(Debug, Clone)]
pub struct Attribute {
    pub(super) uuid: Uuid,
    pub(super) name: SmolStr,
    pub(super) owner: ClassId,
    /// `None` for enumeration literals
    pub(super) type_class: Option<ClassId>,
    pub(super) multiplicity: Multiplicity,
    pub(super) initial_value: Option<SmolStr>,
    pub(super) stereotypes: Stereotypes,
    pub(super) bounds: Option<ValueBounds>,
    /// Assigned once when the builder freezes the graph; derived from the
    /// type's kind, or from the containing class's kind for literals
    pub(super) kind: AttributeKind,
}

impl Attribute {
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> ClassId {
        self.owner
    }

    /// The class typing this attribute; `None` for literals.
    pub fn type_class(&self) -> Option<ClassId> {
        self.type_class
    }

    /// True for enumeration literals (no type reference).
    pub fn is_literal(&self) -> bool {
        self.type_class.is_none()
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value.as_deref()
    }

    pub fn stereotypes(&self) -> &Stereotypes {
        &self.stereotypes
    }

    pub fn is_informative(&self) -> bool {
        self.stereotypes.contains(tokens::INFORMATIVE)
    }

    pub fn is_deprecated(&self) -> bool {
        self.stereotypes.contains(tokens::DEPRECATED)
    }

    /// Numeric bounds collected from `minValue`/`maxValue` constraints.
    pub fn bounds(&self) -> Option<&ValueBounds> {
        self.bounds.as_ref()
    }

    /// The structural classification tag assigned at freeze.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }
}
