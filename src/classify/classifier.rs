//! Kind classification entry points.
//!
//! Classification is a pure, total function of the structural facts fixed at
//! graph construction: nature, stereotype tokens, the flattened
//! superclass-name chain, the class's own name, and the containing package
//! path. It always returns a Kind; unclassifiable inputs resolve to a named
//! fallback plus a logged diagnostic, never an error.

use smol_str::SmolStr;
use tracing::{debug, error, warn};

use crate::base::Nature;
use crate::model::stereotype::Stereotypes;
use crate::model::tokens;

use super::kind::{AttributeKind, ClassKind};
use super::rules;

/// The structural facts classification runs on. Assembled by the graph
/// builder at freeze; assembling one by hand is how individual ladder rules
/// are unit-tested.
#[derive(Debug, Clone)]
pub struct ClassFacts<'a> {
    pub nature: Nature,
    /// The class's own display name
    pub name: &'a str,
    pub stereotypes: &'a Stereotypes,
    /// Tool-native interface flag
    pub is_interface: bool,
    /// Tool-native enumeration flag
    pub is_enumeration: bool,
    /// Own name first, then every flattened superclass name
    pub chain_names: &'a [SmolStr],
    /// Package names from the model root down to the owning package
    pub package_path: &'a [SmolStr],
}

impl ClassFacts<'_> {
    fn has_superclasses(&self) -> bool {
        self.chain_names.len() > 1
    }

    fn under_package(&self, name: &str) -> bool {
        self.package_path.iter().any(|p| p == name)
    }

    fn is_version_marker(&self) -> bool {
        self.name.ends_with(tokens::VERSION_CLASS_SUFFIX)
    }
}

/// Assign the one Kind of a class.
pub fn classify_class(facts: &ClassFacts) -> ClassKind {
    match facts.nature {
        Nature::Cim => classify_cim_class(facts),
        Nature::Iec61850 => classify_61850_class(facts),
    }
}

/// CIM ladder: stereotype checks in priority order, then the superclass test.
fn classify_cim_class(facts: &ClassFacts) -> ClassKind {
    let st = facts.stereotypes;
    if st.contains(tokens::PRIMITIVE) {
        ClassKind::Primitive
    } else if st.contains(tokens::DATATYPE) || st.contains(tokens::OLD_DATATYPE) {
        ClassKind::Datatype
    } else if st.contains(tokens::ENUMERATION) {
        ClassKind::Enumeration
    } else if st.contains(tokens::COMPOUND) {
        ClassKind::Compound
    } else if !facts.has_superclasses() {
        ClassKind::RootClass
    } else {
        ClassKind::Class
    }
}

/// IEC 61850: three disjoint strategies, first match wins.
fn classify_61850_class(facts: &ClassFacts) -> ClassKind {
    // strategy 1: explicit markers
    if facts.is_interface || facts.stereotypes.contains(tokens::INTERFACE) {
        return ClassKind::Interface;
    }
    if facts.under_package(tokens::FUNCTIONS_PACKAGE) {
        return ClassKind::Function;
    }

    // strategy 2: direct stereotype-driven
    if facts.stereotypes.has_domain_token() || facts.is_enumeration {
        return classify_61850_from_stereotypes(facts);
    }

    // strategy 3: inheritance-driven
    if let Some(kind) = rules::apply(facts.chain_names) {
        return kind;
    }

    if !facts.is_version_marker() {
        if facts.under_package(tokens::LEGACY_SUBMODEL) {
            debug!(
                "[CLASSIFY] unclassifiable legacy class '{}' (chain {:?})",
                facts.name, facts.chain_names
            );
        } else {
            error!(
                "[CLASSIFY] unclassifiable class '{}' (chain {:?})",
                facts.name, facts.chain_names
            );
        }
    }
    ClassKind::Other
}

fn classify_61850_from_stereotypes(facts: &ClassFacts) -> ClassKind {
    let st = facts.stereotypes;
    let enumerated = st.contains(tokens::ENUMERATION) || facts.is_enumeration;
    if enumerated {
        if st.contains(tokens::PACKED) {
            ClassKind::PackedEnum
        } else if st.contains(tokens::ABBREVIATIONS) {
            ClassKind::AbbrEnum
        } else if st.contains(tokens::COND) {
            ClassKind::CondEnum
        } else {
            ClassKind::Enum
        }
    } else if st.contains(tokens::PACKED) {
        ClassKind::PackedBasic
    } else if st.contains(tokens::STRUCTURED) {
        ClassKind::Structured
    } else if st.contains(tokens::BASIC) {
        ClassKind::Basic
    } else {
        warn!(
            "[CLASSIFY] class '{}' has domain stereotypes {:?} matching no known kind",
            facts.name,
            st.iter().collect::<Vec<_>>()
        );
        ClassKind::Unknown61850
    }
}

/// The structural facts attribute classification runs on.
#[derive(Debug, Clone)]
pub struct AttributeFacts<'a> {
    pub nature: Nature,
    pub name: &'a str,
    pub container_name: &'a str,
    /// Kind of the containing class
    pub container_kind: ClassKind,
    /// Kind of the typing class; `None` for literals
    pub type_kind: Option<ClassKind>,
}

/// Derive the one Kind of an attribute from the fixed lookup table.
pub fn classify_attribute(facts: &AttributeFacts) -> AttributeKind {
    match facts.type_kind {
        None => classify_literal(facts),
        Some(type_kind) => match facts.nature {
            Nature::Cim => classify_cim_attribute(facts, type_kind),
            Nature::Iec61850 => classify_61850_attribute(facts, type_kind),
        },
    }
}

/// Literals take their Kind from the containing enumeration's own Kind.
fn classify_literal(facts: &AttributeFacts) -> AttributeKind {
    match facts.container_kind {
        ClassKind::Enumeration | ClassKind::Enum | ClassKind::EnumDa => AttributeKind::Literal,
        ClassKind::AbbrEnum => AttributeKind::AbbrLiteral,
        ClassKind::CondEnum => AttributeKind::CondLiteral,
        ClassKind::PackedEnum => AttributeKind::PackedLiteral,
        other => {
            warn!(
                "[CLASSIFY] literal '{}' in non-enumerated class '{}' ({})",
                facts.name,
                facts.container_name,
                other.label()
            );
            AttributeKind::Other
        }
    }
}

fn classify_cim_attribute(facts: &AttributeFacts, type_kind: ClassKind) -> AttributeKind {
    match type_kind {
        ClassKind::Primitive => AttributeKind::Primitive,
        ClassKind::Datatype => AttributeKind::Datatype,
        ClassKind::Enumeration => AttributeKind::Enumerated,
        ClassKind::Compound => AttributeKind::Compound,
        ClassKind::RootClass | ClassKind::Class => AttributeKind::Reference,
        foreign => {
            warn!(
                "[CLASSIFY] CIM attribute '{}.{}' typed by {} class kind {}",
                facts.container_name,
                facts.name,
                foreign.nature(),
                foreign.label()
            );
            AttributeKind::Other
        }
    }
}

fn classify_61850_attribute(facts: &AttributeFacts, type_kind: ClassKind) -> AttributeKind {
    if type_kind.is_cdc_family() {
        // data objects live on logical nodes; anywhere else the attribute is
        // a sub-data object
        return if facts.container_kind == ClassKind::Ln {
            AttributeKind::DataObject
        } else {
            AttributeKind::SubDataObject
        };
    }
    if type_kind.is_da_family() || type_kind.is_fcda_family() {
        return AttributeKind::DataAttribute;
    }
    match type_kind {
        ClassKind::Basic | ClassKind::PackedBasic | ClassKind::Structured => {
            AttributeKind::BasicAttribute
        }
        ClassKind::Enum | ClassKind::PackedEnum | ClassKind::AbbrEnum | ClassKind::CondEnum => {
            AttributeKind::EnumAttribute
        }
        foreign if foreign.nature() == Nature::Cim => {
            warn!(
                "[CLASSIFY] IEC 61850 attribute '{}.{}' typed by CIM class kind {}",
                facts.container_name,
                facts.name,
                foreign.label()
            );
            AttributeKind::Other
        }
        _ => AttributeKind::Other,
    }
}

#[cfg(test)]
mod tests;
