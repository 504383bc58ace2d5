//! Model dialect ("nature") of an entity.

use std::fmt;

/// The domain dialect a modeled entity belongs to.
///
/// The nature fixes the entity's stereotype vocabulary and its Kind space:
/// a CIM class can never receive an IEC 61850 kind and vice versa. Packages
/// carry the nature; classes and attributes inherit it from their owning
/// package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nature {
    /// The CIM dialect (primitive/datatype/enumeration/compound stereotypes)
    Cim,
    /// The IEC 61850 dialect (CDC/FCDA/DA/LN meta-model)
    Iec61850,
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nature::Cim => write!(f, "CIM"),
            Nature::Iec61850 => write!(f, "IEC61850"),
        }
    }
}
