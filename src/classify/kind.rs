//! The closed Kind spaces for classes and attributes.
//!
//! Each nature has its own disjoint set of variants; both sets live in one
//! Rust enum per entity kind, with the owning nature recorded in the variant
//! metadata. Classification produces a variant value; nothing downstream ever
//! mutates it.

use crate::base::Nature;

/// Static per-variant record: display label for writers, short machine tag
/// for validators, and a one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMeta {
    pub label: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
}

/// Structural classification of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    // ---- CIM ----
    /// CIM primitive type (stereotype `primitive`)
    Primitive,
    /// CIM datatype (stereotype `datatype`, legacy `cimdatatype`)
    Datatype,
    /// CIM enumeration
    Enumeration,
    /// CIM compound value type
    Compound,
    /// CIM class without superclasses
    RootClass,
    /// Any other CIM class
    Class,

    // ---- IEC 61850, explicit markers and stereotypes ----
    /// Interface class (tool flag or `interface` stereotype)
    Interface,
    /// Class under the reserved `Functions` package subtree
    Function,
    /// Basic type (stereotype `basic`)
    Basic,
    /// Structured type (stereotype `structured`)
    Structured,
    /// Packed basic type (stereotype `packed` without `enumeration`)
    PackedBasic,
    /// Enumerated type
    Enum,
    /// Packed-list enumerated type
    PackedEnum,
    /// Enumeration of abbreviated terms
    AbbrEnum,
    /// Enumeration defining presence conditions
    CondEnum,
    /// Stereotyped class matching no known stereotype combination
    Unknown61850,

    // ---- IEC 61850, inheritance-driven ----
    /// Primitive data attribute type (root `BasePrimitiveDA`)
    PrimitiveDa,
    /// Composed data attribute type (root `BaseComposedDA`)
    ComposedDa,
    /// Enumerated data attribute type (root `BaseEnumDA`)
    EnumDa,
    /// Packed-list data attribute type (root `BasePackedDA`)
    PackedDa,
    /// Substitution FCDA (chain prefix `FCDA_SE`)
    SubstitutedFcda,
    /// Service FCDA (chain prefix `FCDA_SV`)
    ServiceFcda,
    /// Any other functionally constrained data attribute (chain prefix `FCDA`)
    Fcda,
    /// Transient CDC (`Transient` name suffix + substitution root)
    TransientCdc,
    /// Service-tracking CDC (one of the tracking roots)
    TrackingCdc,
    /// Enumerated-status CDC (one of the enum CDC roots)
    EnumCdc,
    /// Substitution-capable CDC (root `SubstitutionCDC`)
    SubstitutionCdc,
    /// Control CDC (root `ControlCDC`)
    ControlCdc,
    /// Analogue-information CDC (root `AnalogueCDC`)
    AnalogueCdc,
    /// Status-information CDC (root `StatusCDC`)
    StatusCdc,
    /// Description-information CDC (root `DescriptionCDC`)
    DescriptionCdc,
    /// Any other common data class (root `BaseCDC`)
    Cdc,
    /// Logical node (root `DomainLN`)
    Ln,

    /// Fallback for IEC 61850 classes matching nothing above
    Other,
}

impl ClassKind {
    /// The nature whose Kind space this variant belongs to.
    pub fn nature(self) -> Nature {
        use ClassKind::*;
        match self {
            Primitive | Datatype | Enumeration | Compound | RootClass | Class => Nature::Cim,
            _ => Nature::Iec61850,
        }
    }

    /// True for all common-data-class kinds.
    pub fn is_cdc_family(self) -> bool {
        use ClassKind::*;
        matches!(
            self,
            TransientCdc
                | TrackingCdc
                | EnumCdc
                | SubstitutionCdc
                | ControlCdc
                | AnalogueCdc
                | StatusCdc
                | DescriptionCdc
                | Cdc
        )
    }

    /// True for all data-attribute-type kinds.
    pub fn is_da_family(self) -> bool {
        use ClassKind::*;
        matches!(self, PrimitiveDa | ComposedDa | EnumDa | PackedDa)
    }

    /// True for all FCDA kinds.
    pub fn is_fcda_family(self) -> bool {
        use ClassKind::*;
        matches!(self, SubstitutedFcda | ServiceFcda | Fcda)
    }

    /// True for classes whose attributes are enumeration literals.
    pub fn is_enumerated(self) -> bool {
        use ClassKind::*;
        matches!(self, Enumeration | Enum | PackedEnum | AbbrEnum | CondEnum)
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn tag(self) -> &'static str {
        self.meta().tag
    }

    pub fn meta(self) -> &'static KindMeta {
        use ClassKind::*;
        match self {
            Primitive => &KindMeta { label: "Primitive", tag: "PRIM", description: "CIM primitive type" },
            Datatype => &KindMeta { label: "Datatype", tag: "DT", description: "CIM datatype" },
            Enumeration => &KindMeta { label: "Enumeration", tag: "ENUM", description: "CIM enumeration" },
            Compound => &KindMeta { label: "Compound", tag: "COMP", description: "CIM compound value type" },
            RootClass => &KindMeta { label: "RootClass", tag: "ROOT", description: "CIM class without superclasses" },
            Class => &KindMeta { label: "Class", tag: "CLASS", description: "CIM class" },

            Interface => &KindMeta { label: "Interface", tag: "IF", description: "interface class" },
            Function => &KindMeta { label: "Function", tag: "FUNC", description: "function modeled as a class" },
            Basic => &KindMeta { label: "Basic", tag: "BASIC", description: "basic type" },
            Structured => &KindMeta { label: "Structured", tag: "STRUCT", description: "structured type" },
            PackedBasic => &KindMeta { label: "PackedBasic", tag: "PACKED", description: "packed-list basic type" },
            Enum => &KindMeta { label: "Enum", tag: "ENUM61850", description: "enumerated type" },
            PackedEnum => &KindMeta { label: "PackedEnum", tag: "PACKED_ENUM", description: "packed-list enumerated type" },
            AbbrEnum => &KindMeta { label: "AbbrEnum", tag: "ABBR_ENUM", description: "enumeration of abbreviated terms" },
            CondEnum => &KindMeta { label: "CondEnum", tag: "COND_ENUM", description: "enumeration of presence conditions" },
            Unknown61850 => &KindMeta { label: "Unknown", tag: "UNKNOWN", description: "stereotyped class of unknown kind" },

            PrimitiveDa => &KindMeta { label: "PrimitiveDA", tag: "DA_PRIM", description: "primitive data attribute type" },
            ComposedDa => &KindMeta { label: "ComposedDA", tag: "DA_COMP", description: "composed data attribute type" },
            EnumDa => &KindMeta { label: "EnumDA", tag: "DA_ENUM", description: "enumerated data attribute type" },
            PackedDa => &KindMeta { label: "PackedDA", tag: "DA_PACKED", description: "packed-list data attribute type" },
            SubstitutedFcda => &KindMeta { label: "SubstitutionFCDA", tag: "FCDA_SE", description: "substitution FCDA" },
            ServiceFcda => &KindMeta { label: "ServiceFCDA", tag: "FCDA_SV", description: "service FCDA" },
            Fcda => &KindMeta { label: "FCDA", tag: "FCDA", description: "functionally constrained data attribute" },
            TransientCdc => &KindMeta { label: "TransientCDC", tag: "CDC_TRANS", description: "transient common data class" },
            TrackingCdc => &KindMeta { label: "TrackingCDC", tag: "CDC_TRACK", description: "service-tracking common data class" },
            EnumCdc => &KindMeta { label: "EnumCDC", tag: "CDC_ENUM", description: "enumerated-status common data class" },
            SubstitutionCdc => &KindMeta { label: "SubstitutionCDC", tag: "CDC_SUBST", description: "substitution-capable common data class" },
            ControlCdc => &KindMeta { label: "ControlCDC", tag: "CDC_CTL", description: "control common data class" },
            AnalogueCdc => &KindMeta { label: "AnalogueCDC", tag: "CDC_ANALOGUE", description: "analogue-information common data class" },
            StatusCdc => &KindMeta { label: "StatusCDC", tag: "CDC_STATUS", description: "status-information common data class" },
            DescriptionCdc => &KindMeta { label: "DescriptionCDC", tag: "CDC_DESC", description: "description-information common data class" },
            Cdc => &KindMeta { label: "CDC", tag: "CDC", description: "common data class" },
            Ln => &KindMeta { label: "LogicalNode", tag: "LN", description: "logical node" },

            Other => &KindMeta { label: "Other", tag: "OTHER", description: "unclassifiable class" },
        }
    }
}

/// Structural classification of an attribute, derived from its type's
/// [`ClassKind`] (or the containing class's kind, for literals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    // ---- CIM ----
    /// Typed by a CIM primitive
    Primitive,
    /// Typed by a CIM datatype
    Datatype,
    /// Typed by a CIM enumeration
    Enumerated,
    /// Typed by a CIM compound
    Compound,
    /// Typed by a plain CIM class
    Reference,

    // ---- IEC 61850 ----
    /// CDC-typed attribute of a logical node
    DataObject,
    /// CDC-typed attribute of another CDC
    SubDataObject,
    /// Attribute typed by a DA or FCDA type
    DataAttribute,
    /// Attribute typed by a basic, packed or structured type
    BasicAttribute,
    /// Attribute typed by an enumerated type
    EnumAttribute,

    // ---- literals (both natures) ----
    /// Member of a plain enumeration
    Literal,
    /// Member of an abbreviated-terms enumeration
    AbbrLiteral,
    /// Member of a presence-condition enumeration
    CondLiteral,
    /// Member of a packed-list enumeration
    PackedLiteral,

    /// Fallback for attributes derivable from no table entry
    Other,
}

impl AttributeKind {
    /// True for enumeration members of any flavor.
    pub fn is_literal(self) -> bool {
        use AttributeKind::*;
        matches!(self, Literal | AbbrLiteral | CondLiteral | PackedLiteral)
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn tag(self) -> &'static str {
        self.meta().tag
    }

    pub fn meta(self) -> &'static KindMeta {
        use AttributeKind::*;
        match self {
            Primitive => &KindMeta { label: "Primitive", tag: "A_PRIM", description: "attribute typed by a CIM primitive" },
            Datatype => &KindMeta { label: "Datatype", tag: "A_DT", description: "attribute typed by a CIM datatype" },
            Enumerated => &KindMeta { label: "Enumerated", tag: "A_ENUM", description: "attribute typed by a CIM enumeration" },
            Compound => &KindMeta { label: "Compound", tag: "A_COMP", description: "attribute typed by a CIM compound" },
            Reference => &KindMeta { label: "Reference", tag: "A_REF", description: "attribute typed by a plain CIM class" },

            DataObject => &KindMeta { label: "DataObject", tag: "DO", description: "CDC-typed attribute of a logical node" },
            SubDataObject => &KindMeta { label: "SubDataObject", tag: "SDO", description: "CDC-typed attribute of another CDC" },
            DataAttribute => &KindMeta { label: "DataAttribute", tag: "DA", description: "attribute typed by a DA or FCDA type" },
            BasicAttribute => &KindMeta { label: "BasicAttribute", tag: "A_BASIC", description: "attribute typed by a basic or structured type" },
            EnumAttribute => &KindMeta { label: "EnumAttribute", tag: "A_ENUM61850", description: "attribute typed by an enumerated type" },

            Literal => &KindMeta { label: "Literal", tag: "LIT", description: "enumeration member" },
            AbbrLiteral => &KindMeta { label: "AbbrLiteral", tag: "LIT_ABBR", description: "abbreviated-term enumeration member" },
            CondLiteral => &KindMeta { label: "CondLiteral", tag: "LIT_COND", description: "presence-condition enumeration member" },
            PackedLiteral => &KindMeta { label: "PackedLiteral", tag: "LIT_PACKED", description: "packed-list enumeration member" },

            Other => &KindMeta { label: "Other", tag: "A_OTHER", description: "unclassifiable attribute" },
        }
    }
}
