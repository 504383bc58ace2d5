//! Reserved vocabulary of the two model dialects.
//!
//! Stereotype tokens, reserved package/class names, and the prefixes and
//! suffixes the classifier and resolvers key on. Everything here is fixed by
//! the modeling conventions of the source documents; nothing is configurable
//! at run time.

// ============================================================================
// STEREOTYPE TOKENS (lower-cased as they appear in the model)
// ============================================================================

pub const PRIMITIVE: &str = "primitive";
pub const DATATYPE: &str = "datatype";
/// Legacy alias for [`DATATYPE`], still present in older CIM models.
pub const OLD_DATATYPE: &str = "cimdatatype";
pub const ENUMERATION: &str = "enumeration";
pub const COMPOUND: &str = "compound";
pub const INTERFACE: &str = "interface";

pub const BASIC: &str = "basic";
pub const STRUCTURED: &str = "structured";
pub const PACKED: &str = "packed";
pub const ABBREVIATIONS: &str = "abbreviations";
pub const COND: &str = "cond";

pub const INFORMATIVE: &str = "informative";
pub const DEPRECATED: &str = "deprecated";
pub const ADMIN: &str = "admin";
pub const STATISTICS: &str = "statistics";

/// Tokens that say something about a class's documentation status, not its
/// structure. Their presence alone never triggers stereotype-driven
/// classification.
pub const NON_DOMAIN_TOKENS: &[&str] = &[INFORMATIVE, DEPRECATED, ADMIN, STATISTICS];

// ============================================================================
// RESERVED NAMES
// ============================================================================

/// Package subtree whose classes model functions rather than data.
pub const FUNCTIONS_PACKAGE: &str = "Functions";

/// Sub-model kept for backwards compatibility; unclassifiable classes under
/// it are logged at debug instead of error.
pub const LEGACY_SUBMODEL: &str = "Legacy";

/// Name prefix marking an informative (non-normative) package.
pub const INFORMATIVE_PREFIX: &str = "Inf";

/// Classes whose name ends with this carry namespace/version bookkeeping and
/// are exempt from classification diagnostics.
pub const VERSION_CLASS_SUFFIX: &str = "Version";

/// Own-name suffix required of transient CDCs.
pub const TRANSIENT_SUFFIX: &str = "Transient";

// ============================================================================
// IEC 61850 META-MODEL ROOTS (inheritance-driven classification)
// ============================================================================

pub const ROOT_PRIMITIVE_DA: &str = "BasePrimitiveDA";
pub const ROOT_COMPOSED_DA: &str = "BaseComposedDA";
pub const ROOT_ENUM_DA: &str = "BaseEnumDA";
pub const ROOT_PACKED_DA: &str = "BasePackedDA";

/// FCDA family roots are matched by prefix anywhere in the superclass chain.
pub const FCDA_SUBSTITUTION_PREFIX: &str = "FCDA_SE";
pub const FCDA_SERVICE_PREFIX: &str = "FCDA_SV";
pub const FCDA_PREFIX: &str = "FCDA";

pub const ROOT_SUBSTITUTION_CDC: &str = "SubstitutionCDC";
pub const ROOT_CONTROL_CDC: &str = "ControlCDC";
pub const ROOT_ANALOGUE_CDC: &str = "AnalogueCDC";
pub const ROOT_STATUS_CDC: &str = "StatusCDC";
pub const ROOT_DESCRIPTION_CDC: &str = "DescriptionCDC";
pub const ROOT_BASE_CDC: &str = "BaseCDC";
pub const TRACKING_CDC_ROOTS: &[&str] = &["CtlTrackingCDC", "SpcTrackingCDC", "ApcTrackingCDC"];
pub const ENUM_CDC_ROOTS: &[&str] = &["EnumCDC", "EnumHistCDC"];

pub const ROOT_DOMAIN_LN: &str = "DomainLN";

// ============================================================================
// PRESENCE-CONDITION TOKENS
// ============================================================================

/// Stem suffix marking a free-form, non-machine-processable condition
/// identifier argument.
pub const COND_ID_SUFFIX: &str = "condID";

/// Placeholder naming a sibling attribute inside a parenthesized presence
/// condition literal, e.g. `AtLeastOne(sibling)`.
pub const SIBLING_PLACEHOLDER: &str = "sibling";

/// Attribute-constraint names carrying numeric bounds.
pub const MIN_VALUE_CONSTRAINT: &str = "minValue";
pub const MAX_VALUE_CONSTRAINT: &str = "maxValue";
