//! The ordered inheritance rule table for IEC 61850 classes.
//!
//! Applied only when neither explicit markers nor stereotypes classified a
//! class. Rules are evaluated top to bottom over the class's display-name
//! chain (own name first, then every flattened superclass name); the first
//! matching rule wins, so the ordering below is part of the contract: name
//! prefixes are tested most-specific-first, and specialized CDC rules run
//! before the generic `BaseCDC` rule.

use smol_str::SmolStr;

use crate::model::tokens;

use super::kind::ClassKind;

/// A structural test over the display-name chain of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootPredicate {
    /// The class is, or inherits from, a class with this exact name.
    IsOrInherits(&'static str),
    /// The class is, or inherits from, a class with one of these names.
    IsOrInheritsAny(&'static [&'static str]),
    /// The class's own name ends with `suffix` AND the chain contains `root`.
    OwnSuffixAndRoot {
        suffix: &'static str,
        root: &'static str,
    },
    /// This prefix prefixes ANY name in the chain, not only the class's own.
    ChainPrefix(&'static str),
}

impl RootPredicate {
    /// Evaluate against a chain of display names, own name first.
    pub fn matches(&self, chain: &[SmolStr]) -> bool {
        match *self {
            RootPredicate::IsOrInherits(root) => chain.iter().any(|n| n == root),
            RootPredicate::IsOrInheritsAny(roots) => {
                chain.iter().any(|n| roots.contains(&n.as_str()))
            }
            RootPredicate::OwnSuffixAndRoot { suffix, root } => {
                chain.first().is_some_and(|own| own.ends_with(suffix))
                    && chain.iter().any(|n| n == root)
            }
            RootPredicate::ChainPrefix(prefix) => chain.iter().any(|n| n.starts_with(prefix)),
        }
    }
}

/// One `(predicate, outcome)` entry of the classification ladder.
#[derive(Debug, Clone, Copy)]
pub struct InheritanceRule {
    pub predicate: RootPredicate,
    pub kind: ClassKind,
}

const fn rule(predicate: RootPredicate, kind: ClassKind) -> InheritanceRule {
    InheritanceRule { predicate, kind }
}

/// The fixed classification ladder: DA roots, then FCDA prefixes, then CDC
/// roots, then the logical-node root.
pub const INHERITANCE_RULES: &[InheritanceRule] = &[
    // data attribute type roots
    rule(RootPredicate::IsOrInherits(tokens::ROOT_PRIMITIVE_DA), ClassKind::PrimitiveDa),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_COMPOSED_DA), ClassKind::ComposedDa),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_ENUM_DA), ClassKind::EnumDa),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_PACKED_DA), ClassKind::PackedDa),
    // FCDA family, matched by prefix anywhere in the chain
    rule(RootPredicate::ChainPrefix(tokens::FCDA_SUBSTITUTION_PREFIX), ClassKind::SubstitutedFcda),
    rule(RootPredicate::ChainPrefix(tokens::FCDA_SERVICE_PREFIX), ClassKind::ServiceFcda),
    rule(RootPredicate::ChainPrefix(tokens::FCDA_PREFIX), ClassKind::Fcda),
    // CDC family, specialized rules before the generic root
    rule(
        RootPredicate::OwnSuffixAndRoot {
            suffix: tokens::TRANSIENT_SUFFIX,
            root: tokens::ROOT_SUBSTITUTION_CDC,
        },
        ClassKind::TransientCdc,
    ),
    rule(RootPredicate::IsOrInheritsAny(tokens::TRACKING_CDC_ROOTS), ClassKind::TrackingCdc),
    rule(RootPredicate::IsOrInheritsAny(tokens::ENUM_CDC_ROOTS), ClassKind::EnumCdc),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_SUBSTITUTION_CDC), ClassKind::SubstitutionCdc),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_CONTROL_CDC), ClassKind::ControlCdc),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_ANALOGUE_CDC), ClassKind::AnalogueCdc),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_STATUS_CDC), ClassKind::StatusCdc),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_DESCRIPTION_CDC), ClassKind::DescriptionCdc),
    rule(RootPredicate::IsOrInherits(tokens::ROOT_BASE_CDC), ClassKind::Cdc),
    // the logical-node root
    rule(RootPredicate::IsOrInherits(tokens::ROOT_DOMAIN_LN), ClassKind::Ln),
];

/// Run the ladder; `None` when no rule matches.
pub fn apply(chain: &[SmolStr]) -> Option<ClassKind> {
    INHERITANCE_RULES
        .iter()
        .find(|r| r.predicate.matches(chain))
        .map(|r| r.kind)
}
