//! # Kind classification
//!
//! Assigns exactly one Kind to every class and attribute of the frozen
//! graph. Classification is nature-scoped: each dialect owns a disjoint set
//! of Kind variants, and an entity is classified by its own dialect's rules
//! only. Runs once, when the graph builder freezes the model.

pub mod classifier;
pub mod kind;
pub mod rules;

pub use classifier::{AttributeFacts, ClassFacts, classify_attribute, classify_class};
pub use kind::{AttributeKind, ClassKind, KindMeta};
pub use rules::{INHERITANCE_RULES, InheritanceRule, RootPredicate};
