//! # Namespace resolution
//!
//! Derives, per package, a namespace identity descriptor and its transitive
//! dependency set from explicit package dependency edges. Lazy and memoized;
//! dependency edges are guarded against self-loops and direct 2-cycles.

pub mod graph;
pub mod info;

pub use crate::base::NamespaceId;
pub use graph::NamespaceGraph;
pub use info::NamespaceInfo;
