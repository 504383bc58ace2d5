//! Arena identifiers for graph entities.
//!
//! Every entity lives in an arena `Vec` owned by its graph; ids are compact
//! `u32` indices into that arena. Ids are only meaningful for the graph that
//! created them.

macro_rules! arena_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an id from an arena index
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            /// Get the index into the arena
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Identifier of a package in the object graph
    PackageId
);
arena_id!(
    /// Identifier of a class in the object graph
    ClassId
);
arena_id!(
    /// Identifier of an attribute in the object graph
    AttributeId
);
arena_id!(
    /// Identifier of an association in the object graph
    AssociationId
);
arena_id!(
    /// Identifier of a namespace descriptor in a [`crate::namespace::NamespaceGraph`]
    NamespaceId
);
