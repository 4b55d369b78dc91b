//! Domain models for the family graph
//!
//! People, relationship edges, snapshots of both, and the indexes derived
//! from a snapshot.

pub mod collections;
pub mod person;
pub mod relationship;
pub mod snapshot;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use collections::{FamilyIndex, build_edge_index, build_people_index};
pub use person::{NewPerson, Person, PersonId};
pub use relationship::{
    RelationKind, Relationship, RelationshipId, RelationshipPayload, implied_parent_role,
    is_parent_child_edge,
};
pub use snapshot::Snapshot;
pub use traits::EntityModel;
pub use types::{Gender, ParentRole};
