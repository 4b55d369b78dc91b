//! A family-relationship derivation engine for genealogy records.
//!
//! Takes flat lists of people and typed relationship rows and derives, per
//! person, mother, father, children, siblings and spouses, plus ancestor and
//! descendant trees, root people, generation numbers and population-wide
//! sibling links. Also plans the directional rows needed to add a
//! relationship and applies writes optimistically through a record API.

pub mod actions;
pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::GraphConfig;
pub use error::{FamilyError, Result};
pub use models::{
    FamilyIndex, Gender, NewPerson, ParentRole, Person, PersonId, RelationKind, Relationship,
    RelationshipId, RelationshipPayload, Snapshot, implied_parent_role, is_parent_child_edge,
};

// Derivations
pub use algorithm::{
    AncestorNode, DescendantNode, FamilyBundle, GenerationEntry, SiblingLink, assign_generations,
    build_ancestor_tree, build_descendant_tree, compute_sibling_links, find_root_people,
    generation_map, resolve, resolve_all,
};

// Edit planning
pub use algorithm::{
    PayloadRequest, RelationshipType, Validation, build_relationship_payloads,
    determine_parent_role_from_gender, needs_parent_role_selection, validate_relationship_data,
};

// Store and actions
pub use actions::{ActionOutcome, FamilyActions, RecordApi};
pub use store::FamilyStore;
