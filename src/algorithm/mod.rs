//! Derivation algorithms over an indexed snapshot
//!
//! Everything here is a pure function of a [`FamilyIndex`](crate::models::FamilyIndex)
//! (plus request data for the planner). Data-integrity problems such as
//! dangling ids, duplicate edges or parent cycles are tolerated, never
//! reported as errors.

pub mod generations;
pub mod planner;
pub mod resolver;
pub mod siblings;
pub mod trees;

pub use generations::{GenerationEntry, assign_generations, find_root_people, generation_map};
pub use planner::{
    PayloadRequest, RelationshipType, Validation, build_relationship_payloads,
    determine_parent_role_from_gender, needs_parent_role_selection, validate_relationship_data,
};
pub use resolver::{FamilyBundle, ParentIds, resolve, resolve_all};
pub use siblings::{SiblingLink, compute_sibling_links};
pub use trees::{AncestorNode, DescendantNode, build_ancestor_tree, build_descendant_tree};
