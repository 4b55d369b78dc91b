//! Trait definitions for domain models

use std::hash::Hash;

/// A trait that all stored records implement.
///
/// `EntityModel` gives uniform access to a record's identity so the id
/// indexes can treat people and relationships alike.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;
}
