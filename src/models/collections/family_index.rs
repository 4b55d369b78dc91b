//! Person and edge indexes over a snapshot
//!
//! `FamilyIndex` pairs a snapshot with a person-by-id index and a
//! person-to-incident-edges index, giving O(1) amortized access to a person
//! and to every edge touching them.

use crate::models::person::{Person, PersonId};
use crate::models::relationship::Relationship;
use crate::models::snapshot::Snapshot;
use crate::models::traits::EntityModel;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::Arc;

/// Person id to position in the snapshot's people list
pub type PeopleIndex = FxHashMap<PersonId, usize>;

/// Person id to positions of every edge touching that person
pub type EdgeIndex = FxHashMap<PersonId, SmallVec<[usize; 4]>>;

/// Index records by their id. A repeated id resolves to its last occurrence.
#[must_use]
pub fn build_index<T: EntityModel>(items: &[T]) -> FxHashMap<T::Id, usize> {
    let mut index = FxHashMap::default();
    index.reserve(items.len());
    for (position, item) in items.iter().enumerate() {
        index.insert(item.id().clone(), position);
    }
    index
}

/// Build the person-by-id index. O(n).
#[must_use]
pub fn build_people_index(people: &[Person]) -> PeopleIndex {
    build_index(people)
}

/// Build the incident-edge index. Every edge is listed under both endpoints
/// (once for a self-loop). O(m).
#[must_use]
pub fn build_edge_index(edges: &[Relationship]) -> EdgeIndex {
    let mut index: EdgeIndex = FxHashMap::default();
    for (position, edge) in edges.iter().enumerate() {
        index.entry(edge.person1_id).or_default().push(position);
        if edge.person2_id != edge.person1_id {
            index.entry(edge.person2_id).or_default().push(position);
        }
    }
    index
}

/// A snapshot together with its derived lookup indexes
#[derive(Debug, Clone)]
pub struct FamilyIndex {
    snapshot: Arc<Snapshot>,
    people_by_id: PeopleIndex,
    edges_by_person: EdgeIndex,
}

impl FamilyIndex {
    /// Build both indexes for a snapshot
    #[must_use]
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        let people_by_id = build_people_index(&snapshot.people);
        let edges_by_person = build_edge_index(&snapshot.relationships);

        let index = Self {
            snapshot,
            people_by_id,
            edges_by_person,
        };

        let dangling = index.dangling_edge_count();
        if dangling > 0 {
            warn!("{dangling} relationship(s) reference people missing from the snapshot");
        }
        debug!(
            "Indexed {} people and {} relationships",
            index.people_by_id.len(),
            index.snapshot.relationships.len()
        );

        index
    }

    /// Build indexes directly from record lists
    #[must_use]
    pub fn from_records(people: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self::new(Arc::new(Snapshot::new(people, relationships)))
    }

    /// The indexed snapshot
    #[must_use]
    pub fn snapshot(&self) -> &Arc<Snapshot> {
        &self.snapshot
    }

    /// All people, in snapshot order
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.snapshot.people
    }

    /// All relationship rows, in snapshot order
    #[must_use]
    pub fn relationships(&self) -> &[Relationship] {
        &self.snapshot.relationships
    }

    /// The person-by-id index
    #[must_use]
    pub const fn people_by_id(&self) -> &PeopleIndex {
        &self.people_by_id
    }

    /// The incident-edge index
    #[must_use]
    pub const fn edges_by_person(&self) -> &EdgeIndex {
        &self.edges_by_person
    }

    /// Look up a person by id
    #[must_use]
    pub fn person(&self, person_id: PersonId) -> Option<&Person> {
        self.people_by_id
            .get(&person_id)
            .and_then(|&position| self.snapshot.people.get(position))
    }

    /// Whether a person with this id exists
    #[must_use]
    pub fn contains(&self, person_id: PersonId) -> bool {
        self.people_by_id.contains_key(&person_id)
    }

    /// Every edge touching a person, in snapshot order; empty for unknown ids
    pub fn edges(&self, person_id: PersonId) -> impl Iterator<Item = &Relationship> + '_ {
        self.edges_by_person
            .get(&person_id)
            .into_iter()
            .flatten()
            .filter_map(|&position| self.snapshot.relationships.get(position))
    }

    /// Spouse rows in either direction between two people
    #[must_use]
    pub fn spouse_edges_between(&self, a: PersonId, b: PersonId) -> Vec<&Relationship> {
        self.edges(a)
            .filter(|edge| edge.kind.is_spouse() && edge.other_endpoint(a) == Some(b))
            .collect()
    }

    /// Whether a parent-child edge links the two people in either direction
    #[must_use]
    pub fn has_parent_child_edge_between(&self, a: PersonId, b: PersonId) -> bool {
        self.edges(a).any(|edge| edge.links_parent_and_child(a, b))
    }

    /// Number of edges with at least one endpoint missing from the people list
    #[must_use]
    pub fn dangling_edge_count(&self) -> usize {
        self.snapshot
            .relationships
            .iter()
            .filter(|edge| !self.contains(edge.person1_id) || !self.contains(edge.person2_id))
            .count()
    }
}
