//! Relationship resolution for a single person
//!
//! Given a person id and a [`FamilyIndex`], derive mother, father, siblings,
//! children and spouses without recursion. Each query touches only the edges
//! of the person and of their (at most two) parents.

use crate::models::collections::FamilyIndex;
use crate::models::person::{Person, PersonId};
use crate::models::relationship::{implied_parent_role, is_parent_child_edge};
use crate::models::types::ParentRole;
use itertools::Itertools;
use log::warn;
use rayon::prelude::*;
use serde::Serialize;
use smallvec::SmallVec;

/// Parent ids of a person as recorded by their incoming parent-child edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParentIds {
    /// Id on the first mother edge
    pub mother: Option<PersonId>,
    /// Id on the first father edge
    pub father: Option<PersonId>,
}

impl ParentIds {
    /// Both ids, mother first, skipping unknown ones
    #[must_use]
    pub fn ids(&self) -> SmallVec<[PersonId; 2]> {
        self.mother.into_iter().chain(self.father).collect()
    }

    /// Whether the two parent sets share at least one id
    #[must_use]
    pub fn shares_parent_with(&self, other: &Self) -> bool {
        let theirs = other.ids();
        self.ids().iter().any(|id| theirs.contains(id))
    }

    /// Whether no parent is recorded
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }
}

/// Everything the resolver derives for one person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FamilyBundle<'a> {
    /// Resolved mother
    pub mother: Option<&'a Person>,
    /// Resolved father
    pub father: Option<&'a Person>,
    /// People sharing a parent with this person
    pub siblings: Vec<&'a Person>,
    /// People this person is recorded as a parent of
    pub children: Vec<&'a Person>,
    /// People linked by a spouse row
    pub spouses: Vec<&'a Person>,
}

impl FamilyBundle<'_> {
    /// Whether nothing at all was resolved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mother.is_none()
            && self.father.is_none()
            && self.siblings.is_empty()
            && self.children.is_empty()
            && self.spouses.is_empty()
    }
}

/// Resolved parent ids of a person. Edges whose parent is missing from the
/// snapshot are skipped; among the rest the first edge per role wins.
#[must_use]
pub fn parent_ids(index: &FamilyIndex, person_id: PersonId) -> ParentIds {
    let mut parents = ParentIds::default();

    for edge in index.edges(person_id) {
        if edge.person2_id != person_id
            || !is_parent_child_edge(edge)
            || !index.contains(edge.person1_id)
        {
            continue;
        }
        let slot = match implied_parent_role(edge) {
            Some(ParentRole::Mother) => &mut parents.mother,
            Some(ParentRole::Father) => &mut parents.father,
            None => continue,
        };
        match *slot {
            None => *slot = Some(edge.person1_id),
            Some(existing) if existing != edge.person1_id => {
                warn!(
                    "Person {person_id} has conflicting {} edges ({existing} and {}); keeping the first",
                    implied_parent_role(edge).map_or("parent", ParentRole::as_str),
                    edge.person1_id
                );
            }
            Some(_) => {}
        }
    }

    parents
}

/// Ids of the distinct children of a person, in edge order
#[must_use]
pub fn child_ids(index: &FamilyIndex, person_id: PersonId) -> Vec<PersonId> {
    index
        .edges(person_id)
        .filter(|edge| edge.person1_id == person_id && is_parent_child_edge(edge))
        .map(|edge| edge.person2_id)
        .unique()
        .collect()
}

/// Ids of the distinct spouses of a person, in edge order
#[must_use]
pub fn spouse_ids(index: &FamilyIndex, person_id: PersonId) -> Vec<PersonId> {
    index
        .edges(person_id)
        .filter(|edge| edge.kind.is_spouse())
        .filter_map(|edge| edge.other_endpoint(person_id))
        .filter(|&other| other != person_id)
        .unique()
        .collect()
}

/// Ids of the distinct siblings of a person.
///
/// Only edges where a shared parent sits in the parent position count, so a
/// parent's own parents (or the person's children) are never reported as
/// siblings. The person's parents and children are removed as well, keeping
/// the results disjoint on malformed data.
#[must_use]
pub fn sibling_ids(index: &FamilyIndex, person_id: PersonId, parents: &ParentIds) -> Vec<PersonId> {
    let children = child_ids(index, person_id);
    let parent_list = parents.ids();

    parent_list
        .iter()
        .flat_map(move |&parent_id| {
            index.edges(parent_id).filter(move |edge| {
                edge.person1_id == parent_id
                    && is_parent_child_edge(edge)
                    && edge.person2_id != person_id
            })
        })
        .map(|edge| edge.person2_id)
        .filter(|id| !parent_list.contains(id) && !children.contains(id))
        .unique()
        .collect()
}

fn resolve_ids<'a>(index: &'a FamilyIndex, ids: Vec<PersonId>) -> Vec<&'a Person> {
    ids.into_iter().filter_map(|id| index.person(id)).collect()
}

/// Resolve mother, father, siblings, children and spouses of a person.
///
/// Unknown ids give an empty bundle; ids that don't resolve to a person are
/// dropped silently.
#[must_use]
pub fn resolve<'a>(index: &'a FamilyIndex, person_id: PersonId) -> FamilyBundle<'a> {
    let parents = parent_ids(index, person_id);

    FamilyBundle {
        mother: parents.mother.and_then(|id| index.person(id)),
        father: parents.father.and_then(|id| index.person(id)),
        siblings: resolve_ids(index, sibling_ids(index, person_id, &parents)),
        children: resolve_ids(index, child_ids(index, person_id)),
        spouses: resolve_ids(index, spouse_ids(index, person_id)),
    }
}

/// Resolve every person in the snapshot, in snapshot order
#[must_use]
pub fn resolve_all(index: &FamilyIndex) -> Vec<(PersonId, FamilyBundle<'_>)> {
    index
        .people()
        .par_iter()
        .map(|person| (person.id, resolve(index, person.id)))
        .collect()
}
