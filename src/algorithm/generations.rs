//! Root detection and generation numbering
//!
//! Roots are people with no incoming parent-child edge. Generations are
//! assigned breadth first from every root at once: roots are generation 0,
//! each child step adds one, and a person reachable along several paths keeps
//! the smallest number.

use super::resolver::child_ids;
use crate::models::collections::FamilyIndex;
use crate::models::person::{Person, PersonId};
use crate::models::relationship::is_parent_child_edge;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::VecDeque;

/// Generation given to people no root can reach
pub const UNREACHABLE_GENERATION: i32 = -1;

/// A person annotated with their generation number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationEntry {
    /// The person
    #[serde(flatten)]
    pub person: Person,
    /// 0 for roots, -1 when unreachable from any root
    pub generation: i32,
}

/// Ids of everyone recorded as the child on a parent-child edge
fn child_side_ids(index: &FamilyIndex) -> FxHashSet<PersonId> {
    index
        .relationships()
        .iter()
        .filter(|edge| is_parent_child_edge(edge))
        .map(|edge| edge.person2_id)
        .collect()
}

/// People with no recorded parent, in snapshot order
#[must_use]
pub fn find_root_people(index: &FamilyIndex) -> Vec<&Person> {
    let has_parent = child_side_ids(index);
    index
        .people()
        .iter()
        .filter(|person| !has_parent.contains(&person.id))
        .collect()
}

/// Generation number of every reachable person
#[must_use]
pub fn generation_map(index: &FamilyIndex) -> FxHashMap<PersonId, i32> {
    let mut generations: FxHashMap<PersonId, i32> = FxHashMap::default();
    let mut queue: VecDeque<(PersonId, i32)> = VecDeque::new();

    for root in find_root_people(index) {
        generations.insert(root.id, 0);
        queue.push_back((root.id, 0));
    }

    while let Some((person_id, generation)) = queue.pop_front() {
        // A smaller number was recorded after this entry was queued
        if generations.get(&person_id).is_some_and(|&best| best < generation) {
            continue;
        }

        let next = generation + 1;
        for child_id in child_ids(index, person_id) {
            let improved = generations.get(&child_id).is_none_or(|&best| next < best);
            if improved {
                generations.insert(child_id, next);
                queue.push_back((child_id, next));
            }
        }
    }

    debug!(
        "Assigned generations to {} of {} people",
        generations.len(),
        index.people().len()
    );

    generations
}

/// Every person annotated with a generation number, in snapshot order
#[must_use]
pub fn assign_generations(index: &FamilyIndex) -> Vec<GenerationEntry> {
    let generations = generation_map(index);
    index
        .people()
        .iter()
        .map(|person| GenerationEntry {
            person: person.clone(),
            generation: generations
                .get(&person.id)
                .copied()
                .unwrap_or(UNREACHABLE_GENERATION),
        })
        .collect()
}

/// Number of people per generation, ascending; unreachable people are keyed -1
#[must_use]
pub fn generation_counts(entries: &[GenerationEntry]) -> Vec<(i32, usize)> {
    let mut counts: FxHashMap<i32, usize> = FxHashMap::default();
    for entry in entries {
        *counts.entry(entry.generation).or_default() += 1;
    }
    let mut counts: Vec<(i32, usize)> = counts.into_iter().collect();
    counts.sort_unstable();
    counts
}
