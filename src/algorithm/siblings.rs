//! Population-wide sibling links for network graphs
//!
//! Every pair of people sharing a resolved parent is linked in both
//! directions. The pairwise scan is O(n²) in the number of people, which is
//! fine for family-sized snapshots (hundreds of people) but is a known
//! scaling limit for anything larger.

use super::resolver::{ParentIds, parent_ids};
use crate::models::collections::FamilyIndex;
use crate::models::person::PersonId;
use log::warn;
use serde::Serialize;

/// Type tag carried by every sibling link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Two people sharing a parent
    Sibling,
}

/// One directed sibling link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SiblingLink {
    /// Link origin
    pub source: PersonId,
    /// Link destination
    pub target: PersonId,
    /// Always `sibling`
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

impl SiblingLink {
    const fn new(source: PersonId, target: PersonId) -> Self {
        Self {
            source,
            target,
            link_type: LinkType::Sibling,
        }
    }
}

/// Sibling links across the whole snapshot.
///
/// For each unordered pair sharing at least one parent, two links are
/// emitted (`a -> b` then `b -> a`). A pair also joined by a direct
/// parent-child edge is skipped entirely, since such a pair cannot be
/// siblings.
#[must_use]
pub fn compute_sibling_links(index: &FamilyIndex) -> Vec<SiblingLink> {
    let parents: Vec<(PersonId, ParentIds)> = index
        .people()
        .iter()
        .map(|person| (person.id, parent_ids(index, person.id)))
        .filter(|(_, parents)| !parents.is_empty())
        .collect();

    let mut links = Vec::new();
    for (i, (a, a_parents)) in parents.iter().enumerate() {
        for (b, b_parents) in &parents[i + 1..] {
            if a == b || !a_parents.shares_parent_with(b_parents) {
                continue;
            }
            if index.has_parent_child_edge_between(*a, *b) {
                warn!("Skipping sibling link between {a} and {b}: they are also parent and child");
                continue;
            }
            links.push(SiblingLink::new(*a, *b));
            links.push(SiblingLink::new(*b, *a));
        }
    }

    links
}
