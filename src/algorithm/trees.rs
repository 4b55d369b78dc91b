//! Ancestor and descendant tree construction
//!
//! Ancestor trees feed the pedigree and radial charts; descendant trees feed
//! the tree and timeline charts. Both are recursive and both hold owned
//! copies of the people they contain so they can be serialized on their own.

use super::resolver::{child_ids, parent_ids, spouse_ids};
use crate::config::GraphConfig;
use crate::models::collections::FamilyIndex;
use crate::models::person::{Person, PersonId};
use log::warn;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Node of an ancestor tree.
///
/// `children` are tree-structure children, i.e. the person's parents one
/// generation up: father first, then mother.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AncestorNode {
    /// Person at this node
    pub person: Person,
    /// Parent subtrees (at most two)
    pub children: Vec<AncestorNode>,
}

impl AncestorNode {
    /// Number of levels below and including this node
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in the tree
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Node of a descendant tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescendantNode {
    /// Person at this node
    pub person: Person,
    /// Inferred co-parent, or a recorded spouse
    pub spouse: Option<Person>,
    /// Subtrees of the person's children
    pub children: Vec<DescendantNode>,
}

impl DescendantNode {
    /// Total number of nodes in the tree
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Ids of every person in the tree, depth first
    #[must_use]
    pub fn person_ids(&self) -> Vec<PersonId> {
        let mut ids = vec![self.person.id];
        for child in &self.children {
            ids.extend(child.person_ids());
        }
        ids
    }
}

/// Build an ancestor tree at most `max_depth` levels deep.
///
/// Returns `None` for a missing person or a depth of zero. Termination relies
/// on the depth bound alone; on cyclic parent data a person may appear more
/// than once within the bound.
#[must_use]
pub fn build_ancestor_tree(
    person: Option<&Person>,
    index: &FamilyIndex,
    max_depth: usize,
) -> Option<AncestorNode> {
    let person = person?;
    if max_depth == 0 {
        return None;
    }

    let parents = parent_ids(index, person.id);
    let children = [parents.father, parents.mother]
        .into_iter()
        .flatten()
        .filter_map(|id| build_ancestor_tree(index.person(id), index, max_depth - 1))
        .collect();

    Some(AncestorNode {
        person: person.clone(),
        children,
    })
}

/// Build an ancestor tree using the configured depth
#[must_use]
pub fn build_ancestor_tree_with_config(
    person: Option<&Person>,
    index: &FamilyIndex,
    config: &GraphConfig,
) -> Option<AncestorNode> {
    build_ancestor_tree(person, index, config.ancestor_depth)
}

/// Infer the spouse shown next to `person_id` in a descendant tree.
///
/// The first child's other parent is used when that person is a parent of
/// every child; otherwise the first recorded spouse, if any.
#[must_use]
pub fn infer_co_parent(
    index: &FamilyIndex,
    person_id: PersonId,
    children: &[PersonId],
) -> Option<PersonId> {
    let candidate = children.first().and_then(|&first| {
        let parents = parent_ids(index, first);
        parents.ids().into_iter().find(|&id| id != person_id)
    });

    let shared_by_all = candidate.filter(|&co_parent| {
        children
            .iter()
            .all(|&child| parent_ids(index, child).ids().contains(&co_parent))
    });

    shared_by_all.or_else(|| spouse_ids(index, person_id).into_iter().next())
}

/// Build the full descendant tree of `person` using the default configuration
#[must_use]
pub fn build_descendant_tree(person: &Person, index: &FamilyIndex) -> DescendantNode {
    build_descendant_tree_with_config(person, index, &GraphConfig::default())
}

/// Build the full descendant tree of `person`.
///
/// With the cycle guard enabled, a child that already appears on the path
/// from the root is skipped, so cyclic parent data still terminates.
#[must_use]
pub fn build_descendant_tree_with_config(
    person: &Person,
    index: &FamilyIndex,
    config: &GraphConfig,
) -> DescendantNode {
    let mut path = FxHashSet::default();
    descend(person, index, config.descendant_cycle_guard, &mut path)
}

fn descend(
    person: &Person,
    index: &FamilyIndex,
    guard: bool,
    path: &mut FxHashSet<PersonId>,
) -> DescendantNode {
    path.insert(person.id);

    let child_list: Vec<&Person> = child_ids(index, person.id)
        .into_iter()
        .filter_map(|id| index.person(id))
        .collect();
    let child_id_list: Vec<PersonId> = child_list.iter().map(|child| child.id).collect();
    let spouse = infer_co_parent(index, person.id, &child_id_list).and_then(|id| index.person(id));

    let mut children = Vec::with_capacity(child_list.len());
    for child in child_list {
        if guard && path.contains(&child.id) {
            warn!(
                "Parent cycle detected: {} is recorded as a descendant of itself; skipping",
                child.id
            );
            continue;
        }
        children.push(descend(child, index, guard, path));
    }

    path.remove(&person.id);

    DescendantNode {
        person: person.clone(),
        spouse: spouse.cloned(),
        children,
    }
}
