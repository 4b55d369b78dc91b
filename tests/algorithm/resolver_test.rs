use crate::utils::*;
use family_graph::algorithm::resolver::{parent_ids, sibling_ids};
use family_graph::{
    FamilyIndex, Gender, Person, Relationship, build_ancestor_tree, resolve, resolve_all,
};

#[test]
fn test_person_without_edges_resolves_to_empty_bundle() {
    let index = FamilyIndex::from_records(vec![person(1, "Lone", Gender::Other)], Vec::new());
    let bundle = resolve(&index, 1);

    assert!(bundle.mother.is_none());
    assert!(bundle.father.is_none());
    assert!(bundle.siblings.is_empty());
    assert!(bundle.children.is_empty());
    assert!(bundle.spouses.is_empty());
    assert!(bundle.is_empty());
}

#[test]
fn test_unknown_person_resolves_to_empty_bundle() {
    let index = reyes_family();
    assert!(resolve(&index, 999).is_empty());
}

#[test]
fn test_siblings_exclude_ancestors() {
    // Only the three edges of the original bug report
    let index = FamilyIndex::from_records(
        reyes_people(),
        vec![
            father(1, BERNARDO, AQUILINO),
            father(2, AQUILINO, RUDY),
            mother(3, DOMINGA, RUDY),
        ],
    );
    let bundle = resolve(&index, RUDY);

    assert_eq!(bundle.father.map(|p| p.id), Some(AQUILINO));
    assert_eq!(bundle.mother.map(|p| p.id), Some(DOMINGA));
    assert!(bundle.siblings.is_empty());
}

#[test]
fn test_siblings_exclude_descendants() {
    let index = reyes_family();
    let bundle = resolve(&index, AQUILINO);

    assert_eq!(ids(&bundle.siblings), vec![TIRSO]);
    assert_eq!(ids(&bundle.children), vec![RUDY]);
    assert_eq!(bundle.father.map(|p| p.id), Some(BERNARDO));
    assert_eq!(bundle.mother.map(|p| p.id), Some(SEGUNDA));
    assert_eq!(ids(&bundle.spouses), vec![DOMINGA]);
}

#[test]
fn test_full_siblings_listed_once() {
    let index = reyes_family();
    // Tirso shares both parents with Aquilino; he must not appear twice
    assert_eq!(ids(&resolve(&index, TIRSO).siblings), vec![AQUILINO]);
}

#[test]
fn test_half_siblings_through_one_parent() {
    let people = vec![
        person(1, "Mother", Gender::Female),
        person(2, "FatherA", Gender::Male),
        person(3, "FatherB", Gender::Male),
        person(4, "ChildA", Gender::Female),
        person(5, "ChildB", Gender::Male),
    ];
    let index = FamilyIndex::from_records(
        people,
        vec![
            mother(1, 1, 4),
            father(2, 2, 4),
            mother(3, 1, 5),
            father(4, 3, 5),
        ],
    );

    assert_eq!(ids(&resolve(&index, 4).siblings), vec![5]);
    assert_eq!(ids(&resolve(&index, 5).siblings), vec![4]);
}

#[test]
fn test_duplicate_edges_are_idempotent() {
    let index = FamilyIndex::from_records(
        vec![person(1, "Dad", Gender::Male), person(2, "Kid", Gender::Male)],
        vec![father(1, 1, 2), father(2, 1, 2)],
    );

    let parent_view = resolve(&index, 1);
    assert_eq!(ids(&parent_view.children), vec![2]);

    let child_view = resolve(&index, 2);
    assert_eq!(child_view.father.map(|p| p.id), Some(1));
    assert!(child_view.siblings.is_empty());
}

#[test]
fn test_duplicate_spouse_rows_listed_once() {
    let mut relationships = spouse_pair(1, BERNARDO, SEGUNDA);
    relationships.extend(spouse_pair(3, BERNARDO, SEGUNDA));
    let index = FamilyIndex::from_records(reyes_people(), relationships);

    assert_eq!(ids(&resolve(&index, BERNARDO).spouses), vec![SEGUNDA]);
    assert_eq!(ids(&resolve(&index, SEGUNDA).spouses), vec![BERNARDO]);
}

#[test]
fn test_normalized_encoding_resolves_like_denormalized() {
    let index = FamilyIndex::from_records(
        reyes_people(),
        vec![
            Relationship::from_parts(1, AQUILINO, RUDY, "parentOf", Some("father")),
            Relationship::from_parts(2, DOMINGA, RUDY, "parentOf", Some("mother")),
        ],
    );
    let bundle = resolve(&index, RUDY);

    assert_eq!(bundle.father.map(|p| p.id), Some(AQUILINO));
    assert_eq!(bundle.mother.map(|p| p.id), Some(DOMINGA));
    assert_eq!(ids(&resolve(&index, AQUILINO).children), vec![RUDY]);
}

#[test]
fn test_dangling_ids_are_dropped() {
    let index = FamilyIndex::from_records(
        vec![person(1, "Known", Gender::Female)],
        vec![mother(1, 1, 42), father(2, 77, 1), Relationship::spouse(3, 1, 55)],
    );
    let bundle = resolve(&index, 1);

    assert!(bundle.children.is_empty());
    assert!(bundle.father.is_none());
    assert!(bundle.spouses.is_empty());
    assert!(parent_ids(&index, 1).is_empty());
}

#[test]
fn test_missing_parent_does_not_make_siblings() {
    let index = FamilyIndex::from_records(
        vec![person(1, "A", Gender::Male), person(2, "B", Gender::Female)],
        vec![mother(1, 99, 1), mother(2, 99, 2)],
    );
    let bundle = resolve(&index, 1);

    assert!(bundle.mother.is_none());
    assert!(bundle.siblings.is_empty());
    assert!(sibling_ids(&index, 1, &parent_ids(&index, 1)).is_empty());
}

#[test]
fn test_missing_parent_does_not_hide_a_later_valid_one() {
    let index = FamilyIndex::from_records(
        vec![person(1, "Child", Gender::Male), person(3, "Mother", Gender::Female)],
        vec![mother(1, 99, 1), mother(2, 3, 1)],
    );

    assert_eq!(resolve(&index, 1).mother.map(|p| p.id), Some(3));

    let tree = build_ancestor_tree(index.person(1), &index, 3).unwrap();
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].person.id, 3);
}

#[test]
fn test_children_and_siblings_disjoint_on_malformed_data() {
    // 3 is recorded both as a child of 2 and as a child of 2's mother
    let people: Vec<Person> = (1..=3).map(|id| person(id, "P", Gender::Other)).collect();
    let index = FamilyIndex::from_records(
        people,
        vec![mother(1, 1, 2), mother(2, 1, 3), father(3, 2, 3)],
    );
    let bundle = resolve(&index, 2);

    assert_eq!(ids(&bundle.children), vec![3]);
    assert!(bundle.siblings.is_empty());
}

#[test]
fn test_circular_parent_edges_terminate() {
    let index = FamilyIndex::from_records(
        vec![person(1, "A", Gender::Male), person(2, "B", Gender::Male)],
        vec![father(1, 1, 2), father(2, 2, 1)],
    );
    let bundle = resolve(&index, 1);

    assert_eq!(bundle.father.map(|p| p.id), Some(2));
    assert_eq!(ids(&bundle.children), vec![2]);
    assert!(sibling_ids(&index, 1, &parent_ids(&index, 1)).is_empty());
}

#[test]
fn test_resolve_all_matches_individual_resolution() {
    let index = reyes_family();
    let all = resolve_all(&index);

    assert_eq!(all.len(), index.people().len());
    for (person_id, bundle) in &all {
        assert_eq!(bundle, &resolve(&index, *person_id));
    }
    assert_eq!(all[0].0, BERNARDO);
}
