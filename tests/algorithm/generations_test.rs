use crate::utils::*;
use family_graph::algorithm::generations::UNREACHABLE_GENERATION;
use family_graph::{
    FamilyIndex, Gender, Person, assign_generations, find_root_people, generation_map,
};

fn abc() -> Vec<Person> {
    vec![
        person(1, "A", Gender::Female),
        person(2, "B", Gender::Male),
        person(3, "C", Gender::Male),
    ]
}

#[test]
fn test_root_detection() {
    let index = FamilyIndex::from_records(abc(), vec![mother(1, 1, 3)]);
    assert_eq!(ids(&find_root_people(&index)), vec![1, 2]);
}

#[test]
fn test_everyone_is_a_root_without_edges() {
    let index = FamilyIndex::from_records(abc(), Vec::new());
    assert_eq!(ids(&find_root_people(&index)), vec![1, 2, 3]);
}

#[test]
fn test_spouse_edges_do_not_affect_roots() {
    let index = FamilyIndex::from_records(abc(), spouse_pair(1, 1, 2));
    assert_eq!(find_root_people(&index).len(), 3);
}

#[test]
fn test_generations_for_three_generation_family() {
    let index = reyes_family();
    let generations = generation_map(&index);

    assert_eq!(generations[&BERNARDO], 0);
    assert_eq!(generations[&SEGUNDA], 0);
    assert_eq!(generations[&DOMINGA], 0);
    assert_eq!(generations[&AQUILINO], 1);
    assert_eq!(generations[&TIRSO], 1);
    // Reachable from Dominga in one step and from Bernardo in two
    assert_eq!(generations[&RUDY], 1);
}

#[test]
fn test_reconverging_paths_take_minimum() {
    // 1 -> 2 -> 3 -> 4 -> 5 and 1 -> 5 directly
    let people: Vec<Person> = (1..=5).map(|id| person(id, "P", Gender::Other)).collect();
    let index = FamilyIndex::from_records(
        people,
        vec![
            father(1, 1, 2),
            father(2, 2, 3),
            father(3, 3, 4),
            mother(4, 4, 5),
            father(5, 1, 5),
        ],
    );

    let entries = assign_generations(&index);
    let by_id: Vec<(i64, i32)> = entries.iter().map(|e| (e.person.id, e.generation)).collect();
    assert_eq!(by_id, vec![(1, 0), (2, 1), (3, 2), (4, 3), (5, 1)]);
}

#[test]
fn test_cycle_below_root_terminates() {
    // Root 1 -> 2 -> 3 -> 2
    let people: Vec<Person> = (1..=3).map(|id| person(id, "P", Gender::Other)).collect();
    let index = FamilyIndex::from_records(
        people,
        vec![father(1, 1, 2), father(2, 2, 3), father(3, 3, 2)],
    );

    let generations = generation_map(&index);
    assert_eq!(generations[&1], 0);
    assert_eq!(generations[&2], 1);
    assert_eq!(generations[&3], 2);
}

#[test]
fn test_unreachable_people_get_minus_one() {
    let mut people = abc();
    people.push(person(4, "D", Gender::Other));
    // 3 and 4 are each other's parent: neither is a root, neither is reachable
    let index = FamilyIndex::from_records(people, vec![father(1, 3, 4), father(2, 4, 3)]);

    let entries = assign_generations(&index);
    assert_eq!(entries[2].generation, UNREACHABLE_GENERATION);
    assert_eq!(entries[3].generation, UNREACHABLE_GENERATION);
    assert_eq!(entries[0].generation, 0);
}

#[test]
fn test_generation_entry_serializes_flat() {
    let index = FamilyIndex::from_records(abc(), Vec::new());
    let value = serde_json::to_value(&assign_generations(&index)[0]).unwrap();

    assert_eq!(value["id"], 1);
    assert_eq!(value["firstName"], "A");
    assert_eq!(value["generation"], 0);
}
