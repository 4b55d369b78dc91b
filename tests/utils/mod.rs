use family_graph::{FamilyIndex, Gender, ParentRole, Person, PersonId, Relationship};

pub const BERNARDO: PersonId = 1;
pub const SEGUNDA: PersonId = 2;
pub const AQUILINO: PersonId = 3;
pub const TIRSO: PersonId = 4;
pub const DOMINGA: PersonId = 5;
pub const RUDY: PersonId = 6;

/// Create a test person
#[must_use]
pub fn person(id: PersonId, first_name: &str, gender: Gender) -> Person {
    Person::new(id, first_name, "Reyes").with_gender(gender)
}

/// Denormalized father edge
#[must_use]
pub fn father(id: i64, parent: PersonId, child: PersonId) -> Relationship {
    Relationship::parent_child(id, parent, child, Some(ParentRole::Father))
}

/// Denormalized mother edge
#[must_use]
pub fn mother(id: i64, parent: PersonId, child: PersonId) -> Relationship {
    Relationship::parent_child(id, parent, child, Some(ParentRole::Mother))
}

/// Both rows of a spouse pair
#[must_use]
pub fn spouse_pair(first_id: i64, a: PersonId, b: PersonId) -> Vec<Relationship> {
    vec![
        Relationship::spouse(first_id, a, b),
        Relationship::spouse(first_id + 1, b, a),
    ]
}

/// Three generations:
///
/// Bernardo + Segunda -> Aquilino, Tirso
/// Aquilino + Dominga -> Rudy
#[must_use]
pub fn reyes_people() -> Vec<Person> {
    vec![
        person(BERNARDO, "Bernardo", Gender::Male),
        person(SEGUNDA, "Segunda", Gender::Female),
        person(AQUILINO, "Aquilino", Gender::Male),
        person(TIRSO, "Tirso", Gender::Male),
        person(DOMINGA, "Dominga", Gender::Female),
        person(RUDY, "Rudy", Gender::Male),
    ]
}

#[must_use]
pub fn reyes_relationships() -> Vec<Relationship> {
    let mut relationships = vec![
        father(1, BERNARDO, AQUILINO),
        mother(2, SEGUNDA, AQUILINO),
        father(3, BERNARDO, TIRSO),
        mother(4, SEGUNDA, TIRSO),
        father(5, AQUILINO, RUDY),
        mother(6, DOMINGA, RUDY),
    ];
    relationships.extend(spouse_pair(7, BERNARDO, SEGUNDA));
    relationships.extend(spouse_pair(9, AQUILINO, DOMINGA));
    relationships
}

#[must_use]
pub fn reyes_family() -> FamilyIndex {
    FamilyIndex::from_records(reyes_people(), reyes_relationships())
}

/// Ids of resolved people, in order
#[must_use]
pub fn ids(people: &[&Person]) -> Vec<PersonId> {
    people.iter().map(|p| p.id).collect()
}
