//! Person records
//!
//! A person is identified by `id`; every other field is a presentation
//! attribute. The derivation engine only ever reads people.

use crate::models::traits::EntityModel;
use crate::models::types::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a person
pub type PersonId = i64;

/// A person in the family graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Birth date, if known
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Death date, if applicable
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
    /// Recorded gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Portrait location
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Person {
    /// Create a person with only an id and a name
    #[must_use]
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: None,
            death_date: None,
            gender: None,
            photo_url: None,
        }
    }

    /// Set the gender
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the birth date
    #[must_use]
    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Set the death date
    #[must_use]
    pub fn with_death_date(mut self, date: NaiveDate) -> Self {
        self.death_date = Some(date);
        self
    }

    /// "First Last", trimmed when either part is empty
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl EntityModel for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A person before the record API has assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Birth date, if known
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Death date, if applicable
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
    /// Recorded gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Portrait location
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl NewPerson {
    /// Attach an id, producing a full person record
    #[must_use]
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            death_date: self.death_date,
            gender: self.gender,
            photo_url: self.photo_url,
        }
    }
}
