//! Immutable snapshots of the people and relationship collections

use crate::error::Result;
use crate::models::person::{Person, PersonId};
use crate::models::relationship::Relationship;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full set of records a derivation runs over.
///
/// This is also the shape of the static JSON files served in viewer mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All people
    #[serde(default)]
    pub people: Vec<Person>,
    /// All relationship rows
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Snapshot {
    /// Create a snapshot from record lists
    #[must_use]
    pub const fn new(people: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self {
            people,
            relationships,
        }
    }

    /// Parse a snapshot from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Copy of this snapshot with the person and all edges touching them removed
    #[must_use]
    pub fn without_person(&self, person_id: PersonId) -> Self {
        Self {
            people: self
                .people
                .iter()
                .filter(|p| p.id != person_id)
                .cloned()
                .collect(),
            relationships: self
                .relationships
                .iter()
                .filter(|r| !r.touches(person_id))
                .cloned()
                .collect(),
        }
    }

    /// Whether the snapshot holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.relationships.is_empty()
    }
}
