//! Relationship edges and their classification
//!
//! The record API stores every relationship as a directional row
//! `person1Id -> person2Id` with a free-text `type`. Parent-child rows come in
//! two encodings that must be treated as equivalent:
//!
//! * denormalized: `type` is `"mother"` or `"father"` (and `parentRole` repeats it)
//! * normalized: `type` is `"parentOf"` and `parentRole` carries the role
//!
//! Rows are decoded into [`RelationKind`] once, when they enter the crate, so
//! that nothing downstream compares type strings.

use crate::models::person::PersonId;
use crate::models::traits::EntityModel;
use crate::models::types::ParentRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the normalized parent-child type
pub const PARENT_OF: &str = "parentOf";
/// Wire value of the spouse type
pub const SPOUSE: &str = "spouse";

/// Identifier of a relationship row.
///
/// Confirmed rows carry the API's integer id; optimistic local rows carry a
/// temporary string id until the API answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipId {
    /// Id assigned by the record API
    Number(i64),
    /// Temporary or externally generated id
    Text(String),
}

impl From<i64> for RelationshipId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RelationshipId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for RelationshipId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Decoded relationship type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// `person1Id` is a parent of `person2Id`; the role may be unrecorded
    ParentChild {
        /// Mother or father, if known
        role: Option<ParentRole>,
    },
    /// One direction of a spousal pair
    Spouse,
    /// Any other type string, kept verbatim for lossless round trips
    Other(String),
}

impl RelationKind {
    /// Decode the textual `type`/`parentRole` pair of a stored row.
    ///
    /// Never fails: unknown roles decode to `None`, unknown types to `Other`.
    #[must_use]
    pub fn decode(relationship_type: &str, parent_role: Option<&str>) -> Self {
        match relationship_type {
            "mother" => Self::ParentChild {
                role: Some(ParentRole::Mother),
            },
            "father" => Self::ParentChild {
                role: Some(ParentRole::Father),
            },
            PARENT_OF => Self::ParentChild {
                role: parent_role.and_then(ParentRole::parse),
            },
            SPOUSE => Self::Spouse,
            other => Self::Other(other.to_string()),
        }
    }

    /// Encode back into the `type`/`parentRole` pair the API expects.
    ///
    /// Parent-child rows with a known role use the denormalized encoding.
    #[must_use]
    pub fn encode(&self) -> (String, Option<ParentRole>) {
        match self {
            Self::ParentChild { role: Some(role) } => (role.as_str().to_string(), Some(*role)),
            Self::ParentChild { role: None } => (PARENT_OF.to_string(), None),
            Self::Spouse => (SPOUSE.to_string(), None),
            Self::Other(other) => (other.clone(), None),
        }
    }

    /// Whether this is a parent-child link in either encoding
    #[must_use]
    pub const fn is_parent_child(&self) -> bool {
        matches!(self, Self::ParentChild { .. })
    }

    /// Whether this is a spouse row
    #[must_use]
    pub const fn is_spouse(&self) -> bool {
        matches!(self, Self::Spouse)
    }

    /// Role implied by a parent-child link, `None` for everything else
    #[must_use]
    pub const fn parent_role(&self) -> Option<ParentRole> {
        match self {
            Self::ParentChild { role } => *role,
            _ => None,
        }
    }
}

/// Row shape used by the record API and snapshot files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelationshipRecord {
    id: RelationshipId,
    person1_id: PersonId,
    person2_id: PersonId,
    #[serde(rename = "type")]
    relationship_type: String,
    #[serde(default)]
    parent_role: Option<String>,
}

/// A directional relationship edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RelationshipRecord", into = "RelationshipRecord")]
pub struct Relationship {
    /// Row identifier
    pub id: RelationshipId,
    /// Parent for parent-child rows, first spouse for spouse rows
    pub person1_id: PersonId,
    /// Child for parent-child rows, second spouse for spouse rows
    pub person2_id: PersonId,
    /// Decoded type
    pub kind: RelationKind,
}

impl From<RelationshipRecord> for Relationship {
    fn from(record: RelationshipRecord) -> Self {
        Self {
            kind: RelationKind::decode(&record.relationship_type, record.parent_role.as_deref()),
            id: record.id,
            person1_id: record.person1_id,
            person2_id: record.person2_id,
        }
    }
}

impl From<Relationship> for RelationshipRecord {
    fn from(relationship: Relationship) -> Self {
        let (relationship_type, parent_role) = relationship.kind.encode();
        Self {
            id: relationship.id,
            person1_id: relationship.person1_id,
            person2_id: relationship.person2_id,
            relationship_type,
            parent_role: parent_role.map(|role| role.as_str().to_string()),
        }
    }
}

impl Relationship {
    /// Create a parent-child edge
    #[must_use]
    pub fn parent_child(
        id: impl Into<RelationshipId>,
        parent_id: PersonId,
        child_id: PersonId,
        role: Option<ParentRole>,
    ) -> Self {
        Self {
            id: id.into(),
            person1_id: parent_id,
            person2_id: child_id,
            kind: RelationKind::ParentChild { role },
        }
    }

    /// Create one direction of a spouse pair
    #[must_use]
    pub fn spouse(id: impl Into<RelationshipId>, from: PersonId, to: PersonId) -> Self {
        Self {
            id: id.into(),
            person1_id: from,
            person2_id: to,
            kind: RelationKind::Spouse,
        }
    }

    /// Decode a row from its textual fields
    #[must_use]
    pub fn from_parts(
        id: impl Into<RelationshipId>,
        person1_id: PersonId,
        person2_id: PersonId,
        relationship_type: &str,
        parent_role: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            person1_id,
            person2_id,
            kind: RelationKind::decode(relationship_type, parent_role),
        }
    }

    /// Whether either endpoint is `person_id`
    #[must_use]
    pub const fn touches(&self, person_id: PersonId) -> bool {
        self.person1_id == person_id || self.person2_id == person_id
    }

    /// The endpoint that is not `person_id`, or `None` if the edge doesn't touch it
    #[must_use]
    pub const fn other_endpoint(&self, person_id: PersonId) -> Option<PersonId> {
        if self.person1_id == person_id {
            Some(self.person2_id)
        } else if self.person2_id == person_id {
            Some(self.person1_id)
        } else {
            None
        }
    }

    /// Whether this is a parent-child link between `a` and `b` in either direction
    #[must_use]
    pub fn links_parent_and_child(&self, a: PersonId, b: PersonId) -> bool {
        self.kind.is_parent_child()
            && ((self.person1_id == a && self.person2_id == b)
                || (self.person1_id == b && self.person2_id == a))
    }
}

impl EntityModel for Relationship {
    type Id = RelationshipId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Whether an edge links a parent (`person1Id`) to a child (`person2Id`),
/// in either the denormalized or the normalized encoding
#[must_use]
pub const fn is_parent_child_edge(edge: &Relationship) -> bool {
    edge.kind.is_parent_child()
}

/// Parent role carried by an edge; `None` for non-parent edges and for
/// normalized edges whose role was not recorded
#[must_use]
pub const fn implied_parent_role(edge: &Relationship) -> Option<ParentRole> {
    edge.kind.parent_role()
}

/// A relationship row to be created; the record API assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipPayload {
    /// Parent, or first spouse
    pub person1_id: PersonId,
    /// Child, or second spouse
    pub person2_id: PersonId,
    /// Decoded type
    pub kind: RelationKind,
}

impl RelationshipPayload {
    /// Attach an id, producing a stored row
    #[must_use]
    pub fn into_relationship(self, id: impl Into<RelationshipId>) -> Relationship {
        Relationship {
            id: id.into(),
            person1_id: self.person1_id,
            person2_id: self.person2_id,
            kind: self.kind,
        }
    }

    /// Wire `type` value
    #[must_use]
    pub fn type_name(&self) -> String {
        self.kind.encode().0
    }

    /// Wire `parentRole` value
    #[must_use]
    pub fn parent_role(&self) -> Option<ParentRole> {
        self.kind.encode().1
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PayloadRecord {
    person1_id: PersonId,
    person2_id: PersonId,
    #[serde(rename = "type")]
    relationship_type: String,
    parent_role: Option<ParentRole>,
}

impl Serialize for RelationshipPayload {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let (relationship_type, parent_role) = self.kind.encode();
        PayloadRecord {
            person1_id: self.person1_id,
            person2_id: self.person2_id,
            relationship_type,
            parent_role,
        }
        .serialize(serializer)
    }
}
