//! Relationship edit planning
//!
//! Turns a "add a <type> to this person" request from the UI into the exact
//! directional rows to create. Spouse requests always produce both rows so
//! the caller can write them as a unit and detect a half-applied pair.

use crate::error::{FamilyError, Result};
use crate::models::person::PersonId;
use crate::models::relationship::{RelationKind, RelationshipPayload};
use crate::models::types::{Gender, ParentRole};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relationship the user wants to add, relative to the focus person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    /// The new person is a child of the focus person
    Child,
    /// The new person is the focus person's mother
    Mother,
    /// The new person is the focus person's father
    Father,
    /// The new person is the focus person's spouse
    Spouse,
}

impl FromStr for RelationshipType {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "child" => Ok(Self::Child),
            "mother" => Ok(Self::Mother),
            "father" => Ok(Self::Father),
            "spouse" => Ok(Self::Spouse),
            other => Err(FamilyError::InvalidRelationshipType(other.to_string())),
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Child => write!(f, "child"),
            Self::Mother => write!(f, "mother"),
            Self::Father => write!(f, "father"),
            Self::Spouse => write!(f, "spouse"),
        }
    }
}

/// Input to [`build_relationship_payloads`], as collected by the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadRequest {
    /// Raw relationship type text
    pub relationship_type: String,
    /// Person the relationship is added to
    pub focus_person_id: Option<PersonId>,
    /// Person being linked in
    pub new_person_id: Option<PersonId>,
    /// Gender of the focus person, used to infer the role on child edges
    #[serde(default)]
    pub focus_person_gender: Option<Gender>,
    /// Explicit role chosen by the user; wins over gender inference
    #[serde(default)]
    pub selected_parent_role: Option<ParentRole>,
}

impl PayloadRequest {
    /// Request linking `new_person_id` to `focus_person_id`
    #[must_use]
    pub fn new(
        relationship_type: impl Into<String>,
        focus_person_id: PersonId,
        new_person_id: PersonId,
    ) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            focus_person_id: Some(focus_person_id),
            new_person_id: Some(new_person_id),
            focus_person_gender: None,
            selected_parent_role: None,
        }
    }

    /// Set the focus person's gender
    #[must_use]
    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.focus_person_gender = gender;
        self
    }

    /// Set an explicit parent role
    #[must_use]
    pub fn with_parent_role(mut self, role: ParentRole) -> Self {
        self.selected_parent_role = Some(role);
        self
    }
}

/// Outcome of a non-throwing pre-flight check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// Whether the request would produce payloads
    pub valid: bool,
    /// Error message when it would not
    pub error: Option<String>,
}

/// Parent role implied by a gender: male is father, female is mother,
/// anything else (including unknown) is `None`
#[must_use]
pub const fn determine_parent_role_from_gender(gender: Option<Gender>) -> Option<ParentRole> {
    match gender {
        Some(Gender::Male) => Some(ParentRole::Father),
        Some(Gender::Female) => Some(ParentRole::Mother),
        Some(Gender::Other) | None => None,
    }
}

/// Whether the UI has to ask the user for a parent role before adding the
/// relationship
#[must_use]
pub fn needs_parent_role_selection(relationship_type: &str, gender: Option<Gender>) -> bool {
    relationship_type == "child" && determine_parent_role_from_gender(gender).is_none()
}

/// Rows to create for a relationship request.
///
/// * `child`: focus person is the parent, role from `selected_parent_role` or
///   the focus person's gender
/// * `mother` / `father`: the new person is the parent with that role
/// * `spouse`: both directions
pub fn build_relationship_payloads(request: &PayloadRequest) -> Result<Vec<RelationshipPayload>> {
    let (Some(focus_id), Some(new_id)) = (request.focus_person_id, request.new_person_id) else {
        return Err(FamilyError::MissingParameters);
    };

    let payloads = match request.relationship_type.parse::<RelationshipType>()? {
        RelationshipType::Child => {
            let role = request
                .selected_parent_role
                .or_else(|| determine_parent_role_from_gender(request.focus_person_gender))
                .ok_or(FamilyError::AmbiguousParentRole)?;
            vec![RelationshipPayload {
                person1_id: focus_id,
                person2_id: new_id,
                kind: RelationKind::ParentChild { role: Some(role) },
            }]
        }
        RelationshipType::Mother => vec![RelationshipPayload {
            person1_id: new_id,
            person2_id: focus_id,
            kind: RelationKind::ParentChild {
                role: Some(ParentRole::Mother),
            },
        }],
        RelationshipType::Father => vec![RelationshipPayload {
            person1_id: new_id,
            person2_id: focus_id,
            kind: RelationKind::ParentChild {
                role: Some(ParentRole::Father),
            },
        }],
        RelationshipType::Spouse => vec![
            RelationshipPayload {
                person1_id: focus_id,
                person2_id: new_id,
                kind: RelationKind::Spouse,
            },
            RelationshipPayload {
                person1_id: new_id,
                person2_id: focus_id,
                kind: RelationKind::Spouse,
            },
        ],
    };

    Ok(payloads)
}

/// Pre-flight check of a request without returning an error
#[must_use]
pub fn validate_relationship_data(request: &PayloadRequest) -> Validation {
    match build_relationship_payloads(request) {
        Ok(_) => Validation {
            valid: true,
            error: None,
        },
        Err(e) => Validation {
            valid: false,
            error: Some(e.to_string()),
        },
    }
}
