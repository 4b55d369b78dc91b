//! Error handling for the family graph.
//!
//! Derivations over a snapshot never fail; only edit planning, store access,
//! snapshot loading and the action layer report errors.

use std::io;

/// Specialized error type for the family graph
#[derive(Debug, thiserror::Error)]
pub enum FamilyError {
    /// Relationship type outside child/mother/father/spouse
    #[error("Invalid relationship type: {0}")]
    InvalidRelationshipType(String),

    /// Focus or new person id was not supplied
    #[error("Missing required parameters")]
    MissingParameters,

    /// A child edge was requested but no parent role could be determined
    #[error("Parent role must be selected: focus person's gender does not imply mother or father")]
    AmbiguousParentRole,

    /// The external record API rejected a write
    #[error("Record API error: {0}")]
    Api(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed snapshot JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A store lock was poisoned by a panicking writer
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl FamilyError {
    /// Whether this error means the caller supplied unusable edit input,
    /// as opposed to an infrastructure failure
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidRelationshipType(_) | Self::MissingParameters | Self::AmbiguousParentRole
        )
    }
}

/// Result type for family graph operations
pub type Result<T> = std::result::Result<T, FamilyError>;
