//! Contract error types for snippet service
//!
//! These errors are transport-agnostic. Each variant maps to a distinct
//! reason code so clients can tell rejected preconditions apart.

use super::model::{EntityId, EntityKind};
use thiserror::Error;

/// Snippet service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetError {
    /// A new record was submitted with an identifier
    #[error("A new {entity} cannot already have an ID")]
    IdExists { entity: EntityKind },

    /// Update body carries no identifier
    #[error("Invalid id")]
    IdNull { entity: EntityKind },

    /// Update body identifier differs from the path identifier
    #[error("Invalid ID: path id {path_id} does not match body id {body_id}")]
    IdInvalid {
        entity: EntityKind,
        path_id: EntityId,
        body_id: EntityId,
    },

    /// Update target does not exist
    #[error("Entity not found: {entity} {id}")]
    IdNotFound { entity: EntityKind, id: EntityId },

    /// Lookup by identifier found nothing
    #[error("{entity} with id '{id}' was not found")]
    NotFound { entity: EntityKind, id: EntityId },

    /// Required field missing from a create or update body
    #[error("Field '{field}' of {entity} is required")]
    FieldRequired {
        entity: EntityKind,
        field: &'static str,
    },

    /// Unusable `sort` parameter
    #[error("Cannot sort {entity} by '{sort}'")]
    InvalidSort { entity: EntityKind, sort: String },

    /// Store failure
    #[error("Internal error")]
    Internal,
}

impl SnippetError {
    /// Machine-readable reason code
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::IdExists { .. } => "idexists",
            Self::IdNull { .. } => "idnull",
            Self::IdInvalid { .. } => "idinvalid",
            Self::IdNotFound { .. } => "idnotfound",
            Self::NotFound { .. } => "notfound",
            Self::FieldRequired { .. } => "fieldrequired",
            Self::InvalidSort { .. } => "sortinvalid",
            Self::Internal => "internal",
        }
    }

    /// Entity kind the error refers to, if any
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Self::IdExists { entity }
            | Self::IdNull { entity }
            | Self::IdInvalid { entity, .. }
            | Self::IdNotFound { entity, .. }
            | Self::NotFound { entity, .. }
            | Self::FieldRequired { entity, .. }
            | Self::InvalidSort { entity, .. } => Some(*entity),
            Self::Internal => None,
        }
    }
}
