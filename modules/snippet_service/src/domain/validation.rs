//! Request validation rules applied at the REST boundary

use crate::contract::{EntityId, EntityKind, SnippetError};

/// A create body must not carry an id
pub fn validate_new(entity: EntityKind, body_id: Option<EntityId>) -> Result<(), SnippetError> {
    match body_id {
        Some(_) => Err(SnippetError::IdExists { entity }),
        None => Ok(()),
    }
}

/// An update body must carry the id named in the path
///
/// Checked in order: missing body id, then mismatch. Existence of the
/// target is checked by the caller against the store afterwards.
pub fn validate_update_ids(
    entity: EntityKind,
    path_id: EntityId,
    body_id: Option<EntityId>,
) -> Result<EntityId, SnippetError> {
    let body_id = body_id.ok_or(SnippetError::IdNull { entity })?;
    if body_id != path_id {
        return Err(SnippetError::IdInvalid {
            entity,
            path_id,
            body_id,
        });
    }
    Ok(body_id)
}

/// Unwrap a required field of a create or update body
pub fn required<T>(
    entity: EntityKind,
    field: &'static str,
    value: Option<T>,
) -> Result<T, SnippetError> {
    value.ok_or(SnippetError::FieldRequired { entity, field })
}
