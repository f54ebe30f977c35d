//! Repository trait for data access
//!
//! One generic contract serves every entity kind.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{EntityId, Record, SnippetError};
use anyhow::Result;
use async_trait::async_trait;

/// Sort direction of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Requested order of a listing, by wire property name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    /// Parse `property[,asc|desc]` against the sortable fields of `R`
    pub fn parse<R: Record>(raw: &str) -> Result<Self, SnippetError> {
        let invalid = || SnippetError::InvalidSort {
            entity: R::KIND,
            sort: raw.to_string(),
        };

        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid)?;
        if !R::SORTABLE.contains(&property) {
            return Err(invalid());
        }

        let direction = match parts.next() {
            None => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(_) => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }
}

/// Store contract for one entity kind
///
/// No referential integrity is checked here: a record may point to a parent
/// id that does not exist.
#[async_trait]
pub trait EntityRepository<R: Record>: Send + Sync {
    /// Insert when the record has no id, otherwise replace every field
    async fn save(&self, record: &R) -> Result<R>;

    /// Find a record by identifier
    async fn find_by_id(&self, id: EntityId) -> Result<Option<R>>;

    /// List all records, ascending by id unless `sort` says otherwise
    async fn find_all(&self, sort: Option<&SortOrder>) -> Result<Vec<R>>;

    /// Check if a record exists
    async fn exists_by_id(&self, id: EntityId) -> Result<bool>;

    /// Delete a record; returns whether a row was removed
    async fn delete_by_id(&self, id: EntityId) -> Result<bool>;
}
