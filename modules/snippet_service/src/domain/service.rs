//! Domain service - the uniform operation set shared by every entity kind

use super::repository::{EntityRepository, SortOrder};
use crate::contract::{EntityId, Record, SnippetError};
use std::sync::Arc;

/// Domain service for one entity kind
///
/// Input is assumed valid: id rules and required fields are checked at the
/// REST boundary before any of these methods run.
pub struct EntityService<R: Record> {
    repo: Arc<dyn EntityRepository<R>>,
}

impl<R: Record> EntityService<R> {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn EntityRepository<R>>) -> Self {
        Self { repo }
    }

    /// Insert (no id) or fully replace (id present) a record
    pub async fn save(&self, record: R) -> Result<R, SnippetError> {
        tracing::debug!(entity = %R::KIND, ?record, "Request to save");
        self.repo.save(&record).await.map_err(store_failure::<R>)
    }

    /// Merge `patch` into the stored record with `id`
    ///
    /// Returns `None` when no such record exists.
    pub async fn partial_update(
        &self,
        id: EntityId,
        patch: R::Patch,
    ) -> Result<Option<R>, SnippetError> {
        tracing::debug!(entity = %R::KIND, id, ?patch, "Request to partially update");

        let Some(mut existing) = self
            .repo
            .find_by_id(id)
            .await
            .map_err(store_failure::<R>)?
        else {
            return Ok(None);
        };

        existing.merge_patch(patch);
        let saved = self
            .repo
            .save(&existing)
            .await
            .map_err(store_failure::<R>)?;
        Ok(Some(saved))
    }

    /// List every record
    pub async fn find_all(&self, sort: Option<&SortOrder>) -> Result<Vec<R>, SnippetError> {
        tracing::debug!(entity = %R::KIND, ?sort, "Request to get all");
        self.repo.find_all(sort).await.map_err(store_failure::<R>)
    }

    /// Get one record
    pub async fn find_one(&self, id: EntityId) -> Result<Option<R>, SnippetError> {
        tracing::debug!(entity = %R::KIND, id, "Request to get");
        self.repo.find_by_id(id).await.map_err(store_failure::<R>)
    }

    /// Check whether a record exists
    pub async fn exists(&self, id: EntityId) -> Result<bool, SnippetError> {
        self.repo.exists_by_id(id).await.map_err(store_failure::<R>)
    }

    /// Delete by id; an unknown id is not an error
    pub async fn delete(&self, id: EntityId) -> Result<(), SnippetError> {
        tracing::debug!(entity = %R::KIND, id, "Request to delete");
        let removed = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(store_failure::<R>)?;
        if !removed {
            tracing::debug!(entity = %R::KIND, id, "Nothing to delete");
        }
        Ok(())
    }
}

fn store_failure<R: Record>(error: anyhow::Error) -> SnippetError {
    tracing::error!(entity = %R::KIND, "Store failure: {:?}", error);
    SnippetError::Internal
}
