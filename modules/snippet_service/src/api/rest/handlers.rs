//! HTTP request handlers - thin layer that delegates to domain service
//!
//! Every handler is generic over the DTO of one entity kind and is
//! instantiated once per resource in routes.rs.

use super::{
    dto::ListQuery,
    error::{map_domain_error, map_json_rejection, map_path_rejection, Problem},
    headers::AlertHeaders,
    mapper::EntityMapper,
};
use crate::contract::{EntityId, Record, SnippetError};
use crate::domain::{validation, EntityService, SortOrder};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query,
    },
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

/// Per-resource state shared by the handlers of one entity kind
#[derive(Clone)]
pub struct ResourceContext<R: Record> {
    pub service: Arc<EntityService<R>>,
    pub alerts: Arc<AlertHeaders>,
    /// Public path of the collection, e.g. `/api/vendors`
    pub base_path: Arc<str>,
}

/// Create a new record
pub async fn create<M: EntityMapper>(
    Extension(ctx): Extension<ResourceContext<M::Record>>,
    body: Result<Json<M>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<M>), Problem> {
    let kind = <M::Record as Record>::KIND;
    let Json(dto) = body.map_err(map_json_rejection)?;
    tracing::debug!(entity = %kind, ?dto, "REST request to save");

    let body_id = dto.id();
    let record = dto.to_record().map_err(map_domain_error)?;
    validation::validate_new(kind, body_id).map_err(map_domain_error)?;

    let saved = ctx.service.save(record).await.map_err(map_domain_error)?;
    let id = saved
        .id()
        .ok_or_else(|| map_domain_error(SnippetError::Internal))?;

    let mut headers = ctx.alerts.created(kind, id);
    if let Ok(location) = HeaderValue::from_str(&format!("{}/{}", ctx.base_path, id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(M::to_wire(saved))))
}

/// Replace every field of an existing record
pub async fn update<M: EntityMapper>(
    Extension(ctx): Extension<ResourceContext<M::Record>>,
    path: Result<Path<EntityId>, PathRejection>,
    body: Result<Json<M>, JsonRejection>,
) -> Result<(HeaderMap, Json<M>), Problem> {
    let kind = <M::Record as Record>::KIND;
    let Path(path_id) = path.map_err(map_path_rejection)?;
    let Json(dto) = body.map_err(map_json_rejection)?;
    tracing::debug!(entity = %kind, path_id, ?dto, "REST request to update");

    let body_id = dto.id();
    let record = dto.to_record().map_err(map_domain_error)?;
    let id = check_update_target(&ctx, path_id, body_id).await?;

    let saved = ctx.service.save(record).await.map_err(map_domain_error)?;
    Ok((ctx.alerts.updated(kind, id), Json(M::to_wire(saved))))
}

/// Merge the supplied fields into an existing record
pub async fn partial_update<M: EntityMapper>(
    Extension(ctx): Extension<ResourceContext<M::Record>>,
    path: Result<Path<EntityId>, PathRejection>,
    body: Result<Json<M>, JsonRejection>,
) -> Result<(HeaderMap, Json<M>), Problem> {
    let kind = <M::Record as Record>::KIND;
    let Path(path_id) = path.map_err(map_path_rejection)?;
    let Json(dto) = body.map_err(map_json_rejection)?;
    tracing::debug!(entity = %kind, path_id, ?dto, "REST request to partial update");

    let body_id = dto.id();
    let patch = dto.to_patch();
    let id = check_update_target(&ctx, path_id, body_id).await?;

    let saved = ctx
        .service
        .partial_update(id, patch)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| map_domain_error(SnippetError::NotFound { entity: kind, id }))?;

    Ok((ctx.alerts.updated(kind, id), Json(M::to_wire(saved))))
}

/// List all records, optionally sorted
pub async fn list<M: EntityMapper>(
    Extension(ctx): Extension<ResourceContext<M::Record>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<M>>, Problem> {
    let kind = <M::Record as Record>::KIND;
    tracing::debug!(entity = %kind, ?query, "REST request to get all");

    let sort = query
        .sort
        .as_deref()
        .map(SortOrder::parse::<M::Record>)
        .transpose()
        .map_err(map_domain_error)?;

    let records = ctx
        .service
        .find_all(sort.as_ref())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(records.into_iter().map(M::to_wire).collect()))
}

/// Get one record
pub async fn get<M: EntityMapper>(
    Extension(ctx): Extension<ResourceContext<M::Record>>,
    path: Result<Path<EntityId>, PathRejection>,
) -> Result<Json<M>, Problem> {
    let kind = <M::Record as Record>::KIND;
    let Path(id) = path.map_err(map_path_rejection)?;
    tracing::debug!(entity = %kind, id, "REST request to get");

    ctx.service
        .find_one(id)
        .await
        .map_err(map_domain_error)?
        .map(|record| Json(M::to_wire(record)))
        .ok_or_else(|| map_domain_error(SnippetError::NotFound { entity: kind, id }))
}

/// Delete a record; unknown ids succeed as well
pub async fn delete<M: EntityMapper>(
    Extension(ctx): Extension<ResourceContext<M::Record>>,
    path: Result<Path<EntityId>, PathRejection>,
) -> Result<(StatusCode, HeaderMap), Problem> {
    let kind = <M::Record as Record>::KIND;
    let Path(id) = path.map_err(map_path_rejection)?;
    tracing::debug!(entity = %kind, id, "REST request to delete");

    ctx.service.delete(id).await.map_err(map_domain_error)?;

    Ok((StatusCode::NO_CONTENT, ctx.alerts.deleted(kind, id)))
}

/// Id rules for update and partial update, in order: body id present,
/// body id equals path id, target exists
async fn check_update_target<R: Record>(
    ctx: &ResourceContext<R>,
    path_id: EntityId,
    body_id: Option<EntityId>,
) -> Result<EntityId, Problem> {
    let id = validation::validate_update_ids(R::KIND, path_id, body_id).map_err(map_domain_error)?;

    if !ctx.service.exists(id).await.map_err(map_domain_error)? {
        return Err(map_domain_error(SnippetError::IdNotFound {
            entity: R::KIND,
            id,
        }));
    }
    Ok(id)
}
