//! REST DTOs with serde derives for HTTP API
//!
//! One transfer shape per entity kind serves create, update, merge-patch and
//! responses alike, so every field is optional on the wire. Related entities
//! are reduced to an id-only stub.

use crate::contract::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference to a related entity by identifier only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdRef {
    pub id: EntityId,
}

/// Vendor DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
    pub id: Option<EntityId>,

    #[schema(example = "ACME")]
    pub code: Option<String>,

    #[schema(example = "Acme Corporation")]
    pub name: Option<String>,

    pub is_active: Option<bool>,
}

/// Project DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: Option<EntityId>,

    pub code: Option<String>,

    pub name: Option<String>,

    pub status: Option<bool>,

    /// Owning vendor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<IdRef>,
}

/// Project chapter DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectChapterDto {
    pub id: Option<EntityId>,

    pub code: Option<String>,

    pub name: Option<String>,

    pub r#type: Option<String>,

    /// Owning project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<IdRef>,
}

/// Snippet DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnippetDto {
    pub id: Option<EntityId>,

    #[schema(example = "rust")]
    pub lang_type: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    /// Snippet body
    pub text: Option<String>,

    /// Creation timestamp
    pub cts: Option<DateTime<Utc>>,

    /// Owning project chapter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_chapter: Option<IdRef>,
}

/// Snippet section DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnippetSectionDto {
    pub id: Option<EntityId>,

    pub lang_type: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    pub text: Option<String>,

    pub cts: Option<DateTime<Utc>>,

    /// Display order among sections of the same snippet
    pub order_position: Option<i32>,

    pub status: Option<bool>,

    /// Owning snippet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<IdRef>,
}

/// Common property DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonPropertyDto {
    pub id: Option<EntityId>,

    #[schema(example = "editor.theme")]
    pub code: Option<String>,

    pub value: Option<String>,
}

/// Language type DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LangTypeDto {
    pub id: Option<EntityId>,

    #[schema(example = "rust")]
    pub code: Option<String>,
}

/// Query parameters for listing
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// `property[,asc|desc]`
    pub sort: Option<String>,
}
