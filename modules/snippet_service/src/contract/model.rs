//! Contract models for snippet service
//!
//! These models are transport-agnostic records as they are persisted.
//! NO serde derives - these are pure domain models. Relationships are kept
//! as parent identifiers only; the related record is resolved on demand.

use chrono::{DateTime, Utc};
use std::fmt;

/// Identifier assigned by the store at creation time
pub type EntityId = i64;

/// The entity kinds managed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Vendor,
    Project,
    ProjectChapter,
    Snippet,
    SnippetSection,
    CommonProperty,
    LangType,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Vendor,
        EntityKind::Project,
        EntityKind::ProjectChapter,
        EntityKind::Snippet,
        EntityKind::SnippetSection,
        EntityKind::CommonProperty,
        EntityKind::LangType,
    ];

    /// camelCase name used in alert headers and error bodies
    pub fn entity_name(self) -> &'static str {
        match self {
            EntityKind::Vendor => "vendor",
            EntityKind::Project => "project",
            EntityKind::ProjectChapter => "projectChapter",
            EntityKind::Snippet => "snippet",
            EntityKind::SnippetSection => "snippetSection",
            EntityKind::CommonProperty => "commonProperty",
            EntityKind::LangType => "langType",
        }
    }

    /// Kebab-cased plural path segment of the REST resource
    pub fn resource_path(self) -> &'static str {
        match self {
            EntityKind::Vendor => "vendors",
            EntityKind::Project => "projects",
            EntityKind::ProjectChapter => "project-chapters",
            EntityKind::Snippet => "snippets",
            EntityKind::SnippetSection => "snippet-sections",
            EntityKind::CommonProperty => "common-properties",
            EntityKind::LangType => "lang-types",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity_name())
    }
}

/// Common capabilities of every persisted record
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    /// Partial update shape applied by merge-patch
    type Patch: fmt::Debug + Send + 'static;

    const KIND: EntityKind;

    /// Wire names of the scalar fields a listing may be sorted by
    const SORTABLE: &'static [&'static str];

    /// Identifier, `None` until the record has been stored
    fn id(&self) -> Option<EntityId>;

    /// Overwrite every field present in `patch`, leave the rest untouched
    fn merge_patch(&mut self, patch: Self::Patch);
}

/// Root of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub is_active: bool,
}

/// Project, optionally owned by a vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub status: bool,
    pub vendor_id: Option<EntityId>,
}

/// Chapter of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChapter {
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub r#type: Option<String>,
    pub project_id: Option<EntityId>,
}

/// Code snippet filed under a project chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: Option<EntityId>,
    pub lang_type: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub text: String,
    /// Creation timestamp
    pub cts: DateTime<Utc>,
    pub project_chapter_id: Option<EntityId>,
}

/// Ordered section of a snippet
///
/// `order_position` orders sections of the same snippet for display. Equal
/// positions are accepted; keeping them distinct is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSection {
    pub id: Option<EntityId>,
    pub lang_type: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub text: String,
    pub cts: DateTime<Utc>,
    pub order_position: i32,
    pub status: bool,
    pub snippet_id: Option<EntityId>,
}

/// Standalone key/value record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonProperty {
    pub id: Option<EntityId>,
    pub code: String,
    pub value: Option<String>,
}

/// Language type lookup code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangType {
    pub id: Option<EntityId>,
    pub code: String,
}
