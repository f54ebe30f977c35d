//! Contract layer - transport-agnostic records, patches and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;
pub mod patch;

pub use error::SnippetError;
pub use model::{
    CommonProperty, EntityId, EntityKind, LangType, Project, ProjectChapter, Record, Snippet,
    SnippetSection, Vendor,
};
pub use patch::{
    CommonPropertyPatch, LangTypePatch, ProjectChapterPatch, ProjectPatch, SnippetPatch,
    SnippetSectionPatch, VendorPatch,
};
