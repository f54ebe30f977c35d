//! Snippet Service Module
//!
//! CRUD backend for code snippets organised as
//! vendor > project > project chapter > snippet > snippet section,
//! plus the flat common-property and language-type lookups.

// Public exports
pub mod contract;
pub use contract::{
    CommonProperty, EntityId, EntityKind, LangType, Project, ProjectChapter, Record, Snippet,
    SnippetError, SnippetSection, Vendor,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::{Services, SnippetServiceModule};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
