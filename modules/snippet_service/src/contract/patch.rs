//! Merge-patch shapes and the `Record` implementations that apply them
//!
//! Every patch field is `Option<T>`: `None` means "not supplied" and leaves
//! the stored value untouched, `Some(v)` overwrites it. An empty string is
//! a supplied value. Relationship fields carry the parent id only.

use super::model::*;
use chrono::{DateTime, Utc};

/// Set `target` when the patch supplies a value
fn apply<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Same as [`apply`] for optional record fields
fn apply_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub status: Option<bool>,
    pub vendor_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChapterPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub project_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetPatch {
    pub lang_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub cts: Option<DateTime<Utc>>,
    pub project_chapter_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetSectionPatch {
    pub lang_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
    pub cts: Option<DateTime<Utc>>,
    pub order_position: Option<i32>,
    pub status: Option<bool>,
    pub snippet_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPropertyPatch {
    pub code: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangTypePatch {
    pub code: Option<String>,
}

impl Record for Vendor {
    type Patch = VendorPatch;
    const KIND: EntityKind = EntityKind::Vendor;
    const SORTABLE: &'static [&'static str] = &["id", "code", "name", "isActive"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn merge_patch(&mut self, patch: VendorPatch) {
        apply(&mut self.code, patch.code);
        apply(&mut self.name, patch.name);
        apply(&mut self.is_active, patch.is_active);
    }
}

impl Record for Project {
    type Patch = ProjectPatch;
    const KIND: EntityKind = EntityKind::Project;
    const SORTABLE: &'static [&'static str] = &["id", "code", "name", "status"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn merge_patch(&mut self, patch: ProjectPatch) {
        apply(&mut self.code, patch.code);
        apply(&mut self.name, patch.name);
        apply(&mut self.status, patch.status);
        apply_opt(&mut self.vendor_id, patch.vendor_id);
    }
}

impl Record for ProjectChapter {
    type Patch = ProjectChapterPatch;
    const KIND: EntityKind = EntityKind::ProjectChapter;
    const SORTABLE: &'static [&'static str] = &["id", "code", "name", "type"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn merge_patch(&mut self, patch: ProjectChapterPatch) {
        apply(&mut self.code, patch.code);
        apply(&mut self.name, patch.name);
        apply_opt(&mut self.r#type, patch.r#type);
        apply_opt(&mut self.project_id, patch.project_id);
    }
}

impl Record for Snippet {
    type Patch = SnippetPatch;
    const KIND: EntityKind = EntityKind::Snippet;
    const SORTABLE: &'static [&'static str] =
        &["id", "langType", "title", "description", "cts"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn merge_patch(&mut self, patch: SnippetPatch) {
        apply_opt(&mut self.lang_type, patch.lang_type);
        apply(&mut self.title, patch.title);
        apply_opt(&mut self.description, patch.description);
        apply(&mut self.text, patch.text);
        apply(&mut self.cts, patch.cts);
        apply_opt(&mut self.project_chapter_id, patch.project_chapter_id);
    }
}

impl Record for SnippetSection {
    type Patch = SnippetSectionPatch;
    const KIND: EntityKind = EntityKind::SnippetSection;
    const SORTABLE: &'static [&'static str] = &[
        "id",
        "langType",
        "title",
        "description",
        "cts",
        "orderPosition",
        "status",
    ];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn merge_patch(&mut self, patch: SnippetSectionPatch) {
        apply_opt(&mut self.lang_type, patch.lang_type);
        apply(&mut self.title, patch.title);
        apply_opt(&mut self.description, patch.description);
        apply(&mut self.text, patch.text);
        apply(&mut self.cts, patch.cts);
        apply(&mut self.order_position, patch.order_position);
        apply(&mut self.status, patch.status);
        apply_opt(&mut self.snippet_id, patch.snippet_id);
    }
}

impl Record for CommonProperty {
    type Patch = CommonPropertyPatch;
    const KIND: EntityKind = EntityKind::CommonProperty;
    const SORTABLE: &'static [&'static str] = &["id", "code"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn merge_patch(&mut self, patch: CommonPropertyPatch) {
        apply(&mut self.code, patch.code);
        apply_opt(&mut self.value, patch.value);
    }
}

impl Record for LangType {
    type Patch = LangTypePatch;
    const KIND: EntityKind = EntityKind::LangType;
    const SORTABLE: &'static [&'static str] = &["id", "code"];

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn merge_patch(&mut self, patch: LangTypePatch) {
        apply(&mut self.code, patch.code);
    }
}
