//! Mapper implementations for converting between DTOs and contract records
//!
//! Three conversions per entity kind:
//! - record to DTO, reducing relationships to id stubs
//! - DTO to record, requiring every mandatory field
//! - DTO to merge-patch, keeping only the fields that were supplied

use super::dto::*;
use crate::contract::{self, EntityId, EntityKind, Record, SnippetError};
use crate::domain::validation::required;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Binds a DTO to the record it transfers
pub trait EntityMapper: Serialize + DeserializeOwned + Debug + Send + Sync + 'static {
    type Record: Record;

    fn id(&self) -> Option<EntityId>;

    fn to_wire(record: Self::Record) -> Self;

    fn to_record(self) -> Result<Self::Record, SnippetError>;

    fn to_patch(self) -> <Self::Record as Record>::Patch;
}

macro_rules! entity_mapper {
    ($dto:ty => $record:ty, $patch:ty) => {
        impl EntityMapper for $dto {
            type Record = $record;

            fn id(&self) -> Option<EntityId> {
                self.id
            }

            fn to_wire(record: $record) -> Self {
                record.into()
            }

            fn to_record(self) -> Result<$record, SnippetError> {
                self.try_into()
            }

            fn to_patch(self) -> $patch {
                self.into()
            }
        }
    };
}

entity_mapper!(VendorDto => contract::Vendor, contract::VendorPatch);
entity_mapper!(ProjectDto => contract::Project, contract::ProjectPatch);
entity_mapper!(ProjectChapterDto => contract::ProjectChapter, contract::ProjectChapterPatch);
entity_mapper!(SnippetDto => contract::Snippet, contract::SnippetPatch);
entity_mapper!(SnippetSectionDto => contract::SnippetSection, contract::SnippetSectionPatch);
entity_mapper!(CommonPropertyDto => contract::CommonProperty, contract::CommonPropertyPatch);
entity_mapper!(LangTypeDto => contract::LangType, contract::LangTypePatch);

fn stub(id: Option<EntityId>) -> Option<IdRef> {
    id.map(|id| IdRef { id })
}

fn stub_id(stub: Option<IdRef>) -> Option<EntityId> {
    stub.map(|s| s.id)
}

// ===== Vendor conversions =====

impl From<contract::Vendor> for VendorDto {
    fn from(vendor: contract::Vendor) -> Self {
        Self {
            id: vendor.id,
            code: Some(vendor.code),
            name: Some(vendor.name),
            is_active: Some(vendor.is_active),
        }
    }
}

impl TryFrom<VendorDto> for contract::Vendor {
    type Error = SnippetError;

    fn try_from(dto: VendorDto) -> Result<Self, Self::Error> {
        const KIND: EntityKind = EntityKind::Vendor;
        Ok(Self {
            id: dto.id,
            code: required(KIND, "code", dto.code)?,
            name: required(KIND, "name", dto.name)?,
            is_active: required(KIND, "isActive", dto.is_active)?,
        })
    }
}

impl From<VendorDto> for contract::VendorPatch {
    fn from(dto: VendorDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            is_active: dto.is_active,
        }
    }
}

// ===== Project conversions =====

impl From<contract::Project> for ProjectDto {
    fn from(project: contract::Project) -> Self {
        Self {
            id: project.id,
            code: Some(project.code),
            name: Some(project.name),
            status: Some(project.status),
            vendor: stub(project.vendor_id),
        }
    }
}

impl TryFrom<ProjectDto> for contract::Project {
    type Error = SnippetError;

    fn try_from(dto: ProjectDto) -> Result<Self, Self::Error> {
        const KIND: EntityKind = EntityKind::Project;
        Ok(Self {
            id: dto.id,
            code: required(KIND, "code", dto.code)?,
            name: required(KIND, "name", dto.name)?,
            status: required(KIND, "status", dto.status)?,
            vendor_id: stub_id(dto.vendor),
        })
    }
}

impl From<ProjectDto> for contract::ProjectPatch {
    fn from(dto: ProjectDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            status: dto.status,
            vendor_id: stub_id(dto.vendor),
        }
    }
}

// ===== Project Chapter conversions =====

impl From<contract::ProjectChapter> for ProjectChapterDto {
    fn from(chapter: contract::ProjectChapter) -> Self {
        Self {
            id: chapter.id,
            code: Some(chapter.code),
            name: Some(chapter.name),
            r#type: chapter.r#type,
            project: stub(chapter.project_id),
        }
    }
}

impl TryFrom<ProjectChapterDto> for contract::ProjectChapter {
    type Error = SnippetError;

    fn try_from(dto: ProjectChapterDto) -> Result<Self, Self::Error> {
        const KIND: EntityKind = EntityKind::ProjectChapter;
        Ok(Self {
            id: dto.id,
            code: required(KIND, "code", dto.code)?,
            name: required(KIND, "name", dto.name)?,
            r#type: dto.r#type,
            project_id: stub_id(dto.project),
        })
    }
}

impl From<ProjectChapterDto> for contract::ProjectChapterPatch {
    fn from(dto: ProjectChapterDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            r#type: dto.r#type,
            project_id: stub_id(dto.project),
        }
    }
}

// ===== Snippet conversions =====

impl From<contract::Snippet> for SnippetDto {
    fn from(snippet: contract::Snippet) -> Self {
        Self {
            id: snippet.id,
            lang_type: snippet.lang_type,
            title: Some(snippet.title),
            description: snippet.description,
            text: Some(snippet.text),
            cts: Some(snippet.cts),
            project_chapter: stub(snippet.project_chapter_id),
        }
    }
}

impl TryFrom<SnippetDto> for contract::Snippet {
    type Error = SnippetError;

    fn try_from(dto: SnippetDto) -> Result<Self, Self::Error> {
        const KIND: EntityKind = EntityKind::Snippet;
        Ok(Self {
            id: dto.id,
            lang_type: dto.lang_type,
            title: required(KIND, "title", dto.title)?,
            description: dto.description,
            text: required(KIND, "text", dto.text)?,
            cts: required(KIND, "cts", dto.cts)?,
            project_chapter_id: stub_id(dto.project_chapter),
        })
    }
}

impl From<SnippetDto> for contract::SnippetPatch {
    fn from(dto: SnippetDto) -> Self {
        Self {
            lang_type: dto.lang_type,
            title: dto.title,
            description: dto.description,
            text: dto.text,
            cts: dto.cts,
            project_chapter_id: stub_id(dto.project_chapter),
        }
    }
}

// ===== Snippet Section conversions =====

impl From<contract::SnippetSection> for SnippetSectionDto {
    fn from(section: contract::SnippetSection) -> Self {
        Self {
            id: section.id,
            lang_type: section.lang_type,
            title: Some(section.title),
            description: section.description,
            text: Some(section.text),
            cts: Some(section.cts),
            order_position: Some(section.order_position),
            status: Some(section.status),
            snippet: stub(section.snippet_id),
        }
    }
}

impl TryFrom<SnippetSectionDto> for contract::SnippetSection {
    type Error = SnippetError;

    fn try_from(dto: SnippetSectionDto) -> Result<Self, Self::Error> {
        const KIND: EntityKind = EntityKind::SnippetSection;
        Ok(Self {
            id: dto.id,
            lang_type: dto.lang_type,
            title: required(KIND, "title", dto.title)?,
            description: dto.description,
            text: required(KIND, "text", dto.text)?,
            cts: required(KIND, "cts", dto.cts)?,
            order_position: required(KIND, "orderPosition", dto.order_position)?,
            status: required(KIND, "status", dto.status)?,
            snippet_id: stub_id(dto.snippet),
        })
    }
}

impl From<SnippetSectionDto> for contract::SnippetSectionPatch {
    fn from(dto: SnippetSectionDto) -> Self {
        Self {
            lang_type: dto.lang_type,
            title: dto.title,
            description: dto.description,
            text: dto.text,
            cts: dto.cts,
            order_position: dto.order_position,
            status: dto.status,
            snippet_id: stub_id(dto.snippet),
        }
    }
}

// ===== Common Property conversions =====

impl From<contract::CommonProperty> for CommonPropertyDto {
    fn from(property: contract::CommonProperty) -> Self {
        Self {
            id: property.id,
            code: Some(property.code),
            value: property.value,
        }
    }
}

impl TryFrom<CommonPropertyDto> for contract::CommonProperty {
    type Error = SnippetError;

    fn try_from(dto: CommonPropertyDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            code: required(EntityKind::CommonProperty, "code", dto.code)?,
            value: dto.value,
        })
    }
}

impl From<CommonPropertyDto> for contract::CommonPropertyPatch {
    fn from(dto: CommonPropertyDto) -> Self {
        Self {
            code: dto.code,
            value: dto.value,
        }
    }
}

// ===== Lang Type conversions =====

impl From<contract::LangType> for LangTypeDto {
    fn from(lang_type: contract::LangType) -> Self {
        Self {
            id: lang_type.id,
            code: Some(lang_type.code),
        }
    }
}

impl TryFrom<LangTypeDto> for contract::LangType {
    type Error = SnippetError;

    fn try_from(dto: LangTypeDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            code: required(EntityKind::LangType, "code", dto.code)?,
        })
    }
}

impl From<LangTypeDto> for contract::LangTypePatch {
    fn from(dto: LangTypeDto) -> Self {
        Self { code: dto.code }
    }
}
