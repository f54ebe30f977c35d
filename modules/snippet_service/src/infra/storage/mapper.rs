//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract records

use super::entity;
use crate::contract::{
    CommonProperty, LangType, Project, ProjectChapter, Record, Snippet, SnippetSection, Vendor,
};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::EntityTrait;

/// Binds a SeaORM entity to the contract record it stores
pub trait StoredEntity: EntityTrait {
    type Record: Record;

    fn into_record(model: Self::Model) -> Self::Record;

    /// Active model with every column set; the id is left unset for new records
    fn to_active_model(record: &Self::Record) -> Self::ActiveModel;
}

macro_rules! stored_entity {
    ($module:ident => $record:ty) => {
        impl StoredEntity for entity::$module::Entity {
            type Record = $record;

            fn into_record(model: entity::$module::Model) -> $record {
                model.into()
            }

            fn to_active_model(record: &$record) -> entity::$module::ActiveModel {
                record.into()
            }
        }
    };
}

stored_entity!(vendor => Vendor);
stored_entity!(project => Project);
stored_entity!(project_chapter => ProjectChapter);
stored_entity!(snippet => Snippet);
stored_entity!(snippet_section => SnippetSection);
stored_entity!(common_property => CommonProperty);
stored_entity!(lang_type => LangType);

// ===== Vendor =====

impl From<entity::vendor::Model> for Vendor {
    fn from(entity: entity::vendor::Model) -> Self {
        Self {
            id: Some(entity.id),
            code: entity.code,
            name: entity.name,
            is_active: entity.is_active,
        }
    }
}

impl From<&Vendor> for entity::vendor::ActiveModel {
    fn from(model: &Vendor) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            code: Set(model.code.clone()),
            name: Set(model.name.clone()),
            is_active: Set(model.is_active),
        }
    }
}

// ===== Project =====

impl From<entity::project::Model> for Project {
    fn from(entity: entity::project::Model) -> Self {
        Self {
            id: Some(entity.id),
            code: entity.code,
            name: entity.name,
            status: entity.status,
            vendor_id: entity.vendor_id,
        }
    }
}

impl From<&Project> for entity::project::ActiveModel {
    fn from(model: &Project) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            code: Set(model.code.clone()),
            name: Set(model.name.clone()),
            status: Set(model.status),
            vendor_id: Set(model.vendor_id),
        }
    }
}

// ===== Project Chapter =====

impl From<entity::project_chapter::Model> for ProjectChapter {
    fn from(entity: entity::project_chapter::Model) -> Self {
        Self {
            id: Some(entity.id),
            code: entity.code,
            name: entity.name,
            r#type: entity.r#type,
            project_id: entity.project_id,
        }
    }
}

impl From<&ProjectChapter> for entity::project_chapter::ActiveModel {
    fn from(model: &ProjectChapter) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            code: Set(model.code.clone()),
            name: Set(model.name.clone()),
            r#type: Set(model.r#type.clone()),
            project_id: Set(model.project_id),
        }
    }
}

// ===== Snippet =====

impl From<entity::snippet::Model> for Snippet {
    fn from(entity: entity::snippet::Model) -> Self {
        Self {
            id: Some(entity.id),
            lang_type: entity.lang_type,
            title: entity.title,
            description: entity.description,
            text: entity.text,
            cts: entity.cts,
            project_chapter_id: entity.project_chapter_id,
        }
    }
}

impl From<&Snippet> for entity::snippet::ActiveModel {
    fn from(model: &Snippet) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            lang_type: Set(model.lang_type.clone()),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            text: Set(model.text.clone()),
            cts: Set(model.cts),
            project_chapter_id: Set(model.project_chapter_id),
        }
    }
}

// ===== Snippet Section =====

impl From<entity::snippet_section::Model> for SnippetSection {
    fn from(entity: entity::snippet_section::Model) -> Self {
        Self {
            id: Some(entity.id),
            lang_type: entity.lang_type,
            title: entity.title,
            description: entity.description,
            text: entity.text,
            cts: entity.cts,
            order_position: entity.order_position,
            status: entity.status,
            snippet_id: entity.snippet_id,
        }
    }
}

impl From<&SnippetSection> for entity::snippet_section::ActiveModel {
    fn from(model: &SnippetSection) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            lang_type: Set(model.lang_type.clone()),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            text: Set(model.text.clone()),
            cts: Set(model.cts),
            order_position: Set(model.order_position),
            status: Set(model.status),
            snippet_id: Set(model.snippet_id),
        }
    }
}

// ===== Common Property =====

impl From<entity::common_property::Model> for CommonProperty {
    fn from(entity: entity::common_property::Model) -> Self {
        Self {
            id: Some(entity.id),
            code: entity.code,
            value: entity.value,
        }
    }
}

impl From<&CommonProperty> for entity::common_property::ActiveModel {
    fn from(model: &CommonProperty) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            code: Set(model.code.clone()),
            value: Set(model.value.clone()),
        }
    }
}

// ===== Lang Type =====

impl From<entity::lang_type::Model> for LangType {
    fn from(entity: entity::lang_type::Model) -> Self {
        Self {
            id: Some(entity.id),
            code: entity.code,
        }
    }
}

impl From<&LangType> for entity::lang_type::ActiveModel {
    fn from(model: &LangType) -> Self {
        Self {
            id: model.id.map_or(NotSet, Set),
            code: Set(model.code.clone()),
        }
    }
}
