//! SeaORM entities for database tables
//!
//! Parent references are stored as plain id columns. The `belongs_to`
//! relations below are ORM-level only; no foreign-key constraint is declared
//! in the schema, so deleting a parent never cascades and never fails.

/// Vendor table entity
pub mod vendor {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "vendor")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub code: String,
        pub name: String,
        pub is_active: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Project table entity
pub mod project {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "project")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub code: String,
        pub name: String,
        pub status: bool,
        pub vendor_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::vendor::Entity",
            from = "Column::VendorId",
            to = "super::vendor::Column::Id"
        )]
        Vendor,
    }

    impl Related<super::vendor::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Vendor.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Project chapter table entity
pub mod project_chapter {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "project_chapter")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub code: String,
        pub name: String,
        pub r#type: Option<String>,
        pub project_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::project::Entity",
            from = "Column::ProjectId",
            to = "super::project::Column::Id"
        )]
        Project,
    }

    impl Related<super::project::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Project.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Snippet table entity
pub mod snippet {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "snippet")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub lang_type: Option<String>,
        pub title: String,
        pub description: Option<String>,
        #[sea_orm(column_type = "Text")]
        pub text: String,
        pub cts: DateTimeUtc,
        pub project_chapter_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::project_chapter::Entity",
            from = "Column::ProjectChapterId",
            to = "super::project_chapter::Column::Id"
        )]
        ProjectChapter,
    }

    impl Related<super::project_chapter::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::ProjectChapter.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Snippet section table entity
pub mod snippet_section {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "snippet_section")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub lang_type: Option<String>,
        pub title: String,
        pub description: Option<String>,
        #[sea_orm(column_type = "Text")]
        pub text: String,
        pub cts: DateTimeUtc,
        pub order_position: i32,
        pub status: bool,
        pub snippet_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::snippet::Entity",
            from = "Column::SnippetId",
            to = "super::snippet::Column::Id"
        )]
        Snippet,
    }

    impl Related<super::snippet::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Snippet.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Common property table entity
pub mod common_property {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "common_property")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub code: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub value: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Language type table entity
pub mod lang_type {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "lang_type")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub code: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
