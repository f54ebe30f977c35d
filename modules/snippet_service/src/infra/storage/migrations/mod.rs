//! Database migrations for snippet service

use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_catalog::Migration),
            Box::new(m20240601_000002_create_snippets::Migration),
            Box::new(m20240601_000003_create_lookups::Migration),
        ]
    }
}

/// Auto-increment primary key column
///
/// SQLite only auto-increments `INTEGER PRIMARY KEY`, which is 64-bit there.
fn id_column<T: IntoIden>(manager: &SchemaManager, name: T) -> ColumnDef {
    let mut def = ColumnDef::new(name);
    match manager.get_database_backend() {
        DbBackend::Sqlite => def.integer(),
        _ => def.big_integer(),
    };
    def.not_null().auto_increment().primary_key();
    def
}

/// Index over a parent reference column
fn parent_index<T, C>(name: &str, table: T, column: C) -> IndexCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    Index::create()
        .name(name)
        .table(table)
        .col(column)
        .to_owned()
}

mod m20240601_000001_create_catalog {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_catalog"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vendor::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, Vendor::Id))
                        .col(ColumnDef::new(Vendor::Code).string().not_null())
                        .col(ColumnDef::new(Vendor::Name).string().not_null())
                        .col(ColumnDef::new(Vendor::IsActive).boolean().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Project::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, Project::Id))
                        .col(ColumnDef::new(Project::Code).string().not_null())
                        .col(ColumnDef::new(Project::Name).string().not_null())
                        .col(ColumnDef::new(Project::Status).boolean().not_null())
                        .col(ColumnDef::new(Project::VendorId).big_integer())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(parent_index(
                    "idx_project_vendor_id",
                    Project::Table,
                    Project::VendorId,
                ))
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProjectChapter::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, ProjectChapter::Id))
                        .col(ColumnDef::new(ProjectChapter::Code).string().not_null())
                        .col(ColumnDef::new(ProjectChapter::Name).string().not_null())
                        .col(ColumnDef::new(ProjectChapter::Type).string())
                        .col(ColumnDef::new(ProjectChapter::ProjectId).big_integer())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(parent_index(
                    "idx_project_chapter_project_id",
                    ProjectChapter::Table,
                    ProjectChapter::ProjectId,
                ))
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProjectChapter::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Project::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Vendor::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Vendor {
        Table,
        Id,
        Code,
        Name,
        IsActive,
    }

    #[derive(DeriveIden)]
    enum Project {
        Table,
        Id,
        Code,
        Name,
        Status,
        VendorId,
    }

    #[derive(DeriveIden)]
    enum ProjectChapter {
        Table,
        Id,
        Code,
        Name,
        Type,
        ProjectId,
    }
}

mod m20240601_000002_create_snippets {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000002_create_snippets"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Snippet::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, Snippet::Id))
                        .col(ColumnDef::new(Snippet::LangType).string())
                        .col(ColumnDef::new(Snippet::Title).string().not_null())
                        .col(ColumnDef::new(Snippet::Description).string())
                        .col(ColumnDef::new(Snippet::Text).text().not_null())
                        .col(
                            ColumnDef::new(Snippet::Cts)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Snippet::ProjectChapterId).big_integer())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(parent_index(
                    "idx_snippet_project_chapter_id",
                    Snippet::Table,
                    Snippet::ProjectChapterId,
                ))
                .await?;

            // No unique constraint on (snippet_id, order_position)
            manager
                .create_table(
                    Table::create()
                        .table(SnippetSection::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, SnippetSection::Id))
                        .col(ColumnDef::new(SnippetSection::LangType).string())
                        .col(ColumnDef::new(SnippetSection::Title).string().not_null())
                        .col(ColumnDef::new(SnippetSection::Description).string())
                        .col(ColumnDef::new(SnippetSection::Text).text().not_null())
                        .col(
                            ColumnDef::new(SnippetSection::Cts)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SnippetSection::OrderPosition)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SnippetSection::Status).boolean().not_null())
                        .col(ColumnDef::new(SnippetSection::SnippetId).big_integer())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(parent_index(
                    "idx_snippet_section_snippet_id",
                    SnippetSection::Table,
                    SnippetSection::SnippetId,
                ))
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SnippetSection::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Snippet::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Snippet {
        Table,
        Id,
        LangType,
        Title,
        Description,
        Text,
        Cts,
        ProjectChapterId,
    }

    #[derive(DeriveIden)]
    enum SnippetSection {
        Table,
        Id,
        LangType,
        Title,
        Description,
        Text,
        Cts,
        OrderPosition,
        Status,
        SnippetId,
    }
}

mod m20240601_000003_create_lookups {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000003_create_lookups"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CommonProperty::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, CommonProperty::Id))
                        .col(ColumnDef::new(CommonProperty::Code).string().not_null())
                        .col(ColumnDef::new(CommonProperty::Value).text())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(LangType::Table)
                        .if_not_exists()
                        .col(&mut id_column(manager, LangType::Id))
                        .col(ColumnDef::new(LangType::Code).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(LangType::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CommonProperty::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum CommonProperty {
        Table,
        Id,
        Code,
        Value,
    }

    #[derive(DeriveIden)]
    enum LangType {
        Table,
        Id,
        Code,
    }
}
