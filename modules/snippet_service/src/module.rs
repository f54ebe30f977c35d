//! Module declaration and lifecycle

use crate::config::Config;
use crate::contract::{
    CommonProperty, LangType, Project, ProjectChapter, Snippet, SnippetSection, Vendor,
};
use crate::domain::{EntityRepository, EntityService};
use crate::infra::storage::{entity, SeaOrmRepository};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// One domain service per entity kind
pub struct Services {
    pub vendors: Arc<EntityService<Vendor>>,
    pub projects: Arc<EntityService<Project>>,
    pub project_chapters: Arc<EntityService<ProjectChapter>>,
    pub snippets: Arc<EntityService<Snippet>>,
    pub snippet_sections: Arc<EntityService<SnippetSection>>,
    pub common_properties: Arc<EntityService<CommonProperty>>,
    pub lang_types: Arc<EntityService<LangType>>,
}

impl Services {
    /// Services backed by the SeaORM repositories on `db`
    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        Self {
            vendors: service(SeaOrmRepository::<entity::vendor::Entity>::new(db.clone())),
            projects: service(SeaOrmRepository::<entity::project::Entity>::new(db.clone())),
            project_chapters: service(SeaOrmRepository::<entity::project_chapter::Entity>::new(
                db.clone(),
            )),
            snippets: service(SeaOrmRepository::<entity::snippet::Entity>::new(db.clone())),
            snippet_sections: service(SeaOrmRepository::<entity::snippet_section::Entity>::new(
                db.clone(),
            )),
            common_properties: service(SeaOrmRepository::<entity::common_property::Entity>::new(
                db.clone(),
            )),
            lang_types: service(SeaOrmRepository::<entity::lang_type::Entity>::new(db)),
        }
    }
}

fn service<R, T>(repo: T) -> Arc<EntityService<R>>
where
    R: crate::contract::Record,
    T: EntityRepository<R> + 'static,
{
    Arc::new(EntityService::new(Arc::new(repo)))
}

/// Snippet service module
pub struct SnippetServiceModule {
    config: RwLock<Config>,
    services: RwLock<Option<Arc<Services>>>,
}

impl Default for SnippetServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            services: RwLock::new(None),
        }
    }
}

impl SnippetServiceModule {
    /// Build the SeaORM-backed services
    pub fn init(&self, config: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        self.init_with(config, Services::from_connection(db))
    }

    /// Install prebuilt services, e.g. over in-memory repositories
    pub fn init_with(&self, config: Config, services: Services) -> Result<()> {
        *self.config.write() = config;
        *self.services.write() = Some(Arc::new(services));

        tracing::info!("Snippet service initialized");
        Ok(())
    }

    /// Run pending schema migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Snippet service migrations completed");
        Ok(())
    }

    /// Mount the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let services = self
            .services
            .read()
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))?
            .clone();
        let config = self.config.read().clone();

        tracing::info!(prefix = %config.api_prefix, "Registering snippet service REST routes");
        crate::api::rest::routes::register_routes(router, &services, &config)
    }
}
