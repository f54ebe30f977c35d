//! Route registration
//!
//! Every entity kind gets the same six routes under its collection path:
//! `GET`/`POST` on the collection and `GET`/`PUT`/`PATCH`/`DELETE` on
//! `{collection}/{id}`. A `PUT` without an id hits the collection route and
//! is answered with 405 by the router.

use super::{dto::*, handlers, headers::AlertHeaders, mapper::EntityMapper, openapi};
use crate::config::Config;
use crate::contract::Record;
use crate::domain::EntityService;
use crate::module::Services;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Register all REST routes under the configured API prefix
pub fn register_routes(router: Router, services: &Services, config: &Config) -> anyhow::Result<Router> {
    let prefix = config.api_prefix.trim_end_matches('/');
    if !prefix.is_empty() && !prefix.starts_with('/') {
        anyhow::bail!("api_prefix must start with '/', got {:?}", config.api_prefix);
    }

    let alerts = Arc::new(AlertHeaders::new(
        &config.application_name,
        config.enable_alert_headers,
    ));

    let api = Router::new()
        .merge(resource_routes::<VendorDto>(services.vendors.clone(), prefix, &alerts))
        .merge(resource_routes::<ProjectDto>(services.projects.clone(), prefix, &alerts))
        .merge(resource_routes::<ProjectChapterDto>(
            services.project_chapters.clone(),
            prefix,
            &alerts,
        ))
        .merge(resource_routes::<SnippetDto>(services.snippets.clone(), prefix, &alerts))
        .merge(resource_routes::<SnippetSectionDto>(
            services.snippet_sections.clone(),
            prefix,
            &alerts,
        ))
        .merge(resource_routes::<CommonPropertyDto>(
            services.common_properties.clone(),
            prefix,
            &alerts,
        ))
        .merge(resource_routes::<LangTypeDto>(services.lang_types.clone(), prefix, &alerts))
        .route(
            "/openapi.json",
            get(openapi::openapi_json).layer(Extension(Arc::new(openapi::document(prefix)))),
        );

    tracing::debug!(prefix, "Mounted snippet REST routes");

    // Nesting at "/" is rejected by axum
    if prefix.is_empty() {
        Ok(router.merge(api))
    } else {
        Ok(router.nest(prefix, api))
    }
}

/// The six routes of one entity kind, sharing one [`handlers::ResourceContext`]
fn resource_routes<M: EntityMapper>(
    service: Arc<EntityService<M::Record>>,
    prefix: &str,
    alerts: &Arc<AlertHeaders>,
) -> Router {
    let resource = <M::Record as Record>::KIND.resource_path();
    let ctx = handlers::ResourceContext {
        service,
        alerts: alerts.clone(),
        base_path: format!("{}/{}", prefix, resource).into(),
    };

    Router::new()
        .route(
            &format!("/{}", resource),
            get(handlers::list::<M>).post(handlers::create::<M>),
        )
        .route(
            &format!("/{}/{{id}}", resource),
            get(handlers::get::<M>)
                .put(handlers::update::<M>)
                .patch(handlers::partial_update::<M>)
                .delete(handlers::delete::<M>),
        )
        .layer(Extension(ctx))
}
