//! OpenAPI document for the REST surface
//!
//! Schemas come from the `ToSchema` derives on the DTOs. Paths are built
//! here because the handlers are generic and shared by every entity kind.

use super::dto::*;
use crate::contract::EntityKind;
use axum::{Extension, Json};
use std::sync::Arc;
use utoipa::{
    openapi::{
        path::{HttpMethod, OperationBuilder, PathItemBuilder},
        response::ResponseBuilder,
        OpenApi as OpenApiDocument, Paths, PathsBuilder,
    },
    OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Snippeter API", description = "Snippets organised by vendor, project and chapter"),
    components(schemas(
        IdRef,
        VendorDto,
        ProjectDto,
        ProjectChapterDto,
        SnippetDto,
        SnippetSectionDto,
        CommonPropertyDto,
        LangTypeDto
    ))
)]
struct ApiDoc;

/// Build the document for routes mounted under `prefix`
pub fn document(prefix: &str) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.paths = paths(prefix);
    doc
}

/// `GET {prefix}/openapi.json`
pub async fn openapi_json(
    Extension(doc): Extension<Arc<OpenApiDocument>>,
) -> Json<OpenApiDocument> {
    Json(doc.as_ref().clone())
}

fn paths(prefix: &str) -> Paths {
    let mut builder = PathsBuilder::new();

    for kind in EntityKind::ALL {
        let name = kind.entity_name();
        let collection = format!("{}/{}", prefix, kind.resource_path());

        let collection_item = PathItemBuilder::new()
            .operation(
                HttpMethod::Get,
                operation(kind, "list", format!("List every {}", name), &[("200", "OK")]),
            )
            .operation(
                HttpMethod::Post,
                operation(
                    kind,
                    "create",
                    format!("Create a {}", name),
                    &[("201", "Created"), ("400", "Invalid request")],
                ),
            )
            .build();

        let item = PathItemBuilder::new()
            .operation(
                HttpMethod::Get,
                operation(
                    kind,
                    "get",
                    format!("Get one {}", name),
                    &[("200", "OK"), ("404", "Not found")],
                ),
            )
            .operation(
                HttpMethod::Put,
                operation(
                    kind,
                    "update",
                    format!("Replace a {}", name),
                    &[("200", "OK"), ("400", "Invalid request")],
                ),
            )
            .operation(
                HttpMethod::Patch,
                operation(
                    kind,
                    "partialUpdate",
                    format!("Merge fields into a {}", name),
                    &[("200", "OK"), ("400", "Invalid request")],
                ),
            )
            .operation(
                HttpMethod::Delete,
                operation(kind, "delete", format!("Delete a {}", name), &[("204", "Deleted")]),
            )
            .build();

        builder = builder
            .path(collection.clone(), collection_item)
            .path(format!("{}/{{id}}", collection), item);
    }

    builder.build()
}

fn operation(
    kind: EntityKind,
    action: &str,
    summary: String,
    responses: &[(&str, &str)],
) -> OperationBuilder {
    let mut op = OperationBuilder::new()
        .operation_id(Some(format!("{}.{}", kind.entity_name(), action)))
        .summary(Some(summary))
        .tags(Some(vec![kind.entity_name().to_string()]));

    for (status, description) in responses {
        op = op.response(*status, ResponseBuilder::new().description(*description).build());
    }
    op
}
