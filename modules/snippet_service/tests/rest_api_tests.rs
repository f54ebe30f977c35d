//! REST surface tests: router over in-memory SQLite

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use snippet_service::contract::EntityKind;
use snippet_service::Config;

mod common;
use common::*;

/// A complete create body for `kind`
fn valid_body(kind: EntityKind) -> Value {
    match kind {
        EntityKind::Vendor => json!({"code": DEFAULT_CODE, "name": DEFAULT_NAME, "isActive": false}),
        EntityKind::Project => json!({"code": DEFAULT_CODE, "name": DEFAULT_NAME, "status": false}),
        EntityKind::ProjectChapter => json!({"code": DEFAULT_CODE, "name": DEFAULT_NAME, "type": "AAAAAAAAAA"}),
        EntityKind::Snippet => json!({
            "langType": "rust",
            "title": "AAAAAAAAAA",
            "description": "AAAAAAAAAA",
            "text": "fn main() {}",
            "cts": "2024-06-01T12:00:00Z"
        }),
        EntityKind::SnippetSection => json!({
            "langType": "rust",
            "title": "AAAAAAAAAA",
            "description": "AAAAAAAAAA",
            "text": "fn main() {}",
            "cts": "2024-06-01T12:00:00Z",
            "orderPosition": 1,
            "status": false
        }),
        EntityKind::CommonProperty => json!({"code": DEFAULT_CODE, "value": "AAAAAAAAAA"}),
        EntityKind::LangType => json!({"code": DEFAULT_CODE}),
    }
}

fn collection(kind: EntityKind) -> String {
    format!("/api/{}", kind.resource_path())
}

fn with_id(mut body: Value, id: i64) -> Value {
    body["id"] = json!(id);
    body
}

async fn create(app: &axum::Router, kind: EntityKind, body: Value) -> i64 {
    let response = send(app, Method::POST, &collection(kind), Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "create {}: {}", kind, response.body);
    response.id()
}

#[tokio::test]
async fn test_vendor_project_scenario_without_cascade() {
    print_test_header(
        "test_vendor_project_scenario_without_cascade",
        &[
            "Create a vendor and a project under it, list projects,",
            "delete the vendor and check the project is untouched.",
        ],
    );
    let app = sqlite_app().await;

    let vendor = send(
        &app,
        Method::POST,
        "/api/vendors",
        Some(json!({"code": "V1", "name": "Vendor One", "isActive": true})),
    )
    .await;
    assert_eq!(vendor.status, StatusCode::CREATED);
    let vendor_id = vendor.id();

    let project = send(
        &app,
        Method::POST,
        "/api/projects",
        Some(json!({
            "code": "P1",
            "name": "Project One",
            "status": true,
            "vendor": {"id": vendor_id}
        })),
    )
    .await;
    assert_eq!(project.status, StatusCode::CREATED);
    let project_id = project.id();

    let projects = send(&app, Method::GET, "/api/projects", None).await;
    assert_eq!(projects.status, StatusCode::OK);
    let listed = projects.body.as_array().expect("list body is an array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], json!(project_id));
    assert_eq!(listed[0]["vendor"], json!({"id": vendor_id}));

    let deleted = send(&app, Method::DELETE, &format!("/api/vendors/{}", vendor_id), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(deleted.body, Value::Null);

    let gone = send(&app, Method::GET, &format!("/api/vendors/{}", vendor_id), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let untouched = send(&app, Method::GET, &format!("/api/projects/{}", project_id), None).await;
    assert_eq!(untouched.status, StatusCode::OK);
    assert_eq!(untouched.body, listed[0]);
}

#[tokio::test]
async fn test_create_with_id_is_rejected_for_every_kind() {
    print_test_header(
        "test_create_with_id_is_rejected_for_every_kind",
        &["A create body carrying an id fails with idexists and stores nothing."],
    );
    let app = sqlite_app().await;

    for kind in EntityKind::ALL {
        let response = send(
            &app,
            Method::POST,
            &collection(kind),
            Some(with_id(valid_body(kind), 1)),
        )
        .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", kind);
        assert_eq!(response.body["errorKey"], "idexists", "{}", kind);
        assert_eq!(response.body["message"], "error.idexists");
        assert_eq!(response.body["entityName"], kind.entity_name());

        let list = send(&app, Method::GET, &collection(kind), None).await;
        assert_eq!(list.body, json!([]), "{}", kind);
    }
}

#[tokio::test]
async fn test_example_vendor_with_id_is_rejected() {
    let app = sqlite_app().await;
    let response = send(
        &app,
        Method::POST,
        "/api/vendors",
        Some(json!({"id": 1, "code": "A", "name": "B", "isActive": true})),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorKey"], "idexists");
}

#[tokio::test]
async fn test_update_id_mismatch_is_checked_before_existence() {
    print_test_header(
        "test_update_id_mismatch_is_checked_before_existence",
        &["PUT and PATCH with path id 5 and body id 7 fail with idinvalid on an empty store."],
    );
    let app = sqlite_app().await;

    for kind in EntityKind::ALL {
        let uri = format!("{}/5", collection(kind));
        for method in [Method::PUT, Method::PATCH] {
            let response = send(&app, method.clone(), &uri, Some(with_id(valid_body(kind), 7))).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST, "{} {}", method, kind);
            assert_eq!(response.body["errorKey"], "idinvalid", "{} {}", method, kind);
        }
    }
}

#[tokio::test]
async fn test_update_id_rules_in_order() {
    let app = sqlite_app().await;
    let kind = EntityKind::Vendor;
    let id = create(&app, kind, valid_body(kind)).await;

    for method in [Method::PUT, Method::PATCH] {
        let missing = send(
            &app,
            method.clone(),
            &format!("/api/vendors/{}", id),
            Some(valid_body(kind)),
        )
        .await;
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.body["errorKey"], "idnull");

        let unknown = i64::MAX;
        let not_found = send(
            &app,
            method.clone(),
            &format!("/api/vendors/{}", unknown),
            Some(with_id(valid_body(kind), unknown)),
        )
        .await;
        assert_eq!(not_found.status, StatusCode::BAD_REQUEST);
        assert_eq!(not_found.body["errorKey"], "idnotfound");
    }
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found_for_every_kind() {
    let app = sqlite_app().await;

    for kind in EntityKind::ALL {
        let response = send(&app, Method::GET, &format!("{}/{}", collection(kind), i64::MAX), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", kind);
        assert_eq!(response.body["status"], 404);
        assert_eq!(response.body["errorKey"], "notfound");
    }
}

#[tokio::test]
async fn test_full_round_trip_for_every_kind() {
    print_test_header(
        "test_full_round_trip_for_every_kind",
        &["Create, get, update and delete one record of every kind."],
    );
    let app = sqlite_app().await;

    for kind in EntityKind::ALL {
        let id = create(&app, kind, valid_body(kind)).await;
        let uri = format!("{}/{}", collection(kind), id);

        let fetched = send(&app, Method::GET, &uri, None).await;
        assert_eq!(fetched.status, StatusCode::OK, "{}", kind);
        assert_eq!(fetched.body, with_id(valid_body(kind), id), "{}", kind);

        let updated = send(&app, Method::PUT, &uri, Some(with_id(valid_body(kind), id))).await;
        assert_eq!(updated.status, StatusCode::OK, "{}", kind);
        assert_eq!(updated.body, with_id(valid_body(kind), id), "{}", kind);

        let deleted = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(deleted.status, StatusCode::NO_CONTENT, "{}", kind);
        assert_eq!(
            send(&app, Method::GET, &uri, None).await.status,
            StatusCode::NOT_FOUND
        );
    }
}

#[tokio::test]
async fn test_put_replaces_every_field() {
    let app = sqlite_app().await;
    let id = create(&app, EntityKind::Vendor, valid_body(EntityKind::Vendor)).await;

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/vendors/{}", id),
        Some(json!({"id": id, "code": UPDATED_CODE, "name": UPDATED_NAME, "isActive": true})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"id": id, "code": UPDATED_CODE, "name": UPDATED_NAME, "isActive": true})
    );
}

#[tokio::test]
async fn test_required_field_missing_is_rejected() {
    let app = sqlite_app().await;

    let on_create = send(
        &app,
        Method::POST,
        "/api/vendors",
        Some(json!({"code": DEFAULT_CODE, "isActive": true})),
    )
    .await;
    assert_eq!(on_create.status, StatusCode::BAD_REQUEST);
    assert_eq!(on_create.body["errorKey"], "fieldrequired");

    let id = create_vendor(&app).await;
    let update = send(
        &app,
        Method::PUT,
        &format!("/api/vendors/{}", id),
        Some(json!({"id": id, "code": DEFAULT_CODE, "name": null, "isActive": true})),
    )
    .await;
    assert_eq!(update.status, StatusCode::BAD_REQUEST);
    assert_eq!(update.body["errorKey"], "fieldrequired");
}

async fn create_vendor(app: &axum::Router) -> i64 {
    create(app, EntityKind::Vendor, valid_body(EntityKind::Vendor)).await
}

#[tokio::test]
async fn test_partial_update_changes_only_supplied_fields() {
    print_test_header(
        "test_partial_update_changes_only_supplied_fields",
        &[
            "PATCH overwrites present fields and keeps absent or null ones.",
            "An empty string counts as present.",
        ],
    );
    let app = sqlite_app().await;
    let id = create(&app, EntityKind::Snippet, valid_body(EntityKind::Snippet)).await;
    let uri = format!("/api/snippets/{}", id);

    let response = send(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({"id": id, "title": "BBBBBBBBBB", "description": "", "text": null})),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let mut expected = with_id(valid_body(EntityKind::Snippet), id);
    expected["title"] = json!("BBBBBBBBBB");
    expected["description"] = json!("");
    assert_eq!(response.body, expected);

    let stored = send(&app, Method::GET, &uri, None).await;
    assert_eq!(stored.body, expected);
}

#[tokio::test]
async fn test_partial_update_accepts_plain_json() {
    let app = sqlite_app().await;
    let id = create_vendor(&app).await;

    let response = send_as(
        &app,
        Method::PATCH,
        &format!("/api/vendors/{}", id),
        "application/json",
        Some(json!({"id": id, "isActive": true})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isActive"], true);
    assert_eq!(response.body["code"], DEFAULT_CODE);
}

#[tokio::test]
async fn test_partial_update_moves_section_to_another_snippet() {
    let app = sqlite_app().await;
    let mut body = valid_body(EntityKind::SnippetSection);
    body["snippet"] = json!({"id": 1});
    let id = create(&app, EntityKind::SnippetSection, body).await;

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/snippet-sections/{}", id),
        Some(json!({"id": id, "snippet": {"id": 2}})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["snippet"], json!({"id": 2}));
    assert_eq!(response.body["orderPosition"], 1);
}

#[tokio::test]
async fn test_sections_may_share_order_position() {
    print_test_header(
        "test_sections_may_share_order_position",
        &["Two sections of the same snippet with equal orderPosition are both created."],
    );
    let app = sqlite_app().await;
    let snippet_id = create(&app, EntityKind::Snippet, valid_body(EntityKind::Snippet)).await;

    let mut body = valid_body(EntityKind::SnippetSection);
    body["snippet"] = json!({"id": snippet_id});
    let first = create(&app, EntityKind::SnippetSection, body.clone()).await;
    let second = create(&app, EntityKind::SnippetSection, body).await;
    assert_ne!(first, second);

    let list = send(&app, Method::GET, "/api/snippet-sections", None).await;
    assert_eq!(list.body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_write_responses_carry_alert_and_location_headers() {
    print_test_header(
        "test_write_responses_carry_alert_and_location_headers",
        &["Create sets Location; create, update and delete set the alert headers."],
    );
    let app = sqlite_app().await;

    let created = send(
        &app,
        Method::POST,
        "/api/snippet-sections",
        Some(valid_body(EntityKind::SnippetSection)),
    )
    .await;
    let id = created.id();
    let location = format!("/api/snippet-sections/{}", id);
    assert_eq!(created.header("location"), Some(location.as_str()));
    assert_eq!(
        created.header("x-snippeterapp-alert"),
        Some("snippeterApp.snippetSection.created")
    );
    assert_eq!(created.header("x-snippeterapp-params"), Some(id.to_string().as_str()));

    let updated = send(
        &app,
        Method::PATCH,
        &location,
        Some(json!({"id": id, "status": true})),
    )
    .await;
    assert_eq!(
        updated.header("x-snippeterapp-alert"),
        Some("snippeterApp.snippetSection.updated")
    );

    let deleted = send(&app, Method::DELETE, &location, None).await;
    assert_eq!(
        deleted.header("x-snippeterapp-alert"),
        Some("snippeterApp.snippetSection.deleted")
    );
}

#[tokio::test]
async fn test_delete_unknown_id_succeeds() {
    let app = sqlite_app().await;
    let response = send(&app, Method::DELETE, &format!("/api/vendors/{}", i64::MAX), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_non_numeric_path_id_is_bad_request() {
    print_test_header(
        "test_non_numeric_path_id_is_bad_request",
        &["A path id that is not an integer is answered with a badrequest problem."],
    );
    let app = sqlite_app().await;
    let body = Some(valid_body(EntityKind::Vendor));
    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, body.clone()),
        (Method::PATCH, body),
        (Method::DELETE, None),
    ] {
        let response = send(&app, method.clone(), "/api/vendors/abc", body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", method);
        assert_eq!(response.body["errorKey"], "badrequest", "{}", method);
        assert_eq!(response.body["status"], 400, "{}", method);
    }
}

#[tokio::test]
async fn test_put_on_collection_is_method_not_allowed() {
    let app = sqlite_app().await;
    let response = send(&app, Method::PUT, "/api/vendors", Some(valid_body(EntityKind::Vendor))).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_list_sorting() {
    print_test_header(
        "test_list_sorting",
        &["sort=property,direction orders the listing; unknown properties are rejected."],
    );
    let app = sqlite_app().await;
    for code in ["B", "C", "A"] {
        create(&app, EntityKind::LangType, json!({"code": code})).await;
    }

    let codes = |body: &Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|v| v["code"].as_str().unwrap().to_string())
            .collect()
    };

    let unsorted = send(&app, Method::GET, "/api/lang-types", None).await;
    assert_eq!(codes(&unsorted.body), ["B", "C", "A"]);

    let asc = send(&app, Method::GET, "/api/lang-types?sort=code", None).await;
    assert_eq!(codes(&asc.body), ["A", "B", "C"]);

    let desc = send(&app, Method::GET, "/api/lang-types?sort=code,desc", None).await;
    assert_eq!(codes(&desc.body), ["C", "B", "A"]);

    let invalid = send(&app, Method::GET, "/api/lang-types?sort=password,asc", None).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["errorKey"], "sortinvalid");
}

#[tokio::test]
async fn test_unreadable_bodies_are_rejected() {
    let app = sqlite_app().await;

    let no_body = send_as(&app, Method::POST, "/api/vendors", "application/json", None).await;
    assert_eq!(no_body.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let wrong_type = send(
        &app,
        Method::POST,
        "/api/vendors",
        Some(json!({"code": DEFAULT_CODE, "name": DEFAULT_NAME, "isActive": "yes"})),
    )
    .await;
    assert!(wrong_type.status.is_client_error());
    assert_eq!(wrong_type.body["errorKey"], "badrequest");

    let text = send_as(
        &app,
        Method::POST,
        "/api/vendors",
        "text/plain",
        Some(valid_body(EntityKind::Vendor)),
    )
    .await;
    assert_eq!(text.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_custom_prefix_and_disabled_alerts() {
    let app = sqlite_app_with(Config {
        api_prefix: "/v2".to_string(),
        enable_alert_headers: false,
        ..Config::default()
    })
    .await;

    let created = send(&app, Method::POST, "/v2/vendors", Some(valid_body(EntityKind::Vendor))).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.header("location"),
        Some(format!("/v2/vendors/{}", created.id()).as_str())
    );
    assert!(created.header("x-snippeterapp-alert").is_none());

    let old = send(&app, Method::GET, "/api/vendors", None).await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_prefix_mounts_at_root() {
    let app = sqlite_app_with(Config {
        api_prefix: String::new(),
        ..Config::default()
    })
    .await;

    let list = send(&app, Method::GET, "/common-properties", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn test_openapi_document_lists_every_resource() {
    let app = sqlite_app().await;
    let response = send(&app, Method::GET, "/api/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    for kind in EntityKind::ALL {
        let path = collection(kind);
        assert!(response.body["paths"][&path]["get"].is_object(), "{}", path);
        assert!(
            response.body["paths"][format!("{}/{{id}}", path)]["patch"].is_object(),
            "{}",
            path
        );
    }
    assert!(response.body["components"]["schemas"]["SnippetSectionDto"].is_object());
}
