//! End-to-end coverage for user registration and project endpoints.

mod common;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use common::{create_project_for, get_json, post_json, register, test_app};

#[actix_web::test]
async fn registration_is_idempotent_on_email() {
    let app = actix_test::init_service(test_app()).await;

    let first = register(&app, "ada@x.com", "Ada").await;
    let (status, second) = post_json(
        &app,
        "/api/users",
        json!({ "email": "ada@x.com", "name": "Different Name" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second.get("id"), first.get("id"));
    assert_eq!(second.get("name").and_then(Value::as_str), Some("Ada"));
}

#[actix_web::test]
async fn registration_rejects_a_malformed_email() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/users",
        json!({ "email": "not-an-email", "name": "Ada" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}

#[actix_web::test]
async fn creating_a_project_accepts_the_owner_email_key() {
    let app = actix_test::init_service(test_app()).await;
    register(&app, "ada@x.com", "Ada").await;

    let (status, body) = post_json(
        &app,
        "/api/projects",
        json!({ "title": "P", "description": "", "ownerEmail": "ada@x.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    assert!(body.get("id").is_some());
}

#[actix_web::test]
async fn creating_a_project_for_an_unknown_owner_is_404() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = post_json(
        &app,
        "/api/projects",
        json!({ "title": "P", "ownerEmail": "ghost@x.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body.pointer("/details/entity").and_then(Value::as_str),
        Some("user")
    );
}

#[actix_web::test]
async fn a_new_project_lists_for_its_owner_with_owner_profile() {
    let app = actix_test::init_service(test_app()).await;
    register(&app, "owner@x.com", "Olive").await;
    let project = create_project_for(&app, "Relaunch", "owner@x.com").await;

    let (status, body) = get_json(&app, "/api/projects/user/owner@x.com").await;

    assert_eq!(status, StatusCode::OK);
    let projects = body
        .get("projects")
        .and_then(Value::as_array)
        .expect("projects envelope");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].get("id"), project.get("id"));
    assert_eq!(
        projects[0]
            .pointer("/ownerProfile/name")
            .and_then(Value::as_str),
        Some("Olive")
    );
    assert_eq!(
        projects[0]
            .pointer("/ownerProfile/email")
            .and_then(Value::as_str),
        Some("owner@x.com")
    );
}

#[actix_web::test]
async fn added_members_see_the_project_in_their_listing() {
    let app = actix_test::init_service(test_app()).await;
    register(&app, "owner@x.com", "Olive").await;
    register(&app, "joiner@x.com", "Jo").await;
    let project = create_project_for(&app, "Shared", "owner@x.com").await;
    let project_id = project.get("id").and_then(Value::as_str).expect("id");

    let (before, _) = get_json(&app, "/api/projects/user/joiner@x.com").await;
    assert_eq!(before, StatusCode::OK);

    let (status, updated) = post_json(
        &app,
        &format!("/api/projects/{project_id}/members"),
        json!({ "email": "joiner@x.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let members = updated
        .get("members")
        .and_then(Value::as_array)
        .expect("members");
    assert_eq!(members.len(), 2);

    let (_, listing) = get_json(&app, "/api/projects/user/joiner@x.com").await;
    let projects = listing
        .get("projects")
        .and_then(Value::as_array)
        .expect("projects envelope");
    assert_eq!(projects.len(), 1);
    assert_eq!(
        projects[0].get("title").and_then(Value::as_str),
        Some("Shared")
    );
}

#[actix_web::test]
async fn non_members_do_not_see_the_project() {
    let app = actix_test::init_service(test_app()).await;
    register(&app, "owner@x.com", "Olive").await;
    register(&app, "other@x.com", "Max").await;
    create_project_for(&app, "Private", "owner@x.com").await;

    let (status, body) = get_json(&app, "/api/projects/user/other@x.com").await;

    assert_eq!(status, StatusCode::OK);
    let projects = body
        .get("projects")
        .and_then(Value::as_array)
        .expect("projects envelope");
    assert!(projects.is_empty());
}

#[actix_web::test]
async fn fetching_a_project_by_malformed_id_is_400() {
    let app = actix_test::init_service(test_app()).await;

    let (status, body) = get_json(&app, "/api/projects/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some("invalid_uuid")
    );
}

#[actix_web::test]
async fn every_response_carries_a_trace_id_header() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/projects/user/nobody@x.com")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get("trace-id")
        .expect("trace id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        Some(header.as_str())
    );
}

#[actix_web::test]
async fn readiness_probe_reports_ok() {
    let app = actix_test::init_service(test_app()).await;

    let req = actix_test::TestRequest::get()
        .uri("/health/ready")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}
