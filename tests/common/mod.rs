//! Shared wiring for endpoint tests: a full application over in-process
//! entity store adapters.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, test as actix_test, web};
use serde_json::Value;

use taskboard::Trace;
use taskboard::domain::{
    PersonalTaskServiceImpl, ProjectServiceImpl, ProjectTaskServiceImpl, SettingsServiceImpl,
    UserDirectoryImpl,
};
use taskboard::inbound::http::health::{HealthState, live, ready};
use taskboard::inbound::http::projects::{
    add_member, create_project, get_project, list_project_tasks, list_projects_for_user,
};
use taskboard::inbound::http::settings::{get_settings, update_settings};
use taskboard::inbound::http::state::HttpState;
use taskboard::inbound::http::tasks::{
    create_task, delete_task, list_personal_tasks, set_task_status, toggle_task,
};
use taskboard::inbound::http::users::register_user;
use taskboard::outbound::persistence::{
    MemoryPersonalTaskRepository, MemoryProjectRepository, MemoryProjectTaskRepository,
    MemorySettingsStore, MemoryUserRepository,
};

fn build_state() -> HttpState {
    let users = Arc::new(MemoryUserRepository::new());
    let projects = Arc::new(MemoryProjectRepository::new());
    let project_tasks = Arc::new(MemoryProjectTaskRepository::new());
    let personal_tasks = Arc::new(MemoryPersonalTaskRepository::new());
    let settings = Arc::new(MemorySettingsStore::new());

    HttpState::new(
        Arc::new(UserDirectoryImpl::new(users.clone())),
        Arc::new(ProjectServiceImpl::new(projects.clone(), users.clone())),
        Arc::new(ProjectTaskServiceImpl::new(project_tasks, projects, users)),
        Arc::new(PersonalTaskServiceImpl::new(personal_tasks)),
        Arc::new(SettingsServiceImpl::new(settings)),
    )
}

/// Full application with every route mounted, backed by fresh stores.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();

    App::new()
        .app_data(health_state)
        .app_data(web::Data::new(build_state()))
        .wrap(Trace)
        .service(
            web::scope("/api")
                .service(register_user)
                .service(create_project)
                .service(list_projects_for_user)
                .service(get_project)
                .service(add_member)
                .service(list_project_tasks)
                .service(list_personal_tasks)
                .service(create_task)
                .service(toggle_task)
                .service(set_task_status)
                .service(delete_task)
                .service(get_settings)
                .service(update_settings),
        )
        .service(ready)
        .service(live)
}

/// POST a JSON body and return the parsed response body with its status.
pub async fn post_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    uri: &str,
    body: Value,
) -> (actix_web::http::StatusCode, Value) {
    let req = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    let body: Value = actix_test::read_body_json(res).await;
    (status, body)
}

/// GET a resource and return the parsed response body with its status.
pub async fn get_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    uri: &str,
) -> (actix_web::http::StatusCode, Value) {
    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    let body: Value = actix_test::read_body_json(res).await;
    (status, body)
}

/// Register a user and return the response body.
pub async fn register(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    email: &str,
    name: &str,
) -> Value {
    let (status, body) = post_json(
        app,
        "/api/users",
        serde_json::json!({ "email": email, "name": name }),
    )
    .await;
    assert!(status.is_success(), "registration failed: {body}");
    body
}

/// Create a project and return the response body.
pub async fn create_project_for(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    title: &str,
    owner_email: &str,
) -> Value {
    let (status, body) = post_json(
        app,
        "/api/projects",
        serde_json::json!({ "title": title, "description": "", "ownerEmail": owner_email }),
    )
    .await;
    assert!(status.is_success(), "project creation failed: {body}");
    body
}
