//! Project HTTP handlers.
//!
//! ```text
//! POST /api/projects
//! GET  /api/projects/user/{email}
//! GET  /api/projects/{id}
//! POST /api/projects/{id}/members
//! GET  /api/projects/{id}/tasks
//! ```
//!
//! Membership listings live under `/projects/user/{email}` so the email
//! segment never collides with a project identifier.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Project, ProjectTask, ProjectWithOwner};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_project_id};

/// Request payload for creating a project.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Email of the owning user.
    pub owner_email: Option<String>,
}

#[derive(Debug)]
struct ParsedProject {
    title: String,
    description: String,
    owner_email: String,
}

fn parse_create_request(payload: CreateProjectRequest) -> Result<ParsedProject, Error> {
    let title = payload
        .title
        .ok_or_else(|| missing_field_error(FieldName::new("title")))?;
    let owner_email = payload
        .owner_email
        .ok_or_else(|| missing_field_error(FieldName::new("ownerEmail")))?;

    Ok(ParsedProject {
        title,
        description: payload.description.unwrap_or_default(),
        owner_email,
    })
}

/// Request payload for adding a member to a project.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    /// Email of the joining user.
    pub email: Option<String>,
}

/// Envelope for membership-scoped project listings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectWithOwner>,
}

/// Create a project owned by the user behind `ownerEmail`.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Created project", body = Project),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Owner not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["projects"],
    operation_id = "createProject"
)]
#[post("/projects")]
pub async fn create_project(
    state: web::Data<HttpState>,
    payload: web::Json<CreateProjectRequest>,
) -> ApiResult<HttpResponse> {
    let parsed = parse_create_request(payload.into_inner())?;
    let project = state
        .projects
        .create_project(parsed.title, parsed.description, &parsed.owner_email)
        .await?;
    Ok(HttpResponse::Created().json(project))
}

/// List projects the user behind `email` is a member of.
#[utoipa::path(
    get,
    path = "/api/projects/user/{email}",
    params(("email" = String, Path, description = "Member email address")),
    responses(
        (status = 200, description = "Projects with owner identity", body = ProjectListResponse),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["projects"],
    operation_id = "listProjectsForUser"
)]
#[get("/projects/user/{email}")]
pub async fn list_projects_for_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProjectListResponse>> {
    let email = path.into_inner();
    let projects = state.projects.list_projects_for_user(&email).await?;
    Ok(web::Json(ProjectListResponse { projects }))
}

/// Fetch a single project with its owner's identity.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project with owner identity", body = ProjectWithOwner),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Project not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["projects"],
    operation_id = "getProject"
)]
#[get("/projects/{id}")]
pub async fn get_project(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProjectWithOwner>> {
    let id = parse_project_id(&path.into_inner(), FieldName::new("id"))?;
    let project = state.projects.get_project(&id).await?;
    Ok(web::Json(project))
}

/// Add the user behind `email` to the project's members.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/members",
    params(("id" = String, Path, description = "Project identifier")),
    request_body = AddMemberRequest,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Project or user not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["projects"],
    operation_id = "addProjectMember"
)]
#[post("/projects/{id}/members")]
pub async fn add_member(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AddMemberRequest>,
) -> ApiResult<web::Json<Project>> {
    let id = parse_project_id(&path.into_inner(), FieldName::new("id"))?;
    let email = payload
        .into_inner()
        .email
        .ok_or_else(|| missing_field_error(FieldName::new("email")))?;
    let project = state.projects.add_member(&id, &email).await?;
    Ok(web::Json(project))
}

/// List tasks belonging to an existing project.
#[utoipa::path(
    get,
    path = "/api/projects/{id}/tasks",
    params(("id" = String, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Tasks for the project", body = [ProjectTask]),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Project not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["projects"],
    operation_id = "listProjectTasks"
)]
#[get("/projects/{id}/tasks")]
pub async fn list_project_tasks(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ProjectTask>>> {
    let id = parse_project_id(&path.into_inner(), FieldName::new("id"))?;
    let tasks = state.project_tasks.list_tasks_for_project(&id).await?;
    Ok(web::Json(tasks))
}
