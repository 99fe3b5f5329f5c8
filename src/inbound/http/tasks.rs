//! Task HTTP handlers covering both task variants.
//!
//! ```text
//! GET    /api/tasks
//! POST   /api/tasks
//! POST   /api/tasks/{id}/toggle
//! POST   /api/tasks/{id}/status
//! DELETE /api/tasks/{id}
//! ```
//!
//! `POST /api/tasks` serves both collections: a body carrying `projectId`
//! creates a project-scoped task, a body without one creates a standalone
//! personal task. The two records never mix after creation; toggle and
//! delete act on personal tasks, status writes act on project tasks.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, PersonalTask, ProjectTask, TaskId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_project_id, parse_status, parse_task_id,
};

/// Request payload for creating a task of either variant.
///
/// Every field is optional at the serde level; which ones are required
/// depends on the variant selected by `projectId`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Present: create a project task. Absent: create a personal task.
    pub project_id: Option<String>,
    /// Required for project tasks.
    pub assigned_to_email: Option<String>,
    /// Required for personal tasks; stored verbatim.
    pub created_at: Option<String>,
    /// Required for personal tasks; stored verbatim.
    pub deadline: Option<String>,
}

/// Request payload for writing a task status.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    /// One of `Todo`, `In Progress`, or `Done`.
    pub status: Option<String>,
}

/// Acknowledgement body for deletions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Ack {
    pub message: String,
}

/// Created task of either variant.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CreatedTask {
    Project(ProjectTask),
    Personal(PersonalTask),
}

#[derive(Debug)]
enum ParsedCreateTask {
    Project {
        title: String,
        description: String,
        project_id: String,
        assignee_email: String,
    },
    Personal {
        title: String,
        description: Option<String>,
        created_at: String,
        deadline: String,
    },
}

fn parse_create_request(payload: CreateTaskRequest) -> Result<ParsedCreateTask, Error> {
    let title = payload
        .title
        .ok_or_else(|| missing_field_error(FieldName::new("title")))?;

    if let Some(project_id) = payload.project_id {
        let assignee_email = payload
            .assigned_to_email
            .ok_or_else(|| missing_field_error(FieldName::new("assignedToEmail")))?;
        return Ok(ParsedCreateTask::Project {
            title,
            description: payload.description.unwrap_or_default(),
            project_id,
            assignee_email,
        });
    }

    let created_at = payload
        .created_at
        .ok_or_else(|| missing_field_error(FieldName::new("createdAt")))?;
    let deadline = payload
        .deadline
        .ok_or_else(|| missing_field_error(FieldName::new("deadline")))?;
    Ok(ParsedCreateTask::Personal {
        title,
        description: payload.description,
        created_at,
        deadline,
    })
}

/// List every personal task.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "All personal tasks", body = [PersonalTask]),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "listPersonalTasks"
)]
#[get("/tasks")]
pub async fn list_personal_tasks(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PersonalTask>>> {
    let tasks = state.personal_tasks.list_tasks().await?;
    Ok(web::Json(tasks))
}

/// Create a task; the body shape selects the variant.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Created task", body = CreatedTask),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Project or assignee not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTaskRequest>,
) -> ApiResult<HttpResponse> {
    let created = match parse_create_request(payload.into_inner())? {
        ParsedCreateTask::Project {
            title,
            description,
            project_id,
            assignee_email,
        } => {
            let project_id = parse_project_id(&project_id, FieldName::new("projectId"))?;
            let task = state
                .project_tasks
                .create_task(title, description, &project_id, &assignee_email)
                .await?;
            CreatedTask::Project(task)
        }
        ParsedCreateTask::Personal {
            title,
            description,
            created_at,
            deadline,
        } => {
            let task = state
                .personal_tasks
                .create_task(title, description, created_at, deadline)
                .await?;
            CreatedTask::Personal(task)
        }
    };
    Ok(HttpResponse::Created().json(created))
}

/// Flip a personal task's completion flag.
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/toggle",
    params(("id" = String, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Updated task", body = PersonalTask),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Task not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "togglePersonalTask"
)]
#[post("/tasks/{id}/toggle")]
pub async fn toggle_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PersonalTask>> {
    let id = parse_path_task_id(&path.into_inner())?;
    let task = state.personal_tasks.toggle_completion(&id).await?;
    Ok(web::Json(task))
}

/// Write a project task's status directly.
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/status",
    params(("id" = String, Path, description = "Task identifier")),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Updated task", body = ProjectTask),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Task not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "setTaskStatus"
)]
#[post("/tasks/{id}/status")]
pub async fn set_task_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SetStatusRequest>,
) -> ApiResult<web::Json<ProjectTask>> {
    let id = parse_path_task_id(&path.into_inner())?;
    let raw = payload
        .into_inner()
        .status
        .ok_or_else(|| missing_field_error(FieldName::new("status")))?;
    let status = parse_status(&raw, FieldName::new("status"))?;
    let task = state.project_tasks.set_status(&id, status).await?;
    Ok(web::Json(task))
}

/// Permanently remove a personal task.
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "Deletion acknowledgement", body = Ack),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Task not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["tasks"],
    operation_id = "deletePersonalTask"
)]
#[delete("/tasks/{id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Ack>> {
    let id = parse_path_task_id(&path.into_inner())?;
    state.personal_tasks.delete_task(&id).await?;
    Ok(web::Json(Ack {
        message: "task deleted".to_owned(),
    }))
}

fn parse_path_task_id(raw: &str) -> Result<TaskId, Error> {
    parse_task_id(raw, FieldName::new("id"))
}
