//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every HTTP endpoint from the inbound layer plus the domain
//! and request/response schemas they reference. The generated document backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    EntityKind, Error, ErrorCode, OwnerProfile, PersonalTask, Project, ProjectTask,
    ProjectWithOwner, Settings, SettingsPatch, TaskStatus, User,
};
use crate::inbound::http::projects::{AddMemberRequest, CreateProjectRequest, ProjectListResponse};
use crate::inbound::http::tasks::{Ack, CreateTaskRequest, CreatedTask, SetStatusRequest};
use crate::inbound::http::users::RegisterUserRequest;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        description = "HTTP interface for users, projects, tasks, and shared settings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::list_projects_for_user,
        crate::inbound::http::projects::get_project,
        crate::inbound::http::projects::add_member,
        crate::inbound::http::projects::list_project_tasks,
        crate::inbound::http::tasks::list_personal_tasks,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::toggle_task,
        crate::inbound::http::tasks::set_task_status,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::settings::get_settings,
        crate::inbound::http::settings::update_settings,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        EntityKind,
        User,
        Project,
        OwnerProfile,
        ProjectWithOwner,
        ProjectTask,
        TaskStatus,
        PersonalTask,
        Settings,
        SettingsPatch,
        RegisterUserRequest,
        CreateProjectRequest,
        AddMemberRequest,
        ProjectListResponse,
        CreateTaskRequest,
        SetStatusRequest,
        CreatedTask,
        Ack,
    )),
    tags(
        (name = "users", description = "User registration and lookup"),
        (name = "projects", description = "Projects and membership"),
        (name = "tasks", description = "Project-scoped and personal tasks"),
        (name = "settings", description = "Shared preference record"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
