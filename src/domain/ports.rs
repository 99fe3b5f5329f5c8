//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to reach the entity store;
//! driving ports are the use-case surface HTTP handlers depend on. Each
//! driven trait exposes a typed error so adapters map their failures into
//! predictable variants.
//!
//! The entity store enforces no foreign keys. Existence checks across
//! collections belong to the services implementing the driving ports, never
//! to the repositories.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::error::Error;
use super::personal_task::PersonalTask;
use super::project::{Project, ProjectId, ProjectWithOwner};
use super::settings::{Settings, SettingsPatch};
use super::task::{ProjectTask, TaskId, TaskStatus};
use super::user::{User, UserId};

/// Failures surfaced by entity store adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum StoreError {
    /// Store connection could not be established.
    #[error("entity store connection failed: {message}")]
    Connection { message: String },
    /// Read or write failed during execution.
    #[error("entity store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user record.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Fetch a user by email, the external lookup key.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError>;
}

/// Persistence port for project records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert a project record.
    async fn insert(&self, project: &Project) -> Result<(), StoreError>;

    /// Fetch a project by identifier.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StoreError>;

    /// Replace a stored project with an updated copy.
    async fn update(&self, project: &Project) -> Result<(), StoreError>;

    /// List projects whose members set contains `user`.
    async fn list_by_member(&self, user: &UserId) -> Result<Vec<Project>, StoreError>;
}

/// Persistence port for project-scoped task records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectTaskRepository: Send + Sync {
    /// Insert a task record.
    async fn insert(&self, task: &ProjectTask) -> Result<(), StoreError>;

    /// Fetch a task by identifier.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<ProjectTask>, StoreError>;

    /// Replace a stored task with an updated copy.
    async fn update(&self, task: &ProjectTask) -> Result<(), StoreError>;

    /// List tasks belonging to `project`.
    async fn list_by_project(&self, project: &ProjectId) -> Result<Vec<ProjectTask>, StoreError>;
}

/// Persistence port for standalone personal task records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonalTaskRepository: Send + Sync {
    /// Insert a task record.
    async fn insert(&self, task: &PersonalTask) -> Result<(), StoreError>;

    /// Fetch a task by identifier.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<PersonalTask>, StoreError>;

    /// Replace a stored task with an updated copy.
    async fn update(&self, task: &PersonalTask) -> Result<(), StoreError>;

    /// Remove a task, returning whether a record existed.
    async fn delete(&self, id: &TaskId) -> Result<bool, StoreError>;

    /// List every task, unfiltered (single-tenant contract).
    async fn list_all(&self) -> Result<Vec<PersonalTask>, StoreError>;
}

/// Port for the settings singleton.
///
/// The merge runs inside the store so in-process writers serialize; there is
/// no read-then-write window for callers to race through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the current record, or defaults if never written.
    async fn get(&self) -> Result<Settings, StoreError>;

    /// Merge a partial patch over the current record and return the result.
    async fn merge(&self, patch: SettingsPatch) -> Result<Settings, StoreError>;
}

/// Driving port for user registration and lookup.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Create a user record, or return the existing one for a known email.
    async fn register(
        &self,
        email: String,
        name: String,
        profile_pic: Option<String>,
    ) -> Result<User, Error>;

    /// Resolve a user by email.
    async fn find_by_email(&self, email: &str) -> Result<User, Error>;
}

/// Driving port for project creation, retrieval, and membership.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Create a project owned by the user behind `owner_email`.
    async fn create_project(
        &self,
        title: String,
        description: String,
        owner_email: &str,
    ) -> Result<Project, Error>;

    /// List projects the user behind `email` is a member of, with the
    /// owner's identity denormalized in.
    async fn list_projects_for_user(&self, email: &str) -> Result<Vec<ProjectWithOwner>, Error>;

    /// Fetch a single project with its owner's identity.
    async fn get_project(&self, id: &ProjectId) -> Result<ProjectWithOwner, Error>;

    /// Add the user behind `email` to the project's members set.
    async fn add_member(&self, id: &ProjectId, email: &str) -> Result<Project, Error>;
}

/// Driving port for project-scoped tasks.
#[async_trait]
pub trait ProjectTaskService: Send + Sync {
    /// Create a task after verifying the project and assignee exist.
    async fn create_task(
        &self,
        title: String,
        description: String,
        project_id: &ProjectId,
        assignee_email: &str,
    ) -> Result<ProjectTask, Error>;

    /// Write a status directly; no transition ordering is enforced.
    async fn set_status(&self, id: &TaskId, status: TaskStatus) -> Result<ProjectTask, Error>;

    /// List tasks for an existing project.
    async fn list_tasks_for_project(&self, project_id: &ProjectId)
    -> Result<Vec<ProjectTask>, Error>;
}

/// Driving port for standalone personal tasks.
#[async_trait]
pub trait PersonalTaskService: Send + Sync {
    /// List every personal task (single-tenant contract).
    async fn list_tasks(&self) -> Result<Vec<PersonalTask>, Error>;

    /// Create a task; title, createdAt, and deadline are required.
    async fn create_task(
        &self,
        title: String,
        description: Option<String>,
        created_at: String,
        deadline: String,
    ) -> Result<PersonalTask, Error>;

    /// Flip a task's completion flag and return the updated record.
    async fn toggle_completion(&self, id: &TaskId) -> Result<PersonalTask, Error>;

    /// Permanently remove a task.
    async fn delete_task(&self, id: &TaskId) -> Result<(), Error>;
}

/// Driving port for the shared settings record.
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Read the current record, or defaults if never written.
    async fn get_settings(&self) -> Result<Settings, Error>;

    /// Merge supplied fields over the record and return the result.
    async fn update_settings(&self, patch: SettingsPatch) -> Result<Settings, Error>;
}

/// Map a store failure into the shared error payload.
///
/// Connection failures surface as `service_unavailable` so clients can
/// distinguish an unreachable store from a bug.
pub(crate) fn map_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("entity store unavailable: {message}"))
        }
        StoreError::Query { message } => Error::internal(format!("entity store error: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn connection_failures_map_to_service_unavailable() {
        let err = map_store_error(StoreError::connection("refused"));
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
        assert!(err.message.contains("refused"));
    }

    #[rstest]
    fn query_failures_map_to_internal() {
        let err = map_store_error(StoreError::query("boom"));
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
