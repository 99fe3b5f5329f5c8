//! Project-scoped task service.
//!
//! Creation resolves the project and the assignee before inserting anything,
//! so a failed lookup leaves no partial record. The assignee is deliberately
//! not required to be a member of the project; the original contract allows
//! assigning any known user and this implementation keeps that behaviour as
//! a recorded decision.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::{EntityKind, Error};
use crate::domain::ports::{
    ProjectRepository, ProjectTaskRepository, ProjectTaskService, UserRepository, map_store_error,
};
use crate::domain::project::ProjectId;
use crate::domain::task::{ProjectTask, TaskId, TaskStatus};

/// Project-task service backed by task, project, and user repositories.
#[derive(Clone)]
pub struct ProjectTaskServiceImpl<T, P, U> {
    tasks: Arc<T>,
    projects: Arc<P>,
    users: Arc<U>,
}

impl<T, P, U> ProjectTaskServiceImpl<T, P, U> {
    /// Create a new service over the given repositories.
    pub fn new(tasks: Arc<T>, projects: Arc<P>, users: Arc<U>) -> Self {
        Self {
            tasks,
            projects,
            users,
        }
    }
}

#[async_trait]
impl<T, P, U> ProjectTaskService for ProjectTaskServiceImpl<T, P, U>
where
    T: ProjectTaskRepository,
    P: ProjectRepository,
    U: UserRepository,
{
    async fn create_task(
        &self,
        title: String,
        description: String,
        project_id: &ProjectId,
        assignee_email: &str,
    ) -> Result<ProjectTask, Error> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Project))?;
        let assignee = self
            .users
            .find_by_email(assignee_email)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::User))?;

        let task = ProjectTask::new(
            TaskId::random(),
            title,
            description,
            project.id().clone(),
            assignee.id().clone(),
        );
        self.tasks.insert(&task).await.map_err(map_store_error)?;
        Ok(task)
    }

    async fn set_status(&self, id: &TaskId, status: TaskStatus) -> Result<ProjectTask, Error> {
        let mut task = self
            .tasks
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Task))?;
        task.set_status(status);
        self.tasks.update(&task).await.map_err(map_store_error)?;
        Ok(task)
    }

    async fn list_tasks_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<ProjectTask>, Error> {
        self.projects
            .find_by_id(project_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Project))?;
        self.tasks
            .list_by_project(project_id)
            .await
            .map_err(map_store_error)
    }
}
