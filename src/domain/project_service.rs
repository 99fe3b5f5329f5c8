//! Project service: creation, membership-scoped retrieval, and membership
//! growth.
//!
//! Every operation resolves referenced entities before writing. The store
//! has no foreign keys, so these checks are the only referential integrity
//! the system has; a check-then-write race against a concurrent mutation is
//! a documented limitation of the single-record consistency model.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::{EntityKind, Error};
use crate::domain::ports::{
    ProjectRepository, ProjectService, UserRepository, map_store_error,
};
use crate::domain::project::{OwnerProfile, Project, ProjectId, ProjectWithOwner};
use crate::domain::user::User;

/// Project service backed by project and user repositories.
#[derive(Clone)]
pub struct ProjectServiceImpl<P, U> {
    projects: Arc<P>,
    users: Arc<U>,
}

impl<P, U> ProjectServiceImpl<P, U> {
    /// Create a new service over the given repositories.
    pub fn new(projects: Arc<P>, users: Arc<U>) -> Self {
        Self { projects, users }
    }
}

impl<P, U> ProjectServiceImpl<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    async fn resolve_user_by_email(&self, email: &str) -> Result<User, Error> {
        self.users
            .find_by_email(email)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::User))
    }

    async fn resolve_project(&self, id: &ProjectId) -> Result<Project, Error> {
        self.projects
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Project))
    }

    /// Read-time join of a project with its owner's identity. A dangling
    /// owner reference means the store lost a user record the project still
    /// points at; surface that as an internal error rather than inventing a
    /// placeholder.
    async fn join_owner(&self, project: Project) -> Result<ProjectWithOwner, Error> {
        let owner = self
            .users
            .find_by_id(project.owner())
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| {
                Error::internal(format!(
                    "project {} references missing owner {}",
                    project.id(),
                    project.owner()
                ))
            })?;
        Ok(ProjectWithOwner {
            owner_profile: OwnerProfile::from(&owner),
            project,
        })
    }
}

#[async_trait]
impl<P, U> ProjectService for ProjectServiceImpl<P, U>
where
    P: ProjectRepository,
    U: UserRepository,
{
    async fn create_project(
        &self,
        title: String,
        description: String,
        owner_email: &str,
    ) -> Result<Project, Error> {
        let owner = self.resolve_user_by_email(owner_email).await?;
        let project = Project::new(ProjectId::random(), title, description, owner.id().clone());
        self.projects
            .insert(&project)
            .await
            .map_err(map_store_error)?;
        Ok(project)
    }

    async fn list_projects_for_user(&self, email: &str) -> Result<Vec<ProjectWithOwner>, Error> {
        let user = self.resolve_user_by_email(email).await?;
        let projects = self
            .projects
            .list_by_member(user.id())
            .await
            .map_err(map_store_error)?;

        let mut enriched = Vec::with_capacity(projects.len());
        for project in projects {
            enriched.push(self.join_owner(project).await?);
        }
        Ok(enriched)
    }

    async fn get_project(&self, id: &ProjectId) -> Result<ProjectWithOwner, Error> {
        let project = self.resolve_project(id).await?;
        self.join_owner(project).await
    }

    async fn add_member(&self, id: &ProjectId, email: &str) -> Result<Project, Error> {
        let mut project = self.resolve_project(id).await?;
        let user = self.resolve_user_by_email(email).await?;
        if project.add_member(user.id().clone()) {
            self.projects
                .update(&project)
                .await
                .map_err(map_store_error)?;
        }
        Ok(project)
    }
}
