//! Builders wiring entity store adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use taskboard::domain::{
    PersonalTaskServiceImpl, ProjectServiceImpl, ProjectTaskServiceImpl, SettingsServiceImpl,
    UserDirectoryImpl,
};
use taskboard::inbound::http::state::HttpState;
use taskboard::outbound::persistence::{
    MemoryPersonalTaskRepository, MemoryProjectRepository, MemoryProjectTaskRepository,
    MemorySettingsStore, MemoryUserRepository,
};

/// Build the shared HTTP state over in-process entity store adapters.
///
/// The user and project repositories are shared between services so the
/// referential checks in the task and project services observe the same
/// records the registration path writes.
pub(super) fn build_http_state() -> web::Data<HttpState> {
    let users = Arc::new(MemoryUserRepository::new());
    let projects = Arc::new(MemoryProjectRepository::new());
    let project_tasks = Arc::new(MemoryProjectTaskRepository::new());
    let personal_tasks = Arc::new(MemoryPersonalTaskRepository::new());
    let settings = Arc::new(MemorySettingsStore::new());

    web::Data::new(HttpState::new(
        Arc::new(UserDirectoryImpl::new(users.clone())),
        Arc::new(ProjectServiceImpl::new(projects.clone(), users.clone())),
        Arc::new(ProjectTaskServiceImpl::new(
            project_tasks,
            projects,
            users,
        )),
        Arc::new(PersonalTaskServiceImpl::new(personal_tasks)),
        Arc::new(SettingsServiceImpl::new(settings)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn built_state_shares_the_user_collection() {
        let state = build_http_state();
        let user = state
            .users
            .register("a@x.com".to_owned(), "Ada".to_owned(), None)
            .await
            .expect("register");

        let project = state
            .projects
            .create_project("P".to_owned(), String::new(), "a@x.com")
            .await
            .expect("registered owner is visible to the project service");
        assert_eq!(project.owner(), user.id());
    }
}
