//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    PersonalTaskService, ProjectService, ProjectTaskService, SettingsService, UserDirectory,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
    pub projects: Arc<dyn ProjectService>,
    pub project_tasks: Arc<dyn ProjectTaskService>,
    pub personal_tasks: Arc<dyn PersonalTaskService>,
    pub settings: Arc<dyn SettingsService>,
}

impl HttpState {
    /// Construct state from the five use-case ports.
    pub fn new(
        users: Arc<dyn UserDirectory>,
        projects: Arc<dyn ProjectService>,
        project_tasks: Arc<dyn ProjectTaskService>,
        personal_tasks: Arc<dyn PersonalTaskService>,
        settings: Arc<dyn SettingsService>,
    ) -> Self {
        Self {
            users,
            projects,
            project_tasks,
            personal_tasks,
            settings,
        }
    }
}
