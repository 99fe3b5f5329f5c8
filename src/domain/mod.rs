//! Domain model for the task board: users, projects, two task shapes, and a
//! shared settings record, plus the ports and services that operate on them.
//!
//! The layer is framework-free. HTTP and persistence adapters depend on
//! these types through the ports in [`ports`]; nothing here imports
//! `actix_web`.

pub mod error;
pub mod personal_task;
pub mod personal_task_service;
pub mod ports;
pub mod project;
pub mod project_service;
pub mod settings;
pub mod settings_service;
pub mod task;
pub mod task_service;
pub mod user;
pub mod user_service;

pub use error::{EntityKind, Error, ErrorCode};
pub use personal_task::{PersonalTask, PersonalTaskValidationError};
pub use personal_task_service::PersonalTaskServiceImpl;
pub use ports::{
    PersonalTaskRepository, PersonalTaskService, ProjectRepository, ProjectService,
    ProjectTaskRepository, ProjectTaskService, SettingsService, SettingsStore, StoreError,
    UserDirectory, UserRepository,
};
pub use project::{OwnerProfile, Project, ProjectId, ProjectWithOwner};
pub use project_service::ProjectServiceImpl;
pub use settings::{Settings, SettingsPatch};
pub use settings_service::SettingsServiceImpl;
pub use task::{ParseTaskStatusError, ProjectTask, TaskId, TaskStatus};
pub use task_service::ProjectTaskServiceImpl;
pub use user::{Email, User, UserId, UserValidationError};
pub use user_service::UserDirectoryImpl;
