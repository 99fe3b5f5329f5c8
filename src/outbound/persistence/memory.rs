//! In-process entity store adapters.
//!
//! Each collection is a `RwLock<HashMap>` keyed by identifier, mirroring the
//! document-per-record shape of the wire format. The store enforces no
//! foreign keys; cross-collection existence checks live in the domain
//! services.
//!
//! A poisoned lock means a writer panicked mid-operation, so it surfaces as
//! a query failure rather than unwinding the caller.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{
    PersonalTaskRepository, ProjectRepository, ProjectTaskRepository, SettingsStore, StoreError,
    UserRepository,
};
use crate::domain::{
    PersonalTask, Project, ProjectId, ProjectTask, Settings, SettingsPatch, TaskId, User, UserId,
};

fn poisoned_lock() -> StoreError {
    StoreError::query("entity store lock poisoned")
}

/// In-memory user collection.
#[derive(Default)]
pub struct MemoryUserRepository {
    records: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        records.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records
            .values()
            .find(|user| user.email().as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records.get(id).cloned())
    }
}

/// In-memory project collection.
#[derive(Default)]
pub struct MemoryProjectRepository {
    records: RwLock<HashMap<ProjectId, Project>>,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn insert(&self, project: &Project) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        records.insert(project.id().clone(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records.get(id).cloned())
    }

    async fn update(&self, project: &Project) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        records.insert(project.id().clone(), project.clone());
        Ok(())
    }

    async fn list_by_member(&self, user: &UserId) -> Result<Vec<Project>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records
            .values()
            .filter(|project| project.is_member(user))
            .cloned()
            .collect())
    }
}

/// In-memory project-task collection.
#[derive(Default)]
pub struct MemoryProjectTaskRepository {
    records: RwLock<HashMap<TaskId, ProjectTask>>,
}

impl MemoryProjectTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectTaskRepository for MemoryProjectTaskRepository {
    async fn insert(&self, task: &ProjectTask) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        records.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<ProjectTask>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records.get(id).cloned())
    }

    async fn update(&self, task: &ProjectTask) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        records.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn list_by_project(&self, project: &ProjectId) -> Result<Vec<ProjectTask>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records
            .values()
            .filter(|task| task.project() == project)
            .cloned()
            .collect())
    }
}

/// In-memory personal-task collection.
#[derive(Default)]
pub struct MemoryPersonalTaskRepository {
    records: RwLock<HashMap<TaskId, PersonalTask>>,
}

impl MemoryPersonalTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonalTaskRepository for MemoryPersonalTaskRepository {
    async fn insert(&self, task: &PersonalTask) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        records.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<PersonalTask>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records.get(id).cloned())
    }

    async fn update(&self, task: &PersonalTask) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        records.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;
        Ok(records.remove(id).is_some())
    }

    async fn list_all(&self) -> Result<Vec<PersonalTask>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;
        Ok(records.values().cloned().collect())
    }
}

/// In-memory settings singleton.
///
/// The merge runs under the write lock so two concurrent patches cannot
/// interleave a read-modify-write.
#[derive(Default)]
pub struct MemorySettingsStore {
    record: RwLock<Settings>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self) -> Result<Settings, StoreError> {
        let record = self.record.read().map_err(|_| poisoned_lock())?;
        Ok(record.clone())
    }

    async fn merge(&self, patch: SettingsPatch) -> Result<Settings, StoreError> {
        let mut record = self.record.write().map_err(|_| poisoned_lock())?;
        record.apply(patch);
        Ok(record.clone())
    }
}
