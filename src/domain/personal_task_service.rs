//! Standalone personal task service.
//!
//! The listing is unfiltered: every caller sees every task. That is the
//! observed single-tenant contract, kept deliberately and flagged in the API
//! documentation rather than silently scoped.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::error::{EntityKind, Error};
use crate::domain::personal_task::{PersonalTask, PersonalTaskValidationError};
use crate::domain::ports::{PersonalTaskRepository, PersonalTaskService, map_store_error};
use crate::domain::task::TaskId;

/// Personal-task service backed by a [`PersonalTaskRepository`].
#[derive(Clone)]
pub struct PersonalTaskServiceImpl<R> {
    tasks: Arc<R>,
}

impl<R> PersonalTaskServiceImpl<R> {
    /// Create a new service over the given repository.
    pub fn new(tasks: Arc<R>) -> Self {
        Self { tasks }
    }
}

fn map_validation_error(err: PersonalTaskValidationError) -> Error {
    let field = match err {
        PersonalTaskValidationError::EmptyTitle => "title",
        PersonalTaskValidationError::EmptyCreatedAt => "createdAt",
        PersonalTaskValidationError::EmptyDeadline => "deadline",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

#[async_trait]
impl<R> PersonalTaskService for PersonalTaskServiceImpl<R>
where
    R: PersonalTaskRepository,
{
    async fn list_tasks(&self) -> Result<Vec<PersonalTask>, Error> {
        self.tasks.list_all().await.map_err(map_store_error)
    }

    async fn create_task(
        &self,
        title: String,
        description: Option<String>,
        created_at: String,
        deadline: String,
    ) -> Result<PersonalTask, Error> {
        let task = PersonalTask::try_new(TaskId::random(), title, description, created_at, deadline)
            .map_err(map_validation_error)?;
        self.tasks.insert(&task).await.map_err(map_store_error)?;
        Ok(task)
    }

    async fn toggle_completion(&self, id: &TaskId) -> Result<PersonalTask, Error> {
        let mut task = self
            .tasks
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Task))?;
        task.toggle();
        self.tasks.update(&task).await.map_err(map_store_error)?;
        Ok(task)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), Error> {
        let removed = self.tasks.delete(id).await.map_err(map_store_error)?;
        if removed {
            Ok(())
        } else {
            Err(Error::entity_not_found(EntityKind::Task))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorCode;
    use crate::domain::ports::MockPersonalTaskRepository;

    fn make_service(
        repo: MockPersonalTaskRepository,
    ) -> PersonalTaskServiceImpl<MockPersonalTaskRepository> {
        PersonalTaskServiceImpl::new(Arc::new(repo))
    }

    fn sample_task() -> PersonalTask {
        PersonalTask::try_new(
            TaskId::random(),
            "T",
            None,
            "2024-01-01T00:00",
            "2024-01-02T00:00",
        )
        .expect("valid task")
    }

    #[tokio::test]
    async fn create_task_defaults_to_incomplete() {
        let mut repo = MockPersonalTaskRepository::new();
        repo.expect_insert().times(1).return_once(|_| Ok(()));

        let service = make_service(repo);
        let task = service
            .create_task(
                "T".to_owned(),
                Some("notes".to_owned()),
                "2024-01-01T00:00".to_owned(),
                "2024-01-02T00:00".to_owned(),
            )
            .await
            .expect("create succeeds");
        assert!(!task.completed());
        assert_eq!(task.description(), Some("notes"));
    }

    #[tokio::test]
    async fn create_task_rejects_missing_deadline_without_writes() {
        let mut repo = MockPersonalTaskRepository::new();
        repo.expect_insert().times(0);

        let service = make_service(repo);
        let err = service
            .create_task(
                "T".to_owned(),
                None,
                "2024-01-01T00:00".to_owned(),
                String::new(),
            )
            .await
            .expect_err("missing deadline");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.expect("details");
        assert_eq!(
            details.get("field").and_then(serde_json::Value::as_str),
            Some("deadline")
        );
    }

    #[tokio::test]
    async fn toggle_flips_and_persists() {
        let task = sample_task();
        let task_id = task.id().clone();
        let mut repo = MockPersonalTaskRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(task)));
        repo.expect_update().times(1).return_once(|_| Ok(()));

        let service = make_service(repo);
        let updated = service
            .toggle_completion(&task_id)
            .await
            .expect("toggle succeeds");
        assert!(updated.completed());
    }

    #[tokio::test]
    async fn toggle_unknown_task_is_not_found() {
        let mut repo = MockPersonalTaskRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let service = make_service(repo);
        let err = service
            .toggle_completion(&TaskId::random())
            .await
            .expect_err("missing task");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "task not found");
    }

    #[tokio::test]
    async fn delete_maps_absent_record_to_not_found() {
        let mut repo = MockPersonalTaskRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(false));

        let service = make_service(repo);
        let err = service
            .delete_task(&TaskId::random())
            .await
            .expect_err("missing task");
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_acks_a_removed_record() {
        let mut repo = MockPersonalTaskRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(true));

        let service = make_service(repo);
        service
            .delete_task(&TaskId::random())
            .await
            .expect("delete succeeds");
    }
}
