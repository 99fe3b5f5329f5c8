//! Standalone personal task model.
//!
//! Personal tasks share the conceptual name "Task" with project-scoped tasks
//! but live in a distinct collection with a distinct lifecycle: created with
//! caller-supplied timestamps, mutated only by toggling completion, and
//! deleted explicitly. They reference no Project or User.
//!
//! `created_at` and `deadline` are opaque caller-supplied strings. Observed
//! values such as `2024-01-01T00:00` are not RFC 3339, so the core validates
//! presence only and never parses them.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::task::TaskId;

/// Validation errors returned by [`PersonalTask::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalTaskValidationError {
    EmptyTitle,
    EmptyCreatedAt,
    EmptyDeadline,
}

impl fmt::Display for PersonalTaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyCreatedAt => write!(f, "createdAt must not be empty"),
            Self::EmptyDeadline => write!(f, "deadline must not be empty"),
        }
    }
}

impl std::error::Error for PersonalTaskValidationError {}

/// Independent to-do item with a deadline and boolean completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PersonalTask {
    /// Stable task identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: TaskId,
    /// Task title.
    #[schema(example = "Book dentist appointment")]
    title: String,
    /// Optional free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Caller-supplied creation timestamp string, stored verbatim.
    #[schema(example = "2024-01-01T00:00")]
    created_at: String,
    /// Caller-supplied deadline string, stored verbatim.
    #[schema(example = "2024-01-02T00:00")]
    deadline: String,
    /// Completion flag, false on creation.
    completed: bool,
}

impl PersonalTask {
    /// Create a task with `completed = false`.
    ///
    /// # Errors
    /// Returns a [`PersonalTaskValidationError`] when `title`, `created_at`,
    /// or `deadline` is blank.
    pub fn try_new(
        id: TaskId,
        title: impl Into<String>,
        description: Option<String>,
        created_at: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Result<Self, PersonalTaskValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PersonalTaskValidationError::EmptyTitle);
        }
        let created_at = created_at.into();
        if created_at.trim().is_empty() {
            return Err(PersonalTaskValidationError::EmptyCreatedAt);
        }
        let deadline = deadline.into();
        if deadline.trim().is_empty() {
            return Err(PersonalTaskValidationError::EmptyDeadline);
        }
        Ok(Self {
            id,
            title,
            description,
            created_at,
            deadline,
            completed: false,
        })
    }

    /// Stable task identifier.
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Task title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Caller-supplied creation timestamp string.
    pub fn created_at(&self) -> &str {
        self.created_at.as_str()
    }

    /// Caller-supplied deadline string.
    pub fn deadline(&self) -> &str {
        self.deadline.as_str()
    }

    /// Completion flag.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Flip the completion flag. Applying this twice restores the original
    /// value; it is not idempotent per call.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for creation validation and toggle involution.
    use super::*;
    use rstest::rstest;

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

    #[rstest]
    fn new_task_is_incomplete() {
        assert!(!sample_task().completed());
    }

    #[rstest]
    #[case::empty_title("", "2024-01-01T00:00", "2024-01-02T00:00", PersonalTaskValidationError::EmptyTitle)]
    #[case::blank_title("  ", "2024-01-01T00:00", "2024-01-02T00:00", PersonalTaskValidationError::EmptyTitle)]
    #[case::empty_created_at("T", "", "2024-01-02T00:00", PersonalTaskValidationError::EmptyCreatedAt)]
    #[case::empty_deadline("T", "2024-01-01T00:00", "", PersonalTaskValidationError::EmptyDeadline)]
    fn creation_rejects_blank_required_fields(
        #[case] title: &str,
        #[case] created_at: &str,
        #[case] deadline: &str,
        #[case] expected: PersonalTaskValidationError,
    ) {
        let err = PersonalTask::try_new(TaskId::random(), title, None, created_at, deadline)
            .expect_err("blank field rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn toggle_twice_restores_original_state() {
        let mut task = sample_task();
        let original = task.completed();
        task.toggle();
        assert_ne!(task.completed(), original);
        task.toggle();
        assert_eq!(task.completed(), original);
    }

    #[rstest]
    fn timestamps_are_stored_verbatim() {
        let task = sample_task();
        assert_eq!(task.created_at(), "2024-01-01T00:00");
        assert_eq!(task.deadline(), "2024-01-02T00:00");
    }

    #[rstest]
    fn omitted_description_is_not_serialized() {
        let value = serde_json::to_value(sample_task()).expect("serialise");
        assert!(value.get("description").is_none());
        assert_eq!(value["createdAt"], "2024-01-01T00:00");
    }
}
