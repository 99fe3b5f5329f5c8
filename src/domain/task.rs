//! Project-scoped task model and status values.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::project::ProjectId;
use super::user::UserId;

/// Workflow status of a project-scoped task.
///
/// Any status is writable from any other, including itself. The system
/// deliberately imposes no ordering on transitions; a task may move from
/// `Done` straight back to `Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ToSchema)]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Todo,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTaskStatusError {
    /// The unrecognised input value.
    pub input: String,
}

impl fmt::Display for ParseTaskStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task status: {}", self.input)
    }
}

impl std::error::Error for ParseTaskStatusError {}

impl std::str::FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Todo" => Ok(Self::Todo),
            "In Progress" => Ok(Self::InProgress),
            "Done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Stable task identifier stored as a UUID.
///
/// Shared by both task collections; the collections themselves stay
/// distinct, so an identifier only resolves within its own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(Uuid);

/// Validation error returned by [`TaskId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIdError {
    /// The rejected input value.
    pub input: String,
}

impl fmt::Display for TaskIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task id must be a valid UUID: {}", self.input)
    }
}

impl std::error::Error for TaskIdError {}

impl TaskId {
    /// Validate and construct a [`TaskId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, TaskIdError> {
        let raw = id.as_ref();
        Uuid::parse_str(raw).map(Self).map_err(|_| TaskIdError {
            input: raw.to_owned(),
        })
    }

    /// Generate a new random [`TaskId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Task linked to exactly one project and one assignee.
///
/// ## Invariants
/// - `project` and `assigned_to` reference entities that existed when the
///   task was created; the store itself enforces no foreign keys, so the
///   task service performs the existence checks before insertion.
/// - `project` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ProjectTask {
    /// Stable task identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: TaskId,
    /// Task title.
    #[schema(example = "Wire up the staging deploy")]
    title: String,
    /// Task description.
    description: String,
    /// Current workflow status.
    status: TaskStatus,
    /// Project the task belongs to, immutable after creation.
    #[schema(value_type = String)]
    project: ProjectId,
    /// User the task is assigned to.
    #[schema(value_type = String)]
    assigned_to: UserId,
    /// Creation timestamp, set once.
    created_at: DateTime<Utc>,
}

impl ProjectTask {
    /// Create a task in the default `Todo` status.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        project: ProjectId,
        assigned_to: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: TaskStatus::default(),
            project,
            assigned_to,
            created_at: Utc::now(),
        }
    }

    /// Stable task identifier.
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Task title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Task description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Current workflow status.
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Project the task belongs to.
    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    /// Assigned user.
    pub fn assigned_to(&self) -> &UserId {
        &self.assigned_to
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Write a status directly. All transitions are legal.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for status parsing and the free transition model.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_status_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[rstest]
    #[case::todo("Todo", TaskStatus::Todo)]
    #[case::in_progress("In Progress", TaskStatus::InProgress)]
    #[case::done("Done", TaskStatus::Done)]
    fn status_parses_wire_strings(#[case] input: &str, #[case] expected: TaskStatus) {
        let parsed: TaskStatus = input.parse().expect("valid status");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case::lowercase("todo")]
    #[case::snake("in_progress")]
    #[case::empty("")]
    fn status_rejects_unknown_strings(#[case] input: &str) {
        let result: Result<TaskStatus, _> = input.parse();
        assert!(result.is_err());
    }

    #[rstest]
    fn status_as_str_matches_parse() {
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            let parsed: TaskStatus = status.as_str().parse().expect("round-trip");
            assert_eq!(parsed, status);
        }
    }

    #[rstest]
    fn status_serde_uses_original_wire_strings() {
        let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialise");
        assert_eq!(json, "\"In Progress\"");
    }

    #[rstest]
    fn every_transition_is_legal() {
        let statuses = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];
        let mut task = ProjectTask::new(
            TaskId::random(),
            "T",
            "",
            ProjectId::random(),
            UserId::random(),
        );
        for from in statuses {
            for to in statuses {
                task.set_status(from);
                task.set_status(to);
                assert_eq!(task.status(), to);
            }
        }
    }

    #[rstest]
    fn new_task_starts_in_todo() {
        let task = ProjectTask::new(
            TaskId::random(),
            "T",
            "d",
            ProjectId::random(),
            UserId::random(),
        );
        assert_eq!(task.status(), TaskStatus::Todo);
    }
}
