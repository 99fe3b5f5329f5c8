//! Project aggregate and membership read models.
//!
//! A project has exactly one owner, set at creation and immutable. The
//! members set always contains the owner; the constructor and the serde
//! conversion both enforce the invariant so it holds for every reachable
//! value, not just freshly created ones.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::user::{Email, User, UserId};

/// Validation errors returned by the project constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    InvalidId,
}

impl fmt::Display for ProjectValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id must not be empty"),
            Self::InvalidId => write!(f, "project id must be a valid UUID"),
        }
    }
}

impl std::error::Error for ProjectValidationError {}

/// Stable project identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Validate and construct a [`ProjectId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ProjectValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| ProjectValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`ProjectId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProjectId> for String {
    fn from(value: ProjectId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for ProjectId {
    type Error = ProjectValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Collaborative project owned by a single user.
///
/// ## Invariants
/// - `owner` is set at creation and never changes.
/// - `owner` is always present in `members`.
/// - `created_at` is set once by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(from = "ProjectDto", into = "ProjectDto")]
pub struct Project {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: ProjectId,
    #[schema(example = "Website relaunch")]
    title: String,
    #[schema(example = "Everything needed to ship the new site")]
    description: String,
    #[schema(value_type = String)]
    owner: UserId,
    #[schema(value_type = Vec<String>)]
    members: BTreeSet<UserId>,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Create a project owned by `owner` with members = {owner}.
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        owner: UserId,
    ) -> Self {
        let mut members = BTreeSet::new();
        members.insert(owner.clone());
        Self {
            id,
            title: title.into(),
            description: description.into(),
            owner,
            members,
            created_at: Utc::now(),
        }
    }

    /// Stable project identifier.
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Project title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Project description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Owning user, immutable after creation.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Users permitted to see and act on the project.
    pub fn members(&self) -> &BTreeSet<UserId> {
        &self.members
    }

    /// Creation timestamp, set once.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether `user` is a member of the project.
    pub fn is_member(&self, user: &UserId) -> bool {
        self.members.contains(user)
    }

    /// Add a member, returning `true` when the set grew. Adding an existing
    /// member (including the owner) is a no-op.
    pub fn add_member(&mut self, user: UserId) -> bool {
        self.members.insert(user)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDto {
    id: ProjectId,
    title: String,
    description: String,
    owner: UserId,
    members: BTreeSet<UserId>,
    created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(value: Project) -> Self {
        let Project {
            id,
            title,
            description,
            owner,
            members,
            created_at,
        } = value;
        Self {
            id,
            title,
            description,
            owner,
            members,
            created_at,
        }
    }
}

impl From<ProjectDto> for Project {
    fn from(value: ProjectDto) -> Self {
        let ProjectDto {
            id,
            title,
            description,
            owner,
            mut members,
            created_at,
        } = value;
        // Re-establish the membership invariant for externally sourced data.
        members.insert(owner.clone());
        Self {
            id,
            title,
            description,
            owner,
            members,
            created_at,
        }
    }
}

/// Owner identity denormalized into project listings.
///
/// Computed at read time from the owner's User record; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    /// Owner's stable identifier.
    #[schema(value_type = String)]
    pub id: UserId,
    /// Owner's display name.
    pub name: String,
    /// Owner's email address.
    #[schema(value_type = String)]
    pub email: Email,
}

impl From<&User> for OwnerProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().clone(),
            name: user.name().to_owned(),
            email: user.email().clone(),
        }
    }
}

/// Project enriched with its owner's identity for listing responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithOwner {
    /// The project record.
    #[serde(flatten)]
    pub project: Project,
    /// Read-time join of the owner's name and email.
    pub owner_profile: OwnerProfile,
}
