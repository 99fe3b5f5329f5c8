//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyEmail,
    InvalidEmail,
    EmptyName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain a single @ with a local part and domain"),
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address used as the external lookup key for users.
///
/// The identity layer owns real address verification; this type only rejects
/// values that cannot possibly route (empty, padded, or missing an `@`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = email.into();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidEmail);
        }
        let mut parts = raw.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next();
        match domain {
            Some(domain) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(Self(raw))
            }
            _ => Err(UserValidationError::InvalidEmail),
        }
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is a valid UUID string.
/// - `email` is unique within the store and never changes after creation.
///
/// Users are created on first signup or first reference by email and are
/// never mutated or deleted by this core afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Stable user identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    /// Unique email address supplied by the external identity layer.
    #[schema(value_type = String, example = "ada@example.com")]
    email: Email,
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Optional profile picture reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_pic: Option<String>,
}

impl User {
    /// Build a new [`User`] from validated components.
    ///
    /// # Errors
    /// Returns [`UserValidationError::EmptyName`] when the name is blank.
    pub fn new(
        id: UserId,
        email: Email,
        name: impl Into<String>,
        profile_pic: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self {
            id,
            email,
            name,
            profile_pic,
        })
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Email address used as the external lookup key.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Display name shown to other users.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Optional profile picture reference.
    pub fn profile_pic(&self) -> Option<&str> {
        self.profile_pic.as_deref()
    }
}
