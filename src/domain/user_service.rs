//! User directory service.
//!
//! Owns create-on-first-signup semantics: registering an email that already
//! has a record returns that record unchanged, so registration is idempotent
//! on email and users are never mutated after creation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::error::{EntityKind, Error};
use crate::domain::ports::{UserDirectory, UserRepository, map_store_error};
use crate::domain::user::{Email, User, UserId, UserValidationError};

/// User directory backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserDirectoryImpl<R> {
    users: Arc<R>,
}

impl<R> UserDirectoryImpl<R> {
    /// Create a new directory over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_validation_error(err: UserValidationError) -> Error {
    let field = match err {
        UserValidationError::EmptyEmail | UserValidationError::InvalidEmail => "email",
        UserValidationError::EmptyName => "name",
        UserValidationError::EmptyId | UserValidationError::InvalidId => "id",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": "invalid_field",
    }))
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryImpl<R>
where
    R: UserRepository,
{
    async fn register(
        &self,
        email: String,
        name: String,
        profile_pic: Option<String>,
    ) -> Result<User, Error> {
        let email = Email::new(email).map_err(map_validation_error)?;

        if let Some(existing) = self
            .users
            .find_by_email(email.as_str())
            .await
            .map_err(map_store_error)?
        {
            return Ok(existing);
        }

        let user =
            User::new(UserId::random(), email, name, profile_pic).map_err(map_validation_error)?;
        self.users.insert(&user).await.map_err(map_store_error)?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, Error> {
        self.users
            .find_by_email(email)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::User))
    }
}
