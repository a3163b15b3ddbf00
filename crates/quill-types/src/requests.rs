//! Request bodies and auth responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Author, User};
use crate::validate::{Validate, ValidationError};

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: Author,
}

/// Body of `POST /posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Successful login reply.
///
/// The server reports the user id and name; email is optional and becomes
/// empty when missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: u64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn into_user(self) -> User {
        User {
            id: self.user_id,
            username: self.username,
            email: self.email.unwrap_or_default(),
        }
    }
}

impl Validate for LoginResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id == 0 {
            return Err(ValidationError::new("userId", "must be a positive id"));
        }
        if self.username.trim().is_empty() {
            return Err(ValidationError::new("username", "must not be empty"));
        }
        Ok(())
    }
}

/// Successful registration reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user_id: u64,
}

impl Validate for RegisterResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id == 0 {
            return Err(ValidationError::new("userId", "must be a positive id"));
        }
        Ok(())
    }
}
