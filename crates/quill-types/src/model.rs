//! Entities returned by the blog API.
//!
//! All entities are value types: the client never edits them in place,
//! it only replaces the collections that hold them.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationError};

/// Signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// Projection of a [`User`] embedded in posts and comments.
///
/// This is a denormalized copy taken when the post or comment was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub username: String,
}

impl From<&User> for Author {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// ISO-8601 timestamp as sent by the server.
///
/// Kept as the raw string so that it round-trips unchanged. Both RFC 3339
/// (`2024-05-01T10:00:00Z`) and offset-less local date-times
/// (`2024-05-01T10:00:00.123`) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the timestamp, returning `None` if it is not ISO-8601.
    pub fn parse(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        Self::LOCAL_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }

    /// Date portion for display (`YYYY-MM-DD`).
    pub fn date_label(&self) -> String {
        match self.parse() {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => self.0.clone(),
        }
    }
}

impl Validate for Timestamp {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.parse().is_some() {
            Ok(())
        } else {
            Err(ValidationError::new(
                "",
                format!("'{}' is not an ISO-8601 timestamp", self.0),
            ))
        }
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Ordered tags. Duplicates are filtered when a post is composed, not here.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub content: String,
    pub author: Author,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub post_id: u64,
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id("id", self.id)?;
        require_text("username", &self.username)
    }
}

impl Validate for Author {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id("id", self.id)?;
        require_text("username", &self.username)
    }
}

impl Validate for Post {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id("id", self.id)?;
        self.author.validate().map_err(|e| e.within("author"))?;
        self.created_at
            .validate()
            .map_err(|e| e.within("createdAt"))?;
        self.updated_at
            .validate()
            .map_err(|e| e.within("updatedAt"))?;
        Ok(())
    }
}

impl Validate for Comment {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id("id", self.id)?;
        require_id("postId", self.post_id)?;
        self.author.validate().map_err(|e| e.within("author"))?;
        self.created_at
            .validate()
            .map_err(|e| e.within("createdAt"))?;
        self.updated_at
            .validate()
            .map_err(|e| e.within("updatedAt"))?;
        Ok(())
    }
}

fn require_id(field: &str, id: u64) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::new(field, "must be a positive id"));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}
