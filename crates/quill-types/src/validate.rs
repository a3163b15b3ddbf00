//! Payload validation at the API boundary.
//!
//! Serde guarantees the shape of a payload; `Validate` checks the values
//! the client relies on (positive ids, parseable timestamps, non-empty names).

use std::fmt;

/// A value that can be checked after decoding.
pub trait Validate {
    /// # Errors
    /// Returns the first field that does not hold a usable value.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validation failure with the dotted path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: String,
    reason: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Prefixes the path with an enclosing field or index.
    #[must_use]
    pub fn within(mut self, parent: &str) -> Self {
        self.path = if self.path.is_empty() {
            parent.to_string()
        } else if self.path.starts_with('[') {
            format!("{parent}{}", self.path)
        } else {
            format!("{parent}.{}", self.path)
        };
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

impl std::error::Error for ValidationError {}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_all(self)
    }
}

/// Validates every element, reporting the index of the first failure.
///
/// # Errors
/// Returns the first element's error with its index prepended to the path.
pub fn validate_all<T: Validate>(items: &[T]) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|e| e.within(&format!("[{index}]")))?;
    }
    Ok(())
}
