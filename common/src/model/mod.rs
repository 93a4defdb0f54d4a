pub mod category;
pub mod farm;
pub mod id;
pub mod product;

use thiserror::Error;

/// A record that failed its schema checks.
///
/// Raised when building or updating a `Farm` or `Product` from submitted
/// fields. The message names the offending path, so it can be shown to the
/// user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {reason}")]
pub struct ValidationError {
    pub path: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(path: &'static str, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }
}

pub(crate) fn require_text(path: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(path, "is required"));
    }
    Ok(())
}
