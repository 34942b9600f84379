//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AfficheError`]
//! via `#[from]`; no `String` variants for sources.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum AfficheError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on the [`Poster`](crate::poster::Poster) entity.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `title` must be non-empty.
    #[error("title must not be empty")]
    EmptyTitle,

    /// `location` must be non-empty.
    #[error("location must not be empty")]
    EmptyLocation,

    /// `image` must carry a non-empty payload.
    #[error("image must not be empty")]
    MissingImage,

    /// `date` did not parse as a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A path or form identifier did not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Poster"`.
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Poster",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Poster abc not found");
    }

    #[test]
    fn should_convert_validation_error_into_top_level() {
        let err: AfficheError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            AfficheError::Validation(ValidationError::EmptyTitle)
        ));
    }
}
