//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The catalog has exactly one failure mode: a field (or a handle standing in
/// for an entity) was given a value of the wrong kind. Queries never fail on
/// a valid handle; an entity without relationships simply yields nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value of the wrong type was assigned, or a handle does not denote an
    /// instance of the expected entity in this catalog.
    #[error("type violation: {0}")]
    TypeViolation(String),
}

impl DomainError {
    pub fn type_violation(msg: impl Into<String>) -> Self {
        Self::TypeViolation(msg.into())
    }

    /// Human-readable detail without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::TypeViolation(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        let err = DomainError::type_violation("name must be a string, got integer");
        assert_eq!(
            err.to_string(),
            "type violation: name must be a string, got integer"
        );
        assert_eq!(err.message(), "name must be a string, got integer");
    }
}
