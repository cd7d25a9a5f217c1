//! Field validation shared by every constructor and setter.

use quill_core::DomainError;

use crate::value::Value;

/// Field names, as they appear in error messages and log events.
pub mod field {
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const BOOK: &str = "book";
    pub const CONTRACT: &str = "contract";
    pub const DATE: &str = "date";
    pub const ROYALTIES: &str = "royalties";
}

/// Accept only [`Value::String`] (empty strings included).
pub fn expect_string(field: &'static str, value: Value) -> Result<String, DomainError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(mismatch(field, "a string", &other)),
    }
}

/// Accept only [`Value::Integer`]. Booleans and floats are rejected, even
/// when the float has no fractional part.
pub fn expect_integer(field: &'static str, value: Value) -> Result<i64, DomainError> {
    match value {
        Value::Integer(i) => Ok(i),
        other => Err(mismatch(field, "an integer", &other)),
    }
}

/// Value of the wrong kind for `field`.
pub fn mismatch(field: &'static str, expected: &str, got: &Value) -> DomainError {
    tracing::warn!(field, expected, got = got.kind(), "rejected field value");
    DomainError::type_violation(format!("{field} must be {expected}, got {}", got.kind()))
}

/// Handle of the right kind that does not resolve in this catalog (issued by
/// another catalog, or before a reset).
pub fn foreign_handle(field: &'static str, kind: &str) -> DomainError {
    tracing::warn!(field, kind, "rejected handle from another catalog");
    DomainError::type_violation(format!("{field} must be {} {kind} of this catalog", article(kind)))
}

fn article(kind: &str) -> &'static str {
    match kind.chars().next() {
        Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
        _ => "a",
    }
}
