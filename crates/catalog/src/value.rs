//! Dynamically-typed field values.
//!
//! Setters and constructors on [`Catalog`](crate::Catalog) take
//! `impl Into<Value>`, so a host can pass whatever it has in hand and the
//! catalog decides at assignment time whether the kind fits the field.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use crate::author::AuthorId;
use crate::book::BookId;
use crate::contract::ContractId;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Repeated(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Author(AuthorId),
    Book(BookId),
    Contract(ContractId),
}

impl Value {
    /// Name of the variant, as used in validation messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Repeated(_) => "list",
            Self::Map(_) => "map",
            Self::Author(_) => "Author",
            Self::Book(_) => "Book",
            Self::Contract(_) => "Contract",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => value.fmt(f),
            Self::Integer(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Repeated(values) => write!(
                f,
                "[{}]",
                values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Map(entries) => write!(
                f,
                "{{{}}}",
                entries
                    .iter()
                    .map(|(k, v)| format!("{k:?}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::Author(id) => id.fmt(f),
            Self::Book(id) => id.fmt(f),
            Self::Contract(id) => id.fmt(f),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<AuthorId> for Value {
    fn from(value: AuthorId) -> Self {
        Self::Author(value)
    }
}

impl From<BookId> for Value {
    fn from(value: BookId) -> Self {
        Self::Book(value)
    }
}

impl From<ContractId> for Value {
    fn from(value: ContractId) -> Self {
        Self::Contract(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// JSON numbers that fit `i64` become [`Value::Integer`]; every other number
/// (fractions, values above `i64::MAX`) becomes [`Value::Float`].
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Repeated(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => {
                Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
