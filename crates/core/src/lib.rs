//! `quill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no global state):
//! the error model, catalog-scoped identifiers and the ordered arena that
//! backs every entity registry.

pub mod entity;
pub mod error;
pub mod id;
pub mod registry;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CatalogId, EntityRef};
pub use registry::Registry;
