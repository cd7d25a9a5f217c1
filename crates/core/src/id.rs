//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a catalog (the store that owns a set of registries).
///
/// Every entity handle carries the id of the catalog that issued it, so a
/// handle can never be resolved against a different (or reset) catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(Uuid);

impl CatalogId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CatalogId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for CatalogId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CatalogId> for Uuid {
    fn from(value: CatalogId) -> Self {
        value.0
    }
}

impl FromStr for CatalogId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::type_violation(format!("CatalogId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Opaque handle to a slot in a [`Registry`](crate::Registry).
///
/// Identity is the pair (issuing catalog, insertion index). Two handles denote
/// the same entity iff they are equal, regardless of the entity's attributes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    catalog: CatalogId,
    index: usize,
}

impl EntityRef {
    pub fn new(catalog: CatalogId, index: usize) -> Self {
        Self { catalog, index }
    }

    pub fn catalog(&self) -> CatalogId {
        self.catalog
    }

    /// Position in the owning registry (creation order).
    pub fn index(&self) -> usize {
        self.index
    }
}

impl core::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.catalog, self.index)
    }
}
