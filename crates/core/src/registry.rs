//! Ordered, append-only arena backing each entity registry.
//!
//! Slots are never removed or reordered, so an [`EntityRef`] stays valid for
//! the lifetime of the registry (until [`Registry::reset`]) and iteration
//! always yields entities in creation order.

use crate::id::{CatalogId, EntityRef};

#[derive(Debug, Clone)]
pub struct Registry<T> {
    owner: CatalogId,
    items: Vec<T>,
}

impl<T> Registry<T> {
    pub fn new(owner: CatalogId) -> Self {
        Self {
            owner,
            items: Vec::new(),
        }
    }

    /// Catalog whose handles this registry accepts.
    pub fn owner(&self) -> CatalogId {
        self.owner
    }

    /// Append an entity built from the handle it will be stored under.
    pub fn insert_with(&mut self, build: impl FnOnce(EntityRef) -> T) -> EntityRef {
        let slot = EntityRef::new(self.owner, self.items.len());
        self.items.push(build(slot));
        tracing::trace!(catalog = %self.owner, index = slot.index(), "registry slot allocated");
        slot
    }

    /// Whether `slot` was issued by this registry (same owner, in range).
    pub fn contains(&self, slot: EntityRef) -> bool {
        slot.catalog() == self.owner && slot.index() < self.items.len()
    }

    pub fn get(&self, slot: EntityRef) -> Option<&T> {
        if slot.catalog() != self.owner {
            return None;
        }
        self.items.get(slot.index())
    }

    pub fn get_mut(&mut self, slot: EntityRef) -> Option<&mut T> {
        if slot.catalog() != self.owner {
            return None;
        }
        self.items.get_mut(slot.index())
    }

    /// Entities in creation order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every entity and re-key the registry to `owner`.
    ///
    /// Handles issued under the previous owner no longer resolve.
    pub fn reset(&mut self, owner: CatalogId) {
        self.items.clear();
        self.owner = owner;
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
