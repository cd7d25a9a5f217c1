use serde::{Deserialize, Serialize};

use quill_core::{Entity, EntityRef};

/// Book identifier (scoped to the catalog that issued it).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub EntityRef);

impl BookId {
    pub fn new(slot: EntityRef) -> Self {
        Self(slot)
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "book:{}", self.0)
    }
}

/// A published work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
}

impl Book {
    pub(crate) fn new(id: BookId, title: String) -> Self {
        Self { id, title }
    }

    pub fn id_typed(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

impl Entity for Book {
    type Id = BookId;

    const KIND: &'static str = "Book";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
