use serde::{Deserialize, Serialize};

use quill_core::{Entity, EntityRef};

/// Author identifier (scoped to the catalog that issued it).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub EntityRef);

impl AuthorId {
    pub fn new(slot: EntityRef) -> Self {
        Self(slot)
    }
}

impl core::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "author:{}", self.0)
    }
}

/// A writer. Linked to books only through contracts.
///
/// Two authors with the same name are still distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id_typed(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Entity for Author {
    type Id = AuthorId;

    const KIND: &'static str = "Author";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
