use serde::{Deserialize, Serialize};

use quill_core::{Entity, EntityRef};

use crate::author::AuthorId;
use crate::book::BookId;

/// Contract identifier (scoped to the catalog that issued it).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(pub EntityRef);

impl ContractId {
    pub fn new(slot: EntityRef) -> Self {
        Self(slot)
    }
}

impl core::fmt::Display for ContractId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "contract:{}", self.0)
    }
}

/// Join entity: one agreement between an author and a book.
///
/// The same author/book pair may appear on any number of contracts. `author`
/// and `book` always hold handles that resolve in the owning catalog; the
/// catalog checks this on construction and on every reassignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    id: ContractId,
    author: AuthorId,
    book: BookId,
    date: String,
    /// Unrestricted: negative amounts are accepted.
    royalties: i64,
}

impl Contract {
    pub(crate) fn new(
        id: ContractId,
        author: AuthorId,
        book: BookId,
        date: String,
        royalties: i64,
    ) -> Self {
        Self {
            id,
            author,
            book,
            date,
            royalties,
        }
    }

    pub fn id_typed(&self) -> ContractId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn royalties(&self) -> i64 {
        self.royalties
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_book(&mut self, book: BookId) {
        self.book = book;
    }

    pub(crate) fn set_date(&mut self, date: String) {
        self.date = date;
    }

    pub(crate) fn set_royalties(&mut self, royalties: i64) {
        self.royalties = royalties;
    }
}

impl Entity for Contract {
    type Id = ContractId;

    const KIND: &'static str = "Contract";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
