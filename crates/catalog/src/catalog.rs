//! The catalog: one repository owning the author, book and contract registries.
//!
//! Relationship queries are never cached. Each call rescans the contract
//! registry in creation order, so results always reflect contracts signed or
//! reassigned since the previous call.

use std::collections::HashSet;

use quill_core::{CatalogId, DomainResult, Entity, EntityRef, Registry};

use crate::author::{Author, AuthorId};
use crate::book::{Book, BookId};
use crate::contract::{Contract, ContractId};
use crate::validate::{expect_integer, expect_string, field, foreign_handle, mismatch};
use crate::value::Value;

/// In-memory store for authors, books and contracts.
///
/// Handles returned by one catalog never resolve in another, and none survive
/// [`Catalog::clear`].
#[derive(Debug, Clone)]
pub struct Catalog {
    id: CatalogId,
    authors: Registry<Author>,
    books: Registry<Book>,
    contracts: Registry<Contract>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_id(CatalogId::new())
    }

    pub fn with_id(id: CatalogId) -> Self {
        Self {
            id,
            authors: Registry::new(id),
            books: Registry::new(id),
            contracts: Registry::new(id),
        }
    }

    pub fn id(&self) -> CatalogId {
        self.id
    }

    /// Empty every registry and re-key the catalog.
    pub fn clear(&mut self) {
        let next = CatalogId::new();
        tracing::info!(
            previous = %self.id,
            next = %next,
            authors = self.authors.len(),
            books = self.books.len(),
            contracts = self.contracts.len(),
            "catalog cleared"
        );
        self.id = next;
        self.authors.reset(next);
        self.books.reset(next);
        self.contracts.reset(next);
    }

    // ── Authors ────────────────────────────────────────────────────────────

    pub fn create_author(&mut self, name: impl Into<Value>) -> DomainResult<AuthorId> {
        let name = expect_string(field::NAME, name.into())?;
        let id = AuthorId::new(
            self.authors
                .insert_with(|slot| Author::new(AuthorId::new(slot), name)),
        );
        tracing::debug!(author = %id, "author created");
        Ok(id)
    }

    pub fn author(&self, id: AuthorId) -> DomainResult<&Author> {
        lookup(&self.authors, id.0, field::AUTHOR)
    }

    pub fn set_author_name(&mut self, id: AuthorId, name: impl Into<Value>) -> DomainResult<()> {
        self.author(id)?;
        let name = expect_string(field::NAME, name.into())?;
        if let Some(author) = self.authors.get_mut(id.0) {
            author.set_name(name);
        }
        tracing::debug!(author = %id, field = field::NAME, "author updated");
        Ok(())
    }

    /// Every author, in creation order.
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.iter()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Contracts whose `author` is `id`, in creation order.
    pub fn author_contracts(&self, id: AuthorId) -> DomainResult<Vec<&Contract>> {
        self.author(id)?;
        Ok(self.contracts.iter().filter(|c| c.author() == id).collect())
    }

    /// Distinct books `id` holds contracts for, in first-signed order.
    pub fn author_books(&self, id: AuthorId) -> DomainResult<Vec<&Book>> {
        let mut seen = HashSet::new();
        Ok(self
            .author_contracts(id)?
            .into_iter()
            .map(Contract::book)
            .filter(|book| seen.insert(*book))
            .filter_map(|book| self.books.get(book.0))
            .collect())
    }

    /// Sign a new contract between `author` and `book`.
    ///
    /// Same validation and registration as [`Catalog::create_contract`].
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: impl Into<Value>,
        date: impl Into<Value>,
        royalties: impl Into<Value>,
    ) -> DomainResult<ContractId> {
        self.create_contract(author, book, date, royalties)
    }

    /// Sum of royalties across the author's contracts (`0` if there are none).
    ///
    /// Accumulated as `i128`, so no sum of `i64` amounts can overflow.
    pub fn total_royalties(&self, id: AuthorId) -> DomainResult<i128> {
        Ok(self
            .author_contracts(id)?
            .into_iter()
            .map(|c| i128::from(c.royalties()))
            .sum())
    }

    // ── Books ──────────────────────────────────────────────────────────────

    pub fn create_book(&mut self, title: impl Into<Value>) -> DomainResult<BookId> {
        let title = expect_string(field::TITLE, title.into())?;
        let id = BookId::new(
            self.books
                .insert_with(|slot| Book::new(BookId::new(slot), title)),
        );
        tracing::debug!(book = %id, "book created");
        Ok(id)
    }

    pub fn book(&self, id: BookId) -> DomainResult<&Book> {
        lookup(&self.books, id.0, field::BOOK)
    }

    pub fn set_book_title(&mut self, id: BookId, title: impl Into<Value>) -> DomainResult<()> {
        self.book(id)?;
        let title = expect_string(field::TITLE, title.into())?;
        if let Some(book) = self.books.get_mut(id.0) {
            book.set_title(title);
        }
        tracing::debug!(book = %id, field = field::TITLE, "book updated");
        Ok(())
    }

    /// Every book, in creation order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Contracts whose `book` is `id`, in creation order.
    pub fn book_contracts(&self, id: BookId) -> DomainResult<Vec<&Contract>> {
        self.book(id)?;
        Ok(self.contracts.iter().filter(|c| c.book() == id).collect())
    }

    /// Distinct authors holding contracts for `id`, in first-signed order.
    pub fn book_authors(&self, id: BookId) -> DomainResult<Vec<&Author>> {
        let mut seen = HashSet::new();
        Ok(self
            .book_contracts(id)?
            .into_iter()
            .map(Contract::author)
            .filter(|author| seen.insert(*author))
            .filter_map(|author| self.authors.get(author.0))
            .collect())
    }

    // ── Contracts ──────────────────────────────────────────────────────────

    /// Validate all four fields, then register the contract.
    ///
    /// Nothing is registered if any field is rejected.
    pub fn create_contract(
        &mut self,
        author: impl Into<Value>,
        book: impl Into<Value>,
        date: impl Into<Value>,
        royalties: impl Into<Value>,
    ) -> DomainResult<ContractId> {
        let author = self.resolve_author(author.into())?;
        let book = self.resolve_book(book.into())?;
        let date = expect_string(field::DATE, date.into())?;
        let royalties = expect_integer(field::ROYALTIES, royalties.into())?;

        let id = ContractId::new(self.contracts.insert_with(|slot| {
            Contract::new(ContractId::new(slot), author, book, date, royalties)
        }));
        tracing::debug!(
            contract = %id,
            author = %author,
            book = %book,
            royalties,
            "contract registered"
        );
        Ok(id)
    }

    pub fn contract(&self, id: ContractId) -> DomainResult<&Contract> {
        lookup(&self.contracts, id.0, field::CONTRACT)
    }

    pub fn set_contract_author(
        &mut self,
        id: ContractId,
        author: impl Into<Value>,
    ) -> DomainResult<()> {
        self.contract(id)?;
        let author = self.resolve_author(author.into())?;
        if let Some(contract) = self.contracts.get_mut(id.0) {
            contract.set_author(author);
        }
        tracing::debug!(contract = %id, field = field::AUTHOR, "contract updated");
        Ok(())
    }

    pub fn set_contract_book(&mut self, id: ContractId, book: impl Into<Value>) -> DomainResult<()> {
        self.contract(id)?;
        let book = self.resolve_book(book.into())?;
        if let Some(contract) = self.contracts.get_mut(id.0) {
            contract.set_book(book);
        }
        tracing::debug!(contract = %id, field = field::BOOK, "contract updated");
        Ok(())
    }

    pub fn set_contract_date(&mut self, id: ContractId, date: impl Into<Value>) -> DomainResult<()> {
        self.contract(id)?;
        let date = expect_string(field::DATE, date.into())?;
        if let Some(contract) = self.contracts.get_mut(id.0) {
            contract.set_date(date);
        }
        tracing::debug!(contract = %id, field = field::DATE, "contract updated");
        Ok(())
    }

    pub fn set_contract_royalties(
        &mut self,
        id: ContractId,
        royalties: impl Into<Value>,
    ) -> DomainResult<()> {
        self.contract(id)?;
        let royalties = expect_integer(field::ROYALTIES, royalties.into())?;
        if let Some(contract) = self.contracts.get_mut(id.0) {
            contract.set_royalties(royalties);
        }
        tracing::debug!(contract = %id, field = field::ROYALTIES, "contract updated");
        Ok(())
    }

    /// Every contract, in creation order.
    pub fn contracts(&self) -> impl Iterator<Item = &Contract> {
        self.contracts.iter()
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    /// Contracts across all authors and books whose date is exactly `date`.
    pub fn contracts_by_date(&self, date: &str) -> Vec<&Contract> {
        self.contracts.iter().filter(|c| c.date() == date).collect()
    }

    fn resolve_author(&self, value: Value) -> DomainResult<AuthorId> {
        match value {
            Value::Author(id) if self.authors.contains(id.0) => Ok(id),
            Value::Author(_) => Err(foreign_handle(field::AUTHOR, Author::KIND)),
            other => Err(mismatch(field::AUTHOR, "an Author", &other)),
        }
    }

    fn resolve_book(&self, value: Value) -> DomainResult<BookId> {
        match value {
            Value::Book(id) if self.books.contains(id.0) => Ok(id),
            Value::Book(_) => Err(foreign_handle(field::BOOK, Book::KIND)),
            other => Err(mismatch(field::BOOK, "a Book", &other)),
        }
    }
}

fn lookup<'a, T: Entity>(
    registry: &'a Registry<T>,
    slot: EntityRef,
    field: &'static str,
) -> DomainResult<&'a T> {
    registry
        .get(slot)
        .ok_or_else(|| foreign_handle(field, T::KIND))
}
