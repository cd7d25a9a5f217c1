//! Catalog domain module: authors, books and the contracts that join them.
//!
//! Authors and books never reference each other directly. Every relationship
//! is a [`Contract`], and every relationship query is derived by scanning the
//! contract registry of a [`Catalog`] in creation order.

pub mod author;
pub mod book;
pub mod catalog;
pub mod contract;
pub mod validate;
pub mod value;

pub use author::{Author, AuthorId};
pub use book::{Book, BookId};
pub use catalog::Catalog;
pub use contract::{Contract, ContractId};
pub use value::Value;
