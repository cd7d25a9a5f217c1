//! End-to-end tests through the public catalog API.
//!
//! Verifies:
//! - Signing contracts links authors and books in both directions
//! - Values arriving as JSON are validated like native ones
//! - Every fresh catalog is isolated from every other

use quill_catalog::{AuthorId, BookId, Catalog, Value};
use quill_core::DomainError;
use serde_json::json;

fn book_ids(catalog: &Catalog, author: AuthorId) -> Vec<BookId> {
    catalog
        .author_books(author)
        .unwrap()
        .iter()
        .map(|b| b.id_typed())
        .collect()
}

fn author_ids(catalog: &Catalog, book: BookId) -> Vec<AuthorId> {
    catalog
        .book_authors(book)
        .unwrap()
        .iter()
        .map(|a| a.id_typed())
        .collect()
}

#[test]
fn octavia_butler_signs_for_kindred() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Octavia Butler").unwrap();
    let book = catalog.create_book("Kindred").unwrap();

    let contract = catalog
        .sign_contract(author, book, "1979-01-01", 500)
        .unwrap();

    assert_eq!(catalog.total_royalties(author).unwrap(), 500);
    assert_eq!(book_ids(&catalog, author), vec![book]);
    assert_eq!(author_ids(&catalog, book), vec![author]);

    let by_date: Vec<_> = catalog
        .contracts_by_date("1979-01-01")
        .iter()
        .map(|c| c.id_typed())
        .collect();
    assert_eq!(by_date, vec![contract]);
}

#[test]
fn many_to_many_links_are_symmetric() {
    let mut catalog = Catalog::new();
    let butler = catalog.create_author("Octavia Butler").unwrap();
    let le_guin = catalog.create_author("Ursula K. Le Guin").unwrap();
    let kindred = catalog.create_book("Kindred").unwrap();
    let anthology = catalog.create_book("Dangerous Visions").unwrap();

    catalog.sign_contract(butler, kindred, "1979-01-01", 500).unwrap();
    catalog.sign_contract(butler, anthology, "1967-01-01", 50).unwrap();
    catalog.sign_contract(le_guin, anthology, "1967-01-01", 75).unwrap();
    catalog.sign_contract(butler, kindred, "2004-01-01", 120).unwrap();

    assert_eq!(book_ids(&catalog, butler), vec![kindred, anthology]);
    assert_eq!(book_ids(&catalog, le_guin), vec![anthology]);
    assert_eq!(author_ids(&catalog, anthology), vec![butler, le_guin]);
    assert_eq!(author_ids(&catalog, kindred), vec![butler]);

    assert_eq!(catalog.total_royalties(butler).unwrap(), 670);
    assert_eq!(catalog.total_royalties(le_guin).unwrap(), 75);
    assert_eq!(catalog.contracts_by_date("1967-01-01").len(), 2);
    assert_eq!(catalog.book_contracts(kindred).unwrap().len(), 2);
}

#[test]
fn json_input_is_validated_like_native_values() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author(json!("Samuel R. Delany")).unwrap();
    let book = catalog.create_book(json!("Dhalgren")).unwrap();

    catalog
        .sign_contract(author, book, json!("1975-01-01"), json!(300))
        .unwrap();

    let err = catalog
        .sign_contract(author, book, json!("1975-01-01"), json!(300.0))
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::type_violation("royalties must be an integer, got float")
    );

    let err = catalog.create_book(json!(["Dhalgren"])).unwrap_err();
    assert_eq!(
        err,
        DomainError::type_violation("title must be a string, got list")
    );

    let err = catalog.set_author_name(author, json!({"first": "Samuel"})).unwrap_err();
    assert_eq!(err, DomainError::type_violation("name must be a string, got map"));

    assert_eq!(catalog.contract_count(), 1);
    assert_eq!(catalog.author(author).unwrap().name(), "Samuel R. Delany");
}

#[test]
fn fresh_catalogs_are_isolated() {
    let mut first = Catalog::new();
    let mut second = Catalog::new();

    let author = first.create_author("Only in first").unwrap();
    let book = first.create_book("Only in first").unwrap();
    first.sign_contract(author, book, "2023-01-01", 1).unwrap();

    assert_eq!(second.author_count(), 0);
    assert!(second.contracts_by_date("2023-01-01").is_empty());

    let err = second
        .create_contract(Value::Author(author), Value::Book(book), "2023-01-01", 1)
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::type_violation("author must be an Author of this catalog")
    );
}

#[test]
fn entity_records_serialize_with_their_handles() {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Octavia Butler").unwrap();
    let book = catalog.create_book("Kindred").unwrap();
    let contract = catalog.sign_contract(author, book, "1979-01-01", 500).unwrap();

    let json = serde_json::to_value(catalog.contract(contract).unwrap()).unwrap();
    assert_eq!(json["date"], "1979-01-01");
    assert_eq!(json["royalties"], 500);
    assert_eq!(json["author"]["index"], 0);
    assert_eq!(json["book"]["catalog"], catalog.id().to_string());
}
