use anyhow::Context;
use quill_catalog::Catalog;
use quill_core::DomainError;
use serde_json::json;

const DEFAULT_ROYALTIES: i64 = 500;

fn main() -> anyhow::Result<()> {
    quill_observability::init();

    let royalties = royalties_from(std::env::var("QUILL_DEMO_ROYALTIES").ok());

    let mut catalog = Catalog::new();
    let author = catalog.create_author("Octavia Butler")?;
    let book = catalog.create_book("Kindred")?;

    // A title is not a book: the catalog refuses it and registers nothing.
    match catalog.sign_contract(author, "Kindred", "1979-01-01", royalties) {
        Err(DomainError::TypeViolation(msg)) => {
            tracing::info!(%msg, "contract with a bare title rejected")
        }
        Ok(id) => anyhow::bail!("contract {id} accepted a title in place of a book"),
    }

    let contract = catalog
        .sign_contract(author, book, "1979-01-01", royalties)
        .context("signing Kindred")?;
    tracing::info!(contract = %contract, "contract signed");

    let summary = json!({
        "catalog": catalog.id().to_string(),
        "author": catalog.author(author)?,
        "books": catalog.author_books(author)?,
        "book_authors": catalog.book_authors(book)?,
        "total_royalties": catalog.total_royalties(author)?.to_string(),
        "contracts_on_1979_01_01": catalog.contracts_by_date("1979-01-01"),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn royalties_from(raw: Option<String>) -> i64 {
    match raw {
        None => DEFAULT_ROYALTIES,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(%raw, "QUILL_DEMO_ROYALTIES is not an integer; using default");
            DEFAULT_ROYALTIES
        }),
    }
}
