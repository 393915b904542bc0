//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{Book, BookSource, FetchError};
use crate::core::action::{Action, update};
use crate::core::route::View;
use crate::core::state::App;

/// A source that always returns the same books.
pub struct StaticSource(pub Vec<Book>);

#[async_trait]
impl BookSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_books(&self) -> Result<Vec<Book>, FetchError> {
        Ok(self.0.clone())
    }
}

/// A source that always fails.
pub struct FailingSource;

#[async_trait]
impl BookSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_books(&self) -> Result<Vec<Book>, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

pub fn book(id: &str, title: &str, author: &str, rating: Option<f64>) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover_image_url: format!("https://covers.example/{id}.jpg"),
        rating,
    }
}

/// `Book 1` .. `Book n` by `Author 1` .. `Author n`, ids `"1"` .. `"n"`.
pub fn numbered_books(n: usize) -> Vec<Book> {
    (1..=n)
        .map(|i| {
            book(
                &i.to_string(),
                &format!("Book {i}"),
                &format!("Author {i}"),
                Some((i % 5) as f64 + 0.5),
            )
        })
        .collect()
}

/// Creates an All Books App with default page size, still loading.
pub fn test_app() -> App {
    App::new(View::All, 8, 4)
}

/// Creates an All Books App whose fetch completed with `n` numbered books.
pub fn loaded_app(n: usize) -> App {
    let mut app = test_app();
    update(&mut app, Action::Mount(View::All));
    let generation = app.fetch_generation;
    update(
        &mut app,
        Action::BooksLoaded {
            generation,
            books: numbered_books(n),
        },
    );
    app
}

#[test]
fn test_static_source_returns_books() {
    let source = StaticSource(numbered_books(2));
    let books = tokio_test::block_on(source.fetch_books()).unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(source.name(), "static");
}

#[test]
fn test_failing_source_errors() {
    let result = tokio_test::block_on(FailingSource.fetch_books());
    assert!(matches!(result, Err(FetchError::Network(_))));
}
