//! Bookshelf Catalog
//!
//! The domain half of the bookshelf service. Nothing here knows about HTTP.
//!
//! ## What lives here
//!
//! - **Records** - [`Book`] as stored and served, [`BookRequest`] as written by clients.
//! - **Validation** - Length and range checks that collect every violation
//!   before anything touches the store.
//! - **Store** - [`BookStore`] trait and the ordered [`InMemoryBookStore`].
//! - **Seed data** - The six records a fresh process starts with.
//!
//! ## Example
//!
//! ```
//! use catalog::{create_book, BookRequest, BookStore, InMemoryBookStore};
//!
//! let store = InMemoryBookStore::seeded();
//! let request = BookRequest::new("The Rust Book", "Klabnik & Nichols", "Computer Science", 5);
//!
//! let book = create_book(&store, request).unwrap();
//!
//! assert_eq!(book.id, 7);
//! assert_eq!(store.list_by_category("computer science").len(), 3);
//! ```

mod error;
mod seed;
mod store;
mod types;
mod validation;

pub use crate::error::{CatalogError, FieldError, ValidationErrors};
pub use crate::seed::seed_books;
pub use crate::store::{next_id, BookStore, InMemoryBookStore};
pub use crate::types::{Book, BookId, BookRequest};
pub use crate::validation::{
    validate_book_request, validate_id, AUTHOR_MAX_CHARS, CATEGORY_MAX_CHARS, RATING_MAX,
    RATING_MIN, TITLE_MAX_CHARS,
};

use tracing::debug;

/// Validate `request` and insert it. Nothing is stored if validation fails.
pub fn create_book(store: &dyn BookStore, request: BookRequest) -> Result<Book, CatalogError> {
    validate_book_request(&request)?;
    Ok(store.insert(request))
}

/// Validate `request` and replace book `id` with it.
///
/// Validation runs first, so an invalid payload for a missing id reports the
/// validation failure rather than [`CatalogError::NotFound`].
pub fn update_book(
    store: &dyn BookStore,
    id: BookId,
    request: BookRequest,
) -> Result<Book, CatalogError> {
    validate_book_request(&request).inspect_err(|_| debug!(id, "update rejected"))?;
    store.replace(id, request)
}
