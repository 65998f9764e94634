//! Workspace umbrella crate for the bookshelf service.
//!
//! Re-exports the catalog (records, validation, store) and, with the
//! `server` feature, the HTTP layer, so callers can depend on one crate.
//!
//! ```
//! use bookshelf::{BookStore, InMemoryBookStore};
//!
//! let store = InMemoryBookStore::seeded();
//! assert_eq!(store.find_by_id(3).unwrap().title, "Why 1+1 Rocks");
//! ```

pub use catalog::{
    AUTHOR_MAX_CHARS, Book, BookId, BookRequest, BookStore, CATEGORY_MAX_CHARS, CatalogError,
    FieldError, InMemoryBookStore, RATING_MAX, RATING_MIN, TITLE_MAX_CHARS, ValidationErrors,
    create_book, next_id, seed_books, update_book, validate_book_request, validate_id,
};

#[cfg(feature = "server")]
pub use server::{
    ErrorResponse, ServerConfig, ServerError, ServerResult, ServerState, build_router, serve,
    start_server,
};
