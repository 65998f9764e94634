//! Core data model types for the catalog crate.
//!
//! ```text
//! BookRequest (wire payload, no id)
//! ├── title: String
//! ├── author: String
//! ├── category: String
//! └── rating: i64
//!
//!         ↓ validate_book_request() + BookStore::insert / replace
//!
//! Book
//! ├── id: u64 (assigned by the store, immutable)
//! ├── title, author, category: String
//! └── rating: u8 (1..=5)
//! ```
use serde::{Deserialize, Serialize};

/// Identifier assigned to a [`Book`] by the store.
pub type BookId = u64;

/// A book record as held by the store and returned over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: u8,
}

impl Book {
    /// Build a record from an already validated request.
    ///
    /// A rating outside `u8` range saturates; callers run
    /// [`validate_book_request`](crate::validate_book_request) first, so this
    /// only matters for unvalidated input.
    pub fn from_request(id: BookId, request: BookRequest) -> Self {
        let rating = u8::try_from(request.rating.clamp(0, i64::from(u8::MAX))).unwrap_or(u8::MAX);
        Self {
            id,
            title: request.title,
            author: request.author,
            category: request.category,
            rating,
        }
    }

    /// Case-insensitive category comparison used by category filters.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Payload for creating or replacing a book.
///
/// Missing fields deserialize to their defaults (empty text, rating 0) so
/// that they are reported by validation per field instead of failing the
/// whole body at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i64,
}

impl BookRequest {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        rating: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
            rating,
        }
    }
}
