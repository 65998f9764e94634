use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::error::CatalogError;
use crate::seed::seed_books;
use crate::types::{Book, BookId, BookRequest};

/// Storage seam for book records.
///
/// Handlers only talk to this trait, so a test or an alternative backend can
/// be injected behind `Arc<dyn BookStore>`. Implementations do not validate;
/// payloads are checked with [`validate_book_request`](crate::validate_book_request)
/// before they get here.
pub trait BookStore: Send + Sync {
    /// All books in insertion order.
    fn list(&self) -> Vec<Book>;
    /// Books whose category equals `category`, ignoring case.
    fn list_by_category(&self, category: &str) -> Vec<Book>;
    /// Look up one book.
    fn find_by_id(&self, id: BookId) -> Result<Book, CatalogError>;
    /// Append a new book with the next free id and return it.
    fn insert(&self, request: BookRequest) -> Book;
    /// Overwrite every field but the id, keeping the record's position.
    fn replace(&self, id: BookId, request: BookRequest) -> Result<Book, CatalogError>;
    /// Remove the book with `id`.
    fn delete(&self, id: BookId) -> Result<(), CatalogError>;
    /// Number of stored books.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-memory, insertion-ordered store using a `RwLock` around a `Vec`.
///
/// Reads share the lock; every mutation, including id assignment, runs under
/// the write lock so concurrent inserts never hand out the same id.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the six bootstrap records, ids 1 through 6.
    pub fn seeded() -> Self {
        Self::from_books(seed_books())
    }

    /// A store holding `books` in the given order.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    // A panic while holding the lock cannot leave the Vec half-updated, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One greater than the largest id present, or 1 for an empty slice.
pub fn next_id(books: &[Book]) -> BookId {
    books.iter().map(|book| book.id).max().unwrap_or(0) + 1
}

impl BookStore for InMemoryBookStore {
    fn list(&self) -> Vec<Book> {
        self.read().clone()
    }

    fn list_by_category(&self, category: &str) -> Vec<Book> {
        self.read()
            .iter()
            .filter(|book| book.in_category(category))
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: BookId) -> Result<Book, CatalogError> {
        self.read()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    fn insert(&self, request: BookRequest) -> Book {
        let mut books = self.write();
        let book = Book::from_request(next_id(&books), request);
        books.push(book.clone());
        info!(id = book.id, title = %book.title, "book inserted");
        book
    }

    fn replace(&self, id: BookId, request: BookRequest) -> Result<Book, CatalogError> {
        let mut books = self.write();
        let slot = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        *slot = Book::from_request(id, request);
        info!(id, title = %slot.title, "book replaced");
        Ok(slot.clone())
    }

    fn delete(&self, id: BookId) -> Result<(), CatalogError> {
        let mut books = self.write();
        let position = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let removed = books.remove(position);
        info!(id, title = %removed.title, "book deleted");
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
