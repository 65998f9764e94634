//! `/api/books` handlers.
//!
//! Path ids arrive as signed integers so that `0` and negative values reach
//! [`validate_id`] and come back as field-level validation errors; anything
//! that is not an integer at all is a plain bad request.
use crate::error::{ErrorResponse, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use catalog::{validate_id, Book, BookId, BookRequest};
use std::sync::Arc;
use utoipa::IntoParams;

pub const BOOKS_PATH: &str = "/api/books";
pub const BOOK_BY_ID_PATH: &str = "/api/books/{id}";

/// Query parameters for listing books
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksQuery {
    /// Case-insensitive category filter. Empty means no filter.
    pub category: Option<String>,
}

impl ListBooksQuery {
    /// Pick the filter out of raw query pairs.
    ///
    /// A repeated `category` key is joined with `,` rather than rejected, and
    /// unrelated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "category")
            .map(|(_, value)| value)
            .collect();

        Self {
            category: (!values.is_empty()).then(|| values.join(",")),
        }
    }
}

fn book_id(path: Result<Path<i64>, PathRejection>) -> ServerResult<BookId> {
    let Path(raw) = path?;
    Ok(validate_id(raw)?)
}

/// List all books, optionally filtered by category
///
/// Books come back in insertion order. Listing never fails; an unknown
/// category yields an empty array.
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Books in insertion order", body = [Book])
    )
)]
pub async fn list_books(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Vec<Book>> {
    let query = match query {
        Ok(Query(pairs)) => ListBooksQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable query string, listing everything");
            ListBooksQuery::default()
        }
    };

    let books = match query.category.as_deref() {
        Some(category) if !category.is_empty() => state.store.list_by_category(category),
        _ => state.store.list(),
    };

    tracing::debug!(count = books.len(), category = ?query.category, "listed books");
    Json(books)
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id, at least 1")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "No book with this id", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<Arc<ServerState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ServerResult<Json<Book>> {
    let id = book_id(path)?;
    let book = state.store.find_by_id(id)?;
    Ok(Json(book))
}

/// Create a book
///
/// Responds `201 Created` with an empty body. The new id is only exposed
/// through the `Location` header.
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created",
            headers(("Location" = String, description = "Path of the new book"))),
        (status = 400, description = "Invalid or malformed payload", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = payload?;
    let book = catalog::create_book(state.store.as_ref(), request)?;
    tracing::info!(id = book.id, "book created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BOOKS_PATH}/{}", book.id))],
    ))
}

/// Update a book
///
/// Replaces every field except the id. The book keeps its position in
/// listings.
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id, at least 1")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "The updated book", body = Book),
        (status = 400, description = "Invalid id or payload", body = ErrorResponse),
        (status = 404, description = "No book with this id", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<Arc<ServerState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> ServerResult<Json<Book>> {
    let id = book_id(path)?;
    let Json(request) = payload?;
    let book = catalog::update_book(state.store.as_ref(), id, request)?;
    tracing::info!(id, "book updated");
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id, at least 1")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "No book with this id", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<Arc<ServerState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ServerResult<StatusCode> {
    let id = book_id(path)?;
    state.store.delete(id)?;
    tracing::info!(id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
