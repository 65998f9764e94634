//! Machine-readable API description.
//!
//! The document is derived from the `#[utoipa::path]` annotations on the
//! book handlers and served as JSON at [`OPENAPI_PATH`].

use crate::error::ErrorResponse;
use crate::routes::books;
use axum::Json;
use catalog::{Book, BookRequest, FieldError};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "Create, read, update and delete books in an in-memory catalog"
    ),
    paths(
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book
    ),
    components(schemas(Book, BookRequest, ErrorResponse, FieldError)),
    tags((name = "books", description = "Book catalog management"))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
