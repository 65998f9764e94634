//! Bookshelf Server - HTTP REST API for the book catalog
//!
//! This crate exposes the [`catalog`] store over JSON/HTTP with axum.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /api-docs/openapi.json` - OpenAPI document for the book routes
//! - `GET /api/books?category=` - List books, optionally by category
//! - `GET /api/books/{id}` - Get one book
//! - `POST /api/books` - Create a book (201, empty body, `Location` header)
//! - `PUT /api/books/{id}` - Replace a book's fields
//! - `DELETE /api/books/{id}` - Delete a book (204)
//!
//! Errors, including 404 for unknown paths and 405 for unsupported methods,
//! are returned as `{"status", "message", "timeStamp"}` JSON, with an extra
//! `errors` array of `{field, message}` for validation failures.

pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError, ServerResult};
pub use openapi::ApiDoc;
pub use server::{build_router, init_tracing, serve, start_server};
pub use state::ServerState;
