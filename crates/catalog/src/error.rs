//! Error types produced by the catalog crate.
//!
//! There are exactly two failure kinds:
//!
//! | Error | HTTP status | Raised by |
//! |-------|-------------|-----------|
//! | [`NotFound`](CatalogError::NotFound) | 404 | store lookups, replace, delete |
//! | [`Validation`](CatalogError::Validation) | 400 | [`validate_book_request`](crate::validate_book_request), [`validate_id`](crate::validate_id) |
//!
//! # Example
//!
//! ```rust
//! use catalog::CatalogError;
//!
//! let err = CatalogError::NotFound(42);
//! assert_eq!(err.to_string(), "Book not found with id: 42");
//! assert_eq!(err.http_status_code(), 404);
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::BookId;

/// Errors raised by catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No record with the given id exists in the store.
    #[error("Book not found with id: {0}")]
    NotFound(BookId),

    /// A payload or id value violated one or more constraints.
    #[error("{0}")]
    Validation(ValidationErrors),
}

impl CatalogError {
    /// Suggested HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            CatalogError::NotFound(_) => 404,
            CatalogError::Validation(_) => 400,
        }
    }

    /// Field-level violations, if this is a validation error.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            CatalogError::Validation(errors) => Some(errors.as_slice()),
            CatalogError::NotFound(_) => None,
        }
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(value: ValidationErrors) -> Self {
        CatalogError::Validation(value)
    }
}

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every constraint violation found in one payload, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), CatalogError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&error.message)?;
        }
        Ok(())
    }
}
