//! Constraint checks applied before anything reaches the store.
//!
//! All violations in a payload are collected; the caller gets one
//! [`FieldError`](crate::FieldError) per failed constraint.
use tracing::debug;

use crate::error::{CatalogError, ValidationErrors};
use crate::types::{BookId, BookRequest};

pub const TITLE_MAX_CHARS: usize = 30;
pub const AUTHOR_MAX_CHARS: usize = 40;
pub const CATEGORY_MAX_CHARS: usize = 30;
pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// Validate a create/update payload.
///
/// ```rust
/// use catalog::{validate_book_request, BookRequest};
///
/// let ok = BookRequest::new("Dune", "Frank Herbert", "Fiction", 5);
/// assert!(validate_book_request(&ok).is_ok());
///
/// let bad = BookRequest::new("", "Frank Herbert", "Fiction", 6);
/// let err = validate_book_request(&bad).unwrap_err();
/// assert_eq!(err.field_errors().unwrap().len(), 2);
/// ```
pub fn validate_book_request(request: &BookRequest) -> Result<(), CatalogError> {
    let mut errors = ValidationErrors::new();

    check_length(&mut errors, "title", "Title", &request.title, TITLE_MAX_CHARS);
    check_length(&mut errors, "author", "Author", &request.author, AUTHOR_MAX_CHARS);
    check_length(
        &mut errors,
        "category",
        "Category",
        &request.category,
        CATEGORY_MAX_CHARS,
    );

    if request.rating < RATING_MIN {
        errors.push("rating", format!("Rating must be at least {RATING_MIN}"));
    } else if request.rating > RATING_MAX {
        errors.push("rating", format!("Rating must be at most {RATING_MAX}"));
    }

    if !errors.is_empty() {
        debug!(violations = errors.len(), "book payload rejected");
    }
    errors.into_result()
}

/// Validate an id taken from a request path. Ids start at 1.
pub fn validate_id(raw: i64) -> Result<BookId, CatalogError> {
    match BookId::try_from(raw) {
        Ok(id) if id >= 1 => Ok(id),
        _ => {
            let mut errors = ValidationErrors::new();
            errors.push("id", "must be greater than or equal to 1");
            Err(errors.into())
        }
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &str,
    label: &str,
    value: &str,
    max: usize,
) {
    let len = value.chars().count();
    if !(1..=max).contains(&len) {
        errors.push(field, format!("{label} must be between 1 and {max} characters"));
    }
}
