//! Form definitions backing the search routes.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;

pub mod search;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid sort field: {0}")]
    InvalidSortField(TypeConstraintError),

    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(TypeConstraintError),
}
