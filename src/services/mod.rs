//! Service layer sitting between the HTTP routes and the search components.

use thiserror::Error;

use crate::forms::FormError;
use crate::render::RenderError;

pub mod search;

/// Errors surfaced by services to the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(String),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
