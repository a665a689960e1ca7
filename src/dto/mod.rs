//! DTO modules that bridge the backend API, services and templates.

pub mod backend;
pub mod search;
