//! Search model shared by the query builder, client and renderers.

pub mod pager;
pub mod search;
pub mod turf;
pub mod types;
