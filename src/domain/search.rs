//! Search filter and result page types.

use crate::domain::turf::Turf;
use crate::domain::types::{PageSize, SortDirection, SortField};

/// Full set of user-chosen constraints plus sort and paging parameters.
///
/// Numeric bounds keep the user's raw text; the backend owns their
/// validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub location: Option<String>,
    pub turf_type: Option<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_rating: Option<String>,
    pub page_index: u32,
    pub page_size: PageSize,
}

impl SearchFilter {
    /// Same constraints, different page.
    #[must_use]
    pub fn with_page(&self, page_index: u32) -> Self {
        Self {
            page_index,
            ..self.clone()
        }
    }
}

/// One page of search results plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnvelope {
    pub items: Vec<Turf>,
    pub page_index: u32,
    /// Always at least one.
    pub total_pages: u32,
}

impl PageEnvelope {
    pub fn new(items: Vec<Turf>, page_index: u32, total_pages: u32) -> Self {
        Self {
            items,
            page_index,
            total_pages: total_pages.max(1),
        }
    }

    /// Envelope with no items and a single page.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 1)
    }
}
