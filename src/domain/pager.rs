//! Page-index bookkeeping for prev/next navigation.

use serde::Serialize;

use crate::domain::search::PageEnvelope;

/// Current and last page index of a search session.
///
/// `current_page_index` never exceeds `last_page_index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PagerState {
    current_page_index: u32,
    last_page_index: u32,
}

impl PagerState {
    /// Builds a state, clamping `current` into `[0, last]`.
    pub fn new(current_page_index: u32, last_page_index: u32) -> Self {
        Self {
            current_page_index: current_page_index.min(last_page_index),
            last_page_index,
        }
    }

    /// Derives the state from what the backend actually returned, not from
    /// what was requested.
    pub fn from_envelope(envelope: &PageEnvelope) -> Self {
        Self::new(envelope.page_index, envelope.total_pages.max(1) - 1)
    }

    pub fn current_page_index(&self) -> u32 {
        self.current_page_index
    }

    pub fn last_page_index(&self) -> u32 {
        self.last_page_index
    }

    pub fn has_prev(&self) -> bool {
        self.current_page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page_index < self.last_page_index
    }

    /// Page to request for `next`, or `None` when already on the last page.
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page_index + 1)
    }

    /// Page to request for `prev`, or `None` when already on the first page.
    pub fn prev_page(&self) -> Option<u32> {
        self.has_prev().then(|| self.current_page_index - 1)
    }

    /// One-based status line, e.g. `Page 3 of 5`.
    pub fn status_text(&self) -> String {
        format!(
            "Page {} of {}",
            self.current_page_index + 1,
            self.last_page_index + 1
        )
    }
}
