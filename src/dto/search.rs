//! View models handed to the search templates.

use serde::Serialize;

use crate::domain::pager::PagerState;
use crate::domain::turf::Turf;
use crate::domain::types::{SORT_OPTIONS, TurfType};
use crate::forms::search::SearchForm;

/// Image shown for turfs without a photo.
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/placeholder.svg";

/// Target of the "Book Now" link.
pub const DETAIL_PATH: &str = "/turf-details";

/// Formats an optional amount, showing `0` when the backend sent nothing.
fn amount_or_zero(value: Option<f64>) -> String {
    format!("{}", value.unwrap_or(0.0))
}

/// One rendered result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurfCard {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub location: String,
    pub price: String,
    pub rating: String,
    pub image_url: String,
    pub detail_url: String,
}

impl From<&Turf> for TurfCard {
    fn from(turf: &Turf) -> Self {
        Self {
            id: turf.id,
            name: turf.display_name().to_string(),
            category: turf.category().to_string(),
            location: turf.location_label(),
            price: amount_or_zero(turf.price_per_hour),
            rating: amount_or_zero(turf.rating),
            image_url: turf
                .image_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            detail_url: format!("{DETAIL_PATH}?id={}", turf.id),
        }
    }
}

/// Pager region contents: status line plus links for permitted moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagerView {
    pub status: String,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

/// `(value, label)` pair for a select box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Sport choices, in backend order.
pub fn turf_type_options() -> Vec<SelectOption> {
    TurfType::ALL
        .iter()
        .map(|t| SelectOption {
            value: t.code(),
            label: t.label(),
        })
        .collect()
}

/// Sort choices; the first one matches the backend default.
pub fn sort_options() -> Vec<SelectOption> {
    SORT_OPTIONS
        .iter()
        .map(|&(value, label)| SelectOption { value, label })
        .collect()
}

/// Data required to render the search page template.
#[derive(Debug)]
pub struct SearchPageData {
    /// Form values echoed back into the inputs.
    pub form: SearchForm,
    /// Rendered result region.
    pub results_html: String,
    /// Rendered pager region, empty when nothing was loaded.
    pub pager_html: String,
    /// Pager state after the search.
    pub pager: PagerState,
}
