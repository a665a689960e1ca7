//! Canonical query string for the backend search endpoint.

use serde::Serialize;

use crate::domain::search::SearchFilter;

pub type QueryError = serde_html_form::ser::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    turf_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_price: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_price: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_rating: Option<&'a str>,
    sort_by: &'a str,
    sort_direction: &'a str,
    size: u32,
    page: u32,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Encodes `filter` as `city=..&turfType=..&...&size=..&page=..`.
///
/// Empty optional fields are left out. Sort, size and page are always sent.
/// Numeric text is forwarded untouched.
pub fn build_query(filter: &SearchFilter) -> Result<String, QueryError> {
    let params = SearchParams {
        city: non_blank(&filter.location),
        turf_type: non_blank(&filter.turf_type),
        min_price: non_blank(&filter.min_price),
        max_price: non_blank(&filter.max_price),
        min_rating: non_blank(&filter.min_rating),
        sort_by: filter.sort_field.as_str(),
        sort_direction: filter.sort_direction.as_str(),
        size: filter.page_size.get(),
        page: filter.page_index,
    };

    serde_html_form::to_string(&params)
}
