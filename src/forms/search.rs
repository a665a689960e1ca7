//! Search form submitted from the turf search page.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::search::SearchFilter;
use crate::domain::types::{PageSize, SortDirection, SortField};
use crate::forms::FormError;

/// Raw search form fields as they arrive in the query string.
///
/// `sort` carries `"<field>,<direction>"`, e.g. `pricePerHour,asc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchForm {
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub turf_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_price: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_price: Option<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Treats an empty or whitespace-only value like a missing one.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_sort(sort: Option<&str>) -> Result<(SortField, SortDirection), FormError> {
    let Some(sort) = sort.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok((SortField::default(), SortDirection::default()));
    };

    let (field, direction) = match sort.split_once(',') {
        Some((field, direction)) => (field, Some(direction)),
        None => (sort, None),
    };

    let field = SortField::new(field).map_err(FormError::InvalidSortField)?;
    let direction = match direction {
        Some(direction) => direction
            .parse()
            .map_err(FormError::InvalidSortDirection)?,
        None => SortDirection::default(),
    };

    Ok((field, direction))
}

impl SearchForm {
    /// Parses a raw query string; blank values come back as `None`.
    pub fn from_query(query: &str) -> Result<Self, serde_html_form::de::Error> {
        serde_html_form::from_str(query)
    }

    /// Query string reproducing this form, used for pager links.
    pub fn to_query(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }

    /// Same form pointing at another page.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Builds the filter for one search, keeping numeric text as typed.
    pub fn into_filter(self, page_size: PageSize) -> Result<SearchFilter, FormError> {
        let (sort_field, sort_direction) = parse_sort(self.sort.as_deref())?;

        Ok(SearchFilter {
            location: trimmed(self.location),
            turf_type: trimmed(self.turf_type),
            sort_field,
            sort_direction,
            min_price: trimmed(self.min_price),
            max_price: trimmed(self.max_price),
            min_rating: trimmed(self.min_rating),
            page_index: self.page.unwrap_or(0),
            page_size,
        })
    }
}

impl From<&SearchFilter> for SearchForm {
    /// Reconstructs the form that produces `filter`.
    fn from(filter: &SearchFilter) -> Self {
        Self {
            location: filter.location.clone(),
            turf_type: filter.turf_type.clone(),
            sort: Some(format!(
                "{},{}",
                filter.sort_field,
                filter.sort_direction.as_str().to_ascii_lowercase()
            )),
            min_price: filter.min_price.clone(),
            max_price: filter.max_price.clone(),
            min_rating: filter.min_rating.clone(),
            page: Some(filter.page_index),
        }
    }
}
