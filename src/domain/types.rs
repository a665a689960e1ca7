//! Strongly-typed value objects used by the search model.
//!
//! These wrappers enforce basic invariants (positive page size, known sort
//! direction, non-empty sort field) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of results requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Page size must be at least one.
    #[error("page size must be greater than zero")]
    NonPositivePageSize,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Sort direction was neither `asc` nor `desc`.
    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
}

/// Fixed number of results per page for a search session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a page size ensuring it is greater than zero.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePageSize)
        }
    }

    /// Returns the raw `u32` backing this page size.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Ordering applied to the sort field.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire representation sent to the backend.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if trimmed.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(TypeConstraintError::InvalidSortDirection(trimmed.to_string()))
        }
    }
}

/// Backend field the results are ordered by, e.g. `rating` or `pricePerHour`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SortField(String);

impl SortField {
    /// Trims the field name and rejects blank input.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the field name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SortField {
    fn default() -> Self {
        Self("rating".to_string())
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sport categories known to the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurfType {
    Football,
    Cricket,
    Basketball,
    Tennis,
    Badminton,
    MultiSport,
}

impl TurfType {
    pub const ALL: [TurfType; 6] = [
        TurfType::Football,
        TurfType::Cricket,
        TurfType::Basketball,
        TurfType::Tennis,
        TurfType::Badminton,
        TurfType::MultiSport,
    ];

    /// Value sent as `turfType`.
    pub const fn code(self) -> &'static str {
        match self {
            TurfType::Football => "FOOTBALL",
            TurfType::Cricket => "CRICKET",
            TurfType::Basketball => "BASKETBALL",
            TurfType::Tennis => "TENNIS",
            TurfType::Badminton => "BADMINTON",
            TurfType::MultiSport => "MULTI_SPORT",
        }
    }

    /// Human readable label for select boxes.
    pub const fn label(self) -> &'static str {
        match self {
            TurfType::Football => "Football",
            TurfType::Cricket => "Cricket",
            TurfType::Basketball => "Basketball",
            TurfType::Tennis => "Tennis",
            TurfType::Badminton => "Badminton",
            TurfType::MultiSport => "Multi-sport",
        }
    }
}

/// Sort choices offered by the search form as `(value, label)` pairs.
pub const SORT_OPTIONS: [(&str, &str); 4] = [
    ("rating,desc", "Top rated"),
    ("pricePerHour,asc", "Price: low to high"),
    ("pricePerHour,desc", "Price: high to low"),
    ("name,asc", "Name"),
];
