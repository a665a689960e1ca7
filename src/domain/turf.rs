//! Read-only projection of a turf as returned by the backend search endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// One search result. Any field the backend leaves out, sends as `null` or
/// sends with the wrong type stays at its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Turf {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub turf_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub area: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub price_per_hour: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub image_url: Option<String>,
}

/// Reads any JSON value and falls back to `T::default()` when it does not fit.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl Turf {
    /// Display name, empty when the backend omitted it.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Sport category shown in the badge.
    pub fn category(&self) -> &str {
        self.turf_type.as_deref().unwrap_or_default()
    }

    /// `city • area`, skipping whichever part is missing.
    pub fn location_label(&self) -> String {
        [self.city.as_deref(), self.area.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
