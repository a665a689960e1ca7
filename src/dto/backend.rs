//! Wire format of the backend `/api/turfs/search` response.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::search::PageEnvelope;
use crate::domain::turf::{Turf, lenient};

/// Page of turfs as serialized by the backend. Only the fields used by the
/// search page are read; the rest of the page metadata is ignored.
///
/// Items are kept as raw JSON until conversion so that one entry that is not
/// an object does not fail the whole page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TurfPageResponse {
    #[serde(deserialize_with = "lenient")]
    pub content: Option<Vec<Value>>,
    #[serde(deserialize_with = "lenient")]
    pub number: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub total_pages: Option<i64>,
}

fn decode_items(content: Vec<Value>) -> Vec<Turf> {
    content
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Turf>(item).ok())
        .collect()
}

impl From<TurfPageResponse> for PageEnvelope {
    fn from(response: TurfPageResponse) -> Self {
        let page_index = response
            .number
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);
        let total_pages = response
            .total_pages
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(1);

        let items = decode_items(response.content.unwrap_or_default());

        PageEnvelope::new(items, page_index, total_pages)
    }
}
