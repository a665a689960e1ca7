#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tera::Tera;
use turf_finder::client::{BoxFuture, FetchError, TurfSearchClient};
use turf_finder::domain::search::{PageEnvelope, SearchFilter};
use turf_finder::domain::turf::Turf;

/// Templates shipped with the crate.
pub fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).expect("templates parse")
}

pub fn turf(id: i64, name: &str) -> Turf {
    Turf {
        id,
        name: Some(name.to_string()),
        turf_type: Some("FOOTBALL".to_string()),
        city: Some("Pune".to_string()),
        area: Some("Kharadi".to_string()),
        price_per_hour: Some(1000.0),
        rating: Some(4.0),
        image_url: None,
    }
}

/// Test double answering from a queue and recording requested filters.
#[derive(Default)]
pub struct FakeSearchClient {
    replies: Mutex<VecDeque<Result<PageEnvelope, FetchError>>>,
    pub requests: Mutex<Vec<SearchFilter>>,
}

impl FakeSearchClient {
    pub fn replying(replies: Vec<Result<PageEnvelope, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::default(),
        })
    }

    pub fn requests(&self) -> Vec<SearchFilter> {
        self.requests.lock().unwrap().clone()
    }
}

impl TurfSearchClient for FakeSearchClient {
    fn search<'a>(
        &'a self,
        filter: &'a SearchFilter,
    ) -> BoxFuture<'a, Result<PageEnvelope, FetchError>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(filter.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(PageEnvelope::empty()))
        })
    }
}
