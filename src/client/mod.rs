//! Backend search client trait and `reqwest`-backed implementation.

use std::future::Future;
use std::pin::Pin;

use log::debug;

use crate::domain::search::{PageEnvelope, SearchFilter};
use crate::dto::backend::TurfPageResponse;
use crate::query::build_query;

pub mod errors;

pub use errors::FetchError;

/// Path of the backend search endpoint, relative to the backend base URL.
pub const SEARCH_PATH: &str = "/api/turfs/search";

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetches result pages from the turf search backend.
pub trait TurfSearchClient: Send + Sync {
    /// Issues exactly one request for `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, non-success status or an
    /// undecodable body. Missing pagination metadata is not an error.
    fn search<'a>(
        &'a self,
        filter: &'a SearchFilter,
    ) -> BoxFuture<'a, Result<PageEnvelope, FetchError>>;
}

impl<T: TurfSearchClient + ?Sized> TurfSearchClient for &T {
    fn search<'a>(
        &'a self,
        filter: &'a SearchFilter,
    ) -> BoxFuture<'a, Result<PageEnvelope, FetchError>> {
        (**self).search(filter)
    }
}

/// `reqwest`-backed implementation of [`TurfSearchClient`].
///
/// No timeout or retry is configured: a failed request fails the search.
/// `reqwest::Client` is already reference counted, so clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpTurfSearchClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTurfSearchClient {
    /// Create a new client targeting `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Full request URL for `filter`.
    pub fn search_url(&self, filter: &SearchFilter) -> Result<String, FetchError> {
        Ok(format!(
            "{}{SEARCH_PATH}?{}",
            self.base_url,
            build_query(filter)?
        ))
    }
}

impl TurfSearchClient for HttpTurfSearchClient {
    fn search<'a>(
        &'a self,
        filter: &'a SearchFilter,
    ) -> BoxFuture<'a, Result<PageEnvelope, FetchError>> {
        Box::pin(async move {
            let url = self.search_url(filter)?;

            debug!("searching turfs at {url}");

            let response = self.http.get(&url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::UnexpectedStatus {
                    status: status.as_u16(),
                });
            }

            let page: TurfPageResponse = response
                .json()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))?;

            Ok(page.into())
        })
    }
}
