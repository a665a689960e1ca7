//! Search view controller and the page-loading service built on it.

use std::sync::Arc;

use log::{debug, warn};
use tera::Tera;

use crate::client::{FetchError, TurfSearchClient};
use crate::domain::pager::PagerState;
use crate::domain::search::{PageEnvelope, SearchFilter};
use crate::domain::types::PageSize;
use crate::dto::search::SearchPageData;
use crate::forms::search::SearchForm;
use crate::render::{HtmlRegion, PagerRenderer, Region, RenderError, ResultRenderer};
use crate::services::ServiceResult;

/// Identifies one dispatched request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// What a search, next or prev action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A page arrived and both regions were redrawn.
    Rendered { items: usize },
    /// The fetch failed; the result region shows the unable-to-load state.
    Unavailable,
    /// A newer request was dispatched meanwhile; the response was dropped.
    Stale,
    /// Navigation past the first or last page; no request was issued.
    Skipped,
}

/// Owns the pager state of one search session and the regions it draws into.
///
/// Every request gets a [`Ticket`]; responses for anything but the latest
/// ticket are discarded, so overlapping requests cannot overwrite newer
/// results.
pub struct SearchSession<C, R> {
    client: C,
    results: ResultRenderer,
    pager_renderer: PagerRenderer,
    results_region: R,
    pager_region: R,
    pager: PagerState,
    filter: Option<SearchFilter>,
    latest: u64,
}

impl<C, R> SearchSession<C, R>
where
    C: TurfSearchClient,
    R: Region,
{
    pub fn new(
        client: C,
        results: ResultRenderer,
        pager_renderer: PagerRenderer,
        results_region: R,
        pager_region: R,
    ) -> Self {
        Self {
            client,
            results,
            pager_renderer,
            results_region,
            pager_region,
            pager: PagerState::default(),
            filter: None,
            latest: 0,
        }
    }

    pub fn pager(&self) -> PagerState {
        self.pager
    }

    /// Filter of the page currently on display.
    pub fn filter(&self) -> Option<&SearchFilter> {
        self.filter.as_ref()
    }

    pub fn results_region(&self) -> &R {
        &self.results_region
    }

    pub fn pager_region(&self) -> &R {
        &self.pager_region
    }

    /// Hands back the result and pager regions.
    pub fn into_regions(self) -> (R, R) {
        (self.results_region, self.pager_region)
    }

    /// Starts a new filter session on the first page.
    pub async fn search(&mut self, filter: SearchFilter) -> Result<SearchOutcome, RenderError> {
        let filter = filter.with_page(0);
        self.pager = PagerState::default();
        self.filter = Some(filter.clone());
        self.open(filter).await
    }

    /// Loads exactly the page named by `filter`.
    pub async fn open(&mut self, filter: SearchFilter) -> Result<SearchOutcome, RenderError> {
        let ticket = self.dispatch();
        let result = self.client.search(&filter).await;
        self.apply(ticket, filter, result)
    }

    /// Moves one page forward; a no-op on the last page.
    pub async fn next(&mut self) -> Result<SearchOutcome, RenderError> {
        match (self.pager.next_page(), &self.filter) {
            (Some(page), Some(filter)) => {
                let filter = filter.with_page(page);
                self.open(filter).await
            }
            _ => Ok(SearchOutcome::Skipped),
        }
    }

    /// Moves one page back; a no-op on the first page.
    pub async fn prev(&mut self) -> Result<SearchOutcome, RenderError> {
        match (self.pager.prev_page(), &self.filter) {
            (Some(page), Some(filter)) => {
                let filter = filter.with_page(page);
                self.open(filter).await
            }
            _ => Ok(SearchOutcome::Skipped),
        }
    }

    /// Reserves a ticket for a request about to be sent.
    pub fn dispatch(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Applies the response for `ticket`, unless a newer request was
    /// dispatched after it.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        filter: SearchFilter,
        result: Result<PageEnvelope, FetchError>,
    ) -> Result<SearchOutcome, RenderError> {
        if ticket.0 < self.latest {
            debug!(
                "discarding response for request {} (latest is {})",
                ticket.0, self.latest
            );
            return Ok(SearchOutcome::Stale);
        }

        match result {
            Ok(envelope) => {
                let pager = PagerState::from_envelope(&envelope);
                let filter = filter.with_page(pager.current_page_index());

                // Both fragments are drawn before anything is committed.
                let mut results_html = HtmlRegion::new();
                self.results.render(&envelope.items, &mut results_html)?;
                let mut pager_html = HtmlRegion::new();
                self.pager_renderer
                    .render(&pager, &filter, &mut pager_html)?;

                self.results_region.replace(results_html.into_inner());
                self.pager_region.replace(pager_html.into_inner());
                self.pager = pager;
                self.filter = Some(filter);

                Ok(SearchOutcome::Rendered {
                    items: envelope.items.len(),
                })
            }
            Err(err) => {
                warn!("Turf search failed: {err}");
                self.results.render_unavailable(&mut self.results_region)?;
                Ok(SearchOutcome::Unavailable)
            }
        }
    }
}

/// Runs the search described by `form` and renders both regions.
///
/// Fetch failures still produce a page; only invalid forms and template
/// problems are errors.
pub async fn load_search_page<C>(
    client: &C,
    tera: Arc<Tera>,
    base_path: &str,
    page_size: PageSize,
    form: SearchForm,
) -> ServiceResult<SearchPageData>
where
    C: TurfSearchClient + ?Sized,
{
    let filter = form.clone().into_filter(page_size)?;

    let mut session = SearchSession::new(
        client,
        ResultRenderer::new(tera.clone()),
        PagerRenderer::new(tera, base_path),
        HtmlRegion::new(),
        HtmlRegion::new(),
    );
    session.open(filter).await?;

    let pager = session.pager();
    let (results, pager_region) = session.into_regions();

    Ok(SearchPageData {
        form,
        results_html: results.into_inner(),
        pager_html: pager_region.into_inner(),
        pager,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::client::BoxFuture;
    use crate::domain::turf::Turf;
    use crate::render::test_support::tera;
    use crate::services::ServiceError;

    /// Replies with queued results and records every filter it receives.
    #[derive(Default)]
    struct ScriptedClient {
        replies: Mutex<VecDeque<Result<PageEnvelope, FetchError>>>,
        requests: Mutex<Vec<SearchFilter>>,
    }

    impl ScriptedClient {
        fn replying(replies: Vec<Result<PageEnvelope, FetchError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::default(),
            }
        }

        fn requested_pages(&self) -> Vec<u32> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|f| f.page_index)
                .collect()
        }
    }

    impl TurfSearchClient for ScriptedClient {
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

    fn items(n: i64) -> Vec<Turf> {
        (1..=n)
            .map(|id| Turf {
                id,
                name: Some(format!("Turf {id}")),
                ..Turf::default()
            })
            .collect()
    }

    fn session(client: &ScriptedClient) -> SearchSession<&ScriptedClient, HtmlRegion> {
        let tera = tera();
        SearchSession::new(
            client,
            ResultRenderer::new(tera.clone()),
            PagerRenderer::new(tera, "/search"),
            HtmlRegion::new(),
            HtmlRegion::new(),
        )
    }

    #[actix_web::test]
    async fn empty_single_page_disables_navigation() {
        let client = ScriptedClient::replying(vec![Ok(PageEnvelope::new(Vec::new(), 0, 1))]);
        let mut session = session(&client);

        let outcome = session.search(SearchFilter::default()).await.unwrap();

        assert_eq!(outcome, SearchOutcome::Rendered { items: 0 });
        assert_eq!(session.pager(), PagerState::new(0, 0));
        assert!(session.results_region().as_str().contains("noResults"));
        assert_eq!(session.next().await.unwrap(), SearchOutcome::Skipped);
        assert_eq!(session.prev().await.unwrap(), SearchOutcome::Skipped);
        assert_eq!(client.requested_pages(), vec![0]);
    }

    #[actix_web::test]
    async fn pager_follows_returned_page_metadata() {
        let client = ScriptedClient::replying(vec![
            Ok(PageEnvelope::new(items(2), 2, 5)),
            Ok(PageEnvelope::new(items(2), 3, 5)),
            Ok(PageEnvelope::new(items(2), 2, 5)),
            Ok(PageEnvelope::new(items(2), 1, 5)),
        ]);
        let mut session = session(&client);

        session
            .open(SearchFilter::default().with_page(2))
            .await
            .unwrap();
        assert_eq!(session.pager(), PagerState::new(2, 4));
        assert!(session.pager_region().as_str().contains("Page 3 of 5"));

        session.next().await.unwrap();
        assert_eq!(session.pager().current_page_index(), 3);

        session.prev().await.unwrap();
        session.prev().await.unwrap();

        assert_eq!(client.requested_pages(), vec![2, 3, 2, 1]);
        assert_eq!(session.pager().current_page_index(), 1);
    }

    #[actix_web::test]
    async fn new_search_restarts_at_first_page() {
        let client = ScriptedClient::replying(vec![
            Ok(PageEnvelope::new(items(1), 3, 5)),
            Ok(PageEnvelope::new(items(1), 0, 2)),
        ]);
        let mut session = session(&client);
        session
            .open(SearchFilter::default().with_page(3))
            .await
            .unwrap();

        let filter = SearchFilter {
            location: Some("Pune".into()),
            page_index: 3,
            ..SearchFilter::default()
        };
        session.search(filter).await.unwrap();

        assert_eq!(client.requested_pages(), vec![3, 0]);
        assert_eq!(session.pager(), PagerState::new(0, 1));
        assert_eq!(
            session.filter().and_then(|f| f.location.as_deref()),
            Some("Pune")
        );
    }

    #[actix_web::test]
    async fn server_side_clamping_wins_over_request() {
        let client = ScriptedClient::replying(vec![Ok(PageEnvelope::new(items(1), 1, 2))]);
        let mut session = session(&client);

        session
            .open(SearchFilter::default().with_page(7))
            .await
            .unwrap();

        assert_eq!(session.pager(), PagerState::new(1, 1));
        assert_eq!(session.filter().map(|f| f.page_index), Some(1));
        assert_eq!(session.next().await.unwrap(), SearchOutcome::Skipped);
    }

    #[actix_web::test]
    async fn failure_shows_unavailable_and_keeps_pager() {
        let client = ScriptedClient::replying(vec![
            Ok(PageEnvelope::new(items(3), 1, 3)),
            Err(FetchError::UnexpectedStatus { status: 500 }),
        ]);
        let mut session = session(&client);
        session
            .open(SearchFilter::default().with_page(1))
            .await
            .unwrap();
        let pager_html = session.pager_region().clone();

        let outcome = session.next().await.unwrap();

        assert_eq!(outcome, SearchOutcome::Unavailable);
        assert!(session.results_region().as_str().contains("Unable to load turfs"));
        assert_eq!(session.pager(), PagerState::new(1, 2));
        assert_eq!(session.pager_region(), &pager_html);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let client = ScriptedClient::default();
        let mut session = session(&client);

        let first = session.dispatch();
        let second = session.dispatch();

        let newer = session
            .apply(second, SearchFilter::default(), Ok(PageEnvelope::new(items(1), 0, 1)))
            .unwrap();
        let older = session
            .apply(first, SearchFilter::default(), Ok(PageEnvelope::new(items(4), 3, 9)))
            .unwrap();

        assert_eq!(newer, SearchOutcome::Rendered { items: 1 });
        assert_eq!(older, SearchOutcome::Stale);
        assert_eq!(session.pager(), PagerState::new(0, 0));
        assert!(session.results_region().as_str().contains("Turf 1"));
        assert!(!session.results_region().as_str().contains("Turf 4"));
    }

    #[test]
    fn pager_template_failure_leaves_session_untouched() {
        let mut broken = Tera::default();
        broken
            .add_raw_template(
                crate::render::results::RESULTS_TEMPLATE,
                include_str!("../../templates/search/results.html"),
            )
            .unwrap();
        broken
            .add_raw_template(crate::render::pager::PAGER_TEMPLATE, "{{ missing.field }}")
            .unwrap();
        let broken = Arc::new(broken);

        let client = ScriptedClient::default();
        let mut results_region = HtmlRegion::new();
        results_region.replace("<p>earlier results</p>".into());
        let mut pager_region = HtmlRegion::new();
        pager_region.replace("<p>earlier pager</p>".into());
        let mut session = SearchSession::new(
            &client,
            ResultRenderer::new(broken.clone()),
            PagerRenderer::new(broken, "/search"),
            results_region,
            pager_region,
        );

        let ticket = session.dispatch();
        let result = session.apply(
            ticket,
            SearchFilter::default().with_page(2),
            Ok(PageEnvelope::new(items(2), 2, 5)),
        );

        assert!(result.is_err());
        assert_eq!(session.results_region().as_str(), "<p>earlier results</p>");
        assert_eq!(session.pager_region().as_str(), "<p>earlier pager</p>");
        assert_eq!(session.pager(), PagerState::new(0, 0));
        assert!(session.filter().is_none());
    }

    #[actix_web::test]
    async fn load_search_page_renders_both_regions() {
        let client = ScriptedClient::replying(vec![Ok(PageEnvelope::new(items(2), 0, 3))]);
        let form = SearchForm {
            location: Some("Pune".into()),
            ..SearchForm::default()
        };

        let data = load_search_page(&client, tera(), "/search", PageSize::default(), form)
            .await
            .unwrap();

        assert_eq!(data.pager, PagerState::new(0, 2));
        assert_eq!(data.results_html.matches("<article").count(), 2);
        assert!(
            data.pager_html
                .contains("href=\"/search?location=Pune&sort=rating%2Cdesc&page=1\"")
        );
        assert_eq!(
            client.requests.lock().unwrap()[0].location.as_deref(),
            Some("Pune")
        );
    }

    #[actix_web::test]
    async fn load_search_page_rejects_bad_sort() {
        let client = ScriptedClient::default();
        let form = SearchForm {
            sort: Some("rating,sideways".into()),
            ..SearchForm::default()
        };

        let result = load_search_page(&client, tera(), "/search", PageSize::default(), form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(client.requested_pages().is_empty());
    }
}
