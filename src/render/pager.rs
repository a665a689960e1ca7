//! Pager renderer: status line plus prev/next links.

use std::sync::Arc;

use tera::{Context, Tera};

use crate::domain::pager::PagerState;
use crate::domain::search::SearchFilter;
use crate::dto::search::PagerView;
use crate::forms::search::SearchForm;
use crate::render::{Region, RenderError};

pub const PAGER_TEMPLATE: &str = "search/pager.html";

/// Draws the pager region. Links are only emitted for permitted moves.
#[derive(Clone)]
pub struct PagerRenderer {
    tera: Arc<Tera>,
    base_path: String,
}

impl PagerRenderer {
    /// `base_path` is the page the links point at, e.g. `/search`.
    pub fn new(tera: Arc<Tera>, base_path: impl Into<String>) -> Self {
        Self {
            tera,
            base_path: base_path.into(),
        }
    }

    /// Builds the view model for `state` with links reproducing `filter`.
    pub fn view(
        &self,
        state: &PagerState,
        filter: &SearchFilter,
    ) -> Result<PagerView, RenderError> {
        let form = SearchForm::from(filter);
        let link = |page: u32| -> Result<String, RenderError> {
            Ok(format!("{}?{}", self.base_path, form.with_page(page).to_query()?))
        };

        Ok(PagerView {
            status: state.status_text(),
            prev_url: state.prev_page().map(&link).transpose()?,
            next_url: state.next_page().map(&link).transpose()?,
        })
    }

    pub fn render<R: Region + ?Sized>(
        &self,
        state: &PagerState,
        filter: &SearchFilter,
        region: &mut R,
    ) -> Result<(), RenderError> {
        let mut context = Context::new();
        context.insert("pager", &self.view(state, filter)?);

        let html = self.tera.render(PAGER_TEMPLATE, &context)?;
        region.replace(html);
        Ok(())
    }
}
