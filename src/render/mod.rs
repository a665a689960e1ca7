//! HTML renderers for the result list and pager regions.
//!
//! Renderers never look up where their output goes; callers hand them a
//! [`Region`] to fill.

use thiserror::Error;

pub mod pager;
pub mod results;

pub use pager::PagerRenderer;
pub use results::ResultRenderer;

/// Errors raised while producing a fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to build page link: {0}")]
    Link(#[from] serde_html_form::ser::Error),
}

/// A display area whose content is replaced wholesale on every render.
pub trait Region {
    fn replace(&mut self, html: String);
}

/// In-memory region holding the last rendered HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRegion(String);

impl HtmlRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Region for HtmlRegion {
    fn replace(&mut self, html: String) {
        self.0 = html;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tera::Tera;

    /// Templates shipped with the crate.
    pub fn tera() -> Arc<Tera> {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*");
        Arc::new(Tera::new(dir).expect("templates should parse"))
    }
}
