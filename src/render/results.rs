//! Result list renderer.

use std::sync::Arc;

use tera::{Context, Tera};

use crate::domain::turf::Turf;
use crate::dto::search::TurfCard;
use crate::render::{Region, RenderError};

pub const RESULTS_TEMPLATE: &str = "search/results.html";

/// Draws result cards, the "no results" state or the "unable to load" state.
#[derive(Clone)]
pub struct ResultRenderer {
    tera: Arc<Tera>,
}

impl ResultRenderer {
    pub fn new(tera: Arc<Tera>) -> Self {
        Self { tera }
    }

    /// Replaces `region` with one card per item, in order. An empty slice
    /// yields only the "no results" indicator.
    pub fn render<R: Region + ?Sized>(
        &self,
        items: &[Turf],
        region: &mut R,
    ) -> Result<(), RenderError> {
        let cards: Vec<TurfCard> = items.iter().map(TurfCard::from).collect();
        self.draw(&cards, false, region)
    }

    /// Replaces `region` with the "unable to load" message.
    pub fn render_unavailable<R: Region + ?Sized>(
        &self,
        region: &mut R,
    ) -> Result<(), RenderError> {
        self.draw(&[], true, region)
    }

    fn draw<R: Region + ?Sized>(
        &self,
        cards: &[TurfCard],
        unavailable: bool,
        region: &mut R,
    ) -> Result<(), RenderError> {
        let mut context = Context::new();
        context.insert("cards", cards);
        context.insert("unavailable", &unavailable);

        let html = self.tera.render(RESULTS_TEMPLATE, &context)?;
        region.replace(html);
        Ok(())
    }
}
