//! One-shot reveal of cards as they scroll into view.
//!
//! The host owns the intersection observer; this module only decides what
//! each element looks like. Prepared elements start transparent and shifted
//! down. The first intersecting report shows them; the host then stops
//! observing, so a later scroll-out never hides them again.

use tracing::debug;

use crate::config::RevealConfig;
use crate::dom::{Document, Element};

#[derive(Debug, Clone)]
pub struct RevealTracker {
    config: RevealConfig,
    prepared: usize,
    revealed: usize,
}

impl RevealTracker {
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            prepared: 0,
            revealed: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Hide every tracked element and return them for observation.
    pub fn prepare<D: Document>(&mut self, doc: &D) -> Vec<D::Element> {
        let cards = doc.query_all(&self.config.selector);
        for card in &cards {
            card.set_style("opacity", "0");
            card.set_style("transform", &self.config.hidden_transform);
            card.set_style("transition", &self.config.transition);
        }
        self.prepared += cards.len();
        debug!(count = cards.len(), "reveal prepared");
        cards
    }

    /// Handle one intersection report.
    ///
    /// Returns `true` when the element was revealed and should no longer be
    /// observed. Non-intersecting reports change nothing.
    pub fn on_intersection<E: Element>(&mut self, element: &E, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        element.set_style("opacity", "1");
        element.set_style("transform", &self.config.shown_transform);
        self.revealed += 1;
        true
    }

    #[must_use]
    pub fn prepared_count(&self) -> usize {
        self.prepared
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }
}
