//! Smooth anchor scrolling and hover emphasis.

use tracing::trace;

use crate::config::EffectsConfig;
use crate::dispatch::{Action, BindTarget, Binding, EventKind};
use crate::dom::{Document, Element};

/// Element id a same-page link points at.
///
/// `None` for links that are not fragments or whose fragment is empty
/// (`href="#"`).
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    config: EffectsConfig,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(config: EffectsConfig) -> Self {
        Self { config }
    }

    /// Smoothly scroll to the element a link's `href` names.
    ///
    /// Returns whether a scroll happened. Unknown or empty fragments are a
    /// no-op; the caller cancels the default jump either way.
    pub fn smooth_scroll<D: Document>(&self, doc: &D, href: Option<&str>) -> bool {
        let Some(id) = href.and_then(fragment_id) else {
            return false;
        };
        match doc.element_by_id(id) {
            Some(target) => {
                target.scroll_into_view_smooth();
                true
            }
            None => {
                trace!(id, "anchor target missing");
                false
            }
        }
    }

    pub fn hover_enter<E: Element>(&self, element: &E) {
        element.set_style("transform", &self.config.hover_transform);
        element.set_style("transition", &self.config.hover_transition);
    }

    pub fn hover_leave<E: Element>(&self, element: &E) {
        element.set_style("transform", &self.config.rest_transform);
    }

    #[must_use]
    pub fn bindings<D: Document>(&self, doc: &D) -> Vec<Binding> {
        let mut bindings = Vec::new();
        if !doc.query_all(&self.config.anchor_selector).is_empty() {
            bindings.push(Binding::click(
                BindTarget::Selector(self.config.anchor_selector.clone()),
                Action::SmoothScroll,
            ));
        }
        if !doc.query_all(&self.config.hover_selector).is_empty() {
            let target = BindTarget::Selector(self.config.hover_selector.clone());
            bindings.push(Binding::new(
                target.clone(),
                EventKind::MouseEnter,
                Action::HoverEnter,
            ));
            bindings.push(Binding::new(target, EventKind::MouseLeave, Action::HoverLeave));
        }
        bindings
    }
}
