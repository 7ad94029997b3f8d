//! Mobile navigation panel.
//!
//! The panel's shown class is the source of truth for whether the menu is
//! open; the controller's own flag only mirrors it for callers. Every
//! operation requires both the panel and its trigger to exist.

use tracing::debug;

use crate::config::NavigationConfig;
use crate::dispatch::{Action, BindTarget, Binding};
use crate::dom::{Document, Element};

const OPEN_ICON: &str = "☰";
const CLOSE_ICON: &str = "✕";
const OPEN_LABEL: &str = "Abrir menú";
const CLOSE_LABEL: &str = "Cerrar menú";

#[derive(Debug, Clone)]
pub struct NavigationController {
    open: bool,
    config: NavigationConfig,
}

impl NavigationController {
    #[must_use]
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            open: false,
            config,
        }
    }

    /// Last state this controller rendered.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn elements<D: Document>(&self, doc: &D) -> Option<(D::Element, D::Element)> {
        let panel = doc.element_by_id(&self.config.panel_id)?;
        let trigger = doc.element_by_id(&self.config.trigger_id)?;
        Some((panel, trigger))
    }

    pub fn toggle_mobile_menu<D: Document>(&mut self, doc: &D) {
        let Some((panel, _)) = self.elements(doc) else {
            return;
        };
        if panel.has_class(&self.config.shown_class) {
            self.close_mobile_menu(doc);
        } else {
            self.open_mobile_menu(doc);
        }
    }

    /// Show the panel, switch to the close glyph and lock page scrolling.
    pub fn open_mobile_menu<D: Document>(&mut self, doc: &D) {
        let Some((panel, trigger)) = self.elements(doc) else {
            return;
        };
        panel.add_class(&self.config.shown_class);
        trigger.set_inner_html(CLOSE_ICON);
        trigger.set_attribute("aria-label", CLOSE_LABEL);
        if let Some(body) = doc.body() {
            body.set_style("overflow", "hidden");
        }
        self.open = true;
        debug!("mobile menu opened");
    }

    /// Hide the panel, restore the hamburger glyph and unlock scrolling.
    pub fn close_mobile_menu<D: Document>(&mut self, doc: &D) {
        let Some((panel, trigger)) = self.elements(doc) else {
            return;
        };
        panel.remove_class(&self.config.shown_class);
        trigger.set_inner_html(OPEN_ICON);
        trigger.set_attribute("aria-label", OPEN_LABEL);
        if let Some(body) = doc.body() {
            body.set_style("overflow", "");
        }
        if self.open {
            debug!("mobile menu closed");
        }
        self.open = false;
    }

    /// Close the menu when a document click landed outside both the panel
    /// and its trigger. A click without an element target counts as outside.
    ///
    /// Returns whether the click was outside.
    pub fn dismiss_if_outside<D: Document>(
        &mut self,
        doc: &D,
        target: Option<&D::Element>,
    ) -> bool {
        let Some((panel, trigger)) = self.elements(doc) else {
            return false;
        };
        let inside = target.is_some_and(|t| panel.contains(t) || trigger.contains(t));
        if inside {
            return false;
        }
        self.close_mobile_menu(doc);
        true
    }

    /// Listeners this controller needs; none unless panel and trigger exist.
    #[must_use]
    pub fn bindings<D: Document>(&self, doc: &D) -> Vec<Binding> {
        if self.elements(doc).is_none() {
            return Vec::new();
        }
        vec![
            Binding::click(
                BindTarget::Id(self.config.trigger_id.clone()),
                Action::ToggleMobileMenu,
            ),
            Binding::click(
                BindTarget::Selector(self.config.link_selector.clone()),
                Action::CloseMobileMenu,
            ),
            Binding::click(BindTarget::Document, Action::DismissMobileMenu),
        ]
    }
}
