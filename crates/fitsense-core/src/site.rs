//! Bootstrap: one object owning every controller and the preference store.
//!
//! ```text
//! page ready
//!   → Site::bindings(doc)     // host registers one listener per entry
//!   → Site::start(doc)        // saved theme + language applied
//!   → (delay) prepare_reveal  // host starts observing the cards
//! listener fires
//!   → Site::handle(doc, action, ctx) → Handled
//! ```

use fitsense_i18n::Locale;
use tracing::{debug, info};

use crate::config::{RevealConfig, SiteConfig};
use crate::dispatch::{Action, DispatchTable, EventContext, Handled};
use crate::dom::{Document, Element};
use crate::effects::ScrollEffects;
use crate::language::LanguageController;
use crate::navigation::NavigationController;
use crate::preferences::{Preferences, Storage};
use crate::reveal::RevealTracker;
use crate::theme::{ThemeController, ThemeMode};

#[derive(Debug)]
pub struct Site<S> {
    preferences: Preferences<S>,
    theme: ThemeController,
    language: LanguageController,
    navigation: NavigationController,
    effects: ScrollEffects,
    reveal: RevealTracker,
    started: bool,
}

impl<S: Storage> Site<S> {
    #[must_use]
    pub fn new(config: SiteConfig, preferences: Preferences<S>) -> Self {
        let SiteConfig {
            theme,
            language,
            navigation,
            effects,
        } = config;
        Self {
            preferences,
            theme: ThemeController::new(theme),
            language: LanguageController::new(language),
            navigation: NavigationController::new(navigation),
            reveal: RevealTracker::new(effects.reveal.clone()),
            effects: ScrollEffects::new(effects),
            started: false,
        }
    }

    /// Every listener the page needs, given what `doc` contains.
    #[must_use]
    pub fn bindings<D: Document>(&self, doc: &D) -> DispatchTable {
        let mut table = DispatchTable::new();
        table.extend(self.effects.bindings(doc));
        table.extend(self.theme.bindings(doc));
        table.extend(self.language.bindings(doc));
        table.extend(self.navigation.bindings(doc));
        table
    }

    /// Apply saved preferences. Only the first call does anything.
    ///
    /// Returns whether this call performed the start.
    pub fn start<D: Document>(&mut self, doc: &D) -> bool {
        if self.started {
            debug!("site already started");
            return false;
        }
        self.started = true;
        self.theme.load_theme_preference(doc, &self.preferences);
        self.language.load_language_preference(doc, &self.preferences);
        info!(
            theme = ?self.theme.mode(),
            locale = %self.language.locale(),
            storage = self.preferences.is_available(),
            "site started"
        );
        true
    }

    /// Run one bound action.
    pub fn handle<D: Document>(
        &mut self,
        doc: &D,
        action: Action,
        ctx: &EventContext<D::Element>,
    ) -> Handled {
        match action {
            Action::ToggleTheme => self.theme.toggle_theme(doc, &self.preferences),
            Action::ToggleLanguage => self.language.toggle_language(doc, &self.preferences),
            Action::ToggleMobileMenu => self.navigation.toggle_mobile_menu(doc),
            Action::CloseMobileMenu => self.navigation.close_mobile_menu(doc),
            Action::DismissMobileMenu => {
                self.navigation.dismiss_if_outside(doc, ctx.target.as_ref());
            }
            Action::SmoothScroll => {
                let href = ctx
                    .current_target
                    .as_ref()
                    .and_then(|link| link.attribute("href"));
                self.effects.smooth_scroll(doc, href.as_deref());
                return Handled::PreventDefault;
            }
            Action::HoverEnter => {
                if let Some(el) = &ctx.current_target {
                    self.effects.hover_enter(el);
                }
            }
            Action::HoverLeave => {
                if let Some(el) = &ctx.current_target {
                    self.effects.hover_leave(el);
                }
            }
        }
        Handled::Default
    }

    /// Hide the reveal-tracked cards and return them for observation.
    pub fn prepare_reveal<D: Document>(&mut self, doc: &D) -> Vec<D::Element> {
        self.reveal.prepare(doc)
    }

    /// Handle an intersection report; `true` means stop observing.
    pub fn on_intersection<E: Element>(&mut self, element: &E, is_intersecting: bool) -> bool {
        self.reveal.on_intersection(element, is_intersecting)
    }

    #[must_use]
    pub fn reveal_config(&self) -> &RevealConfig {
        self.reveal.config()
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.language.locale()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.navigation.is_open()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{BindTarget, EventKind};
    use crate::testing::{FakeDocument, FakeElement, MemoryStorage};

    fn full_page() -> FakeDocument {
        let doc = FakeDocument::new();
        doc.append(FakeElement::new("button").with_id("theme-toggle"));
        doc.append(FakeElement::new("button").with_id("language-toggle"));
        doc.append(FakeElement::new("button").with_id("mobile-menu-btn"));
        let menu = doc.append(FakeElement::new("nav").with_id("mobile-menu"));
        menu.append(FakeElement::new("a").with_attr("href", "#beneficios"));
        doc.append(FakeElement::new("a").with_class("btn-primary").with_attr("href", "#planes"));
        doc
    }

    #[test]
    fn bindings_compose_every_controller() {
        let doc = full_page();
        let site = Site::new(SiteConfig::default(), Preferences::new(MemoryStorage::new()));
        let table = site.bindings(&doc);
        assert_eq!(table.len(), 8);
        assert_eq!(
            table.actions_for(&BindTarget::Document, EventKind::Click),
            vec![Action::DismissMobileMenu]
        );
        // Composing twice yields the same table.
        assert_eq!(site.bindings(&doc), table);
    }

    #[test]
    fn start_runs_once() {
        let doc = full_page();
        let storage = MemoryStorage::new();
        storage.insert("darkMode", "false");
        let mut site = Site::new(SiteConfig::default(), Preferences::new(storage.clone()));

        assert!(site.start(&doc));
        assert_eq!(site.theme(), ThemeMode::Light);

        storage.insert("darkMode", "true");
        assert!(!site.start(&doc));
        assert_eq!(site.theme(), ThemeMode::Light);
        assert!(site.is_started());
    }

    #[test]
    fn smooth_scroll_always_prevents_default() {
        let doc = full_page();
        let dead_link = doc.append(FakeElement::new("a").with_attr("href", "#"));
        let mut site = Site::new(
            SiteConfig::default(),
            Preferences::<MemoryStorage>::unavailable(),
        );
        let handled = site.handle(&doc, Action::SmoothScroll, &EventContext::on(&dead_link));
        assert_eq!(handled, Handled::PreventDefault);
        assert_eq!(
            site.handle(&doc, Action::ToggleTheme, &EventContext::default()),
            Handled::Default
        );
    }
}
