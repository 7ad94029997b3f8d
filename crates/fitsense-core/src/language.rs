//! Spanish/English text swap.
//!
//! Every element carrying the translate attribute is rewritten from the
//! catalog. Whether the new string is written as HTML or as plain text is
//! decided from the element's *current* markup on every pass: content that
//! already holds the markup marker is replaced as HTML, anything else as
//! text. The decision is never cached.

use fitsense_i18n::{Locale, StringCatalog, landing_catalog};
use tracing::{debug, trace};

use crate::config::LanguageConfig;
use crate::dispatch::{Action, BindTarget, Binding};
use crate::dom::{Document, Element};
use crate::preferences::{PreferenceKey, Preferences, Storage};

#[derive(Debug, Clone)]
pub struct LanguageController {
    locale: Locale,
    catalog: &'static StringCatalog,
    config: LanguageConfig,
}

impl LanguageController {
    /// Controller over the built-in landing page catalog.
    #[must_use]
    pub fn new(config: LanguageConfig) -> Self {
        Self::with_catalog(config, landing_catalog())
    }

    #[must_use]
    pub fn with_catalog(config: LanguageConfig, catalog: &'static StringCatalog) -> Self {
        Self {
            locale: Locale::default(),
            catalog,
            config,
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch to the other locale, rewrite the page, persist, relabel.
    pub fn toggle_language<D: Document, S: Storage>(&mut self, doc: &D, prefs: &Preferences<S>) {
        self.locale = self.locale.other();
        debug!(locale = %self.locale, "language toggled");
        self.apply_language(doc);
        prefs.save(PreferenceKey::Language, self.locale.tag());
        self.update_control(doc);
    }

    /// Rewrite every translatable element and the root `lang` attribute.
    ///
    /// Returns the number of elements rewritten.
    pub fn apply_language<D: Document>(&self, doc: &D) -> usize {
        let attr = &self.config.translate_attribute;
        let mut rewritten = 0;
        for element in doc.query_all(&self.config.translatable_selector()) {
            let Some(key) = element.attribute(attr) else {
                continue;
            };
            let Some(text) = self.catalog.get(self.locale, &key) else {
                trace!(%key, locale = %self.locale, "no translation, left as is");
                continue;
            };
            if element.inner_html().contains(&self.config.markup_marker) {
                element.set_inner_html(text);
            } else {
                element.set_text(text);
            }
            rewritten += 1;
        }
        if let Some(root) = doc.root() {
            root.set_attribute("lang", self.locale.tag());
        }
        rewritten
    }

    /// Refresh the toggle button's text and label.
    pub fn update_control<D: Document>(&self, doc: &D) {
        if let Some(toggle) = doc.element_by_id(&self.config.toggle_id) {
            toggle.set_text(self.locale.label());
            toggle.set_attribute("aria-label", self.locale.switch_label());
        }
    }

    /// Adopt a valid stored locale, then rewrite the page and relabel.
    pub fn load_language_preference<D: Document, S: Storage>(
        &mut self,
        doc: &D,
        prefs: &Preferences<S>,
    ) {
        if let Some(stored) = prefs.load(PreferenceKey::Language) {
            match Locale::from_tag(&stored) {
                Some(locale) => self.locale = locale,
                None => debug!(%stored, "ignoring invalid stored language"),
            }
        }
        let rewritten = self.apply_language(doc);
        debug!(locale = %self.locale, rewritten, "language applied");
        self.update_control(doc);
    }

    #[must_use]
    pub fn bindings<D: Document>(&self, doc: &D) -> Vec<Binding> {
        if doc.element_by_id(&self.config.toggle_id).is_none() {
            return Vec::new();
        }
        vec![Binding::click(
            BindTarget::Id(self.config.toggle_id.clone()),
            Action::ToggleLanguage,
        )]
    }
}
