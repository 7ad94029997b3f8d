//! Light/dark theme.
//!
//! The root element carries exactly one of the two theme classes at all
//! times after [`ThemeController::apply_theme`] has run.

use tracing::debug;

use crate::config::ThemeConfig;
use crate::dispatch::{Action, BindTarget, Binding};
use crate::dom::{Document, Element};
use crate::preferences::{PreferenceKey, Preferences, Storage};

/// The two visual modes. Dark is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Toggle button glyph: the mode the next click switches to.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Accessible label describing the next click.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Cambiar a modo claro",
            Self::Light => "Cambiar a modo oscuro",
        }
    }

    /// Parse the stored `darkMode` flag. Anything but `"true"`/`"false"` is rejected.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeController {
    mode: ThemeMode,
    config: ThemeConfig,
}

impl ThemeController {
    #[must_use]
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            mode: ThemeMode::default(),
            config,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    fn class_for(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Dark => &self.config.dark_class,
            ThemeMode::Light => &self.config.light_class,
        }
    }

    /// Flip the mode, render it, persist it and refresh the toggle.
    pub fn toggle_theme<D: Document, S: Storage>(&mut self, doc: &D, prefs: &Preferences<S>) {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "theme toggled");
        self.apply_theme(doc);
        prefs.save(PreferenceKey::Theme, self.mode.as_stored());
        self.update_control(doc);
    }

    /// Put the current mode's class on the root and remove the other one.
    pub fn apply_theme<D: Document>(&self, doc: &D) {
        let Some(root) = doc.root() else {
            return;
        };
        root.add_class(self.class_for(self.mode));
        root.remove_class(self.class_for(self.mode.toggled()));
    }

    /// Refresh the toggle button's glyph and label.
    pub fn update_control<D: Document>(&self, doc: &D) {
        if let Some(toggle) = doc.element_by_id(&self.config.toggle_id) {
            toggle.set_inner_html(self.mode.icon());
            toggle.set_attribute("aria-label", self.mode.toggle_label());
        }
    }

    /// Adopt a valid stored mode, then render and refresh the toggle.
    pub fn load_theme_preference<D: Document, S: Storage>(
        &mut self,
        doc: &D,
        prefs: &Preferences<S>,
    ) {
        if let Some(stored) = prefs.load(PreferenceKey::Theme) {
            match ThemeMode::from_stored(&stored) {
                Some(mode) => self.mode = mode,
                None => debug!(%stored, "ignoring invalid stored theme"),
            }
        }
        self.apply_theme(doc);
        self.update_control(doc);
    }

    /// Listeners this controller needs in `doc`.
    #[must_use]
    pub fn bindings<D: Document>(&self, doc: &D) -> Vec<Binding> {
        if doc.element_by_id(&self.config.toggle_id).is_none() {
            return Vec::new();
        }
        vec![Binding::click(
            BindTarget::Id(self.config.toggle_id.clone()),
            Action::ToggleTheme,
        )]
    }
}
