//! Element ids, class names and selectors the page exposes.
//!
//! Every default matches the landing page markup. Hosts may override any
//! field (see `fitsense-web` options); omitted fields keep their default.

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Complete configuration for a [`crate::Site`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub language: LanguageConfig,
    pub navigation: NavigationConfig,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct ThemeConfig {
    /// Id of the theme toggle button.
    pub toggle_id: String,
    /// Root class while dark mode is active.
    pub dark_class: String,
    /// Root class while light mode is active.
    pub light_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".into(),
            dark_class: "dark-mode".into(),
            light_class: "light-mode".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct LanguageConfig {
    /// Id of the language toggle button.
    pub toggle_id: String,
    /// Attribute naming the translation key of an element.
    pub translate_attribute: String,
    /// Content marker that switches replacement to HTML mode.
    pub markup_marker: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            toggle_id: "language-toggle".into(),
            translate_attribute: "data-translate".into(),
            markup_marker: "<strong>".into(),
        }
    }
}

impl LanguageConfig {
    /// Selector matching every translatable element.
    #[must_use]
    pub fn translatable_selector(&self) -> String {
        format!("[{}]", self.translate_attribute)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct NavigationConfig {
    /// Id of the collapsible mobile panel.
    pub panel_id: String,
    /// Id of the hamburger button.
    pub trigger_id: String,
    /// Panel class while open.
    pub shown_class: String,
    /// Links inside the panel that close it.
    pub link_selector: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            panel_id: "mobile-menu".into(),
            trigger_id: "mobile-menu-btn".into(),
            shown_class: "show".into(),
            link_selector: "#mobile-menu a".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct EffectsConfig {
    /// Same-page links that scroll smoothly.
    pub anchor_selector: String,
    /// Buttons that grow while hovered.
    pub hover_selector: String,
    pub hover_transform: String,
    pub rest_transform: String,
    pub hover_transition: String,
    pub reveal: RevealConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            anchor_selector: r##"a[href^="#"]"##.into(),
            hover_selector: ".btn-primary, .btn-login".into(),
            hover_transform: "scale(1.05)".into(),
            rest_transform: "scale(1)".into(),
            hover_transition: "transform 0.2s ease".into(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Reveal-on-scroll parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct RevealConfig {
    /// Card-like elements that fade in.
    pub selector: String,
    /// Fraction of the element that must be visible (0.0–1.0).
    pub threshold: f64,
    /// Intersection root margin, CSS shorthand.
    pub root_margin: String,
    /// Delay between bootstrap and the start of observation.
    pub start_delay_ms: u32,
    pub hidden_transform: String,
    pub shown_transform: String,
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".benefit-card, .plan-card, .team-member".into(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            start_delay_ms: 100,
            hidden_transform: "translateY(30px)".into(),
            shown_transform: "translateY(0)".into(),
            transition: "opacity 0.6s ease, transform 0.6s ease".into(),
        }
    }
}
