//! The two locales the page can be shown in.

use std::fmt;
use std::str::FromStr;

use crate::catalog::I18nError;

/// A supported locale.
///
/// The page ships in exactly two languages. Spanish is the default because
/// the markup is authored in Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// Two-letter tag used for storage and the document `lang` attribute.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Uppercase tag shown on the language toggle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::En => "EN",
        }
    }

    /// The locale a toggle switches to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    /// Accessible label describing what the next toggle does.
    ///
    /// Worded in the target language so a screen reader user hears the
    /// language they are about to switch to.
    #[must_use]
    pub const fn switch_label(self) -> &'static str {
        match self {
            Self::Es => "Change to English",
            Self::En => "Cambiar a Español",
        }
    }

    /// Parse an exact tag. Case and surrounding whitespace are significant.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| I18nError::InvalidLocale(s.to_string()))
    }
}
