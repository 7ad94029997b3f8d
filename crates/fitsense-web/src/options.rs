//! Host-supplied options.
//!
//! A page may embed
//!
//! ```html
//! <script type="application/json" id="fitsense-options">
//!   { "log_level": "debug", "effects": { "reveal": { "start_delay_ms": 0 } } }
//! </script>
//! ```
//!
//! Every [`SiteConfig`] field may be overridden; omitted fields keep their
//! defaults. Problems never stop the page from booting: [`HostOptions::resolve`]
//! falls back to defaults and hands the errors back so they can be logged
//! once the console subscriber is installed.

use std::fmt;

use fitsense_core::SiteConfig;
use serde::Deserialize;
use tracing::Level;

/// Id of the `<script type="application/json">` element holding the options.
pub const OPTIONS_ELEMENT_ID: &str = "fitsense-options";

/// Console level when the page does not ask for one. Only problems are
/// reported; hosts opt in to more with `log_level`.
pub const DEFAULT_LEVEL: Level = Level::WARN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The options element did not contain valid JSON for [`HostOptions`].
    Parse(String),
    /// `log_level` is not one of `trace`, `debug`, `info`, `warn`, `error`.
    InvalidLogLevel(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(reason) => write!(f, "invalid host options: {reason}"),
            Self::InvalidLogLevel(level) => write!(f, "invalid log level: {level:?}"),
        }
    }
}

impl std::error::Error for OptionsError {}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HostOptions {
    /// Maximum `tracing` level written to the console.
    pub log_level: Option<String>,
    #[serde(flatten)]
    pub site: SiteConfig,
}

impl HostOptions {
    /// Parse options JSON. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|err| OptionsError::Parse(err.to_string()))
    }

    /// The console level, `warn` when unset.
    pub fn max_level(&self) -> Result<Level, OptionsError> {
        match &self.log_level {
            None => Ok(DEFAULT_LEVEL),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| OptionsError::InvalidLogLevel(raw.clone())),
        }
    }

    /// Parse whatever the page supplied, never failing.
    ///
    /// Returns the options, the level to log at, and every problem met on
    /// the way.
    #[must_use]
    pub fn resolve(json: Option<&str>) -> (Self, Level, Vec<OptionsError>) {
        let mut problems = Vec::new();
        let options = match json.map(Self::from_json).transpose() {
            Ok(options) => options.unwrap_or_default(),
            Err(err) => {
                problems.push(err);
                Self::default()
            }
        };
        let level = options.max_level().unwrap_or_else(|err| {
            problems.push(err);
            DEFAULT_LEVEL
        });
        (options, level, problems)
    }
}
