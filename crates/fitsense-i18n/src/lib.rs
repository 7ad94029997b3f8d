#![forbid(unsafe_code)]

//! Internationalization for the FitSense landing page.
//!
//! Provides the two supported [`Locale`]s, a key-based [`StringCatalog`]
//! with coverage reporting, and the static Spanish/English table the page
//! is translated from ([`landing_catalog`]).

pub mod catalog;
pub mod locale;
pub mod table;

pub use catalog::{CoverageReport, I18nError, LocaleCoverage, LocaleStrings, StringCatalog};
pub use locale::Locale;
pub use table::landing_catalog;
