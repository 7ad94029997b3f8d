#![forbid(unsafe_code)]

//! Core: the landing page behaviours, independent of any browser binding.
//!
//! # Role in FitSense
//! `fitsense-core` owns every piece of page state and every rule for
//! mutating the document. It never touches `web-sys`: the page is reached
//! through the [`dom::Document`] and [`dom::Element`] traits, and browser
//! storage through [`preferences::Storage`]. `fitsense-web` implements those
//! traits for a real browser; [`testing`] implements them in memory.
//!
//! # Primary responsibilities
//! - **Preferences**: resilient load/save of the theme and language choices.
//! - **Theme / Language / Navigation controllers**: toggles and their
//!   reflection onto classes, labels and text.
//! - **Effects**: smooth anchor scrolling, hover emphasis, reveal on scroll.
//! - **Dispatch**: every listener declared as data, composed by [`Site`].

pub mod config;
pub mod dispatch;
pub mod dom;
pub mod effects;
pub mod language;
pub mod navigation;
pub mod preferences;
pub mod reveal;
pub mod site;
pub mod theme;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::SiteConfig;
pub use dispatch::{Action, BindTarget, Binding, DispatchTable, EventContext, EventKind, Handled};
pub use dom::{Document, Element};
pub use preferences::{PreferenceKey, Preferences, Storage, StorageError};
pub use site::Site;
pub use theme::ThemeMode;

pub use fitsense_i18n::Locale;
