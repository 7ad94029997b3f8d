#![forbid(unsafe_code)]

//! WASM frontend for the FitSense landing page.
//!
//! This crate binds [`fitsense_core`] to a real browser: it implements the
//! core `Document`/`Element`/`Storage` traits over `web-sys`, registers one
//! DOM listener per dispatch-table entry, drives the reveal
//! `IntersectionObserver`, and routes `tracing` output to the console.
//!
//! Everything except [`options`] only compiles on `wasm32` targets; the
//! options parser is shared with native tests.

pub mod options;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::{WebDocument, WebElement};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
