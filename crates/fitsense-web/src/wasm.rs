//! `wasm-bindgen` entry point.
//!
//! Wraps [`fitsense_core::Site`] with the browser event plumbing: one DOM
//! listener per dispatch-table entry, a delayed `IntersectionObserver` for
//! the reveal cards, and options read from the page. Only compiled on
//! `wasm32` targets.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fitsense_core::{BindTarget, Binding, Document, EventContext, Handled, Site, SiteConfig};
use js_sys::Array;
use tracing::{debug, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::dom::{WebDocument, WebElement};
use crate::logging;
use crate::options::{HostOptions, OPTIONS_ELEMENT_ID};
use crate::storage::LocalStorage;

type SharedSite = Rc<RefCell<Site<LocalStorage>>>;

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    logging::install_panic_hook();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let raw = document
        .get_element_by_id(OPTIONS_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let (options, level, problems) = HostOptions::resolve(raw.as_deref());
    logging::init(level);
    for problem in &problems {
        warn!(error = %problem, "host options ignored");
    }

    if document.ready_state() == "loading" {
        let target: EventTarget = document.clone().into();
        let listener = Closure::once_into_js(move || boot(&window, document, options));
        if let Err(err) =
            target.add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        {
            warn!(error = ?err, "could not wait for DOMContentLoaded");
        }
    } else {
        boot(&window, document, options);
    }
}

fn boot(window: &Window, document: web_sys::Document, options: HostOptions) {
    if BOOTED.with(|booted| booted.replace(true)) {
        debug!("already booted");
        return;
    }
    boot_with(window, document, options.site);
}

/// Register every listener, apply saved preferences and schedule the reveal.
pub(crate) fn boot_with(
    window: &Window,
    document: web_sys::Document,
    config: SiteConfig,
) -> SharedSite {
    let doc = WebDocument::new(document);
    let site: SharedSite = Rc::new(RefCell::new(Site::new(
        config,
        LocalStorage::preferences(window),
    )));

    let table = site.borrow().bindings(&doc);
    let mut listeners = 0;
    for binding in &table {
        listeners += register(&doc, &site, binding);
    }
    debug!(bindings = table.len(), listeners, "listeners registered");

    site.borrow_mut().start(&doc);
    schedule_reveal(window, doc, Rc::clone(&site));
    site
}

fn binding_targets(doc: &WebDocument, target: &BindTarget) -> Vec<EventTarget> {
    match target {
        BindTarget::Id(id) => doc
            .element_by_id(id)
            .map(|el| el.inner().clone().into())
            .into_iter()
            .collect(),
        BindTarget::Selector(selector) => doc
            .query_all(selector)
            .into_iter()
            .map(|el| el.inner().clone().into())
            .collect(),
        BindTarget::Document => vec![doc.inner().clone().into()],
    }
}

/// Attach one listener per target of `binding`. Returns how many were attached.
fn register(doc: &WebDocument, site: &SharedSite, binding: &Binding) -> usize {
    let mut attached = 0;
    for target in binding_targets(doc, &binding.target) {
        let doc = doc.clone();
        let site = Rc::clone(site);
        let action = binding.action;
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let ctx = EventContext {
                current_target: event
                    .current_target()
                    .and_then(WebElement::from_event_target),
                target: event.target().and_then(WebElement::from_event_target),
            };
            // A handler that synchronously triggers another event would
            // re-enter here while the site is borrowed.
            let Ok(mut site) = site.try_borrow_mut() else {
                warn!(?action, "re-entrant event skipped");
                return;
            };
            if site.handle(&doc, action, &ctx) == Handled::PreventDefault {
                event.prevent_default();
            }
        });
        match target.add_event_listener_with_callback(
            binding.event.dom_name(),
            closure.as_ref().unchecked_ref(),
        ) {
            Ok(()) => attached += 1,
            Err(err) => warn!(action = ?binding.action, error = ?err, "listener not attached"),
        }
        // Listeners live as long as the page.
        closure.forget();
    }
    attached
}

fn schedule_reveal(window: &Window, doc: WebDocument, site: SharedSite) {
    let delay = site.borrow().reveal_config().start_delay_ms;
    let callback = Closure::once_into_js(move || observe_reveal(&doc, &site));
    let timeout = i32::try_from(delay).unwrap_or(i32::MAX);
    if let Err(err) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
    {
        warn!(error = ?err, "reveal not scheduled");
    }
}

fn observe_reveal(doc: &WebDocument, site: &SharedSite) {
    let config = site.borrow().reveal_config().clone();

    let tracked = Rc::clone(site);
    let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Ok(mut site) = tracked.try_borrow_mut() else {
                    continue;
                };
                if site.on_intersection(&WebElement::new(target.clone()), entry.is_intersecting())
                {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    // Cards are only hidden once an observer exists to show them again.
    let observer =
        match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                warn!(error = ?err, "intersection observer unavailable, reveal skipped");
                return;
            }
        };
    on_entries.forget();

    let cards = site.borrow_mut().prepare_reveal(doc);
    for card in &cards {
        observer.observe(card.inner());
    }
    trace!(count = cards.len(), "reveal observing");
}
