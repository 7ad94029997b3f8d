//! `web-sys` implementations of the core DOM traits.
//!
//! Browser errors (a rejected selector, a read-only attribute) are logged
//! and swallowed, matching the degrade-silently contract of
//! [`fitsense_core::Element`].

use fitsense_core::{Document, Element};
use tracing::{trace, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Handle to a live DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    #[must_use]
    pub fn inner(&self) -> &web_sys::Element {
        &self.0
    }

    /// Narrow an event target to an element, if it is one.
    #[must_use]
    pub fn from_event_target(target: web_sys::EventTarget) -> Option<Self> {
        target.dyn_into::<web_sys::Element>().ok().map(Self)
    }
}

impl From<web_sys::Element> for WebElement {
    fn from(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl Element for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            warn!(class, error = %describe(&err), "add class failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            warn!(class, error = %describe(&err), "remove class failed");
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            warn!(name, error = %describe(&err), "set attribute failed");
        }
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.0.dyn_ref::<HtmlElement>() else {
            trace!(property, "not an HTML element, style skipped");
            return;
        };
        let style = html.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            warn!(property, error = %describe(&err), "set style failed");
        }
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(&*other.0))
    }

    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// The live `document`.
#[derive(Debug, Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }

    #[must_use]
    pub fn inner(&self) -> &web_sys::Document {
        &self.0
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let list = match self.0.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                warn!(selector, error = %describe(&err), "selector rejected");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn root(&self) -> Option<WebElement> {
        self.0.document_element().map(WebElement)
    }

    fn body(&self) -> Option<WebElement> {
        self.0.body().map(|body| WebElement(body.into()))
    }
}
