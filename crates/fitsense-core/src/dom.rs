//! The slice of the DOM the controllers need.
//!
//! Mutations are infallible from the caller's point of view: an
//! implementation that hits a browser error logs it and carries on, so a
//! half-broken page degrades instead of aborting a handler.

/// A handle to one element. Cloning clones the handle, not the node.
pub trait Element: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    /// Serialized markup of the element's children.
    fn inner_html(&self) -> String;
    /// Replace the children by parsing `html`.
    fn set_inner_html(&self, html: &str);
    /// Replace the children with a single text node.
    fn set_text(&self, text: &str);

    /// Set an inline style property. An empty `value` removes it.
    fn set_style(&self, property: &str, value: &str);

    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    /// Animated scroll bringing the element's top edge into view.
    fn scroll_into_view_smooth(&self);
}

/// The document the controllers operate on.
pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// All elements matching a CSS selector list, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
}
