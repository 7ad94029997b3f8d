//! In-memory DOM and storage for tests (feature `test-helpers`).
//!
//! [`FakeDocument`] is a tree of [`FakeElement`]s under `<html><body>`.
//! Text is stored the way a browser serializes it, so writing text that
//! contains markup and reading back `inner_html` shows escaped entities.
//!
//! The selector matcher understands what the page uses: selector lists,
//! descendant combinators, type, `#id`, `.class`, `[attr]`, `[attr="v"]`
//! and `[attr^="v"]`. Attribute values must not contain whitespace.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::iter::Peekable;
use std::rc::{Rc, Weak};
use std::str::Chars;

use crate::dom::{Document, Element};
use crate::preferences::{Storage, StorageError};

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// `localStorage` stand-in. Clones share the same items.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
    reject_reason: RefCell<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing failure injection.
    pub fn insert(&self, key: &str, value: &str) {
        self.inner
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Read a value directly, bypassing failure injection.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.items.borrow().get(key).cloned()
    }

    /// When `false`, every operation fails with [`StorageError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.inner.unavailable.set(!available);
    }

    /// Make every write fail with [`StorageError::Rejected`].
    pub fn reject_writes(&self, reason: &str) {
        *self.inner.reject_reason.borrow_mut() = Some(reason.to_string());
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.inner.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.inner.unavailable.get() {
            return Err(StorageError::Unavailable);
        }
        if let Some(reason) = self.inner.reject_reason.borrow().as_ref() {
            return Err(StorageError::Rejected {
                key: key.to_string(),
                reason: reason.clone(),
            });
        }
        self.insert(key, value);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    html: String,
    styles: BTreeMap<String, String>,
    children: Vec<FakeElement>,
    parent: Weak<RefCell<Node>>,
    scrolls: usize,
}

/// Shared handle to an in-memory element.
#[derive(Clone)]
pub struct FakeElement {
    node: Rc<RefCell<Node>>,
}

impl fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("FakeElement")
            .field("tag", &node.tag)
            .field("id", &node.attributes.get("id"))
            .field("classes", &node.classes)
            .finish()
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl FakeElement {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                tag: tag.to_ascii_lowercase(),
                ..Node::default()
            })),
        }
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set the initial markup.
    #[must_use]
    pub fn with_html(self, html: &str) -> Self {
        self.set_inner_html(html);
        self
    }

    /// Attach `child` as the last child and return it.
    pub fn append(&self, child: FakeElement) -> FakeElement {
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node.borrow_mut().children.push(child.clone());
        child
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    #[must_use]
    pub fn parent(&self) -> Option<FakeElement> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| FakeElement { node })
    }

    /// Rendered text: markup stripped and entities decoded.
    #[must_use]
    pub fn text(&self) -> String {
        let html = self.node.borrow().html.clone();
        let mut stripped = String::with_capacity(html.len());
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => stripped.push(ch),
                _ => {}
            }
        }
        unescape(&stripped)
    }

    /// Inline style property, if set.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.node.borrow().styles.get(property).cloned()
    }

    /// How many smooth scrolls targeted this element.
    #[must_use]
    pub fn scroll_count(&self) -> usize {
        self.node.borrow().scrolls
    }

    fn children(&self) -> Vec<FakeElement> {
        self.node.borrow().children.clone()
    }
}

impl Element for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.node.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.node.borrow_mut().classes.retain(|c| c != class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let node = self.node.borrow();
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut node = self.node.borrow_mut();
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn inner_html(&self) -> String {
        self.node.borrow().html.clone()
    }

    fn set_inner_html(&self, html: &str) {
        html.clone_into(&mut self.node.borrow_mut().html);
    }

    fn set_text(&self, text: &str) {
        self.node.borrow_mut().html = escape(text);
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.node.borrow_mut();
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(el) = current {
            if el == *self {
                return true;
            }
            current = el.parent();
        }
        false
    }

    fn scroll_into_view_smooth(&self) {
        self.node.borrow_mut().scrolls += 1;
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn unescape(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// An `<html><body>` tree.
#[derive(Debug, Clone)]
pub struct FakeDocument {
    root: FakeElement,
    body: FakeElement,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDocument {
    #[must_use]
    pub fn new() -> Self {
        let root = FakeElement::new("html");
        let body = root.append(FakeElement::new("body"));
        Self { root, body }
    }

    /// Append to `<body>` and return the element.
    pub fn append(&self, element: FakeElement) -> FakeElement {
        self.body.append(element)
    }

    #[must_use]
    pub fn root_element(&self) -> FakeElement {
        self.root.clone()
    }

    #[must_use]
    pub fn body_element(&self) -> FakeElement {
        self.body.clone()
    }

    /// Every element in document order.
    fn walk(&self) -> Vec<FakeElement> {
        let mut out = Vec::new();
        let mut stack = vec![self.root.clone()];
        while let Some(el) = stack.pop() {
            stack.extend(el.children().into_iter().rev());
            out.push(el);
        }
        out
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.walk()
            .into_iter()
            .find(|el| el.attribute("id").as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let list = parse_selector_list(selector);
        self.walk()
            .into_iter()
            .filter(|el| list.iter().any(|chain| matches_chain(el, chain)))
            .collect()
    }

    fn root(&self) -> Option<FakeElement> {
        Some(self.root.clone())
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

#[derive(Debug)]
enum AttrTest {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

impl Compound {
    fn matches(&self, el: &FakeElement) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != el.tag() {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attribute("id").as_ref() != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|test| match test {
            AttrTest::Present(name) => el.attribute(name).is_some(),
            AttrTest::Equals(name, value) => el.attribute(name).as_ref() == Some(value),
            AttrTest::Prefix(name, value) => el
                .attribute(name)
                .is_some_and(|actual| actual.starts_with(value.as_str())),
        })
    }
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn read_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn parse_compound(src: &str) -> Compound {
    let mut compound = Compound::default();
    let mut chars = src.chars().peekable();

    if chars.peek().is_some_and(|&c| is_ident(c)) {
        compound.tag = Some(read_ident(&mut chars).to_ascii_lowercase());
    } else if chars.peek() == Some(&'*') {
        chars.next();
    }

    while let Some(ch) = chars.next() {
        match ch {
            '#' => compound.id = Some(read_ident(&mut chars)),
            '.' => compound.classes.push(read_ident(&mut chars)),
            '[' => {
                let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                compound.attrs.push(parse_attr_test(&body));
            }
            _ => {}
        }
    }
    compound
}

fn parse_attr_test(body: &str) -> AttrTest {
    let unquote = |v: &str| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string();
    if let Some((name, value)) = body.split_once("^=") {
        AttrTest::Prefix(name.trim().to_string(), unquote(value))
    } else if let Some((name, value)) = body.split_once('=') {
        AttrTest::Equals(name.trim().to_string(), unquote(value))
    } else {
        AttrTest::Present(body.trim().to_string())
    }
}

fn parse_selector_list(selector: &str) -> Vec<Vec<Compound>> {
    selector
        .split(',')
        .map(|complex| complex.split_whitespace().map(parse_compound).collect())
        .filter(|chain: &Vec<Compound>| !chain.is_empty())
        .collect()
}

/// Match a descendant chain: the last compound against `el`, earlier ones
/// against successive ancestors.
fn matches_chain(el: &FakeElement, chain: &[Compound]) -> bool {
    let Some((last, rest)) = chain.split_last() else {
        return false;
    };
    if !last.matches(el) {
        return false;
    }
    let mut ancestor = el.parent();
    for compound in rest.iter().rev() {
        loop {
            let Some(candidate) = ancestor else {
                return false;
            };
            ancestor = candidate.parent();
            if compound.matches(&candidate) {
                break;
            }
        }
    }
    true
}
