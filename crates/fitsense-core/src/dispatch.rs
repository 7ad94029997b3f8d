//! Listener registrations as data.
//!
//! Each controller describes the listeners it wants as [`Binding`]s. The
//! [`crate::Site`] composes them into one [`DispatchTable`], and the host
//! registers exactly one DOM listener per table entry. When the listener
//! fires, the host hands the binding's [`Action`] back to
//! [`crate::Site::handle`].
//!
//! # Invariants
//!
//! 1. A table never holds the same binding twice, so composing the same
//!    controller bindings repeatedly cannot register duplicate listeners.
//! 2. Insertion order is preserved; hosts register in that order.

/// DOM event a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// Name passed to `addEventListener`.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindTarget {
    /// The element with this id.
    Id(String),
    /// Every element matching this selector at registration time.
    Selector(String),
    /// The document itself (sees every bubbling event).
    Document,
}

/// What a fired listener asks the site to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleTheme,
    ToggleLanguage,
    ToggleMobileMenu,
    CloseMobileMenu,
    /// Close the menu if the click landed outside the panel and trigger.
    DismissMobileMenu,
    /// Scroll to the fragment of the clicked link.
    SmoothScroll,
    HoverEnter,
    HoverLeave,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub target: BindTarget,
    pub event: EventKind,
    pub action: Action,
}

impl Binding {
    #[must_use]
    pub fn new(target: BindTarget, event: EventKind, action: Action) -> Self {
        Self {
            target,
            event,
            action,
        }
    }

    #[must_use]
    pub fn click(target: BindTarget, action: Action) -> Self {
        Self::new(target, EventKind::Click, action)
    }
}

/// Ordered, duplicate-free set of bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchTable {
    bindings: Vec<Binding>,
}

impl DispatchTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding. Returns `false` if it was already present.
    pub fn insert(&mut self, binding: Binding) -> bool {
        if self.bindings.contains(&binding) {
            return false;
        }
        self.bindings.push(binding);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Actions bound to `event` on `target`, in registration order.
    #[must_use]
    pub fn actions_for(&self, target: &BindTarget, event: EventKind) -> Vec<Action> {
        self.bindings
            .iter()
            .filter(|b| &b.target == target && b.event == event)
            .map(|b| b.action)
            .collect()
    }
}

impl Extend<Binding> for DispatchTable {
    fn extend<T: IntoIterator<Item = Binding>>(&mut self, iter: T) {
        for binding in iter {
            self.insert(binding);
        }
    }
}

impl<'a> IntoIterator for &'a DispatchTable {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

/// The elements involved in a fired event.
#[derive(Debug, Clone)]
pub struct EventContext<E> {
    /// Element the listener is attached to (`None` for document listeners).
    pub current_target: Option<E>,
    /// Element the event originated from.
    pub target: Option<E>,
}

impl<E> Default for EventContext<E> {
    fn default() -> Self {
        Self {
            current_target: None,
            target: None,
        }
    }
}

impl<E: Clone> EventContext<E> {
    /// Context for a listener on `element` that was clicked directly.
    #[must_use]
    pub fn on(element: &E) -> Self {
        Self {
            current_target: Some(element.clone()),
            target: Some(element.clone()),
        }
    }

    /// Context for a document-level listener.
    #[must_use]
    pub fn document(target: Option<&E>) -> Self {
        Self {
            current_target: None,
            target: target.cloned(),
        }
    }
}

/// Outcome of [`crate::Site::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Let the browser run its default action.
    Default,
    /// The host must call `preventDefault()`.
    PreventDefault,
}
