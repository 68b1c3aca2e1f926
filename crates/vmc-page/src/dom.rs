//! Minimal document tree for catalog and detail pages.
//!
//! Elements carry a tag, attributes, text, and children. Nodes are
//! addressed by [`NodeId`], the child-index path from the root, which stays
//! valid as long as the tree shape does not change. Rendering only touches
//! text and attributes, so ids taken before a render remain usable after.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// Element class marking a catalog card.
pub const CARD_CLASS: &str = "card";
/// Element class marking a status display.
pub const STATUS_CLASS: &str = "status";
/// Element class marking a toggle control.
pub const TOGGLE_CLASS: &str = "status-toggle";
/// Element class marking the legacy checkout/return control.
pub const CHECKOUT_CLASS: &str = "checkout-btn";
/// Element class wrapping the detail page's status display and controls.
pub const STATUS_AREA_CLASS: &str = "status-area";

/// Item identifier attribute.
pub const SLUG_ATTR: &str = "data-slug";
/// Toggle-kind discriminator attribute (`available` or `repairing`).
pub const TOGGLE_ATTR: &str = "data-toggle";
/// Machine-readable status attribute written on status displays.
pub const STATUS_ATTR: &str = "data-status";
/// Pressed-state attribute written on toggle controls.
pub const PRESSED_ATTR: &str = "aria-pressed";
/// Boolean disabled attribute.
pub const DISABLED_ATTR: &str = "disabled";

/// A single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: set the class list.
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    /// Builder: set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: append a child.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Set or remove a boolean attribute.
    pub fn toggle_attr(&mut self, name: &str, on: bool) {
        if on {
            self.set_attr(name, "");
        } else {
            self.remove_attr(name);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Non-empty value of the item identifier attribute.
    pub fn slug(&self) -> Option<&str> {
        self.attr(SLUG_ATTR).filter(|slug| !slug.is_empty())
    }

    pub fn is_disabled(&self) -> bool {
        self.has_attr(DISABLED_ATTR)
    }

    fn write_html(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            if value.is_empty() && name == DISABLED_ATTR {
                write!(out, " {name}")?;
            } else {
                write!(out, " {}=\"{}\"", name, escape(value))?;
            }
        }
        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            child.write_html(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

/// Address of an element: child indexes from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Vec<usize>);

impl NodeId {
    /// The root element.
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;
        Some(Self(parent.to_vec()))
    }

    /// True when `self` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &NodeId) -> bool {
        self.0.len() > ancestor.0.len() && self.0.starts_with(&ancestor.0)
    }
}

/// A page: one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &NodeId) -> Option<&Element> {
        id.0.iter()
            .try_fold(&self.root, |element, &index| element.children.get(index))
    }

    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut Element> {
        id.0.iter()
            .try_fold(&mut self.root, |element, &index| element.children.get_mut(index))
    }

    /// All elements matching `predicate`, in document order.
    pub fn select(&self, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        let mut found = Vec::new();
        collect(&self.root, NodeId::root(), &predicate, &mut found);
        found
    }

    /// Elements with `class`, in document order.
    pub fn select_class(&self, class: &str) -> Vec<NodeId> {
        self.select(|element| element.has_class(class))
    }

    /// First descendant of `id` (excluding `id` itself) matching `predicate`.
    pub fn find_within(
        &self,
        id: &NodeId,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<NodeId> {
        let element = self.get(id)?;
        element
            .children
            .iter()
            .enumerate()
            .find_map(|(index, child)| {
                let mut found = Vec::new();
                collect(child, id.child(index), &predicate, &mut found);
                found.into_iter().next()
            })
    }

    /// Nearest element at or above `id` matching `predicate`.
    ///
    /// `None` when `id` does not address an element.
    pub fn closest(&self, id: &NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.get(id)?;
        let mut current = Some(id.clone());
        while let Some(candidate) = current {
            if self.get(&candidate).is_some_and(&predicate) {
                return Some(candidate);
            }
            current = candidate.parent();
        }
        None
    }

    /// Serialize to HTML. Attributes are emitted in name order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.root.write_html(&mut out);
        out
    }
}

fn collect(
    element: &Element,
    id: NodeId,
    predicate: &impl Fn(&Element) -> bool,
    found: &mut Vec<NodeId>,
) {
    if predicate(element) {
        found.push(id.clone());
    }
    for (index, child) in element.children.iter().enumerate() {
        collect(child, id.child(index), predicate, found);
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
