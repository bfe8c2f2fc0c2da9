//! In-memory document tree that hosts terminal containers.
//!
//! The document is an arena of elements addressed by [`NodeId`]. Handles stay
//! valid for the lifetime of the document; detached elements keep their slot
//! but are no longer reachable from the root, and every mutation on them is
//! refused. This lets animation code hold handles to render targets without
//! owning them.

use std::collections::BTreeMap;

/// Handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index (stable for the document's lifetime).
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single element: tag, attributes, classes, text content and children.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    detached: bool,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
            detached: false,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The element's own text content (children are not included).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Arena-backed element tree with a single root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only a `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a new element that is not yet attached anywhere.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Look up an attached element.
    ///
    /// Returns `None` for unknown handles and for detached elements.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).filter(|el| !el.detached)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).filter(|el| !el.detached)
    }

    /// Whether `id` refers to a live element reachable from the root.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Returns false when either handle is stale or `child` already has a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || child == self.root || !self.contains(parent) {
            return false;
        }
        // No cycles: `child` must not be an ancestor of `parent`.
        let mut up = self.get(parent).and_then(Element::parent);
        while let Some(ancestor) = up {
            if ancestor == child {
                return false;
            }
            up = self.get(ancestor).and_then(Element::parent);
        }
        match self.get_mut(child) {
            Some(el) if el.parent.is_none() => el.parent = Some(parent),
            _ => return false,
        }
        if let Some(el) = self.get_mut(parent) {
            el.children.push(child);
        }
        true
    }

    /// Detach an element and its whole subtree.
    ///
    /// Returns false when the element is already gone. The root cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || !self.contains(id) {
            return false;
        }
        if let Some(parent) = self.nodes[id.0].parent {
            if let Some(p) = self.get_mut(parent) {
                p.children.retain(|c| *c != id);
            }
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let el = &mut self.nodes[next.0];
            el.detached = true;
            stack.extend(el.children.iter().copied());
        }
        true
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attribute(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.attrs.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => el.attrs.remove(name).is_some(),
            None => false,
        }
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                if !el.has_class(class) {
                    el.classes.push(class.to_string());
                }
                true
            }
            None => false,
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                let before = el.classes.len();
                el.classes.retain(|c| c != class);
                el.classes.len() != before
            }
            None => false,
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(Element::text)
    }

    /// Replace an element's text content.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.text.clear();
                el.text.push_str(text);
                true
            }
            None => false,
        }
    }

    /// Append to an element's text content.
    pub fn push_text(&mut self, id: NodeId, text: &str) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.text.push_str(text);
                true
            }
            None => false,
        }
    }

    /// All descendants of `id` in document (pre-)order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(el) = self.get(id) else {
            return out;
        };
        let mut stack: Vec<NodeId> = el.children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(child) = self.get(next) {
                stack.extend(child.children.iter().rev().copied());
            }
        }
        out
    }

    /// Descendants of `id` carrying attribute `name`, in document order.
    pub fn query_attribute(&self, id: NodeId, name: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|n| self.get(*n).is_some_and(|el| el.has_attribute(name)))
            .collect()
    }

    /// Descendants of `id` carrying class `class`, in document order.
    pub fn query_class(&self, id: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }
}
