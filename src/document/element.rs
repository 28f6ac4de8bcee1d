//! Structured element construction.

use serde::Serialize;

/// A node in an element tree: either text or a nested element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An HTML element with attributes and children.
///
/// Attribute values and text are stored unescaped; escaping happens once,
/// when the tree is rendered by [`HtmlRenderer`](crate::HtmlRenderer).
/// Attributes keep insertion order. A `None` value renders as a boolean
/// attribute (`<option selected>`).
///
/// # Example
///
/// ```rust
/// use colorscheme::Element;
///
/// let link = Element::new("a")
///     .attr("href", "/projects/")
///     .flag("hidden")
///     .text("Projects");
///
/// assert_eq!(link.attr_value("href"), Some("/projects/"));
/// assert!(link.has_attr("hidden"));
/// assert_eq!(link.text_content(), "Projects");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, returning the element for chaining.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, Some(value.into()));
        self
    }

    /// Sets a boolean attribute, returning the element for chaining.
    pub fn flag(mut self, name: &str) -> Self {
        self.set_attr(name, None);
        self
    }

    /// Appends a child node, returning the element for chaining.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a text node, returning the element for chaining.
    pub fn text(self, text: &str) -> Self {
        self.child(text)
    }

    /// Sets or replaces an attribute in place.
    pub fn set_attr(&mut self, name: &str, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    /// Removes an attribute if present.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns an attribute's value; `None` for missing or boolean attributes.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Finds the first descendant (or self) with the given tag, depth first.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|node| match node {
            Node::Element(el) => el.find(tag),
            Node::Text(_) => None,
        })
    }

    /// Collects every descendant (and self) with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
        }
        for node in &self.children {
            if let Node::Element(el) = node {
                el.collect(tag, found);
            }
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }
}
