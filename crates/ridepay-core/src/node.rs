#![forbid(unsafe_code)]

//! A small owned element tree.
//!
//! Widgets describe what they render as a [`Node`] tree; a
//! [`RenderSurface`](crate::surface::RenderSurface) turns the tree into real
//! elements (DOM nodes in the browser, plain records in tests).
//!
//! # Invariants
//!
//! - A node's `hit` region is exported by surfaces as the
//!   [`HitRegion::ATTRIBUTE`] attribute; click routing resolves to the
//!   innermost tagged ancestor of the clicked element.
//! - Attribute order is insertion order; setting an existing attribute
//!   replaces its value in place.

use std::fmt;

/// Interactive regions a click can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// Full-viewport backdrop behind the dialog.
    Backdrop,
    /// Dialog box body (non-interactive).
    Content,
    /// The `×` close glyph.
    CloseButton,
    /// The confirm payment action.
    ConfirmButton,
}

impl HitRegion {
    /// Attribute name used to tag elements with their region.
    pub const ATTRIBUTE: &'static str = "data-hit";

    /// Stable attribute value for this region.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Content => "content",
            Self::CloseButton => "close",
            Self::ConfirmButton => "confirm",
        }
    }

    /// Parse an attribute value produced by [`HitRegion::as_str`].
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "backdrop" => Some(Self::Backdrop),
            "content" => Some(Self::Content),
            "close" => Some(Self::CloseButton),
            "confirm" => Some(Self::ConfirmButton),
            _ => None,
        }
    }
}

impl fmt::Display for HitRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element with classes, attributes, optional text, and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    hit: Option<HitRegion>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set the inline `style` attribute.
    #[must_use]
    pub fn style(self, css: impl Into<String>) -> Self {
        self.attr("style", css)
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Tag this node with a hit region.
    #[must_use]
    pub fn hit(mut self, region: HitRegion) -> Self {
        self.hit = Some(region);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn hit_region(&self) -> Option<HitRegion> {
        self.hit
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first, pre-order iterator over this node and its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node (pre-order) tagged with `region`.
    pub fn find_hit(&self, region: HitRegion) -> Option<&Node> {
        self.descendants().find(|n| n.hit == Some(region))
    }

    /// First node (pre-order) carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Node> {
        self.descendants().find(|n| n.has_class(class))
    }

    /// Concatenated text of this node and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in self.descendants() {
            if let Some(text) = &node.text {
                out.push_str(text);
            }
        }
        out
    }

    /// Number of nodes in this subtree whose own text contains `needle`.
    pub fn count_text(&self, needle: &str) -> usize {
        self.descendants()
            .filter(|n| n.text.as_deref().is_some_and(|t| t.contains(needle)))
            .count()
    }
}

/// Iterator returned by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
