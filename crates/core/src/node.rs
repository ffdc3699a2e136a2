//! The composed markup tree.
//!
//! A [`Node`] is a closed sum type. Its variant decides, once and at construction, how the
//! optimizer treats it: elements are primitive and carry attributes on their own tag, text
//! runs and composites cannot, and [`Modified`] wrappers are bookkeeping left behind by the
//! modifier pipeline.

use crate::ids::NodeId;
use trellis_attributes::escape::is_valid_name;
use trellis_attributes::{AttributeBag, Capabilities};
use trellis_types::ColumnWidth;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const FALLBACK_TAG: &str = "div";

/// The node categories the optimizer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Renders its own tag and can carry attributes directly.
    Primitive,
    /// Text or raw markup with no tag of its own.
    TextLike,
    /// Built from other nodes; renders only its children.
    Composite,
    /// A modifier wrapper around another node.
    Modified,
}

// --- Variants ---

/// A primitive leaf: one tag, its construction-time attributes and its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: NodeId,
    tag: String,
    attributes: AttributeBag,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element. Tag names are lowercased; an unusable tag falls back to `div`.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag: String = tag.into();
        let tag = tag.trim().to_ascii_lowercase();
        let tag = if is_valid_name(&tag) {
            tag
        } else {
            log::warn!("Invalid tag name '{}', using '{}'.", tag, FALLBACK_TAG);
            FALLBACK_TAG.to_string()
        };
        Self::baked(tag, AttributeBag::new(), Vec::new())
    }

    /// An element whose attributes are already final; it gets a fresh identity.
    pub(crate) fn baked(tag: String, attributes: AttributeBag, children: Vec<Node>) -> Self {
        Self {
            id: NodeId::next(),
            tag,
            attributes,
            children,
        }
    }

    pub(crate) fn into_parts(self) -> (NodeId, String, AttributeBag, Vec<Node>) {
        (self.id, self.tag, self.attributes, self.children)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Attributes given at construction that have not yet been moved into a registry.
    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        if self.is_void() {
            log::warn!("Ignoring child of void element <{}>.", self.tag);
            return self;
        }
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        children.into_iter().fold(self, |element, child| element.child(child))
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Text::new(content))
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.attributes.append_class(class);
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.append_style(property, value);
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set_attribute(name, value);
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.attributes.set_identifier(identifier);
        self
    }
}

/// A run of text, escaped on output unless it is raw markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    id: NodeId,
    content: String,
    raw: bool,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: NodeId::next(),
            content: content.into(),
            raw: false,
        }
    }

    /// Pre-rendered markup, emitted verbatim.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self {
            raw: true,
            ..Self::new(markup)
        }
    }

    /// The same content under a fresh identity.
    pub(crate) fn reissued(&self) -> Self {
        Self {
            id: NodeId::next(),
            content: self.content.clone(),
            raw: self.raw,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }
}

/// A named component whose markup is entirely its body's.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    id: NodeId,
    name: String,
    body: Box<Node>,
}

impl Composite {
    pub fn new(name: impl Into<String>, body: impl Into<Node>) -> Self {
        Self {
            id: NodeId::next(),
            name: name.into(),
            body: Box::new(body.into()),
        }
    }

    pub(crate) fn into_parts(self) -> (NodeId, Node) {
        (self.id, *self.body)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &Node {
        &self.body
    }
}

/// Sibling nodes without a tag of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    id: NodeId,
    children: Vec<Node>,
}

impl Fragment {
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            id: NodeId::next(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn into_parts(self) -> (NodeId, Vec<Node>) {
        (self.id, self.children)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// The result of applying a modifier.
///
/// A wrapper always shares the identity of the node it wraps, and never wraps another
/// wrapper: chained modifiers produce one logical node whose attributes live in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Modified {
    content: Box<Node>,
    column_width: Option<ColumnWidth>,
}

impl Modified {
    pub(crate) fn new(content: Node, column_width: Option<ColumnWidth>) -> Self {
        debug_assert!(!matches!(content, Node::Modified(_)));
        Self {
            content: Box::new(content),
            column_width,
        }
    }

    pub(crate) fn into_parts(self) -> (Node, Option<ColumnWidth>) {
        (*self.content, self.column_width)
    }

    pub fn id(&self) -> NodeId {
        self.content.id()
    }

    pub fn content(&self) -> &Node {
        &self.content
    }

    pub fn column_width(&self) -> Option<ColumnWidth> {
        self.column_width
    }
}

// --- Node ---

/// One unit of markup-producing data in the composed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
    Composite(Composite),
    Fragment(Fragment),
    Modified(Modified),
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Node {
        Node::Element(Element::new(tag))
    }

    pub fn text(content: impl Into<String>) -> Node {
        Node::Text(Text::new(content))
    }

    pub fn raw(markup: impl Into<String>) -> Node {
        Node::Text(Text::raw(markup))
    }

    pub fn composite(name: impl Into<String>, body: impl Into<Node>) -> Node {
        Node::Composite(Composite::new(name, body))
    }

    pub fn fragment<I>(children: I) -> Node
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Node::Fragment(Fragment::new(children))
    }

    pub fn id(&self) -> NodeId {
        match self {
            Node::Element(element) => element.id(),
            Node::Text(text) => text.id(),
            Node::Composite(composite) => composite.id(),
            Node::Fragment(fragment) => fragment.id(),
            Node::Modified(modified) => modified.id(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Element(_) => NodeKind::Primitive,
            Node::Text(_) => NodeKind::TextLike,
            Node::Composite(_) | Node::Fragment(_) => NodeKind::Composite,
            Node::Modified(_) => NodeKind::Modified,
        }
    }

    /// What this node can carry on a tag of its own.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Node::Element(_) => Capabilities::ALL,
            Node::Text(_) | Node::Composite(_) | Node::Fragment(_) | Node::Modified(_) => {
                Capabilities::NONE
            }
        }
    }

    /// The node underneath any modifier wrapper.
    pub fn unwrapped(&self) -> &Node {
        match self {
            Node::Modified(modified) => modified.content(),
            other => other,
        }
    }

    /// Construction-time attributes, for the variants that have them.
    pub fn own_attributes(&self) -> Option<&AttributeBag> {
        match self.unwrapped() {
            Node::Element(element) => Some(element.attributes()),
            _ => None,
        }
    }

    /// Moves construction-time attributes out of the node, leaving it with none.
    pub(crate) fn take_own_attributes(&mut self) -> Option<AttributeBag> {
        match self {
            Node::Element(element) => Some(std::mem::take(&mut element.attributes)),
            _ => None,
        }
    }

    /// The grid sizing hint carried by a modifier wrapper.
    pub fn column_width(&self) -> Option<ColumnWidth> {
        match self {
            Node::Modified(modified) => modified.column_width(),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Composite> for Node {
    fn from(composite: Composite) -> Self {
        Node::Composite(composite)
    }
}

impl From<Fragment> for Node {
    fn from(fragment: Fragment) -> Self {
        Node::Fragment(fragment)
    }
}

impl From<Modified> for Node {
    fn from(modified: Modified) -> Self {
        Node::Modified(modified)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::text(content)
    }
}
