//! A JSON description of pages, so the engine can be driven without Rust code.
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "type": "element",
//!       "tag": "p",
//!       "children": [{ "type": "text", "content": "Hello" }],
//!       "modifiers": [{ "class": "lead" }, { "id": "intro" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Modifiers are applied one at a time, in order, each through its own
//! [`RenderPass::apply_modifier`] call.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use trellis_core::{
    Action, AttributeBag, ColumnWidth, Element, Modification, Node, RenderPass, ResponsiveValues,
};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<DocumentNode>,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Document = serde_json::from_str(json)?;
        if document.pages.is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(document)
    }
}

/// One node and the modifiers applied to it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DocumentNode {
    #[serde(flatten)]
    pub content: NodeSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ModifierSpec>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeSpec {
    Element {
        tag: String,
        #[serde(default)]
        attributes: AttributeBag,
        #[serde(default)]
        children: Vec<DocumentNode>,
    },
    Text {
        content: String,
    },
    Raw {
        markup: String,
    },
    Component {
        name: String,
        body: Box<DocumentNode>,
    },
    Group {
        #[serde(default)]
        children: Vec<DocumentNode>,
    },
}

/// A modifier expressed as data.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ModifierSpec {
    Class(String),
    RemoveClass(String),
    Style { property: String, value: String },
    RemoveStyle(String),
    Attribute { name: String, value: String },
    RemoveAttribute(String),
    Aria { name: String, value: String },
    Data { name: String, value: String },
    Id(String),
    On { event: String, actions: Vec<Action> },
    /// Merged into the container overlay.
    Container(AttributeBag),
    /// Sets the width hint and swaps in the matching grid class.
    ColumnWidth(ColumnWidth),
    ResponsiveClass {
        prefix: String,
        values: ResponsiveValues<String>,
    },
}

impl ModifierSpec {
    pub fn apply(&self, m: Modification) -> Modification {
        match self {
            ModifierSpec::Class(class) => m.class(class),
            ModifierSpec::RemoveClass(class) => m.remove_class(class.clone()),
            ModifierSpec::Style { property, value } => m.style(property.clone(), value.clone()),
            ModifierSpec::RemoveStyle(property) => m.remove_style(property.clone()),
            ModifierSpec::Attribute { name, value } => m.attribute(name.clone(), value.clone()),
            ModifierSpec::RemoveAttribute(name) => m.remove_attribute(name.clone()),
            ModifierSpec::Aria { name, value } => m.aria(name.clone(), value.clone()),
            ModifierSpec::Data { name, value } => m.data(name.clone(), value.clone()),
            ModifierSpec::Id(id) => m.identifier(id.clone()),
            ModifierSpec::On { event, actions } => m.on(event, actions.iter().cloned()),
            ModifierSpec::Container(bag) => m.container(|c| c.merge(bag.clone())),
            ModifierSpec::ColumnWidth(width) => {
                let m = match m.column_width() {
                    Some(previous) => m.remove_class(previous.class_name()),
                    None => m,
                };
                m.column_width_hint(*width).class(width.class_name())
            }
            ModifierSpec::ResponsiveClass { prefix, values } => m.responsive_classes(prefix, values),
        }
    }
}

impl DocumentNode {
    /// Builds the node tree inside `pass`, children first.
    pub fn build(&self, pass: &mut RenderPass) -> Node {
        let node = match &self.content {
            NodeSpec::Element {
                tag,
                attributes,
                children,
            } => {
                let mut element = Element::new(tag.as_str());
                *element.attributes_mut() = attributes.clone();
                let children: Vec<Node> = children.iter().map(|child| child.build(pass)).collect();
                Node::Element(element.with_children(children))
            }
            NodeSpec::Text { content } => Node::text(content.as_str()),
            NodeSpec::Raw { markup } => Node::raw(markup.as_str()),
            NodeSpec::Component { name, body } => Node::composite(name.as_str(), body.build(pass)),
            NodeSpec::Group { children } => {
                let children: Vec<Node> = children.iter().map(|child| child.build(pass)).collect();
                Node::fragment(children)
            }
        };

        self.modifiers.iter().fold(node, |node, modifier| {
            pass.apply_modifier(node, |m| modifier.apply(m))
        })
    }

    /// Builds this node in `pass` and renders it.
    pub fn render(&self, pass: &mut RenderPass) -> String {
        let node = self.build(pass);
        pass.render(&node)
    }
}
