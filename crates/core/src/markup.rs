use crate::node::Node;
use std::fmt::{self, Write};
use trellis_attributes::escape::escape_text;

/// Serializes nodes as markup.
///
/// Only an element's own attributes are written. Run the tree through the optimizer first
/// so that registered attributes have been baked onto tags.
pub struct MarkupWriter<'w, W: Write> {
    out: &'w mut W,
}

impl<'w, W: Write> MarkupWriter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out }
    }

    pub fn write_node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Element(element) => {
                write!(self.out, "<{}{}>", element.tag(), element.attributes())?;
                if element.is_void() {
                    return Ok(());
                }
                for child in element.children() {
                    self.write_node(child)?;
                }
                write!(self.out, "</{}>", element.tag())
            }
            Node::Text(text) if text.is_raw() => self.out.write_str(text.content()),
            Node::Text(text) => self.out.write_str(&escape_text(text.content())),
            Node::Composite(composite) => self.write_node(composite.body()),
            Node::Fragment(fragment) => {
                for child in fragment.children() {
                    self.write_node(child)?;
                }
                Ok(())
            }
            Node::Modified(modified) => self.write_node(modified.content()),
        }
    }
}

pub fn to_markup(node: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = MarkupWriter::new(&mut out).write_node(node);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;

    #[test]
    fn test_nested_elements() {
        let node: Node = Element::new("ul")
            .child(Element::new("li").text("one"))
            .child(Element::new("li").text("two & three"))
            .into();
        assert_eq!(
            to_markup(&node),
            "<ul><li>one</li><li>two &amp; three</li></ul>"
        );
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let node: Node = Element::new("input").attribute("type", "text").into();
        assert_eq!(to_markup(&node), r#"<input type="text">"#);
    }

    #[test]
    fn test_raw_text_is_verbatim() {
        let node = Node::fragment([Node::raw("<b>x</b>"), Node::text("<i>")]);
        assert_eq!(to_markup(&node), "<b>x</b>&lt;i&gt;");
    }
}
