//! Render-time rewrite of a composed tree into plain markup nodes.
//!
//! The optimizer consumes a tree and returns one built only from elements, text and
//! fragments. Every attribute the registry holds is baked onto a concrete tag, either the
//! node's own, a folded descendant's, or a wrapper added because nothing else can carry it.
//! Output nodes get fresh identities, so optimizing an optimized tree changes nothing.

use crate::config::RenderConfig;
use crate::node::{Element, Node};
use crate::registry::AttributeRegistry;
use trellis_attributes::AttributeBag;

pub struct Optimizer<'a> {
    registry: &'a AttributeRegistry,
    config: &'a RenderConfig,
}

impl<'a> Optimizer<'a> {
    pub fn new(registry: &'a AttributeRegistry, config: &'a RenderConfig) -> Self {
        Self { registry, config }
    }

    pub fn optimize(&self, node: Node) -> Node {
        self.visit(node, AttributeBag::new())
    }

    /// Rewrites `node`, merging `extra` on top of whatever the node itself carries.
    fn visit(&self, node: Node, extra: AttributeBag) -> Node {
        let node = match node {
            Node::Modified(modified) => modified.into_parts().0,
            other => other,
        };

        let mut bag = self.effective_bag(&node).merged(extra);
        let container = bag.take_container();
        // Nothing to place when the node's own capabilities already cover what the bag needs.
        let fits = node.capabilities().contains(bag.required_capabilities());

        let rewritten = match node {
            Node::Element(element) => {
                let (_, tag, _, children) = element.into_parts();
                Node::Element(Element::baked(tag, bag, self.visit_all(children)))
            }
            Node::Text(text) => {
                if fits {
                    Node::Text(text.reissued())
                } else {
                    log::debug!(
                        "Wrapping text {} in <{}> to carry its attributes",
                        text.id(),
                        self.config.inline_wrapper_tag
                    );
                    self.wrap(&self.config.inline_wrapper_tag, bag, vec![Node::Text(text.reissued())])
                }
            }
            Node::Composite(composite) => {
                let (id, body) = composite.into_parts();
                if fits {
                    self.visit(body, AttributeBag::new())
                } else if self.can_fold_into(&body) {
                    log::debug!("Folding attributes of composite {} onto its body", id);
                    self.visit(body, bag)
                } else {
                    log::debug!(
                        "Wrapping composite {} in <{}> to carry its attributes",
                        id,
                        self.config.wrapper_tag
                    );
                    let body = self.visit(body, AttributeBag::new());
                    self.wrap(&self.config.wrapper_tag, bag, vec![body])
                }
            }
            Node::Fragment(fragment) => {
                let (id, children) = fragment.into_parts();
                let children = self.visit_all(children);
                if fits {
                    Node::fragment(children)
                } else {
                    log::debug!(
                        "Wrapping fragment {} in <{}> to carry its attributes",
                        id,
                        self.config.wrapper_tag
                    );
                    self.wrap(&self.config.wrapper_tag, bag, children)
                }
            }
            // Unwrapped above; a wrapper never holds another wrapper.
            Node::Modified(modified) => self.visit(modified.into_parts().0, bag),
        };

        match container {
            Some(container) => self.materialize(rewritten, container),
            None => rewritten,
        }
    }

    fn visit_all(&self, children: Vec<Node>) -> Vec<Node> {
        children
            .into_iter()
            .map(|child| self.visit(child, AttributeBag::new()))
            .collect()
    }

    fn effective_bag(&self, node: &Node) -> AttributeBag {
        let own = node.own_attributes().cloned().unwrap_or_default();
        match self.registry.get(node.id()) {
            Some(registered) => own.merged(registered.clone()),
            None => own,
        }
    }

    /// A composite's attributes may move onto its body when the body renders straight into a
    /// layout-sensitive tag that carries nothing of its own.
    fn can_fold_into(&self, body: &Node) -> bool {
        match body.unwrapped() {
            Node::Element(element) => {
                self.config.is_layout_sensitive(element.tag())
                    && self.effective_bag(body.unwrapped()).is_empty()
            }
            _ => false,
        }
    }

    fn wrap(&self, tag: &str, bag: AttributeBag, children: Vec<Node>) -> Node {
        Node::Element(Element::baked(tag.to_string(), bag, children))
    }

    /// Places `node` inside exactly one container element per overlay level.
    fn materialize(&self, node: Node, mut container: AttributeBag) -> Node {
        let outer = container.take_container();
        log::debug!("Adding <{}> container", self.config.container_tag);
        let wrapped = self.wrap(&self.config.container_tag, container, vec![node]);
        match outer {
            Some(outer) => self.materialize(wrapped, outer),
            None => wrapped,
        }
    }
}
