//! The modifier composition pipeline and the render pass that owns it.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::ids::NodeId;
use crate::markup;
use crate::modification::Modification;
use crate::node::{Modified, Node};
use crate::optimizer::Optimizer;
use crate::registry::AttributeRegistry;
use std::io::Write;
use trellis_attributes::AttributeBag;

/// One rendering pass: a registry, the config it renders with, and the entry points feature
/// code uses to modify and serialize nodes.
///
/// Nodes modified through a pass must be rendered by the same pass. Passes are independent;
/// rendering several pages in parallel means one pass per page.
#[derive(Debug, Default)]
pub struct RenderPass {
    config: RenderConfig,
    registry: AttributeRegistry,
    modifiers_applied: usize,
}

/// What a finished pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    /// Distinct identities the registry held when the pass finished.
    pub nodes_tracked: usize,
    pub modifiers_applied: usize,
}

impl RenderPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        log::debug!("Starting render pass with config {:?}", config);
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    /// Applies a modifier to `content` and returns the modified node.
    ///
    /// If `content` is itself a modified node, it is unwrapped first, so chained modifiers
    /// never nest wrappers. Attributes are registered in order: the unwrapped node's own
    /// attributes, then whatever earlier modifiers stored for it, then the new delta. A
    /// column width hint from an earlier modifier carries over unless this one sets its own.
    pub fn apply_modifier<F>(&mut self, content: impl Into<Node>, transform: F) -> Node
    where
        F: FnOnce(Modification) -> Modification,
    {
        let (mut original, inherited_width) = match content.into() {
            Node::Modified(modified) => {
                let (inner, width) = modified.into_parts();
                log::trace!("Unwrapping modified {} before applying modifier", inner.id());
                (inner, width)
            }
            other => (other, None),
        };
        let id = original.id();

        // Construction-time attributes move into the registry on first touch; afterwards the
        // registry is the only place this node's attributes live.
        let own = original.take_own_attributes().unwrap_or_default();
        self.registry.merge(own, id);

        let current = self.registry.attributes(id);
        let modification = transform(Modification::new(original, current, inherited_width));
        let (original, delta, removals, column_width) = modification.into_parts();
        debug_assert_eq!(original.id(), id, "modifier transforms must not replace the node");

        if !removals.is_empty() {
            self.registry.update(id, |bag| removals.apply(bag));
        }
        log::trace!("Registering modifier delta for {}: {:?}", id, delta);
        self.registry.merge(delta, id);
        self.modifiers_applied += 1;

        Node::Modified(Modified::new(original, column_width))
    }

    /// The attributes stored for `id` so far.
    pub fn current_attributes(&self, id: NodeId) -> AttributeBag {
        self.registry.attributes(id)
    }

    /// The attributes `node` would render with: construction-time attributes merged with
    /// everything registered for it.
    pub fn effective_attributes(&self, node: &Node) -> AttributeBag {
        node.own_attributes()
            .cloned()
            .unwrap_or_default()
            .merged(self.registry.attributes(node.id()))
    }

    /// Rewrites `node` into plain elements, text and fragments, eliding needless wrappers.
    pub fn optimize(&self, node: Node) -> Node {
        Optimizer::new(&self.registry, &self.config).optimize(node)
    }

    /// Serializes `node` to markup.
    pub fn render(&self, node: &Node) -> String {
        markup::to_markup(&self.optimize(node.clone()))
    }

    /// Serializes `node` into `writer`.
    pub fn render_to<W: Write>(&self, node: &Node, mut writer: W) -> Result<(), RenderError> {
        writer.write_all(self.render(node).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Ends the pass, evicting every registry entry.
    pub fn finish(mut self) -> PassSummary {
        let summary = PassSummary {
            nodes_tracked: self.registry.len(),
            modifiers_applied: self.modifiers_applied,
        };
        self.registry.clear();
        log::debug!(
            "Render pass finished: {} modifiers over {} nodes",
            summary.modifiers_applied,
            summary.nodes_tracked
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Element, NodeKind};
    use trellis_attributes::Action;
    use trellis_types::{ColumnWidth, ResponsiveValues};

    #[test]
    fn test_chained_modifiers_leave_one_wrapper() {
        let mut pass = RenderPass::new();
        let node = Node::element("p");
        let id = node.id();

        let node = pass.apply_modifier(node, |m| m.class("a"));
        let node = pass.apply_modifier(node, |m| m.class("b"));
        let node = pass.apply_modifier(node, |m| m.identifier("x"));

        assert_eq!(node.kind(), NodeKind::Modified);
        assert_eq!(node.unwrapped().kind(), NodeKind::Primitive);
        assert_eq!(node.id(), id);

        let attrs = pass.current_attributes(id);
        assert_eq!(attrs.classes().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(attrs.identifier(), Some("x"));
        assert_eq!(pass.registry().len(), 1);
    }

    #[test]
    fn test_own_attributes_move_into_registry_once() {
        let mut pass = RenderPass::new();
        let element = Element::new("button").class("btn").style("color", "red");
        let id = element.id();

        let node = pass.apply_modifier(element, |m| m.style("color", "blue"));
        let node = pass.apply_modifier(node, |m| m.class("primary"));

        assert!(node.own_attributes().unwrap().is_empty());
        let attrs = pass.current_attributes(id);
        assert_eq!(attrs.style("color"), Some("blue"));
        assert!(attrs.has_class("btn") && attrs.has_class("primary"));
    }

    #[test]
    fn test_transform_sees_accumulated_attributes() {
        let mut pass = RenderPass::new();
        let node = pass.apply_modifier(Node::element("div"), |m| {
            m.data("animations", "fade")
        });
        let node = pass.apply_modifier(node, |m| {
            let existing = m.current().data().get("animations").cloned().unwrap_or_default();
            m.data("animations", format!("{existing} slide"))
        });

        let attrs = pass.current_attributes(node.id());
        assert_eq!(attrs.data().get("animations").map(String::as_str), Some("fade slide"));
    }

    #[test]
    fn test_events_concatenate_across_modifiers() {
        let mut pass = RenderPass::new();
        let node = pass.apply_modifier(Node::element("button"), |m| {
            m.on("click", [Action::script("first()")])
        });
        let node = pass.apply_modifier(node, |m| m.on("click", [Action::script("second()")]));

        let attrs = pass.current_attributes(node.id());
        assert_eq!(
            attrs.events().get("click"),
            Some(&vec![Action::script("first()"), Action::script("second()")])
        );
    }

    #[test]
    fn test_removals_apply_before_delta() {
        let mut pass = RenderPass::new();
        let element = Element::new("button")
            .class("disabled")
            .attribute("disabled", "")
            .style("opacity", "0.5");
        let node = pass.apply_modifier(element, |m| {
            m.remove_class("disabled")
                .remove_attribute("disabled")
                .remove_style("opacity")
                .class("enabled")
        });

        let attrs = pass.current_attributes(node.id());
        assert_eq!(attrs.classes().collect::<Vec<_>>(), vec!["enabled"]);
        assert!(attrs.attributes().is_empty());
        assert!(attrs.styles().is_empty());
    }

    #[test]
    fn test_column_width_propagates_through_chain() {
        let mut pass = RenderPass::new();
        let node = pass.apply_modifier(Node::text("cell"), |m| {
            m.column_width_hint(ColumnWidth::count(4))
        });
        let node = pass.apply_modifier(node, |m| m.class("muted"));
        assert_eq!(node.column_width(), Some(ColumnWidth::Count(4)));

        let node = pass.apply_modifier(node, |m| m.column_width_hint(ColumnWidth::Automatic));
        assert_eq!(node.column_width(), Some(ColumnWidth::Automatic));
    }

    #[test]
    fn test_container_modifier_accumulates_into_one_overlay() {
        let mut pass = RenderPass::new();
        let node = pass.apply_modifier(Node::element("img"), |m| {
            m.container(|c| c.append_style("position", "relative"))
        });
        let node = pass.apply_modifier(node, |m| {
            m.container(|c| c.append_style("width", "100px"))
        });

        let attrs = pass.current_attributes(node.id());
        let container = attrs.container().unwrap();
        assert_eq!(container.style("position"), Some("relative"));
        assert_eq!(container.style("width"), Some("100px"));
    }

    #[test]
    fn test_responsive_classes() {
        let mut pass = RenderPass::new();
        let widths = ResponsiveValues::new().xs(12).md(6);
        let node = pass.apply_modifier(Node::element("div"), |m| m.responsive_classes("col", &widths));
        let attrs = pass.current_attributes(node.id());
        assert_eq!(attrs.classes().collect::<Vec<_>>(), vec!["col-12", "col-md-6"]);
    }

    #[test]
    fn test_effective_attributes_before_any_modifier() {
        let pass = RenderPass::new();
        let node: Node = Element::new("a").attribute("href", "/").into();
        assert_eq!(pass.effective_attributes(&node).attribute("href"), Some("/"));
    }

    #[test]
    fn test_finish_evicts_and_summarizes() {
        let mut pass = RenderPass::new();
        let a = pass.apply_modifier(Node::element("p"), |m| m.class("a"));
        let _ = pass.apply_modifier(a, |m| m.class("b"));
        let _ = pass.apply_modifier(Node::text("t"), |m| m.class("c"));

        let summary = pass.finish();
        assert_eq!(
            summary,
            PassSummary {
                nodes_tracked: 2,
                modifiers_applied: 3
            }
        );
    }

    #[test]
    fn test_render_to_writer() {
        let mut pass = RenderPass::new();
        let node = pass.apply_modifier(Node::element("hr"), |m| m.class("rule"));
        let mut out = Vec::new();
        pass.render_to(&node, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), r#"<hr class="rule">"#);
    }
}
