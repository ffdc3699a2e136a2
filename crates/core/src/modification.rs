use crate::node::Node;
use std::fmt;
use trellis_attributes::{Action, AttributeBag};
use trellis_types::{ColumnWidth, ResponsiveValues};

/// The value a modifier transform receives and returns.
///
/// It exposes the node being modified (already unwrapped from any earlier modifier), a
/// snapshot of the attributes accumulated for it so far, and an initially empty delta the
/// transform fills in. Removals are applied to the accumulated attributes before the delta
/// is merged.
#[derive(Debug)]
pub struct Modification {
    content: Node,
    current: AttributeBag,
    delta: AttributeBag,
    removals: Removals,
    column_width: Option<ColumnWidth>,
}

#[derive(Debug, Default)]
pub(crate) struct Removals {
    pub(crate) classes: Vec<String>,
    pub(crate) styles: Vec<String>,
    pub(crate) attributes: Vec<String>,
}

impl Removals {
    pub(crate) fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.styles.is_empty() && self.attributes.is_empty()
    }

    pub(crate) fn apply(&self, bag: &mut AttributeBag) {
        bag.remove_classes(&self.classes);
        bag.remove_styles(&self.styles);
        bag.remove_attributes(&self.attributes);
    }
}

impl Modification {
    pub(crate) fn new(content: Node, current: AttributeBag, column_width: Option<ColumnWidth>) -> Self {
        Self {
            content,
            current,
            delta: AttributeBag::new(),
            removals: Removals::default(),
            column_width,
        }
    }

    pub(crate) fn into_parts(self) -> (Node, AttributeBag, Removals, Option<ColumnWidth>) {
        (self.content, self.delta, self.removals, self.column_width)
    }

    /// The node being modified.
    pub fn content(&self) -> &Node {
        &self.content
    }

    /// Attributes accumulated for this node before this modifier.
    pub fn current(&self) -> &AttributeBag {
        &self.current
    }

    /// Attributes this modifier adds.
    pub fn delta(&self) -> &AttributeBag {
        &self.delta
    }

    pub fn delta_mut(&mut self) -> &mut AttributeBag {
        &mut self.delta
    }

    pub fn column_width(&self) -> Option<ColumnWidth> {
        self.column_width
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.delta.append_class(class);
        self
    }

    pub fn classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.delta.append_classes(classes);
        self
    }

    /// Adds the minimal class list for a responsive value (`col-12 col-md-6`).
    pub fn responsive_classes<T>(self, prefix: &str, values: &ResponsiveValues<T>) -> Self
    where
        T: Clone + PartialEq + fmt::Display,
    {
        self.classes(values.class_names(prefix))
    }

    pub fn remove_class(mut self, class: impl Into<String>) -> Self {
        self.removals.classes.push(class.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.delta.append_style(property, value);
        self
    }

    pub fn remove_style(mut self, property: impl Into<String>) -> Self {
        self.removals.styles.push(property.into());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.delta.set_attribute(name, value);
        self
    }

    pub fn remove_attribute(mut self, name: impl Into<String>) -> Self {
        self.removals.attributes.push(name.into());
        self
    }

    pub fn aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.delta.set_aria(name, value);
        self
    }

    pub fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.delta.set_data(name, value);
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.delta.set_identifier(identifier);
        self
    }

    pub fn on<I>(mut self, event: &str, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        self.delta.add_event(event, actions);
        self
    }

    /// Edits the attributes of a single wrapper element placed around the node.
    pub fn container<F>(mut self, edit: F) -> Self
    where
        F: FnOnce(&mut AttributeBag),
    {
        let mut container = self.current.container().cloned().unwrap_or_default();
        if let Some(pending) = self.delta.container() {
            container.merge(pending.clone());
        }
        edit(&mut container);
        self.delta.set_container(container);
        self
    }

    pub fn column_width_hint(mut self, width: ColumnWidth) -> Self {
        self.column_width = Some(width);
        self
    }
}
