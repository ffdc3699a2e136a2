use crate::capability::Capabilities;
use crate::escape::is_valid_name;
use crate::event::{Action, normalize_event_name};
use crate::style::InlineStyle;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const ARIA_PREFIX: &str = "aria-";
const DATA_PREFIX: &str = "data-";

/// Everything that can be attached to one markup node.
///
/// All mutation goes through methods that reject malformed input (empty class names,
/// empty style values, unquotable attribute names), so a bag can always be rendered.
///
/// Merging follows fixed rules:
///
/// | field | rule |
/// |---|---|
/// | identifier | the other bag's, if set |
/// | classes | union |
/// | styles | appended; a repeated property keeps its first position and takes the newest value |
/// | attributes, aria, data | right-biased overwrite by name |
/// | events | action lists concatenated per event name |
/// | container | the other bag's, if set |
///
/// Every rule is associative, so merging deltas one at a time is the same as merging their
/// fold once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BagRepr")]
pub struct AttributeBag {
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    classes: BTreeSet<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    styles: Vec<InlineStyle>,
    #[serde(rename = "attributes", skip_serializing_if = "BTreeMap::is_empty")]
    custom: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    aria: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    data: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    events: BTreeMap<String, Vec<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container: Option<Box<AttributeBag>>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Identifier ---

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Sets the node identifier. Blank identifiers are ignored.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        let identifier = identifier.into();
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return;
        }
        self.identifier = Some(trimmed.to_string());
    }

    // --- Classes ---

    /// Classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Adds classes, skipping blank names. Already-present classes are left alone.
    ///
    /// Each item may hold several whitespace-separated names (`"btn btn-primary"`).
    pub fn append_classes<I>(&mut self, classes: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for item in classes {
            for class in item.as_ref().split_whitespace() {
                if !self.classes.contains(class) {
                    self.classes.insert(class.to_string());
                }
            }
        }
    }

    pub fn append_class(&mut self, class: impl AsRef<str>) {
        self.append_classes([class]);
    }

    pub fn remove_classes<I>(&mut self, classes: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for item in classes {
            for class in item.as_ref().split_whitespace() {
                self.classes.remove(class);
            }
        }
    }

    // --- Styles ---

    /// Style declarations in first-written order, one per property.
    pub fn styles(&self) -> &[InlineStyle] {
        &self.styles
    }

    /// The current value of `property`.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|style| style.property == property)
            .map(|style| style.value.as_str())
    }

    /// Writes a style declaration.
    ///
    /// An empty value is a no-op. Re-writing a property replaces its value in place.
    /// Invalid property names and values that would end the declaration early are ignored.
    pub fn append_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        let (property, value) = (property.trim(), value.trim());
        if value.is_empty() {
            return;
        }
        if !is_valid_name(property) || property.contains([':', ';']) {
            log::warn!("Ignoring style value '{}' for invalid property '{}'.", value, property);
            return;
        }
        if value.contains(';') {
            log::warn!("Ignoring value '{}' for style '{}': it contains ';'.", value, property);
            return;
        }

        match self.styles.iter_mut().find(|style| style.property == property) {
            Some(existing) => existing.value = value.to_string(),
            None => self.styles.push(InlineStyle::new(property, value)),
        }
    }

    pub fn append_styles<I>(&mut self, styles: I)
    where
        I: IntoIterator<Item = InlineStyle>,
    {
        for style in styles {
            self.append_style(style.property, style.value);
        }
    }

    pub fn remove_styles<I>(&mut self, properties: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for property in properties {
            let property = property.as_ref();
            self.styles.retain(|style| style.property != property);
        }
    }

    // --- Custom attributes ---

    /// Custom attributes, sorted by name.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.custom
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.custom.get(name).map(String::as_str)
    }

    /// Sets a custom attribute. An empty value renders as a bare boolean attribute.
    ///
    /// `id`, `class` and `style` are routed to their dedicated fields, and `aria-*`/`data-*`
    /// names to their namespaces, so that no attribute is ever emitted twice.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let name = name.trim();
        let value = value.into();

        if !is_valid_name(name) {
            log::warn!("Ignoring attribute with invalid name '{}'.", name);
            return;
        }

        match name {
            "id" => self.set_identifier(value),
            "class" => self.append_classes(value.split_whitespace()),
            "style" => self.append_styles(InlineStyle::parse_declarations(&value)),
            _ if name.starts_with(ARIA_PREFIX) => self.set_aria(name, value),
            _ if name.starts_with(DATA_PREFIX) => self.set_data(name, value),
            _ => {
                self.custom.insert(name.to_string(), value);
            }
        }
    }

    /// Removes attributes by exact name, routed the same way as [`AttributeBag::set_attribute`]:
    /// `id`, `class` and `style` clear their whole field, `aria-*` and `data-*` names remove
    /// from their namespaces.
    pub fn remove_attributes<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().trim();
            match name {
                "id" => {
                    self.identifier = None;
                    continue;
                }
                "class" => {
                    self.classes.clear();
                    continue;
                }
                "style" => {
                    self.styles.clear();
                    continue;
                }
                _ => {}
            }
            if self.custom.remove(name).is_some() {
                continue;
            }
            if let Some(stripped) = name.strip_prefix(ARIA_PREFIX) {
                self.aria.remove(stripped);
            } else if let Some(stripped) = name.strip_prefix(DATA_PREFIX) {
                self.data.remove(stripped);
            }
        }
    }

    // --- ARIA & data ---

    /// ARIA attributes keyed without their `aria-` prefix.
    pub fn aria(&self) -> &BTreeMap<String, String> {
        &self.aria
    }

    /// Sets an ARIA attribute; `name` may include the `aria-` prefix. Empty values are ignored.
    pub fn set_aria(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        if let Some(name) = namespaced_key(&name.into(), ARIA_PREFIX) {
            self.aria.insert(name, value);
        }
    }

    /// Data attributes keyed without their `data-` prefix.
    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    /// Sets a data attribute; `name` may include the `data-` prefix.
    pub fn set_data(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if let Some(name) = namespaced_key(&name.into(), DATA_PREFIX) {
            self.data.insert(name, value.into());
        }
    }

    // --- Events ---

    /// Event actions keyed by lowercase event name (`click`, not `onclick`).
    pub fn events(&self) -> &BTreeMap<String, Vec<Action>> {
        &self.events
    }

    /// Appends actions to an event, after any actions already registered for it.
    pub fn add_event<I>(&mut self, name: &str, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        let name = normalize_event_name(name);
        if !is_valid_name(&name) {
            log::warn!("Ignoring event with invalid name '{}'.", name);
            return;
        }
        let mut actions = actions.into_iter().peekable();
        if actions.peek().is_none() {
            return;
        }
        self.events.entry(name).or_default().extend(actions);
    }

    // --- Container overlay ---

    /// Attributes destined for a wrapper element around the node rather than the node itself.
    pub fn container(&self) -> Option<&AttributeBag> {
        self.container.as_deref()
    }

    pub fn container_mut(&mut self) -> &mut AttributeBag {
        self.container.get_or_insert_default()
    }

    pub fn set_container(&mut self, container: AttributeBag) {
        self.container = Some(Box::new(container));
    }

    /// Detaches the container overlay. Empty overlays are dropped.
    pub fn take_container(&mut self) -> Option<AttributeBag> {
        self.container
            .take()
            .map(|container| *container)
            .filter(|container| !container.is_empty())
    }

    // --- Merging ---

    /// Merges `other` into `self`; `other` wins wherever the rules pick a single value.
    pub fn merge(&mut self, other: AttributeBag) {
        let AttributeBag {
            identifier,
            classes,
            styles,
            custom,
            aria,
            data,
            events,
            container,
        } = other;

        if identifier.is_some() {
            self.identifier = identifier;
        }
        self.classes.extend(classes);
        self.append_styles(styles);
        self.custom.extend(custom);
        self.aria.extend(aria);
        self.data.extend(data);
        for (name, actions) in events {
            self.events.entry(name).or_default().extend(actions);
        }
        if container.is_some() {
            self.container = container;
        }
    }

    pub fn merged(mut self, other: AttributeBag) -> Self {
        self.merge(other);
        self
    }

    // --- Queries ---

    /// True when the node's own tag would render no attributes, ignoring the container overlay.
    pub fn has_no_own_attributes(&self) -> bool {
        self.identifier.is_none()
            && self.classes.is_empty()
            && self.styles.is_empty()
            && self.custom.is_empty()
            && self.aria.is_empty()
            && self.data.is_empty()
            && self.events.is_empty()
    }

    /// True when the bag renders nothing at all, container overlay included.
    pub fn is_empty(&self) -> bool {
        self.has_no_own_attributes() && self.container.as_ref().is_none_or(|c| c.is_empty())
    }

    /// What a node must be able to carry to hold this bag's own attributes.
    pub fn required_capabilities(&self) -> Capabilities {
        let mut required = Capabilities::NONE;
        if !self.classes.is_empty() {
            required |= Capabilities::CLASSES;
        }
        if !self.styles.is_empty() {
            required |= Capabilities::STYLES;
        }
        if !self.events.is_empty() {
            required |= Capabilities::EVENTS;
        }
        if self.identifier.is_some()
            || !self.custom.is_empty()
            || !self.aria.is_empty()
            || !self.data.is_empty()
        {
            required |= Capabilities::ATTRIBUTES;
        }
        required
    }
}

fn namespaced_key(name: &str, prefix: &str) -> Option<String> {
    let name = name.trim();
    let key = name.strip_prefix(prefix).unwrap_or(name);
    if !is_valid_name(key) {
        log::warn!("Ignoring {}* attribute with invalid name '{}'.", prefix, name);
        return None;
    }
    Some(key.to_string())
}

/// Wire shape of a bag. Deserialized bags are rebuilt through the validating setters.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct BagRepr {
    identifier: Option<String>,
    classes: Vec<String>,
    styles: Vec<InlineStyle>,
    attributes: BTreeMap<String, String>,
    aria: BTreeMap<String, String>,
    data: BTreeMap<String, String>,
    events: BTreeMap<String, Vec<Action>>,
    container: Option<Box<AttributeBag>>,
}

impl From<BagRepr> for AttributeBag {
    fn from(repr: BagRepr) -> Self {
        let mut bag = AttributeBag::new();
        if let Some(identifier) = repr.identifier {
            bag.set_identifier(identifier);
        }
        bag.append_classes(repr.classes);
        bag.append_styles(repr.styles);
        for (name, value) in repr.attributes {
            bag.set_attribute(name, value);
        }
        for (name, value) in repr.aria {
            bag.set_aria(name, value);
        }
        for (name, value) in repr.data {
            bag.set_data(name, value);
        }
        for (name, actions) in repr.events {
            bag.add_event(&name, actions);
        }
        bag.container = repr.container;
        bag
    }
}
