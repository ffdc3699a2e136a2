//! Serialization of a bag into the attribute portion of a start tag.
//!
//! Attributes are written in a fixed order: `id`, `class`, `style`, custom attributes,
//! `aria-*`, `data-*`, then `on*` event handlers. Within each group, names are sorted. Every
//! attribute is preceded by a single space, so an empty bag renders as the empty string.

use crate::bag::AttributeBag;
use crate::escape::escape_attribute;
use itertools::Itertools;
use std::fmt;

impl fmt::Display for AttributeBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(identifier) = self.identifier() {
            write!(f, " id=\"{}\"", escape_attribute(identifier))?;
        }

        let classes = self.classes().join(" ");
        if !classes.is_empty() {
            write!(f, " class=\"{}\"", escape_attribute(&classes))?;
        }

        if !self.styles().is_empty() {
            let styles = self.styles().iter().join("; ");
            write!(f, " style=\"{}\"", escape_attribute(&styles))?;
        }

        for (name, value) in self.attributes() {
            write_attribute(f, "", name, value)?;
        }
        for (name, value) in self.aria() {
            write_attribute(f, "aria-", name, value)?;
        }
        for (name, value) in self.data() {
            write_attribute(f, "data-", name, value)?;
        }

        for (event, actions) in self.events() {
            let script = actions.iter().map(|action| action.compile()).join("; ");
            write!(f, " on{}=\"{}\"", event, escape_attribute(&script))?;
        }

        Ok(())
    }
}

fn write_attribute(f: &mut fmt::Formatter<'_>, prefix: &str, name: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        write!(f, " {prefix}{name}")
    } else {
        write!(f, " {prefix}{name}=\"{}\"", escape_attribute(value))
    }
}
