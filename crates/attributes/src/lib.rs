//! The attribute payload carried by a single markup node.
//!
//! An [`AttributeBag`] accumulates everything modifiers attach to a node: identifier, classes,
//! inline styles, custom/ARIA/data attributes, event actions and an optional overlay for a
//! wrapping container. Bags merge with fixed, associative rules so that applying modifiers one
//! at a time yields the same result as merging their combined delta once.

pub mod bag;
pub mod capability;
pub mod escape;
pub mod event;
mod render;
pub mod style;

pub use bag::AttributeBag;
pub use capability::Capabilities;
pub use event::Action;
pub use style::InlineStyle;
