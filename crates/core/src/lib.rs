//! # trellis-core
//!
//! Composition and rendering of markup trees.
//!
//! - **node**: the closed set of node variants a tree is built from
//! - **registry**: pass-scoped attribute storage keyed by node identity
//! - **pipeline**: [`RenderPass`], the entry point for applying modifiers and rendering
//! - **optimizer**: the render-time rewrite that bakes attributes onto concrete tags
//! - **markup**: serialization of optimized trees
//!
//! ## Example
//!
//! ```
//! use trellis_core::{Element, RenderPass};
//!
//! let mut pass = RenderPass::new();
//! let node = pass.apply_modifier(Element::new("p").text("Hi"), |m| m.class("foo"));
//! let node = pass.apply_modifier(node, |m| m.class("bar").identifier("x"));
//! assert_eq!(pass.render(&node), r#"<p id="x" class="bar foo">Hi</p>"#);
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod markup;
pub mod modification;
pub mod node;
pub mod optimizer;
pub mod pipeline;
pub mod registry;

pub use trellis_attributes as attributes;
pub use trellis_types as types;

pub use config::RenderConfig;
pub use error::{ConfigError, RenderError};
pub use ids::NodeId;
pub use markup::{MarkupWriter, to_markup};
pub use modification::Modification;
pub use node::{Composite, Element, Fragment, Modified, Node, NodeKind, Text};
pub use optimizer::Optimizer;
pub use pipeline::{PassSummary, RenderPass};
pub use registry::AttributeRegistry;

pub use trellis_attributes::{Action, AttributeBag, Capabilities, InlineStyle};
pub use trellis_types::{Breakpoint, ColumnWidth, ResolvedBreakpoints, ResponsiveValues};
