//! # trellis
//!
//! A markup composition engine. Elements are composed into trees, chained modifiers attach
//! classes, styles, attributes and events to them, and a render pass bakes everything onto
//! concrete tags while eliding wrappers that carry nothing.
//!
//! The engine lives in the workspace crates, re-exported here:
//!
//! - [`types`]: breakpoints, responsive values and column widths
//! - [`attributes`]: attribute bags and their markup serialization
//! - [`engine`]: nodes, the registry, the modifier pipeline, the optimizer
//!
//! This crate adds a JSON document format, batch rendering of independent passes and the
//! `trellis` binary.

pub use trellis_attributes as attributes;
pub use trellis_core as engine;
pub use trellis_types as types;

pub mod batch;
pub mod document;
pub mod error;
pub mod executor;

pub use batch::{Compose, render_batch, render_document};
pub use document::{Document, DocumentNode, ModifierSpec, NodeSpec};
pub use error::DocumentError;
pub use executor::{Executor, ExecutorImpl, SequentialExecutor};

#[cfg(feature = "rayon")]
pub use executor::RayonExecutor;

pub use trellis_core::{
    Action, AttributeBag, Breakpoint, ColumnWidth, Element, Modification, Node, NodeId,
    PassSummary, RenderConfig, RenderPass, ResponsiveValues,
};
