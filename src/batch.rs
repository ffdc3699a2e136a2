//! Rendering many independent compositions, one [`RenderPass`] each.
//!
//! Identities are only meaningful inside the pass that created them, so a registry is never
//! shared between items. Any executor may therefore run items concurrently.

use crate::document::{Document, DocumentNode};
use crate::executor::{Executor, ExecutorImpl};
use trellis_core::{Node, RenderConfig, RenderPass};

/// Builds one item's tree inside the pass it will be rendered by.
pub trait Compose: Send {
    fn compose(&self, pass: &mut RenderPass) -> Node;
}

impl Compose for DocumentNode {
    fn compose(&self, pass: &mut RenderPass) -> Node {
        self.build(pass)
    }
}

impl<F> Compose for F
where
    F: Fn(&mut RenderPass) -> Node + Send,
{
    fn compose(&self, pass: &mut RenderPass) -> Node {
        self(pass)
    }
}

/// Renders every item in its own pass. Output order matches input order.
pub fn render_batch<C, E>(items: Vec<C>, config: &RenderConfig, executor: &E) -> Vec<String>
where
    C: Compose,
    E: Executor,
{
    log::debug!(
        "Rendering {} items with {} (parallelism {})",
        items.len(),
        executor.name(),
        executor.parallelism()
    );
    executor.execute_all(items, |item| {
        let mut pass = RenderPass::with_config(config.clone());
        let node = item.compose(&mut pass);
        let markup = pass.render(&node);
        pass.finish();
        markup
    })
}

/// Renders every page of `document`.
pub fn render_document(
    document: Document,
    config: &RenderConfig,
    executor: &ExecutorImpl,
) -> Vec<String> {
    render_batch(document.pages, config, executor)
}
