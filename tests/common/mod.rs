pub mod fixtures;

use trellis::{Document, DocumentError, ExecutorImpl, RenderConfig, SequentialExecutor};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Render every page of a JSON document with the default config, sequentially.
pub fn render_json(json: &str) -> Result<Vec<String>, DocumentError> {
    render_json_with_config(json, &RenderConfig::default())
}

pub fn render_json_with_config(
    json: &str,
    config: &RenderConfig,
) -> Result<Vec<String>, DocumentError> {
    let document = Document::from_json(json)?;
    let executor = ExecutorImpl::Sequential(SequentialExecutor::new());
    Ok(trellis::render_document(document, config, &executor))
}

/// Render a document that is expected to have exactly one page.
pub fn render_single_page(json: &str) -> Result<String, DocumentError> {
    let mut pages = render_json(json)?;
    assert_eq!(pages.len(), 1, "expected a single page");
    Ok(pages.remove(0))
}
