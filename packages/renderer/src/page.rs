//! Page assembly: from an XML document to renderable page content.

use std::fs;
use std::path::Path;

use roxmltree::Document;
use serde::Serialize;

use crate::error::Result;
use crate::render::{create_resume_registry, RenderEngine, RenderNode, RenderOptions};

/// The rendered page: an ordered list of section trees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Page content in document order.
    pub body: Vec<RenderNode>,
}

impl Page {
    /// Number of non-spacer top-level sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.body
            .iter()
            .filter(|node| !node.is_empty_placeholder())
            .count()
    }
}

/// Render an XML document string into a page.
///
/// The registry is built from `options`, the document parsed once, and
/// the tree folded in a single pass. Any structural error aborts the
/// whole render.
///
/// # Examples
/// ```
/// use vitae_renderer::page::build_page;
/// use vitae_renderer::render::RenderOptions;
///
/// let page = build_page("<resume><head>Jane Doe</head></resume>", &RenderOptions::new()).unwrap();
/// assert_eq!(page.section_count(), 1);
/// ```
pub fn build_page(xml: &str, options: &RenderOptions) -> Result<Page> {
    let doc = Document::parse(xml)?;
    let registry = create_resume_registry(options);
    let engine = RenderEngine::new(registry, options.clone());

    let body = engine.render_document(&doc)?;
    Ok(Page { body })
}

/// Read, parse, and render a document from disk.
///
/// The file is read to completion before any traversal begins; nothing
/// is held open afterwards.
pub fn render_file(path: &Path, options: &RenderOptions) -> Result<Page> {
    let xml = fs::read_to_string(path)?;
    build_page(&xml, options)
}
