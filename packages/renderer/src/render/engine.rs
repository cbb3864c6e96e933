//! Render engine that walks the document tree using the registry.

use roxmltree::{Document, Node};

use super::node::RenderNode;
use super::registry::HandlerRegistry;
use super::types::{RenderOptions, RootMode};
use crate::error::Result;
use crate::xml::{element_children, tag_name};

/// Engine that dispatches elements to their registered handlers.
///
/// The engine walks the XML tree and renders each element through the
/// handler registered for its tag. Elements with no handler are not an
/// error: they fall through to the container fallback with a diagnostic
/// notice, so foreign tags degrade into plain layout instead of killing
/// the page.
pub struct RenderEngine {
    registry: HandlerRegistry,
    options: RenderOptions,
}

impl RenderEngine {
    /// Create a new engine from a configured registry and options.
    #[must_use]
    pub fn new(registry: HandlerRegistry, options: RenderOptions) -> Self {
        Self { registry, options }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Render a single element tree recursively.
    ///
    /// Handler selection depends on the tag name only. Errors raised by a
    /// handler (malformed link content, missing contact fields) propagate
    /// up and abort the pass.
    pub fn render(&self, node: Node<'_, '_>) -> Result<RenderNode> {
        let tag = tag_name(node);

        let handler = match self.registry.handler_for(tag) {
            Some(handler) => handler,
            None => {
                tracing::warn!(tag = %tag, "no handler for element, rendering as generic container");
                self.registry.fallback()
            }
        };

        let recurse = |child: Node<'_, '_>| self.render(child);
        handler.render(node, &self.options, &recurse)
    }

    /// Render a whole document into page content.
    ///
    /// In `PerChild` mode each top-level child becomes one page section,
    /// in document order, with an empty spacer after each. In
    /// `SingleRoot` mode the root element is rendered as one tree.
    pub fn render_document(&self, doc: &Document<'_>) -> Result<Vec<RenderNode>> {
        match self.options.root_mode {
            RootMode::PerChild => {
                let mut sections = Vec::new();
                for child in element_children(doc.root_element()) {
                    sections.push(self.render(child)?);
                    sections.push(RenderNode::Empty);
                }
                Ok(sections)
            }
            RootMode::SingleRoot => Ok(vec![self.render(doc.root_element())?]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::handler::{RecurseFn, TagHandler};
    use crate::render::handlers::ContainerHandler;
    use crate::render::types::HandlerKind;
    use roxmltree::Document;

    struct FixedHandler {
        output: String,
    }

    impl TagHandler for FixedHandler {
        fn kind(&self) -> HandlerKind {
            HandlerKind::Leaf
        }

        fn render<'a, 'input>(
            &self,
            _node: Node<'a, 'input>,
            _options: &RenderOptions,
            _recurse: &RecurseFn<'a, 'input>,
        ) -> Result<RenderNode> {
            Ok(RenderNode::text(&self.output))
        }
    }

    fn engine_with_text_handler() -> RenderEngine {
        let mut registry = HandlerRegistry::new(ContainerHandler::new(1));
        registry.register(
            "text",
            FixedHandler {
                output: "hello".to_string(),
            },
        );
        RenderEngine::new(registry, RenderOptions::new())
    }

    #[test]
    fn test_render_with_handler() {
        let engine = engine_with_text_handler();
        assert!(engine.registry().has_handler("text"));

        let doc = Document::parse("<text/>").unwrap();
        let result = engine.render(doc.root_element()).unwrap();
        assert_eq!(result, RenderNode::Text("hello".to_string()));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_container() {
        let engine = engine_with_text_handler();
        let doc = Document::parse("<mystery><text/></mystery>").unwrap();

        let result = engine.render(doc.root_element()).unwrap();
        let RenderNode::Container(content) = result else {
            panic!("expected container fallback, got {result:?}");
        };
        // One row (single child at one column) plus its trailing spacer.
        assert_eq!(content.len(), 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let engine = engine_with_text_handler();
        let doc = Document::parse("<mystery><text/><text/></mystery>").unwrap();

        let first = engine.render(doc.root_element()).unwrap();
        let second = engine.render(doc.root_element()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_document_per_child() {
        let engine = engine_with_text_handler();
        let doc = Document::parse("<resume><text/><text/></resume>").unwrap();

        let sections = engine.render_document(&doc).unwrap();
        // Two sections, each followed by a spacer.
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0], RenderNode::Text("hello".to_string()));
        assert!(sections[1].is_empty_placeholder());
    }

    #[test]
    fn test_render_document_single_root() {
        let mut registry = HandlerRegistry::new(ContainerHandler::new(1));
        registry.register(
            "text",
            FixedHandler {
                output: "hello".to_string(),
            },
        );
        let options = RenderOptions {
            root_mode: RootMode::SingleRoot,
            ..RenderOptions::new()
        };
        let engine = RenderEngine::new(registry, options);

        let doc = Document::parse("<resume><text/><text/></resume>").unwrap();
        let sections = engine.render_document(&doc).unwrap();
        assert_eq!(sections.len(), 1);
        assert!(matches!(sections[0], RenderNode::Container(_)));
    }
}
