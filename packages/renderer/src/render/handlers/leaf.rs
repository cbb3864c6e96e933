//! Leaf content handlers for tags that map to a single visual primitive.
//!
//! These handlers use only the element's trimmed text content. Several
//! tags share one handler value (text/time/date all render as plain
//! paragraphs); the sharing happens at registration, not through a type
//! hierarchy.

use roxmltree::Node;

use crate::error::{RenderError, Result};
use crate::render::handler::{RecurseFn, TagHandler};
use crate::render::node::{RenderNode, Tone};
use crate::render::types::{HandlerKind, RenderOptions};
use crate::xml::text_content;

/// Handler for plain paragraph tags (`text`, `time`, `date`).
pub struct TextHandler;

impl TagHandler for TextHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        Ok(RenderNode::Text(text_content(node)))
    }
}

/// Handler for `<head>` (large heading) elements.
pub struct HeadingHandler;

impl TagHandler for HeadingHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        Ok(RenderNode::Heading(text_content(node)))
    }
}

/// Handler for `<subhead>` elements.
pub struct SubHeadingHandler;

impl TagHandler for SubHeadingHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        Ok(RenderNode::SubHeading(text_content(node)))
    }
}

/// Handler for `<tag>` (inline badge) elements.
pub struct BadgeHandler;

impl TagHandler for BadgeHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        Ok(RenderNode::Badge {
            label: text_content(node),
            tone: Tone::Primary,
        })
    }
}

/// Handler for `<current>` elements.
///
/// The content is ignored; the tag itself marks an ongoing position.
pub struct CurrentHandler;

impl TagHandler for CurrentHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        _node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        Ok(RenderNode::Badge {
            label: "Current Position".to_string(),
            tone: Tone::Success,
        })
    }
}

/// Handler for `<link>` elements.
///
/// Content is a `label;URL` pair split on the first `;`, both sides
/// trimmed. Content without the separator is a structural error.
pub struct LinkHandler;

impl TagHandler for LinkHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        let content = text_content(node);
        let (label, href) = content
            .split_once(';')
            .ok_or_else(|| RenderError::MalformedLink {
                content: content.clone(),
            })?;

        Ok(RenderNode::LinkBadge {
            label: label.trim().to_string(),
            href: href.trim().to_string(),
        })
    }
}

/// Handler for `<progress>` elements with an integer value 0-100.
pub struct ProgressHandler;

impl TagHandler for ProgressHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        let content = text_content(node);
        let value = content
            .parse::<u8>()
            .ok()
            .filter(|value| *value <= 100)
            .ok_or_else(|| RenderError::InvalidProgress {
                value: content.clone(),
            })?;

        Ok(RenderNode::Progress { value })
    }
}

/// Handler for `<image>` elements; the text content is the source URL.
pub struct ImageHandler;

impl TagHandler for ImageHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Leaf
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        Ok(RenderNode::Image {
            src: text_content(node),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn render_leaf<H: TagHandler>(handler: &H, xml: &str) -> Result<RenderNode> {
        let doc = Document::parse(xml).unwrap();
        let options = RenderOptions::new();
        let recurse = |_: Node<'_, '_>| Ok(RenderNode::Empty);
        handler.render(doc.root_element(), &options, &recurse)
    }

    #[test]
    fn test_text_handler_trims() {
        let result = render_leaf(&TextHandler, "<text>  spaced out  </text>").unwrap();
        assert_eq!(result, RenderNode::Text("spaced out".to_string()));
    }

    #[test]
    fn test_heading_handlers() {
        let head = render_leaf(&HeadingHandler, "<head>Jane Doe</head>").unwrap();
        assert_eq!(head, RenderNode::Heading("Jane Doe".to_string()));

        let subhead = render_leaf(&SubHeadingHandler, "<subhead>Engineer</subhead>").unwrap();
        assert_eq!(subhead, RenderNode::SubHeading("Engineer".to_string()));
    }

    #[test]
    fn test_badge_handler() {
        let result = render_leaf(&BadgeHandler, "<tag>Rust</tag>").unwrap();
        assert_eq!(
            result,
            RenderNode::Badge {
                label: "Rust".to_string(),
                tone: Tone::Primary,
            }
        );
    }

    #[test]
    fn test_current_handler_ignores_content() {
        let result = render_leaf(&CurrentHandler, "<current>whatever</current>").unwrap();
        assert_eq!(
            result,
            RenderNode::Badge {
                label: "Current Position".to_string(),
                tone: Tone::Success,
            }
        );
    }

    #[test]
    fn test_link_handler_splits_on_separator() {
        let result =
            render_leaf(&LinkHandler, "<link>Example ; https://example.com</link>").unwrap();
        assert_eq!(
            result,
            RenderNode::LinkBadge {
                label: "Example".to_string(),
                href: "https://example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_link_handler_missing_separator_fails() {
        let result = render_leaf(&LinkHandler, "<link>NoSeparator</link>");
        assert!(matches!(
            result,
            Err(RenderError::MalformedLink { content }) if content == "NoSeparator"
        ));
    }

    #[test]
    fn test_progress_handler() {
        let result = render_leaf(&ProgressHandler, "<progress>85</progress>").unwrap();
        assert_eq!(result, RenderNode::Progress { value: 85 });
    }

    #[test]
    fn test_progress_handler_rejects_garbage() {
        assert!(render_leaf(&ProgressHandler, "<progress>high</progress>").is_err());
        assert!(render_leaf(&ProgressHandler, "<progress>120</progress>").is_err());
        assert!(render_leaf(&ProgressHandler, "<progress/>").is_err());
    }

    #[test]
    fn test_image_handler() {
        let result = render_leaf(&ImageHandler, "<image>https://example.com/me.jpg</image>")
            .unwrap();
        assert_eq!(
            result,
            RenderNode::Image {
                src: "https://example.com/me.jpg".to_string(),
            }
        );
    }
}
