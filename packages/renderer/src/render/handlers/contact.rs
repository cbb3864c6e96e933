//! Contact handlers: label/value button pairs for ways to reach the author.
//!
//! The document format has two contact variants. The per-kind variant
//! uses one tag per channel (`<number>`, `<email>`, `<address>`); the
//! unified variant uses a single `<contact>` tag with named sub-fields.
//! Which set is registered depends on `ContactStyle`.

use roxmltree::Node;

use crate::error::{RenderError, Result};
use crate::render::handler::{RecurseFn, TagHandler};
use crate::render::node::RenderNode;
use crate::render::types::{HandlerKind, RenderOptions};
use crate::xml::{find_child, text_content};

/// Uppercase the first character, for turning a tag or field name into a
/// button label ("email" -> "Email").
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Per-kind contact handler with a fixed label and optional URI scheme.
///
/// Registered once per channel: `number` gets `tel:`, `email` gets
/// `mailto:`, `address` gets no scheme and therefore no link.
pub struct ContactHandler {
    label: &'static str,
    scheme: Option<&'static str>,
}

impl ContactHandler {
    /// Create a contact handler for one channel.
    #[must_use]
    pub const fn new(label: &'static str, scheme: Option<&'static str>) -> Self {
        Self { label, scheme }
    }
}

impl TagHandler for ContactHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Contact
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        let value = text_content(node);
        let href = self.scheme.map(|scheme| format!("{scheme}{value}"));

        Ok(RenderNode::ButtonPair {
            label: self.label.to_string(),
            value,
            href,
        })
    }
}

/// Unified contact handler reading `type`/`text`/`link` sub-fields.
///
/// `type` and `text` are required; `link` optionally turns the value
/// button into an external link.
pub struct ContactCardHandler;

impl ContactCardHandler {
    fn required_field(node: Node<'_, '_>, field: &'static str) -> Result<String> {
        find_child(node, field)
            .map(text_content)
            .filter(|value| !value.is_empty())
            .ok_or(RenderError::MissingContactField { field })
    }
}

impl TagHandler for ContactCardHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Contact
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        let label = Self::required_field(node, "type")?;
        let value = Self::required_field(node, "text")?;
        let href = find_child(node, "link")
            .map(text_content)
            .filter(|link| !link.is_empty());

        Ok(RenderNode::ButtonPair {
            label: capitalize(&label),
            value,
            href,
        })
    }
}
