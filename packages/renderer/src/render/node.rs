//! The abstract visual tree produced by rendering.
//!
//! A `RenderNode` is a placeholder for a visual element; it carries no
//! markup of its own. The `html` module serializes the tree for the
//! browser, and the server exposes it as JSON under `/layout.json`.

use serde::Serialize;

/// Color tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Primary,
    Success,
}

impl Tone {
    /// Bootstrap background class for this tone.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Primary => "bg-primary",
            Self::Success => "bg-success",
        }
    }
}

/// One abstract visual element in the rendered page tree.
///
/// Serialized as `{"type": ..., "props": ...}`, the shape `/layout.json`
/// hands to the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "props", rename_all = "snake_case")]
pub enum RenderNode {
    /// Empty placeholder, also used as vertical spacing between rows.
    Empty,
    /// Plain paragraph of text.
    Text(String),
    /// Large heading.
    Heading(String),
    /// Sub-heading.
    SubHeading(String),
    /// Inline badge.
    Badge { label: String, tone: Tone },
    /// Badge that links to an external URL.
    LinkBadge { label: String, href: String },
    /// Progress indicator, 0-100.
    Progress { value: u8 },
    /// Image; `src` is a URL.
    Image { src: String },
    /// Two-part button group: a solid label button and an outline value
    /// button, the value becoming an external link when `href` is set.
    ButtonPair {
        label: String,
        value: String,
        href: Option<String>,
    },
    /// Horizontal separator line.
    Separator,
    /// Horizontal layout row.
    Row(Vec<RenderNode>),
    /// Column within a row. `width` is a 12-grid span; `None` means
    /// equal share of the remaining space.
    Column {
        width: Option<u8>,
        children: Vec<RenderNode>,
    },
    /// Card with an optional header section and a body.
    Card {
        header: Vec<RenderNode>,
        body: Vec<RenderNode>,
    },
    /// Generic block container.
    Container(Vec<RenderNode>),
}

impl RenderNode {
    /// Paragraph node from any string-ish value.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Wrap a node in an equal-width column.
    #[must_use]
    pub fn column(child: RenderNode) -> Self {
        Self::Column {
            width: None,
            children: vec![child],
        }
    }

    /// True for the `Empty` placeholder.
    #[must_use]
    pub fn is_empty_placeholder(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
