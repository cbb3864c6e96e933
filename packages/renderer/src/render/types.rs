//! Types for the handler registry system.

/// Classification of handler types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// One tag, one visual primitive (text, head, tag, image, ...).
    Leaf,
    /// Contact entries rendered as a label/value button pair.
    Contact,
    /// Composite entries assembled from partitioned children (job, author).
    Card,
    /// Column-grid container; also the fallback for unknown tags.
    Container,
}

/// How contact information is expressed in the document.
///
/// The document format has two variants here; both are supported as
/// configurations of the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ContactStyle {
    /// One tag per contact kind: `<number>`, `<email>`, `<address>`.
    #[default]
    PerKind,
    /// A single `<contact>` tag with `type`/`text`/`link` sub-fields.
    Unified,
}

/// How the document root is turned into page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RootMode {
    /// Render each top-level child in document order, with a spacer
    /// after each.
    #[default]
    PerChild,
    /// Render the root element itself through the container path.
    SingleRoot,
}

/// Startup configuration passed into the render entry point.
///
/// There is deliberately no ambient global: everything a handler may
/// consult travels through this struct.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Contact format variant to accept.
    pub contact_style: ContactStyle,
    /// Document root handling.
    pub root_mode: RootMode,
    /// Honor per-element `columns` attribute overrides.
    pub column_overrides: bool,
}

impl RenderOptions {
    /// Default configuration: per-kind contacts, per-child root
    /// iteration, attribute overrides honored.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contact_style: ContactStyle::PerKind,
            root_mode: RootMode::PerChild,
            column_overrides: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}
