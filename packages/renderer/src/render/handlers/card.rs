//! Composite card handlers assembling partitioned children into layouts.

use roxmltree::Node;

use crate::error::Result;
use crate::render::handler::{RecurseFn, TagHandler};
use crate::render::node::RenderNode;
use crate::render::types::{HandlerKind, RenderOptions};
use crate::xml::{element_children, tag_name};

/// Tags that belong in a card header.
const HEADING_TAGS: &[&str] = &["head", "subhead"];

/// Tags that describe when an entry happened.
const DATE_TAGS: &[&str] = &["date", "time", "current"];

/// Union of the two sets above; the card body remainder is everything
/// not in this list.
const CARD_META_TAGS: &[&str] = &["head", "subhead", "date", "time", "current"];

/// Contact tags across both format variants.
const CONTACT_TAGS: &[&str] = &["number", "email", "address", "contact"];

/// Grid width of the author portrait column, out of 12.
const AUTHOR_IMAGE_WIDTH: u8 = 4;

/// Render the children whose tag is (or, inverted, is not) in `tags`.
///
/// Each child is rendered at most once across a partition because the
/// bucket tag sets are disjoint and the remainder inverts their union.
fn render_matching<'a, 'input>(
    node: Node<'a, 'input>,
    tags: &[&str],
    invert: bool,
    recurse: &RecurseFn<'a, 'input>,
) -> Result<Vec<RenderNode>> {
    let mut rendered = Vec::new();
    for child in element_children(node) {
        let selected = tags.contains(&tag_name(child));
        if selected != invert {
            rendered.push(recurse(child)?);
        }
    }
    Ok(rendered)
}

/// Handler for structured entries: `job`, `merit`, `skill`, and the
/// generic `card` tag.
///
/// Children are partitioned into heading-like, date-like, and remainder
/// buckets. The heading bucket becomes the card header; the body is the
/// date bucket, a separator when dates are present, then the remainder.
pub struct CardHandler;

impl TagHandler for CardHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Card
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        let header = render_matching(node, HEADING_TAGS, false, recurse)?;
        let mut body = render_matching(node, DATE_TAGS, false, recurse)?;
        if !body.is_empty() {
            body.push(RenderNode::Separator);
        }
        body.extend(render_matching(node, CARD_META_TAGS, true, recurse)?);

        Ok(RenderNode::Card { header, body })
    }
}

/// Handler for the `<author>` element.
///
/// Produces a two-column card: portrait on the left at a fixed relative
/// width, and on the right the headings, a separator, and a side-by-side
/// row of free text and contact entries.
pub struct AuthorHandler;

impl TagHandler for AuthorHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Card
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _options: &RenderOptions,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        let heading = render_matching(node, HEADING_TAGS, false, recurse)?;
        let image = render_matching(node, &["image"], false, recurse)?;
        let contact = render_matching(node, CONTACT_TAGS, false, recurse)?;
        let body = render_matching(node, &["text"], false, recurse)?;

        let mut detail = heading;
        detail.push(RenderNode::Separator);
        detail.push(RenderNode::Row(vec![
            RenderNode::Column {
                width: None,
                children: body,
            },
            RenderNode::Column {
                width: None,
                children: contact,
            },
        ]));

        Ok(RenderNode::Card {
            header: Vec::new(),
            body: vec![RenderNode::Row(vec![
                RenderNode::Column {
                    width: Some(AUTHOR_IMAGE_WIDTH),
                    children: image,
                },
                RenderNode::Column {
                    width: None,
                    children: detail,
                },
            ])],
        })
    }
}
