//! Column-grid container handler, also the fallback for unknown tags.

use roxmltree::Node;

use crate::config::parse_columns;
use crate::error::Result;
use crate::render::handler::{RecurseFn, TagHandler};
use crate::render::node::RenderNode;
use crate::render::types::{HandlerKind, RenderOptions};
use crate::xml::element_children;

/// Handler that lays its children out in a fixed-width column grid.
///
/// Children are rendered in document order, padded with empty
/// placeholders up to a multiple of the column count, and chunked into
/// rows. Padding keeps the last item of a partial row at normal width
/// instead of stretching across the remaining columns.
///
/// Registered under group tags with their default widths (`jobs` = 2,
/// `merits` = 3, `skills` = 4) and used with one column as the fallback
/// for any unrecognized tag.
pub struct ContainerHandler {
    columns: usize,
}

impl ContainerHandler {
    /// Create a container with the given default column count.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        debug_assert!(columns >= 1, "a container needs at least one column");
        Self { columns }
    }

    /// Column count for an element: the `columns` attribute override when
    /// present and enabled, the handler default otherwise.
    fn effective_columns(&self, node: Node<'_, '_>, options: &RenderOptions) -> Result<usize> {
        if !options.column_overrides {
            return Ok(self.columns);
        }
        match node.attribute("columns") {
            Some(raw) => parse_columns(raw),
            None => Ok(self.columns),
        }
    }
}

impl TagHandler for ContainerHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Container
    }

    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        options: &RenderOptions,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode> {
        let columns = self.effective_columns(node, options)?;

        let mut children: Vec<RenderNode> = Vec::new();
        for child in element_children(node) {
            children.push(recurse(child)?);
        }

        // Pad up to the next multiple of the column count.
        let missing = (columns - children.len() % columns) % columns;
        for _ in 0..missing {
            children.push(RenderNode::Empty);
        }

        let mut content: Vec<RenderNode> = Vec::new();

        if let Some(heading) = node.attribute("heading") {
            content.push(RenderNode::Heading(heading.to_string()));
        }

        for chunk in children.chunks(columns) {
            let cells = chunk.iter().cloned().map(RenderNode::column).collect();
            content.push(RenderNode::Row(cells));
            content.push(RenderNode::Empty);
        }

        Ok(RenderNode::Container(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn render_container(columns: usize, xml: &str) -> RenderNode {
        let doc = Document::parse(xml).unwrap();
        let options = RenderOptions::new();
        let recurse = |_: Node<'_, '_>| Ok(RenderNode::text("item"));
        ContainerHandler::new(columns)
            .render(doc.root_element(), &options, &recurse)
            .unwrap()
    }

    fn rows_of(node: &RenderNode) -> Vec<&Vec<RenderNode>> {
        let RenderNode::Container(content) = node else {
            panic!("expected container, got {node:?}");
        };
        content
            .iter()
            .filter_map(|child| match child {
                RenderNode::Row(cells) => Some(cells),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_three_children_two_columns_pads_one() {
        let result = render_container(2, "<jobs><job/><job/><job/></jobs>");
        let rows = rows_of(&result);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 2);

        // Last cell of the last row is the placeholder.
        let RenderNode::Column { children, .. } = &rows[1][1] else {
            panic!("expected column");
        };
        assert_eq!(children, &vec![RenderNode::Empty]);
    }

    #[test]
    fn test_exact_fit_adds_no_padding_row() {
        let result = render_container(2, "<jobs><job/><job/></jobs>");
        let rows = rows_of(&result);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_empty_container_has_no_rows() {
        let result = render_container(3, "<misc/>");
        assert!(rows_of(&result).is_empty());
    }

    #[test]
    fn test_heading_attribute_prepends_heading() {
        let result = render_container(1, r#"<jobs heading="Experience"><job/></jobs>"#);
        let RenderNode::Container(content) = &result else {
            panic!("expected container");
        };
        assert_eq!(
            content.first(),
            Some(&RenderNode::Heading("Experience".to_string()))
        );
    }

    #[test]
    fn test_columns_attribute_override() {
        let result = render_container(2, r#"<jobs columns="3"><job/><job/><job/></jobs>"#);
        let rows = rows_of(&result);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_columns_override_disabled() {
        let doc = Document::parse(r#"<jobs columns="3"><job/><job/><job/></jobs>"#).unwrap();
        let options = RenderOptions {
            column_overrides: false,
            ..RenderOptions::new()
        };
        let recurse = |_: Node<'_, '_>| Ok(RenderNode::text("item"));
        let result = ContainerHandler::new(2)
            .render(doc.root_element(), &options, &recurse)
            .unwrap();

        assert_eq!(rows_of(&result).len(), 2);
    }

    #[test]
    fn test_invalid_columns_attribute_is_an_error() {
        let doc = Document::parse(r#"<jobs columns="wide"><job/></jobs>"#).unwrap();
        let options = RenderOptions::new();
        let recurse = |_: Node<'_, '_>| Ok(RenderNode::text("item"));
        let result = ContainerHandler::new(2).render(doc.root_element(), &options, &recurse);
        assert!(result.is_err());
    }

    #[test]
    fn test_spacer_after_every_row() {
        let result = render_container(2, "<jobs><job/><job/><job/></jobs>");
        let RenderNode::Container(content) = &result else {
            panic!("expected container");
        };
        for pair in content.chunks(2) {
            assert!(matches!(pair[0], RenderNode::Row(_)));
            assert!(pair[1].is_empty_placeholder());
        }
    }
}
