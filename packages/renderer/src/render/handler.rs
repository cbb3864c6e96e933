//! Tag handler trait definition.

use roxmltree::Node;

use super::node::RenderNode;
use super::types::{HandlerKind, RenderOptions};
use crate::error::Result;

/// Function type for recursive rendering of child elements.
pub type RecurseFn<'a, 'input> = dyn Fn(Node<'a, 'input>) -> Result<RenderNode> + 'a;

/// Trait for tag handlers.
///
/// A handler turns one element into one `RenderNode`. It receives a
/// `recurse` function for child elements; errors from children propagate
/// through `?` and abort the render pass.
pub trait TagHandler: Send + Sync {
    /// Return the classification of this handler.
    fn kind(&self) -> HandlerKind;

    /// Render the element.
    ///
    /// # Arguments
    /// * `node` - The XML element to render
    /// * `options` - Startup render configuration
    /// * `recurse` - Function to call for recursive child rendering
    fn render<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        options: &RenderOptions,
        recurse: &RecurseFn<'a, 'input>,
    ) -> Result<RenderNode>;
}
