//! XML utility functions for navigating resume documents.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use vitae_renderer::xml::tag_name;
///
/// let doc = Document::parse("<resume><head>Jane</head></resume>").unwrap();
/// let head = doc.root_element().first_element_child().unwrap();
/// assert_eq!(tag_name(head), "head");
/// ```
pub fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use vitae_renderer::xml::find_child;
///
/// let doc = Document::parse("<contact><type>Email</type><text>a@b.c</text></contact>").unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "type").is_some());
/// assert!(find_child(root, "link").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && tag_name(*child) == tag)
}

/// Get all element children of a node, in document order.
///
/// Excludes text nodes, comments, and processing instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the trimmed text content of a node.
///
/// Returns an empty string for elements without text.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
