//! XML utility functions for navigating and extracting data from XZuFi DOM trees.
//!
//! XZuFi elements live in the [`XZUFI_NAMESPACE`]; the `code` children of
//! code list values are unqualified. Lookups therefore always state which of
//! the two they expect instead of matching on the local name alone.

use roxmltree::Node;

use crate::config::XZUFI_NAMESPACE;
use crate::error::{HarvesterError, Result};

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xzufi_harvester::xml::get_tag_name;
///
/// let xml = r#"<x:leistung xmlns:x="http://xoev.de/schemata/xzufi/2_2_0"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "leistung");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the qualified name of an element in Clark notation (`{namespace}local`).
///
/// Elements without a namespace are returned as their local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xzufi_harvester::xml::qualified_name;
///
/// let xml = r#"<x:schreibe xmlns:x="http://xoev.de/schemata/xzufi/2_2_0"><code/></x:schreibe>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
/// assert_eq!(
///     qualified_name(root),
///     "{http://xoev.de/schemata/xzufi/2_2_0}schreibe"
/// );
/// assert_eq!(qualified_name(root.first_element_child().unwrap()), "code");
/// ```
pub fn qualified_name(node: Node<'_, '_>) -> String {
    let name = node.tag_name();
    match name.namespace() {
        Some(ns) => format!("{{{ns}}}{}", name.name()),
        None => name.name().to_string(),
    }
}

/// Check if a node is the XZuFi element with the given local name.
pub fn is_xzufi_element(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(XZUFI_NAMESPACE)
        && get_tag_name(node) == tag
}

/// Find the first XZuFi child element with the given local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xzufi_harvester::xml::find_child;
///
/// let xml = r#"<x:a xmlns:x="http://xoev.de/schemata/xzufi/2_2_0"><x:id/><name/></x:a>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "id").is_some());
/// assert!(find_child(root, "name").is_none()); // unqualified
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_xzufi_element(*child, tag))
}

/// Find all XZuFi child elements with the given local name, in document order.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| is_xzufi_element(*child, tag))
}

/// Find the first child element without namespace with the given local name.
pub fn find_unqualified_child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| {
        child.is_element() && child.tag_name().namespace().is_none() && get_tag_name(*child) == tag
    })
}

/// Find a descendant XZuFi element matching a slash-separated path of local names.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xzufi_harvester::xml::find_by_path;
///
/// let xml = r#"<x:org xmlns:x="http://xoev.de/schemata/xzufi/2_2_0">
///     <x:name><x:name>Bürgeramt</x:name></x:name>
/// </x:org>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let name = find_by_path(doc.root_element(), "name/name").unwrap();
/// assert_eq!(name.text(), Some("Bürgeramt"));
/// ```
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    path.split('/')
        .try_fold(node, |current, part| find_child(current, part))
}

/// Find a required XZuFi element by path, failing with `MissingElement`.
///
/// # Arguments
/// * `node` - Element to search from
/// * `path` - Slash-separated path of local names
/// * `context` - Description of `node` for the error message
pub fn require_path<'a, 'input>(
    node: Node<'a, 'input>,
    path: &str,
    context: &str,
) -> Result<Node<'a, 'input>> {
    find_by_path(node, path).ok_or_else(|| HarvesterError::MissingElement {
        element: path.to_string(),
        context: context.to_string(),
    })
}

/// Get a required attribute, failing with `MissingAttribute`.
pub fn require_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name)
        .ok_or_else(|| HarvesterError::MissingAttribute {
            attribute: name.to_string(),
            element: qualified_name(node),
        })
}

/// Get the text content of a node exactly as it appears in the document.
///
/// # Returns
/// Untrimmed text content, or empty string if no text
pub fn get_raw_text(node: Node<'_, '_>) -> String {
    node.text().map(String::from).unwrap_or_default()
}

/// Get all element children of a node.
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Describe an element for error messages, e.g. `<leistung>`.
pub fn describe(node: Node<'_, '_>) -> String {
    format!("<{}>", get_tag_name(node))
}
