//! Parse vector markup into an [`SvgElement`] tree

use roxmltree::{Document, Node, ParsingOptions};

use super::tree::{SvgElement, SvgNode};

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse a complete markup document and return its root element.
///
/// Namespace prefixes are kept on element and attribute names, and each
/// element re-declares only the namespaces its parent does not. Comments,
/// processing instructions and whitespace-only text are dropped.
pub fn parse_fragment(text: &str) -> Result<SvgElement, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;
    Ok(convert_element(doc.root_element()))
}

fn convert_element(node: Node) -> SvgElement {
    let mut element = SvgElement::new(qualified_name(
        node,
        node.tag_name().namespace(),
        node.tag_name().name(),
    ));

    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();

    for ns in node.namespaces() {
        if ns.uri() == XML_NS || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        let attr = match ns.name() {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        element.attributes.push((attr, ns.uri().to_string()));
    }

    for attr in node.attributes() {
        let name = qualified_name(node, attr.namespace(), attr.name());
        element.attributes.push((name, attr.value().to_string()));
    }

    for child in node.children() {
        if child.is_element() {
            element.push_element(convert_element(child));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                if !text.trim().is_empty() {
                    element.children.push(SvgNode::Text(text.to_string()));
                }
            }
        }
    }

    element
}

fn qualified_name(node: Node, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}
