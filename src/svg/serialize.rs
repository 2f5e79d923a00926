//! Canonical string form of a vector tree
//!
//! Attribute and child order are written exactly as stored; the serializer
//! never reorders anything, so identical trees give identical output.

use crate::compose::MergedDocument;

use super::tree::{SvgElement, SvgNode};
use super::OutputConfig;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serialize a composed document
pub fn serialize(doc: &MergedDocument, config: &OutputConfig) -> String {
    serialize_element(doc.root(), config)
}

/// Serialize any element as a document root
pub fn serialize_element(root: &SvgElement, config: &OutputConfig) -> String {
    let mut out = String::new();
    if config.standalone {
        out.push_str(DECLARATION);
        if config.pretty_print {
            out.push('\n');
        }
    }
    write_element(&mut out, root, 0, config.pretty_print);
    out
}

fn write_element(out: &mut String, element: &SvgElement, depth: usize, pretty: bool) {
    if pretty {
        out.push_str(&"  ".repeat(depth));
    }
    write_open_tag(out, element);

    if element.children.is_empty() {
        out.push_str("/>");
        if pretty {
            out.push('\n');
        }
        return;
    }
    out.push('>');

    // Mixed content is written inline so text is not altered by indentation
    let has_text = element
        .children
        .iter()
        .any(|c| matches!(c, SvgNode::Text(_)));

    if has_text || !pretty {
        for child in &element.children {
            write_inline(out, child);
        }
    } else {
        out.push('\n');
        for child in &element.children {
            if let SvgNode::Element(e) = child {
                write_element(out, e, depth + 1, pretty);
            }
        }
        out.push_str(&"  ".repeat(depth));
    }

    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
    if pretty {
        out.push('\n');
    }
}

fn write_inline(out: &mut String, node: &SvgNode) {
    match node {
        SvgNode::Text(text) => out.push_str(&escape_xml(text)),
        SvgNode::Element(element) => {
            write_open_tag(out, element);
            if element.children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &element.children {
                write_inline(out, child);
            }
            out.push_str("</");
            out.push_str(&element.name);
            out.push('>');
        }
    }
}

fn write_open_tag(out: &mut String, element: &SvgElement) {
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        out.push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
