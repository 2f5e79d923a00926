//! Merge the placed code and logo fragments into one document

use crate::layout::{Layout, Point, Size, VectorFragment};
use crate::params::Orientation;
use crate::svg::{SvgElement, SVG_NS};

/// A composed document: one root sized to the canvas with two positioned
/// child fragments
#[derive(Debug, Clone, PartialEq)]
pub struct MergedDocument {
    root: SvgElement,
}

impl MergedDocument {
    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    /// The imported fragments in document order
    pub fn fragments(&self) -> impl Iterator<Item = &SvgElement> {
        self.root.elements()
    }
}

/// Build the merged document from a computed layout.
///
/// Children are imported logo-then-code for vertical layouts and
/// code-then-logo for horizontal ones, each with its `x`/`y` offset.
pub fn compose(layout: Layout) -> MergedDocument {
    let Layout {
        code,
        logo,
        placement,
    } = layout;

    let mut root = canvas_root(placement.canvas);

    match placement.orientation {
        Orientation::Vertical => {
            root.push_element(import(logo, placement.logo));
            root.push_element(import(code, placement.code));
        }
        Orientation::Horizontal => {
            root.push_element(import(code, placement.code));
            root.push_element(import(logo, placement.logo));
        }
    }

    MergedDocument { root }
}

fn canvas_root(canvas: Size) -> SvgElement {
    SvgElement::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("width", canvas.width)
        .with_attr("height", canvas.height)
        .with_attr("viewBox", format!("0 0 {} {}", canvas.width, canvas.height))
}

fn import(fragment: VectorFragment, at: Point) -> SvgElement {
    let mut element = fragment.into_element();
    // The default namespace is inherited from the new root
    if element.attr("xmlns") == Some(SVG_NS) {
        element.remove_attr("xmlns");
    }
    element.set_attr("x", at.x);
    element.set_attr("y", at.y);
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::svg::{serialize, OutputConfig};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn fragment(id: &str, width: u32, height: u32) -> VectorFragment {
        VectorFragment::from_element(
            SvgElement::new("svg")
                .with_attr("xmlns", SVG_NS)
                .with_attr("id", id)
                .with_attr("width", width)
                .with_attr("height", height),
        )
        .unwrap()
    }

    fn ids(doc: &MergedDocument) -> Vec<&str> {
        doc.fragments().filter_map(|f| f.attr("id")).collect()
    }

    #[test]
    fn test_vertical_order_logo_first() {
        let layout = compute_layout(
            &fragment("code", 41, 41),
            &fragment("logo", 41, 20),
            Orientation::Vertical,
            1.0,
            4.0,
        );
        let doc = compose(layout);
        assert_eq!(ids(&doc), vec!["logo", "code"]);
    }

    #[test]
    fn test_horizontal_order_code_first() {
        let layout = compute_layout(
            &fragment("code", 41, 41),
            &fragment("logo", 41, 41),
            Orientation::Horizontal,
            1.0,
            4.0,
        );
        let doc = compose(layout);
        assert_eq!(ids(&doc), vec!["code", "logo"]);

        let root = doc.root();
        assert_eq!(root.attr("xmlns"), Some(SVG_NS));
        assert_eq!(root.attr("width"), Some("87.2"));
        assert_eq!(root.attr("height"), Some("46.2"));
    }

    #[test]
    fn test_imported_fragments_drop_redundant_namespace() {
        let layout = compute_layout(
            &fragment("code", 41, 41),
            &fragment("logo", 41, 20),
            Orientation::Vertical,
            1.0,
            4.0,
        );
        let doc = compose(layout);
        assert!(doc.fragments().all(|f| f.attr("xmlns").is_none()));
    }

    #[test]
    fn test_serialized_horizontal_document() {
        let layout = compute_layout(
            &fragment("code", 41, 41),
            &fragment("logo", 41, 41),
            Orientation::Horizontal,
            1.0,
            4.0,
        );
        let out = serialize(&compose(layout), &OutputConfig::default());
        assert_snapshot!(out.trim_end(), @r###"
        <?xml version="1.0" encoding="UTF-8"?>
        <svg xmlns="http://www.w3.org/2000/svg" width="87.2" height="46.2" viewBox="0 0 87.2 46.2">
          <svg id="code" width="41" height="41" x="2.6" y="2.6"/>
          <svg id="logo" width="41" height="41" x="43.6" y="2.6"/>
        </svg>
        "###);
    }
}
