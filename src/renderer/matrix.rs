//! Code matrix to vector fragment

use crate::layout::VectorFragment;
use crate::matrix::CodeMatrix;
use crate::params::Polarity;
use crate::svg::{SvgElement, SVG_NS};

/// Render every "on" module as a 1x1 square on a transparent background.
///
/// Origin is top-left and squares are unscaled; scaling is left to layout.
/// `matrix` must be at least `width` x `height`.
pub fn render_matrix(
    matrix: &CodeMatrix,
    width: usize,
    height: usize,
    polarity: Polarity,
) -> VectorFragment {
    let mut root = SvgElement::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("width", width)
        .with_attr("height", height)
        .with_attr("viewBox", format!("0 0 {} {}", width, height));

    root.push_element(
        SvgElement::new("rect")
            .with_attr("width", "100%")
            .with_attr("height", "100%")
            .with_attr("fill", "transparent"),
    );

    let fill = polarity.fill();
    for y in 0..height {
        for x in 0..width {
            if matrix.get(x, y) {
                root.push_element(
                    SvgElement::new("rect")
                        .with_attr("x", x)
                        .with_attr("y", y)
                        .with_attr("width", 1)
                        .with_attr("height", 1)
                        .with_attr("fill", fill),
                );
            }
        }
    }

    VectorFragment::from_parts(root, width as f32, height as f32)
}
