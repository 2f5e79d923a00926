//! Geometry checks on composed output: fragments abut along the layout
//! axis, never overlap, and the outer margin matches the reference values.

use card_qr::svg::{parse_fragment, SvgElement};
use card_qr::{
    compute_layout, BundledLogos, LayoutSpec, LogoSource, Orientation, Polarity, QrFactory,
    SizeClass, VectorFragment,
};

fn num(element: &SvgElement, attr: &str) -> f32 {
    element
        .attr(attr)
        .unwrap_or_else(|| panic!("missing {}", attr))
        .parse()
        .unwrap()
}

fn bundled(orientation: Orientation) -> VectorFragment {
    VectorFragment::from_element(BundledLogos.load(orientation, Polarity::Normal).unwrap())
        .unwrap()
}

fn code_fragment() -> VectorFragment {
    VectorFragment::from_element(
        SvgElement::new("svg")
            .with_attr("width", 41)
            .with_attr("height", 41),
    )
    .unwrap()
}

#[test]
fn test_vertical_logo_bottom_meets_code_top() {
    for size in SizeClass::ALL {
        let layout = compute_layout(
            &code_fragment(),
            &bundled(Orientation::Vertical),
            Orientation::Vertical,
            size.scale_factor(),
            4.0,
        );
        let logo = layout.logo_bounds();
        let code = layout.code_bounds();
        assert_eq!(logo.bottom(), code.y, "{:?}", size);
        assert!(!logo.intersects(&code));
    }
}

#[test]
fn test_horizontal_code_right_meets_logo_left() {
    for size in SizeClass::ALL {
        let layout = compute_layout(
            &code_fragment(),
            &bundled(Orientation::Horizontal),
            Orientation::Horizontal,
            size.scale_factor(),
            4.0,
        );
        let logo = layout.logo_bounds();
        let code = layout.code_bounds();
        assert_eq!(code.right(), logo.x, "{:?}", size);
        assert!(!logo.intersects(&code));
    }
}

#[test]
fn test_fragments_fit_canvas_with_symmetric_margin() {
    for spec in LayoutSpec::all() {
        let layout = compute_layout(
            &code_fragment(),
            &bundled(spec.orientation),
            spec.orientation,
            spec.scale_factor(),
            4.0,
        );
        let p = layout.placement;
        let union_right = layout.code_bounds().right().max(layout.logo_bounds().right());
        let union_bottom = layout
            .code_bounds()
            .bottom()
            .max(layout.logo_bounds().bottom());

        assert!((p.canvas.width - (union_right + p.extra_margin)).abs() < 1e-3);
        assert!((p.canvas.height - (union_bottom + p.extra_margin)).abs() < 1e-3);
        assert!(p.extra_margin > 0.0, "{:?}", spec);
    }
}

#[test]
fn test_horizontal_regression_canvas() {
    let logo = VectorFragment::from_element(
        SvgElement::new("svg")
            .with_attr("width", 41)
            .with_attr("height", 41),
    )
    .unwrap();
    let layout = compute_layout(&code_fragment(), &logo, Orientation::Horizontal, 1.0, 4.0);
    assert!((layout.placement.extra_margin - 2.6).abs() < 1e-5);
    assert!((layout.placement.canvas.width - 87.2).abs() < 1e-4);
}

#[test]
fn test_output_offsets_match_layout_rules() {
    let factory = QrFactory::new();
    for spec in LayoutSpec::all() {
        let svg = factory.generate("0123456789", spec).unwrap();
        let root = parse_fragment(&svg).unwrap();
        let children: Vec<_> = root.elements().collect();
        assert_eq!(children.len(), 2);

        match spec.orientation {
            Orientation::Vertical => {
                let (logo, code) = (children[0], children[1]);
                assert_eq!(num(logo, "x"), num(code, "x"));
                assert!((num(logo, "y") + num(logo, "height") - num(code, "y")).abs() < 1e-4);
            }
            Orientation::Horizontal => {
                let (code, logo) = (children[0], children[1]);
                assert_eq!(num(code, "y"), num(logo, "y"));
                assert!((num(code, "x") + num(code, "width") - num(logo, "x")).abs() < 1e-4);
            }
        }

        let expected_code_width = 41.0 * spec.scale_factor();
        let code = match spec.orientation {
            Orientation::Vertical => children[1],
            Orientation::Horizontal => children[0],
        };
        assert_eq!(num(code, "width"), expected_code_width);
    }
}
