//! Scale factors, margins and placement for the code/logo composition

use tracing::{debug, warn};

use super::types::{Layout, Placement, Point, Size, VectorFragment};
use crate::params::Orientation;

/// Share of the code's interior used as outer padding
const EXTRA_MARGIN_RATIO: f32 = 0.2;

/// Scale both fragments and place them on a shared canvas.
///
/// The arithmetic order is fixed: serialized coordinates depend on it
/// bit for bit. A negative extra margin is propagated as is.
pub fn compute_layout(
    code: &VectorFragment,
    logo: &VectorFragment,
    orientation: Orientation,
    scale_factor: f32,
    base_margin: f32,
) -> Layout {
    let code = code.scale(scale_factor);
    let logo = logo.scale(scale_factor);

    let code_width = code.width();
    let code_height = code.height();
    let logo_width = logo.width();
    let logo_height = logo.height();

    let margin = base_margin * scale_factor;
    let extra_margin = ((code_width - (margin * 2.0)) * EXTRA_MARGIN_RATIO) - margin;

    let (canvas, code_at, logo_at) = match orientation {
        Orientation::Vertical => (
            Size::new(
                code_width + (extra_margin * 2.0),
                (code_height + logo_height) + (extra_margin * 2.0),
            ),
            Point::new(extra_margin, logo_height + extra_margin),
            Point::new(extra_margin, extra_margin),
        ),
        Orientation::Horizontal => (
            Size::new(
                (code_width + logo_width) + (extra_margin * 2.0),
                code_height + (extra_margin * 2.0),
            ),
            Point::new(extra_margin, extra_margin),
            Point::new(code_width + extra_margin, extra_margin),
        ),
    };

    if extra_margin < 0.0 {
        warn!(extra_margin, scale_factor, "negative extra margin");
    }
    debug!(
        %orientation,
        scale_factor,
        margin,
        extra_margin,
        canvas_width = canvas.width,
        canvas_height = canvas.height,
        "computed layout"
    );

    Layout {
        code,
        logo,
        placement: Placement {
            orientation,
            margin,
            extra_margin,
            canvas,
            code: code_at,
            logo: logo_at,
        },
    }
}
