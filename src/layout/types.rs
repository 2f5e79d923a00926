//! Core types for the layout engine

use crate::error::ComposeError;
use crate::params::Orientation;
use crate::svg::SvgElement;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height in abstract units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A bounding box representing the spatial extent of a fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if this bounding box intersects another (touching edges do not count)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// A rectangular vector element with declared dimensions.
///
/// `width` and `height` always mirror the root element's attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorFragment {
    root: SvgElement,
    width: f32,
    height: f32,
}

impl VectorFragment {
    /// Wrap an element, reading its declared `width` and `height`
    pub fn from_element(root: SvgElement) -> Result<Self, ComposeError> {
        let width = read_dimension(&root, "width")?;
        let height = read_dimension(&root, "height")?;
        Ok(Self {
            root,
            width,
            height,
        })
    }

    /// Caller guarantees `root` carries matching dimension attributes
    pub(crate) fn from_parts(root: SvgElement, width: f32, height: f32) -> Self {
        Self {
            root,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    pub fn into_element(self) -> SvgElement {
        self.root
    }

    /// Return a copy with both dimensions multiplied by `factor`
    pub fn scale(&self, factor: f32) -> VectorFragment {
        let width = self.width * factor;
        let height = self.height * factor;
        let mut root = self.root.clone();
        root.set_attr("width", width);
        root.set_attr("height", height);
        Self {
            root,
            width,
            height,
        }
    }
}

fn read_dimension(element: &SvgElement, attribute: &str) -> Result<f32, ComposeError> {
    let raw = element
        .attr(attribute)
        .ok_or_else(|| ComposeError::MissingDimension {
            element: element.name.clone(),
            attribute: attribute.to_string(),
        })?;

    // Unitless and px are the same user unit
    let numeric = raw.trim().trim_end_matches("px");
    numeric
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ComposeError::InvalidDimension {
            element: element.name.clone(),
            attribute: attribute.to_string(),
            value: raw.to_string(),
        })
}

/// Computed canvas size and fragment positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub orientation: Orientation,
    /// Base margin multiplied by the scale factor
    pub margin: f32,
    /// Padding around the whole composition; may be negative
    pub extra_margin: f32,
    pub canvas: Size,
    pub code: Point,
    pub logo: Point,
}

/// Result of layout: scaled fragments plus their placement
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub code: VectorFragment,
    pub logo: VectorFragment,
    pub placement: Placement,
}

impl Layout {
    pub fn code_bounds(&self) -> BoundingBox {
        BoundingBox::at(self.placement.code, self.code.size())
    }

    pub fn logo_bounds(&self) -> BoundingBox {
        BoundingBox::at(self.placement.logo, self.logo.size())
    }
}
