//! Request parameters: orientation, colour polarity and size class
//!
//! All three come from a closed vocabulary and are matched
//! case-insensitively. Parsing is the only validation step; once a
//! [`LayoutSpec`] exists every value in it is known to be valid.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Placement of the logo relative to the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Logo above code
    Vertical,
    /// Code left, logo right
    Horizontal,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

impl FromStr for Orientation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else if s.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else {
            Err(ValidationError::InvalidOrientation {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour polarity of the rendered code and logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Dark on light
    Normal,
    /// Light on dark
    Inverted,
}

impl Polarity {
    pub const ALL: [Polarity; 2] = [Polarity::Normal, Polarity::Inverted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Normal => "normal",
            Polarity::Inverted => "inverted",
        }
    }

    /// Fill colour for "on" modules
    pub fn fill(&self) -> &'static str {
        match self {
            Polarity::Normal => "black",
            Polarity::Inverted => "white",
        }
    }
}

impl FromStr for Polarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("normal") {
            Ok(Polarity::Normal)
        } else if s.eq_ignore_ascii_case("inverted") {
            Ok(Polarity::Inverted)
        } else {
            Err(ValidationError::InvalidPolarity {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete scale tier applied uniformly to code and logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// 41x41 code plus logo
    ExtraSmall,
    /// 61.5x61.5 code plus logo
    Small,
    /// 164x164 code plus logo
    Medium,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::ExtraSmall, SizeClass::Small, SizeClass::Medium];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::ExtraSmall => "XS",
            SizeClass::Small => "S",
            SizeClass::Medium => "M",
        }
    }

    pub fn scale_factor(&self) -> f32 {
        match self {
            SizeClass::ExtraSmall => 1.0,
            SizeClass::Small => 1.5,
            SizeClass::Medium => 4.0,
        }
    }
}

impl FromStr for SizeClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("XS") {
            Ok(SizeClass::ExtraSmall)
        } else if s.eq_ignore_ascii_case("S") {
            Ok(SizeClass::Small)
        } else if s.eq_ignore_ascii_case("M") {
            Ok(SizeClass::Medium)
        } else {
            Err(ValidationError::InvalidSize {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated combination of orientation, polarity and size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutSpec {
    pub orientation: Orientation,
    pub polarity: Polarity,
    pub size: SizeClass,
}

impl LayoutSpec {
    pub fn new(orientation: Orientation, polarity: Polarity, size: SizeClass) -> Self {
        Self {
            orientation,
            polarity,
            size,
        }
    }

    /// Parse and validate the three string parameters, in order
    pub fn parse(orientation: &str, polarity: &str, size: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            orientation: orientation.parse()?,
            polarity: polarity.parse()?,
            size: size.parse()?,
        })
    }

    pub fn scale_factor(&self) -> f32 {
        self.size.scale_factor()
    }

    /// Every valid combination (2 x 2 x 3)
    pub fn all() -> impl Iterator<Item = LayoutSpec> {
        Orientation::ALL.into_iter().flat_map(|orientation| {
            Polarity::ALL.into_iter().flat_map(move |polarity| {
                SizeClass::ALL
                    .into_iter()
                    .map(move |size| LayoutSpec::new(orientation, polarity, size))
            })
        })
    }
}
