//! Logo resolution
//!
//! Logos are looked up by orientation and polarity using the file naming
//! convention `{orientation}_{polarity}.svg`, e.g. `vertical_normal.svg`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AssetError;
use crate::params::{Orientation, Polarity};
use crate::svg::{parse_fragment, SvgElement};

/// File name of the logo for an orientation/polarity pair
pub fn logo_file_name(orientation: Orientation, polarity: Polarity) -> String {
    format!("{}_{}.svg", orientation.as_str(), polarity.as_str())
}

/// Loads a logo as a parsed vector tree
pub trait LogoSource {
    fn load(&self, orientation: Orientation, polarity: Polarity) -> Result<SvgElement, AssetError>;
}

impl<L: LogoSource + ?Sized> LogoSource for &L {
    fn load(&self, orientation: Orientation, polarity: Polarity) -> Result<SvgElement, AssetError> {
        (**self).load(orientation, polarity)
    }
}

impl<L: LogoSource + ?Sized> LogoSource for Box<L> {
    fn load(&self, orientation: Orientation, polarity: Polarity) -> Result<SvgElement, AssetError> {
        (**self).load(orientation, polarity)
    }
}

fn parse_logo(name: &str, content: &str) -> Result<SvgElement, AssetError> {
    parse_fragment(content).map_err(|e| AssetError::InvalidSvg {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Logos compiled into the library
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLogos;

impl BundledLogos {
    /// Raw markup of a bundled logo
    pub fn source(orientation: Orientation, polarity: Polarity) -> &'static str {
        match (orientation, polarity) {
            (Orientation::Vertical, Polarity::Normal) => {
                include_str!("../assets/logos/vertical_normal.svg")
            }
            (Orientation::Vertical, Polarity::Inverted) => {
                include_str!("../assets/logos/vertical_inverted.svg")
            }
            (Orientation::Horizontal, Polarity::Normal) => {
                include_str!("../assets/logos/horizontal_normal.svg")
            }
            (Orientation::Horizontal, Polarity::Inverted) => {
                include_str!("../assets/logos/horizontal_inverted.svg")
            }
        }
    }
}

impl LogoSource for BundledLogos {
    fn load(&self, orientation: Orientation, polarity: Polarity) -> Result<SvgElement, AssetError> {
        let name = logo_file_name(orientation, polarity);
        debug!(logo = %name, "resolved bundled logo");
        parse_logo(&name, Self::source(orientation, polarity))
    }
}

/// Logos read from a directory on disk
#[derive(Debug, Clone)]
pub struct LogoDirectory {
    root: PathBuf,
}

impl LogoDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, orientation: Orientation, polarity: Polarity) -> PathBuf {
        self.root.join(logo_file_name(orientation, polarity))
    }
}

impl LogoSource for LogoDirectory {
    fn load(&self, orientation: Orientation, polarity: Polarity) -> Result<SvgElement, AssetError> {
        let name = logo_file_name(orientation, polarity);
        let path = self.root.join(&name);

        if !path.is_file() {
            return Err(AssetError::NotFound {
                name: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| AssetError::FileRead {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "resolved logo file");
        parse_logo(&name, &content)
    }
}
