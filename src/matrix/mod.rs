//! Code matrices and the encoding capability that produces them

pub mod qr;

pub use qr::QrEncoder;

use serde::Deserialize;

use crate::error::EncodeError;

/// Immutable grid of boolean modules, `true` meaning "on"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatrix {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl CodeMatrix {
    /// Create an all-off matrix
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Create a matrix with the given cells switched on
    pub fn with_cells(width: usize, height: usize, cells: &[(usize, usize)]) -> Self {
        let mut matrix = Self::new(width, height);
        for &(x, y) in cells {
            matrix.set(x, y, true);
        }
        matrix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the module at `(x, y)`.
    ///
    /// Panics when out of bounds; callers guarantee dimensions match.
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width && y < self.height,
            "module ({}, {}) outside {}x{} matrix",
            x,
            y,
            self.width,
            self.height
        );
        self.bits[y * self.width + x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, on: bool) {
        self.bits[y * self.width + x] = on;
    }

    /// Number of "on" modules
    pub fn count_on(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// QR error-correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

/// Turns text into a code matrix
pub trait Encoder {
    fn encode(
        &self,
        content: &str,
        width: usize,
        height: usize,
        level: ErrorCorrection,
        version: i16,
    ) -> Result<CodeMatrix, EncodeError>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(
        &self,
        content: &str,
        width: usize,
        height: usize,
        level: ErrorCorrection,
        version: i16,
    ) -> Result<CodeMatrix, EncodeError> {
        (**self).encode(content, width, height, level, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_cells() {
        let m = CodeMatrix::with_cells(3, 3, &[(0, 0), (2, 1)]);
        assert!(m.get(0, 0));
        assert!(m.get(2, 1));
        assert!(!m.get(1, 2));
        assert_eq!(m.count_on(), 2);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let m = CodeMatrix::new(2, 2);
        m.get(2, 0);
    }

    #[test]
    fn test_error_correction_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: ErrorCorrection,
        }
        let w: Wrapper = toml::from_str(r#"level = "H""#).unwrap();
        assert_eq!(w.level, ErrorCorrection::H);
        assert_eq!(ErrorCorrection::default(), ErrorCorrection::M);
    }
}
