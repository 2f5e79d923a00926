//! QR encoder backed by the `qrcode` crate
//!
//! The symbol is placed in the requested matrix the way common QR writers
//! render it: a quiet zone of [`QUIET_ZONE`] modules on every side, integer
//! upscaling when the target is larger than symbol plus quiet zone, and the
//! leftover padding split evenly.

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};

use super::{CodeMatrix, Encoder, ErrorCorrection};
use crate::error::EncodeError;

/// Modules of quiet zone around the symbol
pub const QUIET_ZONE: usize = 4;

/// Fixed-version QR encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl QrEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

impl Encoder for QrEncoder {
    fn encode(
        &self,
        content: &str,
        width: usize,
        height: usize,
        level: ErrorCorrection,
        version: i16,
    ) -> Result<CodeMatrix, EncodeError> {
        let code = QrCode::with_version(content.as_bytes(), Version::Normal(version), level.into())
            .map_err(|e| match e {
                QrError::DataTooLong => EncodeError::DataTooLong {
                    len: content.len(),
                    version,
                },
                other => EncodeError::Encoder(other.to_string()),
            })?;

        let symbol = code.width();
        let colors = code.to_colors();
        let required = symbol + QUIET_ZONE * 2;

        if width < required || height < required {
            return Err(EncodeError::MatrixTooSmall {
                width,
                height,
                required,
            });
        }

        let multiple = (width / required).min(height / required);
        let left = (width - symbol * multiple) / 2;
        let top = (height - symbol * multiple) / 2;

        let mut matrix = CodeMatrix::new(width, height);
        for in_y in 0..symbol {
            for in_x in 0..symbol {
                if colors[in_y * symbol + in_x] != Color::Dark {
                    continue;
                }
                let out_x = left + in_x * multiple;
                let out_y = top + in_y * multiple;
                for y in out_y..out_y + multiple {
                    for x in out_x..out_x + multiple {
                        matrix.set(x, y, true);
                    }
                }
            }
        }

        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_4_fills_41_modules() {
        let m = QrEncoder
            .encode("https://s.esc-r.eu/123", 41, 41, ErrorCorrection::M, 4)
            .unwrap();
        assert_eq!(m.width(), 41);
        assert_eq!(m.height(), 41);

        // quiet zone is empty
        for i in 0..41 {
            for q in 0..QUIET_ZONE {
                assert!(!m.get(i, q));
                assert!(!m.get(q, i));
                assert!(!m.get(i, 40 - q));
                assert!(!m.get(40 - q, i));
            }
        }

        // top-left finder pattern corner sits just inside the quiet zone
        assert!(m.get(4, 4));
        assert!(m.get(10, 4));
        assert!(m.get(4, 10));
    }

    #[test]
    fn test_upscales_into_larger_matrix() {
        let m = QrEncoder
            .encode("content", 82, 82, ErrorCorrection::M, 4)
            .unwrap();
        // multiple 2, symbol spans 66 modules, padding 8
        assert!(!m.get(7, 7));
        assert!(m.get(8, 8));
        assert!(m.get(9, 9));
    }

    #[test]
    fn test_content_too_long() {
        let content = "x".repeat(500);
        let err = QrEncoder
            .encode(&content, 41, 41, ErrorCorrection::M, 4)
            .unwrap_err();
        assert_eq!(err, EncodeError::DataTooLong { len: 500, version: 4 });
    }

    #[test]
    fn test_matrix_too_small() {
        let err = QrEncoder
            .encode("content", 33, 33, ErrorCorrection::M, 4)
            .unwrap_err();
        assert!(matches!(err, EncodeError::MatrixTooSmall { required: 41, .. }));
    }

    #[test]
    fn test_deterministic() {
        let a = QrEncoder.encode("abc", 41, 41, ErrorCorrection::M, 4).unwrap();
        let b = QrEncoder.encode("abc", 41, 41, ErrorCorrection::M, 4).unwrap();
        assert_eq!(a, b);
    }
}
