//! Factory configuration
//!
//! Defaults reproduce the standard card verifier setup: a version 4 QR at
//! error-correction level M, 41 modules wide including a 4 module margin.
//! A TOML file may override any subset of the keys.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::matrix::ErrorCorrection;
use crate::svg::OutputConfig;

/// Default verifier address the card identifier is appended to
pub const DEFAULT_VERIFIER_URI: &str = "https://s.esc-r.eu/";

/// Configuration for a [`crate::QrFactory`]
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryConfig {
    /// Base address of the verifier; the card identifier is appended as is
    pub verifier_uri: String,

    /// Side length of the code matrix in modules, quiet zone included
    pub module_count: usize,

    /// Fixed QR version
    pub qr_version: i16,

    pub error_correction: ErrorCorrection,

    /// Built-in margin of the code in modules, before scaling
    pub base_margin: f32,

    /// Directory holding `{orientation}_{polarity}.svg` logos; bundled
    /// logos are used when unset
    pub logo_dir: Option<PathBuf>,

    pub output: OutputConfig,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            verifier_uri: DEFAULT_VERIFIER_URI.to_string(),
            module_count: 41,
            qr_version: 4,
            error_correction: ErrorCorrection::M,
            base_margin: 4.0,
            logo_dir: None,
            output: OutputConfig::default(),
        }
    }
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    verifier_uri: Option<String>,
    module_count: Option<usize>,
    qr_version: Option<i16>,
    error_correction: Option<ErrorCorrection>,
    base_margin: Option<f32>,
    logo_dir: Option<PathBuf>,
    output: Option<OutputConfig>,
}

impl FactoryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string, defaulting missing keys
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(Self {
            verifier_uri: parsed.verifier_uri.unwrap_or(defaults.verifier_uri),
            module_count: parsed.module_count.unwrap_or(defaults.module_count),
            qr_version: parsed.qr_version.unwrap_or(defaults.qr_version),
            error_correction: parsed
                .error_correction
                .unwrap_or(defaults.error_correction),
            base_margin: parsed.base_margin.unwrap_or(defaults.base_margin),
            logo_dir: parsed.logo_dir.or(defaults.logo_dir),
            output: parsed.output.unwrap_or(defaults.output),
        })
    }

    /// Set the verifier base address
    pub fn with_verifier_uri(mut self, uri: impl Into<String>) -> Self {
        self.verifier_uri = uri.into();
        self
    }

    /// Set the logo directory
    pub fn with_logo_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logo_dir = Some(dir.into());
        self
    }

    /// Set the output configuration
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set the error-correction level
    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.error_correction = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FactoryConfig::default();
        assert_eq!(config.verifier_uri, "https://s.esc-r.eu/");
        assert_eq!(config.module_count, 41);
        assert_eq!(config.qr_version, 4);
        assert_eq!(config.error_correction, ErrorCorrection::M);
        assert_eq!(config.base_margin, 4.0);
        assert!(config.logo_dir.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FactoryConfig::from_toml_str(
            r#"
verifier_uri = "https://verify.example.org/"

[output]
pretty_print = false
"#,
        )
        .unwrap();

        assert_eq!(config.verifier_uri, "https://verify.example.org/");
        assert_eq!(config.module_count, 41);
        assert!(!config.output.pretty_print);
        assert!(config.output.standalone);
    }

    #[test]
    fn test_full_toml() {
        let config = FactoryConfig::from_toml_str(
            r#"
verifier_uri = "host"
module_count = 45
qr_version = 5
error_correction = "Q"
base_margin = 4.0
logo_dir = "/srv/logos"
"#,
        )
        .unwrap();
        assert_eq!(config.module_count, 45);
        assert_eq!(config.qr_version, 5);
        assert_eq!(config.error_correction, ErrorCorrection::Q);
        assert_eq!(config.logo_dir, Some(PathBuf::from("/srv/logos")));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            FactoryConfig::from_toml_str("module_count = \"many\""),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            FactoryConfig::from_toml_str("colour = \"blue\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.toml");
        std::fs::write(&path, "qr_version = 4\n").unwrap();
        assert_eq!(FactoryConfig::from_file(&path).unwrap().qr_version, 4);

        assert!(matches!(
            FactoryConfig::from_file(&dir.path().join("missing.toml")),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let config = FactoryConfig::new()
            .with_verifier_uri("host")
            .with_logo_dir("logos")
            .with_output(OutputConfig::new().with_standalone(false));
        assert_eq!(config.verifier_uri, "host");
        assert_eq!(config.logo_dir, Some(PathBuf::from("logos")));
        assert!(!config.output.standalone);
    }
}
