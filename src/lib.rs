//! Card QR - verification codes composed with an institution logo
//!
//! This library encodes a verifier URL (base address plus card identifier)
//! as a QR code, renders it to SVG and composes it with a logo into a single
//! self-contained SVG document.
//!
//! # Example
//!
//! ```rust
//! use card_qr::generate_code;
//!
//! let svg = generate_code("1234567890", "vertical", "normal", "S").unwrap();
//! assert!(svg.starts_with("<?xml"));
//! assert!(svg.contains("<svg"));
//! ```

pub mod assets;
pub mod compose;
pub mod config;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod params;
pub mod renderer;
pub mod svg;

pub use assets::{logo_file_name, BundledLogos, LogoDirectory, LogoSource};
pub use compose::{compose, MergedDocument};
pub use config::FactoryConfig;
pub use error::{
    AssetError, ComposeError, ConfigError, EncodeError, ErrorKind, GenerateError, ValidationError,
};
pub use layout::{compute_layout, Layout, Placement, VectorFragment};
pub use matrix::{CodeMatrix, Encoder, ErrorCorrection, QrEncoder};
pub use params::{LayoutSpec, Orientation, Polarity, SizeClass};
pub use renderer::render_matrix;
pub use svg::{serialize, OutputConfig};

/// Generates verification codes for cards
///
/// The encoder and logo source are injectable; [`QrFactory::new`] uses the
/// QR encoder and the bundled logos.
pub struct QrFactory<E = QrEncoder, L = Box<dyn LogoSource>> {
    config: FactoryConfig,
    encoder: E,
    logos: L,
}

impl QrFactory {
    /// Factory with the default configuration
    pub fn new() -> Self {
        Self::from_config(FactoryConfig::default())
    }

    /// Factory with the default configuration and a custom verifier address
    pub fn with_host(host: impl Into<String>) -> Self {
        Self::from_config(FactoryConfig::default().with_verifier_uri(host))
    }

    /// Factory reading logos from `config.logo_dir` when set, else bundled
    pub fn from_config(config: FactoryConfig) -> Self {
        let logos: Box<dyn LogoSource> = match &config.logo_dir {
            Some(dir) => Box::new(LogoDirectory::new(dir)),
            None => Box::new(BundledLogos),
        };
        Self::from_parts(config, QrEncoder, logos)
    }
}

impl Default for QrFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoder, L: LogoSource> QrFactory<E, L> {
    /// Factory with explicit collaborators
    pub fn from_parts(config: FactoryConfig, encoder: E, logos: L) -> Self {
        Self {
            config,
            encoder,
            logos,
        }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn verifier_uri(&self) -> &str {
        &self.config.verifier_uri
    }

    /// Check orientation, colour polarity and size against their vocabularies
    pub fn validate_parameters(
        &self,
        orientation: &str,
        polarity: &str,
        size: &str,
    ) -> Result<LayoutSpec, ValidationError> {
        LayoutSpec::parse(orientation, polarity, size)
    }

    /// Generate the composed SVG for a card from string parameters.
    ///
    /// Parameters are matched case-insensitively. Every failure, including
    /// an empty card identifier, is rejected before any encoding or logo
    /// loading takes place.
    pub fn generate_code(
        &self,
        card_id: &str,
        orientation: &str,
        polarity: &str,
        size: &str,
    ) -> Result<String, GenerateError> {
        let spec = self.validate_parameters(orientation, polarity, size)?;
        self.generate(card_id, spec)
    }

    /// Generate the composed SVG for a card from a validated [`LayoutSpec`]
    #[tracing::instrument(skip(self), fields(orientation = %spec.orientation, polarity = %spec.polarity, size = %spec.size))]
    pub fn generate(&self, card_id: &str, spec: LayoutSpec) -> Result<String, GenerateError> {
        let uri = self.build_uri(card_id)?;
        let n = self.config.module_count;

        let logo = self.logos.load(spec.orientation, spec.polarity)?;

        let matrix = self.encoder.encode(
            &uri,
            n,
            n,
            self.config.error_correction,
            self.config.qr_version,
        )?;
        if matrix.width() != n || matrix.height() != n {
            return Err(EncodeError::Encoder(format!(
                "expected a {}x{} matrix, got {}x{}",
                n,
                n,
                matrix.width(),
                matrix.height()
            ))
            .into());
        }

        let code = render_matrix(&matrix, n, n, spec.polarity);
        let logo = VectorFragment::from_element(logo)?;

        let layout = compute_layout(
            &code,
            &logo,
            spec.orientation,
            spec.scale_factor(),
            self.config.base_margin,
        );
        let doc = compose(layout);

        Ok(serialize(&doc, &self.config.output))
    }

    fn build_uri(&self, card_id: &str) -> Result<String, ValidationError> {
        if card_id.trim().is_empty() {
            return Err(ValidationError::MissingCardId);
        }
        Ok(format!("{}{}", self.config.verifier_uri, card_id))
    }
}

/// Generate a composed SVG with the default factory
pub fn generate_code(
    card_id: &str,
    orientation: &str,
    polarity: &str,
    size: &str,
) -> Result<String, GenerateError> {
    QrFactory::new().generate_code(card_id, orientation, polarity, size)
}
