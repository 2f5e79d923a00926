//! Error types for the generation pipeline
//!
//! Each stage owns its error enum. The facade folds them into
//! [`GenerateError`], the single failure type callers see.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected request parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error validating parameters, invalid orientation")]
    InvalidOrientation { value: String },

    #[error("Error validating parameters, invalid colour")]
    InvalidPolarity { value: String },

    #[error("Error validating parameters, invalid size")]
    InvalidSize { value: String },

    #[error("Error validating parameters, missing card number")]
    MissingCardId,
}

/// Failures of the matrix encoding capability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Content does not fit the fixed version / error-correction combination
    #[error("content of {len} bytes does not fit QR version {version}")]
    DataTooLong { len: usize, version: i16 },

    /// Requested matrix cannot hold the symbol and its quiet zone
    #[error("matrix of {width}x{height} cannot hold a {required}x{required} symbol")]
    MatrixTooSmall {
        width: usize,
        height: usize,
        required: usize,
    },

    #[error("encoder error: {0}")]
    Encoder(String),
}

/// Failures while resolving or parsing a logo
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("logo not found: {name}")]
    NotFound { name: String },

    #[error("error reading logo file {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    #[error("invalid SVG content in {name}: {message}")]
    InvalidSvg { name: String, message: String },
}

/// Malformed fragment structure preventing layout or merge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("fragment <{element}> is missing the '{attribute}' attribute")]
    MissingDimension { element: String, attribute: String },

    #[error("fragment <{element}> has an unparsable '{attribute}' value: {value}")]
    InvalidDimension {
        element: String,
        attribute: String,
        value: String,
    },
}

/// Errors that can occur when loading factory configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Coarse classification of a [`GenerateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Encoding,
    Asset,
    Composition,
}

/// The single failure result of code generation
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Encoding(#[from] EncodeError),

    #[error("{0}")]
    Asset(#[from] AssetError),

    #[error("{0}")]
    Composition(#[from] ComposeError),
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Validation(_) => ErrorKind::Validation,
            GenerateError::Encoding(_) => ErrorKind::Encoding,
            GenerateError::Asset(_) => ErrorKind::Asset,
            GenerateError::Composition(_) => ErrorKind::Composition,
        }
    }
}
