//! Error types for BoxKit.
//!
//! This module provides structured error types for layout planning,
//! parameter validation, and DXF sheet output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while planning a layout or writing sheets.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The box cannot be arranged on the cutting bed: more than two of its
    /// dimensions exceed the primary bed bound.
    #[error(
        "cannot fit box on the cutting bed: dimensions {large} and {middle} both exceed \
         {bound} units with {thickness} thick material"
    )]
    BedOverflow {
        /// Largest sorted dimension.
        large: f64,
        /// Middle sorted dimension.
        middle: f64,
        /// Material thickness.
        thickness: f64,
        /// The primary bed bound that was exceeded.
        bound: f64,
    },

    /// The DXF header template could not be read.
    #[error("failed to read DXF template '{path}': {source}")]
    Template {
        /// Path the template was expected at.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// I/O error while writing a sheet.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to layout parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// Dimensions are invalid (zero, negative, or non-finite).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// Name of the offending parameter.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
