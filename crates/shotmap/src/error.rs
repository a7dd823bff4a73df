//! Error types for shot map operations.
//!
//! This module provides the main error type [`ShotMapError`] which wraps
//! the error conditions that can occur while loading match data, laying out
//! labels and rendering.

use std::io;

use thiserror::Error;

use shotmap_core::label::LayoutError;

/// The main error type for shot map operations.
///
/// # Diagnostic Variants
///
/// The `Data` variant keeps the JSON document that failed to parse, so the
/// error can be reported with a pointer into the offending line.
#[derive(Debug, Error)]
pub enum ShotMapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed {document} data: {err}")]
    Data {
        document: &'static str,
        err: serde_json::Error,
        src: String,
    },

    #[error("Invalid match data: {0}")]
    InvalidData(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ShotMapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl ShotMapError {
    /// Create a new `Data` error with the associated JSON source.
    pub fn new_data_error(
        document: &'static str,
        err: serde_json::Error,
        src: impl Into<String>,
    ) -> Self {
        Self::Data {
            document,
            err,
            src: src.into(),
        }
    }
}
