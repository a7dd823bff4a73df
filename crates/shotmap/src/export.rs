//! Export functionality for shot maps.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a laid-out [`Scene`] into an output format. It is the final
//! stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Events / lineups JSON
//!     ↓ prepare
//! Shots
//!     ↓ scene (label layout, viewport)
//! Scene
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`ShotMapError::Export`] at the crate boundary.
//!
//! [`ShotMapError::Export`]: crate::ShotMapError::Export

/// SVG export backend.
pub mod svg;

use crate::scene::Scene;

/// Abstraction for shot map export backends.
pub trait Exporter {
    /// Renders a scene to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be drawn, for example
    /// because its viewport is empty.
    fn export_scene(&self, scene: &Scene) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
