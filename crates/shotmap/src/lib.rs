//! Shotmap - Football xG shot maps with non-overlapping player labels.
//!
//! Loads StatsBomb event and lineup data, lays out one label per shot with a
//! force-directed solver, and renders the result as an SVG document.

pub mod config;
pub mod data;
pub mod pitch;
pub mod scene;
pub mod viewport;

mod error;
mod export;

pub use shotmap_core::{color, draw, geometry, label};

pub use data::Shot;
pub use error::ShotMapError;

use std::{fs, path::Path};

use log::{debug, info};

use config::AppConfig;
use export::Exporter;
use scene::Scene;

/// Builder for loading match data and rendering shot maps.
///
/// # Examples
///
/// ```rust,no_run
/// use shotmap::{ShotMapBuilder, config::AppConfig};
///
/// let events = std::fs::read_to_string("events.json").expect("Failed to read events");
///
/// let builder = ShotMapBuilder::new(AppConfig::default());
/// let shots = builder
///     .load_shots(&events, None)
///     .expect("Failed to load shots");
///
/// let svg = builder.render_svg(&shots).expect("Failed to render");
/// ```
#[derive(Default)]
pub struct ShotMapBuilder {
    config: AppConfig,
}

impl ShotMapBuilder {
    /// Create a new shot map builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract shots from an events document, and optionally a lineups
    /// document used to prefer player nicknames in labels.
    ///
    /// Shots come back in the plot frame of the configured orientation.
    ///
    /// # Errors
    ///
    /// Returns [`ShotMapError::Data`] for malformed JSON and
    /// [`ShotMapError::InvalidData`] for shot events missing a needed field.
    pub fn load_shots(
        &self,
        events_src: &str,
        lineups_src: Option<&str>,
    ) -> Result<Vec<Shot>, ShotMapError> {
        info!(with_lineups = lineups_src.is_some(); "Loading shots");

        let shots = data::prepare_shots(
            events_src,
            lineups_src,
            self.config.pitch(),
            self.config.plot().orientation(),
        )?;

        info!(shot_count = shots.len(); "Shots loaded");
        Ok(shots)
    }

    /// Like [`load_shots`](Self::load_shots), reading the documents from
    /// files.
    ///
    /// # Errors
    ///
    /// Returns [`ShotMapError::Io`] if a file cannot be read, plus everything
    /// [`load_shots`](Self::load_shots) returns.
    pub fn load_shots_from_paths(
        &self,
        events_path: &Path,
        lineups_path: Option<&Path>,
    ) -> Result<Vec<Shot>, ShotMapError> {
        debug!(events_path:?, lineups_path:?; "Reading match data");

        let events_src = fs::read_to_string(events_path)?;
        let lineups_src = lineups_path.map(fs::read_to_string).transpose()?;

        self.load_shots(&events_src, lineups_src.as_deref())
    }

    /// Render shots to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ShotMapError::Config`] for configuration values that cannot
    /// be rendered, [`ShotMapError::Layout`] if label layout fails, and
    /// [`ShotMapError::Export`] for rendering failures.
    pub fn render_svg(&self, shots: &[Shot]) -> Result<String, ShotMapError> {
        self.config.validate().map_err(ShotMapError::Config)?;

        info!(shot_count = shots.len(); "Building scene");
        let scene = Scene::build(shots, &self.config)?;

        let exporter = export::svg::SvgBuilder::new(&self.config).build()?;
        let svg = exporter.export_scene(&scene)?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render two data sets for the same match on one pitch.
    ///
    /// `first` attacks the usual end and `second` is mirrored onto the
    /// other. `providers` name the sets in captions on their halves.
    ///
    /// # Errors
    ///
    /// Same as [`render_svg`](Self::render_svg).
    pub fn render_comparison_svg(
        &self,
        first: &[Shot],
        second: &[Shot],
        providers: [&str; 2],
    ) -> Result<String, ShotMapError> {
        self.config.validate().map_err(ShotMapError::Config)?;

        info!(
            first_count = first.len(),
            second_count = second.len();
            "Building comparison scene"
        );
        let scene = Scene::build_comparison(first, second, providers, &self.config)?;

        let exporter = export::svg::SvgBuilder::new(&self.config).build()?;
        let svg = exporter.export_scene(&scene)?;

        info!(bytes = svg.len(); "Comparison SVG rendered successfully");
        Ok(svg)
    }
}
