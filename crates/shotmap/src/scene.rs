//! Positioned content of one shot map.
//!
//! A [`Scene`] is everything the exporter needs, in plot-frame metres:
//! projected pitch markings, shots in drawing order, the label layout and
//! the visible region. Building it runs the label layout engine.
//!
//! A comparison scene puts two data sets for the same match on one pitch:
//! the first attacks the usual end, the second is mirrored onto the other
//! end, and each half carries a caption naming its provider.

use log::{debug, info, warn};

use shotmap_core::{
    geometry::{Bounds, Point},
    label::{AnchorPoint, LayoutError, LayoutResult},
};

use crate::{
    config::AppConfig,
    data::{Shot, mirror_shots, team_order},
    error::ShotMapError,
    pitch::Marking,
    viewport,
};

/// Caption distance from the lower touchline, relative to the pitch width.
const CAPTION_INSET: f64 = 0.1;

/// Text placed at a plot-frame position, e.g. a provider name.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    text: String,
    position: Point,
}

impl Caption {
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Anchor of the caption's centre, in the plot frame.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// Laid-out shot map, ready for export.
#[derive(Debug, Clone)]
pub struct Scene {
    markings: Vec<Marking>,
    shots: Vec<Shot>,
    teams: Vec<String>,
    labels: Option<LayoutResult>,
    viewport: Bounds,
    captions: Vec<Caption>,
    comparison: bool,
}

impl Scene {
    /// Lays out `shots` under `config`.
    ///
    /// Shots are ordered by descending xG so small markers stay visible on
    /// top of large ones. When labels are enabled but there are more shots
    /// than the label limit allows, the scene is built without labels.
    ///
    /// # Errors
    ///
    /// Returns [`ShotMapError::Layout`] for invalid label parameters or a
    /// failed layout run.
    pub fn build(shots: &[Shot], config: &AppConfig) -> Result<Self, ShotMapError> {
        let dimensions = config.pitch();
        let orientation = config.plot().orientation();
        let zoom = config.plot().zoom();

        Self::assemble(shots.to_vec(), config, |shots| {
            if zoom {
                viewport::zoom_region(shots, dimensions, orientation)
            } else {
                viewport::full_pitch(dimensions, orientation)
            }
        })
    }

    /// Lays out two data sets for the same match on one pitch.
    ///
    /// `second` is mirrored onto the opposite end. All shots share one label
    /// layout run, so labels from both sets keep clear of each other. The
    /// view always covers the whole pitch, and `providers` name the first
    /// and second set in captions on their halves; empty names are skipped.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_comparison(
        first: &[Shot],
        second: &[Shot],
        providers: [&str; 2],
        config: &AppConfig,
    ) -> Result<Self, ShotMapError> {
        let dimensions = config.pitch();
        let orientation = config.plot().orientation();

        let mut shots = first.to_vec();
        shots.extend(mirror_shots(second, dimensions, orientation));

        let mut scene = Self::assemble(shots, config, |_| {
            viewport::full_pitch(dimensions, orientation)
        })?;

        let across = dimensions.width() * CAPTION_INSET;
        scene.captions = [0.75, 0.25]
            .into_iter()
            .zip(providers)
            .filter(|(_, name)| !name.is_empty())
            .map(|(along, name)| {
                let pitch_point = Point::new(dimensions.length() * along, across);
                Caption::new(name, orientation.project(pitch_point, dimensions))
            })
            .collect();
        scene.comparison = true;

        debug!(
            first_count = first.len(),
            second_count = second.len(),
            caption_count = scene.captions.len();
            "Comparison scene built"
        );

        Ok(scene)
    }

    fn assemble(
        shots: Vec<Shot>,
        config: &AppConfig,
        region: impl FnOnce(&[Shot]) -> Bounds,
    ) -> Result<Self, ShotMapError> {
        let dimensions = config.pitch();
        let orientation = config.plot().orientation();

        let markings: Vec<Marking> = dimensions
            .markings()
            .iter()
            .map(|marking| marking.project(orientation, dimensions))
            .collect();

        let teams: Vec<String> = team_order(&shots)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut ordered = shots;
        ordered.sort_by(|a, b| b.xg().total_cmp(&a.xg()));

        let labels = if config.labels().enabled() {
            Self::layout_labels(&ordered, config)?
        } else {
            debug!("Labels disabled");
            None
        };

        let mut viewport = region(ordered.as_slice());
        if let Some(bounds) = labels.as_ref().and_then(LayoutResult::bounds) {
            viewport = viewport.merge(&bounds);
        }

        info!(
            shot_count = ordered.len(),
            labelled = labels.is_some(),
            viewport:?;
            "Scene built"
        );

        Ok(Self {
            markings,
            shots: ordered,
            teams,
            labels,
            viewport,
            captions: Vec::new(),
            comparison: false,
        })
    }

    fn layout_labels(
        shots: &[Shot],
        config: &AppConfig,
    ) -> Result<Option<LayoutResult>, ShotMapError> {
        let anchors: Vec<AnchorPoint> = shots
            .iter()
            .map(|shot| AnchorPoint::at(shot.position(), shot.info()))
            .collect();

        match config.labels().layout_engine().layout(&anchors) {
            Ok(result) => Ok(Some(result)),
            Err(LayoutError::TooManyLabels { count, limit }) => {
                warn!(count, limit; "Too many shots to label, rendering without labels");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Pitch markings in the plot frame.
    pub fn markings(&self) -> &[Marking] {
        &self.markings
    }

    /// Shots in drawing order, largest xG first.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Team names in order of first appearance in the input.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Index of `team` in [`teams`](Self::teams).
    pub fn team_index(&self, team: &str) -> Option<usize> {
        self.teams.iter().position(|name| name == team)
    }

    /// Label placements, `None` when labels are off or were skipped.
    pub fn labels(&self) -> Option<&LayoutResult> {
        self.labels.as_ref()
    }

    /// Visible plot-frame region.
    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    /// Provider captions of a comparison map, empty otherwise.
    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn is_comparison(&self) -> bool {
        self.comparison
    }
}
