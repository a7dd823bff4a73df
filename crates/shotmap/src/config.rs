//! Configuration types for shot map rendering.
//!
//! This module provides configuration structures that control the pitch,
//! plot, label layout and styling. All types implement
//! [`serde::Deserialize`] for loading from external sources, and every field
//! falls back to its default when absent.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`PitchDimensions`] - Pitch measurements in metres.
//! - [`PlotConfig`] - Orientation, zoom and marker sizing.
//! - [`LabelConfig`] - Label layout parameters.
//! - [`StyleConfig`] - Colors, line widths and fonts.
//!
//! # Example
//!
//! ```
//! # use shotmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.labels().k(), 1.5);
//! assert_eq!(config.style().team_colors().len(), 2);
//! ```

use serde::Deserialize;

use shotmap_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeStyle},
    label::LabelLayout,
};

use crate::pitch::{Orientation, PitchDimensions};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pitch measurements.
    #[serde(default)]
    pitch: PitchDimensions,

    /// Plot composition.
    #[serde(default)]
    plot: PlotConfig,

    /// Label layout.
    #[serde(default)]
    labels: LabelConfig,

    /// Visual styling.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        pitch: PitchDimensions,
        plot: PlotConfig,
        labels: LabelConfig,
        style: StyleConfig,
    ) -> Self {
        Self {
            pitch,
            plot,
            labels,
            style,
        }
    }

    pub fn pitch(&self) -> &PitchDimensions {
        &self.pitch
    }

    pub fn plot(&self) -> &PlotConfig {
        &self.plot
    }

    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Mutable label section, for command-line overrides.
    pub fn labels_mut(&mut self) -> &mut LabelConfig {
        &mut self.labels
    }

    /// Checks values that deserialize fine but cannot be rendered.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.pitch.validate()?;
        self.plot.validate()?;
        self.style.validate()
    }
}

/// Plot composition settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Direction of play.
    orientation: Orientation,

    /// Zoom onto the area the shots were taken from instead of showing the
    /// whole pitch.
    zoom: bool,

    /// Marker area in square pixels per unit of xG.
    shot_size_factor: f64,

    /// Data provider named in the legend title.
    provider: String,

    /// Screen pixels per metre.
    pixels_per_unit: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            zoom: true,
            shot_size_factor: 800.0,
            provider: "Statsbomb".to_string(),
            pixels_per_unit: 10.0,
        }
    }
}

impl PlotConfig {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn zoom(&self) -> bool {
        self.zoom
    }

    pub fn shot_size_factor(&self) -> f64 {
        self.shot_size_factor
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Title of the xG legend.
    pub fn legend_title(&self) -> String {
        if self.provider.is_empty() {
            "Expected goals (xG) for shots".to_string()
        } else {
            format!("{} expected goals (xG) for shots", self.provider)
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.shot_size_factor.is_finite() && self.shot_size_factor > 0.0) {
            return Err(format!(
                "shot_size_factor must be positive, got {}",
                self.shot_size_factor
            ));
        }
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(format!(
                "pixels_per_unit must be positive, got {}",
                self.pixels_per_unit
            ));
        }
        Ok(())
    }
}

/// Label layout settings.
///
/// Layout parameters are checked by the layout engine itself when it runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Draw player/minute labels at all.
    enabled: bool,

    /// Spacing strength; larger values push labels further out.
    k: f64,

    iterations: usize,

    /// Bounding-box margin as a fraction of the span.
    margin: f64,

    /// Above this many shots, labels are skipped.
    max_labels: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        let layout = LabelLayout::default();
        Self {
            enabled: true,
            k: layout.k(),
            iterations: layout.iterations(),
            margin: layout.margin(),
            max_labels: layout.max_labels(),
        }
    }
}

impl LabelConfig {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn max_labels(&self) -> usize {
        self.max_labels
    }

    /// Builds the layout engine these settings describe.
    pub fn layout_engine(&self) -> LabelLayout {
        LabelLayout::new()
            .with_k(self.k)
            .with_iterations(self.iterations)
            .with_margin(self.margin)
            .with_max_labels(self.max_labels)
    }
}

fn default_team_colors() -> Vec<Color> {
    ["#d62728", "#1f77b4"]
        .into_iter()
        .filter_map(|color| Color::new(color).ok())
        .collect()
}

/// Visual styling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background fill; transparent when unset.
    background_color: Option<Color>,

    /// Team colors, assigned in order of first appearance and cycled.
    team_colors: Vec<Color>,

    line_color: Color,

    /// Pitch line width in pixels.
    line_width: f64,

    /// Leader line width in pixels.
    leader_width: f64,

    /// Leader line dash pattern: `solid`, `dashed`, `dotted` or a dasharray.
    leader_style: StrokeStyle,

    /// Leader line end caps.
    leader_cap: StrokeCap,

    font_family: String,

    /// Label font size in pixels.
    font_size: f64,

    /// Legend font size in pixels.
    legend_font_size: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            team_colors: default_team_colors(),
            line_color: Color::default(),
            line_width: 1.2,
            leader_width: 0.5,
            leader_style: StrokeStyle::default(),
            leader_cap: StrokeCap::default(),
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
            legend_font_size: 12.0,
        }
    }
}

impl StyleConfig {
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn team_colors(&self) -> &[Color] {
        &self.team_colors
    }

    /// Color for the team at `index` in first-appearance order.
    pub fn team_color(&self, index: usize) -> Color {
        if self.team_colors.is_empty() {
            return self.line_color;
        }
        self.team_colors[index % self.team_colors.len()]
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn leader_width(&self) -> f64 {
        self.leader_width
    }

    pub fn leader_style(&self) -> &StrokeStyle {
        &self.leader_style
    }

    pub fn leader_cap(&self) -> StrokeCap {
        self.leader_cap
    }

    /// Stroke for the line joining a label to its shot.
    pub fn leader_stroke(&self) -> StrokeDefinition {
        let mut stroke = StrokeDefinition::solid(self.line_color, self.leader_width);
        stroke.set_style(self.leader_style.clone());
        stroke.set_cap(self.leader_cap);
        stroke
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn legend_font_size(&self) -> f64 {
        self.legend_font_size
    }

    fn validate(&self) -> Result<(), String> {
        if self.team_colors.is_empty() {
            return Err("at least one team color is required".to_string());
        }
        for (name, value) in [
            ("line_width", self.line_width),
            ("leader_width", self.leader_width),
            ("font_size", self.font_size),
            ("legend_font_size", self.legend_font_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        Ok(())
    }
}
