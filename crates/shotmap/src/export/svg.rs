//! SVG export.
//!
//! [`Svg`] turns a [`Scene`] into a standalone SVG document. Plot-frame
//! metres are mapped onto screen pixels by a [`Screen`], which flips the y
//! axis so that larger plot coordinates sit higher on the page.

mod legend;
mod pitch;
mod shots;

use log::debug;
use svg::{Document, node::element as svg_element};

use shotmap_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Bounds, Point},
};

use crate::{
    config::{AppConfig, PlotConfig, StyleConfig},
    export,
    scene::Scene,
};

/// Pixels between the plot area and the document edge.
const PADDING: f64 = 20.0;

/// Identifier of the clip path covering the plot area.
const PLOT_CLIP_ID: &str = "plot-area";

/// Mapping from plot-frame metres to document pixels.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Screen {
    viewport: Bounds,
    pixels_per_unit: f64,
}

impl Screen {
    pub(crate) fn new(viewport: Bounds, pixels_per_unit: f64) -> Self {
        Self {
            viewport,
            pixels_per_unit,
        }
    }

    /// Document position of a plot-frame point.
    pub(crate) fn to_screen(self, point: Point) -> Point {
        Point::new(
            (point.x() - self.viewport.min_x()) * self.pixels_per_unit + PADDING,
            (self.viewport.max_y() - point.y()) * self.pixels_per_unit + PADDING,
        )
    }

    /// Length in pixels of `length` metres.
    pub(crate) fn scale(self, length: f64) -> f64 {
        length * self.pixels_per_unit
    }

    /// Document width in pixels.
    pub(crate) fn width(self) -> f64 {
        self.scale(self.viewport.width()) + 2.0 * PADDING
    }

    /// Document height in pixels.
    pub(crate) fn height(self) -> f64 {
        self.scale(self.viewport.height()) + 2.0 * PADDING
    }

    /// The plot area in document pixels.
    pub(crate) fn plot_area(self) -> Bounds {
        Bounds::new(
            PADDING,
            PADDING,
            self.width() - PADDING,
            self.height() - PADDING,
        )
    }
}

/// Path data through `points`, in document pixels.
pub(crate) fn path_data(points: impl IntoIterator<Item = Point>) -> String {
    points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {} {}", point.x(), point.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG exporter configured with plot and style settings.
#[derive(Debug, Clone)]
pub struct Svg {
    plot: PlotConfig,
    style: StyleConfig,
}

impl Svg {
    /// Renders `scene` into a document.
    fn render_scene(&self, scene: &Scene, screen: Screen) -> Document {
        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", screen.width(), screen.height()),
            )
            .set("width", screen.width())
            .set("height", screen.height());

        let mut doc = doc.add(self.create_clip_path(PLOT_CLIP_ID, screen.plot_area()));

        let mut output = LayeredOutput::new();
        if let Some(color) = self.style.background_color() {
            output.add_to_layer(
                RenderLayer::Background,
                Box::new(self.create_background(color, screen)),
            );
        }
        output.merge(self.render_markings(scene, screen));
        output.merge(self.render_shots(scene, screen));
        if let Some(labels) = scene.labels() {
            output.merge(self.render_labels(labels, screen));
        }
        output.merge(self.render_xg_legend(scene, screen));
        output.merge(self.render_team_legend(scene, screen));
        output.merge(self.render_captions(scene, screen));

        debug!(nodes = output.len(); "Scene rendered to layers");

        for node in output.render() {
            doc = doc.add(node);
        }
        doc
    }

    fn create_background(&self, color: Color, screen: Screen) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", screen.width())
            .set("height", screen.height())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
    }

    /// Creates an SVG clip path with a rectangle matching `bounds`.
    fn create_clip_path(&self, clip_id: &str, bounds: Bounds) -> svg_element::Definitions {
        let clip_rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height());

        let clip_path = svg_element::ClipPath::new()
            .set("id", clip_id)
            .add(clip_rect);

        svg_element::Definitions::new().add(clip_path)
    }

    /// Value of a `clip-path` attribute restricting an element to the plot.
    fn plot_clip(&self) -> String {
        format!("url(#{PLOT_CLIP_ID})")
    }
}

impl export::Exporter for Svg {
    fn export_scene(&self, scene: &Scene) -> Result<String, export::Error> {
        let viewport = scene.viewport();
        let finite = [
            viewport.min_x(),
            viewport.min_y(),
            viewport.max_x(),
            viewport.max_y(),
        ]
        .iter()
        .all(|value| value.is_finite());
        if !finite || viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return Err(export::Error::Render(format!(
                "cannot draw an empty or unbounded viewport {viewport:?}"
            )));
        }

        let screen = Screen::new(viewport, self.plot.pixels_per_unit());
        let doc = self.render_scene(scene, screen);
        debug!(width = screen.width(), height = screen.height(); "SVG document rendered");

        Ok(doc.to_string())
    }
}

/// Builder for [`Svg`].
pub struct SvgBuilder<'a> {
    config: &'a AppConfig,
}

impl<'a> SvgBuilder<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the configuration cannot be
    /// drawn with.
    pub fn build(self) -> Result<Svg, export::Error> {
        self.config.validate().map_err(export::Error::Render)?;

        Ok(Svg {
            plot: self.config.plot().clone(),
            style: self.config.style().clone(),
        })
    }
}

/// Trimmed content of every `<text>` element, in document order.
///
/// The writer puts each child node on its own line, so content never sits
/// directly between `>` and `<`.
#[cfg(test)]
fn text_contents(document: &str) -> Vec<String> {
    document
        .split("</text>")
        .filter_map(|chunk| chunk.rsplit_once('>'))
        .map(|(_, content)| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .collect()
}
